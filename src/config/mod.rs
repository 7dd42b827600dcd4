//! Configuration module for fcsons
//!
//! This module provides configuration management including:
//! - Platform-aware path resolution
//! - User settings persistence (endpoints, assistant, calculator defaults)

pub mod paths;
pub mod settings;

pub use paths::ConsultPaths;
pub use settings::Settings;
