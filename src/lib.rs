//! FC & Sons Consulting - terminal client for a wealth management firm
//!
//! This library provides the core functionality behind the `fcsons` binary:
//! the service catalog, the SIP/Lumpsum growth calculator, the contact form
//! and the AI assistant, presented through a CLI and an interactive TUI.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (services, projections, contact form, chat)
//! - `services`: Business logic layer (calculator, catalog, HTTP integrations)
//! - `display`: Plain-text formatting for CLI output
//! - `cli`: CLI command handlers
//! - `tui`: Interactive terminal interface
//!
//! # Example
//!
//! ```rust,ignore
//! use fcsons::models::{InvestmentMode, ProjectionInput};
//! use fcsons::services::project;
//!
//! let input = ProjectionInput::new(InvestmentMode::Sip, 5000.0, 12.0, 5)?;
//! let result = project(&input);
//! assert_eq!(result.total.value(), 412_432);
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod services;
pub mod tui;

pub use error::ConsultError;
