//! Display formatting for terminal output
//!
//! Provides utilities for formatting models for the CLI subcommands.

pub mod catalog;
pub mod projection;
pub mod report;

pub use catalog::{format_service_details, format_service_list};
pub use projection::format_projection_summary;
