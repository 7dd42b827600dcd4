//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod ask;
pub mod calc;
pub mod contact;
pub mod services;

pub use ask::handle_ask_command;
pub use calc::{handle_calc_command, CalcCommands, ProjectionArgs};
pub use contact::{handle_contact_command, ContactArgs};
pub use services::{handle_services_command, ServicesCommands};
