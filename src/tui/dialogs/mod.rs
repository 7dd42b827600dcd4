//! Dialog modules for the TUI
//!
//! Contains modal dialogs for various operations

pub mod assistant;
pub mod calculator;
pub mod contact;
pub mod help;
