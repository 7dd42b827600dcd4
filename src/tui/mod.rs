//! Terminal User Interface module
//!
//! The firm's site as a ratatui application: home page with the services
//! grid, service detail pages, and dialogs for the return calculator, the
//! contact form and the AI assistant.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

pub use app::App;
pub use terminal::run_tui;
