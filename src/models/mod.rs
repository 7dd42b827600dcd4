//! Core data models for fcsons
//!
//! This module contains the data structures shown and exchanged by the
//! application: calculator inputs and results, catalog entries, the contact
//! form and assistant messages.

pub mod calculator;
pub mod chat;
pub mod contact;
pub mod money;
pub mod projection;
pub mod service;

pub use calculator::{CalculatorField, CalculatorState};
pub use chat::{ChatMessage, ChatRole};
pub use contact::{ContactForm, ContactValidationError, OTHER_SUBJECT};
pub use money::Rupees;
pub use projection::{ChartSlice, InvestmentMode, ProjectionInput, ProjectionResult, SliderRange};
pub use service::{ServiceIcon, ServiceItem};
