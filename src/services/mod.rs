//! Service layer for fcsons
//!
//! The service layer holds the application logic: the return projection
//! engine, catalog lookups, and the two outbound calls (contact submission
//! and the AI assistant). CLI and TUI both go through it.

pub mod assistant;
pub mod catalog;
pub mod contact;
pub mod http;
pub mod projection;

pub use assistant::AssistantService;
pub use catalog::CatalogService;
pub use contact::ContactService;
pub use http::{HttpResponse, HttpTransport, ReqwestTransport};
pub use projection::project;
