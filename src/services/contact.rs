//! Contact service
//!
//! Validates a client query and posts it to the submission endpoint. Success
//! is decided by the response status alone; the body is never read.

use crate::error::{ConsultError, ConsultResult};
use crate::models::ContactForm;

use super::http::HttpTransport;

/// Shown when the endpoint answers with a non-success status
pub const REJECTED_MESSAGE: &str = "Some error occurred. Please try again.";

/// Shown when no response arrives at all
pub const NETWORK_MESSAGE: &str = "Failed to send request. Check your connection.";

/// Shown after a successful submission
pub const RECEIVED_MESSAGE: &str =
    "Thank you. Our team has received your query and will contact you shortly.";

/// Service for submitting client queries
pub struct ContactService<'a> {
    transport: &'a dyn HttpTransport,
    endpoint: &'a str,
}

impl<'a> ContactService<'a> {
    /// Create a new contact service posting to `endpoint`
    pub fn new(transport: &'a dyn HttpTransport, endpoint: &'a str) -> Self {
        Self {
            transport,
            endpoint,
        }
    }

    /// Validate and submit a query
    ///
    /// One attempt only. Validation failures never touch the network.
    pub fn submit(&self, form: &ContactForm) -> ConsultResult<()> {
        form.validate()
            .map_err(|e| ConsultError::Validation(e.to_string()))?;

        let payload = serde_json::to_value(form.trimmed())?;
        log::info!(
            "submitting contact query (subject: {:?})",
            if form.subject.is_empty() { "-" } else { form.subject.as_str() }
        );

        let response = self.transport.post_json(self.endpoint, &[], &payload)?;
        if response.is_success() {
            Ok(())
        } else {
            log::warn!("contact endpoint answered {}", response.status);
            Err(ConsultError::UnexpectedStatus {
                status: response.status,
            })
        }
    }
}

/// Message for the user after a failed submission
pub fn failure_message(err: &ConsultError) -> String {
    match err {
        ConsultError::Http(_) => NETWORK_MESSAGE.to_string(),
        ConsultError::UnexpectedStatus { .. } => REJECTED_MESSAGE.to_string(),
        other => other.to_string(),
    }
}
