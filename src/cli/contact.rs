//! Contact CLI command
//!
//! Submits a query from the command line, the scripted twin of the TUI's
//! contact form.

use clap::Args;

use crate::config::settings::Settings;
use crate::error::{ConsultError, ConsultResult};
use crate::models::{ContactForm, OTHER_SUBJECT};
use crate::services::contact::{failure_message, RECEIVED_MESSAGE};
use crate::services::{CatalogService, ContactService, HttpTransport, ReqwestTransport};

/// Arguments of `fcsons contact`
#[derive(Args, Debug, Clone)]
pub struct ContactArgs {
    /// Full name
    #[arg(long)]
    pub name: String,
    /// Email address
    #[arg(long)]
    pub email: String,
    /// Phone number
    #[arg(long)]
    pub phone: String,
    /// Service of interest (ID, title, or "Other")
    #[arg(long)]
    pub subject: Option<String>,
    /// How can we help you?
    #[arg(long)]
    pub message: String,
    /// Override the submission endpoint
    #[arg(long, env = "FCSONS_CONTACT_ENDPOINT")]
    pub endpoint: Option<String>,
}

/// Resolve a subject argument to a catalog title or "Other"
pub fn resolve_subject(subject: Option<&str>) -> ConsultResult<String> {
    let Some(subject) = subject.map(str::trim).filter(|s| !s.is_empty()) else {
        return Ok(String::new());
    };

    if subject.eq_ignore_ascii_case(OTHER_SUBJECT) {
        return Ok(OTHER_SUBJECT.to_string());
    }

    CatalogService::new()
        .find(subject)
        .map(|s| s.title.to_string())
        .map_err(|_| {
            ConsultError::Validation(format!(
                "Unknown service '{}'. Use a service ID, a title from 'fcsons services list', or \"Other\"",
                subject
            ))
        })
}

/// Handle the contact command
pub fn handle_contact_command(settings: &Settings, args: ContactArgs) -> anyhow::Result<()> {
    let endpoint = args
        .endpoint
        .clone()
        .unwrap_or_else(|| settings.contact_endpoint.clone());
    let transport = ReqwestTransport::new();

    send_contact(&transport, &endpoint, args)?;

    println!("Query Received!");
    println!("{}", RECEIVED_MESSAGE);
    Ok(())
}

/// Validate and submit the query; delivery failures carry the form's wording
fn send_contact(
    transport: &dyn HttpTransport,
    endpoint: &str,
    args: ContactArgs,
) -> anyhow::Result<()> {
    let form = ContactForm {
        name: args.name,
        email: args.email,
        phone: args.phone,
        subject: resolve_subject(args.subject.as_deref())?,
        message: args.message,
    };

    ContactService::new(transport, endpoint)
        .submit(&form)
        .map_err(|e| match e {
            ConsultError::Http(_) | ConsultError::UnexpectedStatus { .. } => {
                let message = failure_message(&e);
                anyhow::Error::new(e).context(message)
            }
            other => other.into(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::contact::{NETWORK_MESSAGE, REJECTED_MESSAGE};
    use crate::services::http::fake::FakeTransport;

    #[test]
    fn test_resolve_subject() {
        assert_eq!(resolve_subject(None).unwrap(), "");
        assert_eq!(resolve_subject(Some("  ")).unwrap(), "");
        assert_eq!(resolve_subject(Some("forex")).unwrap(), "Forex");
        assert_eq!(resolve_subject(Some("6")).unwrap(), "Accounting & Taxation");
        assert_eq!(resolve_subject(Some("other")).unwrap(), "Other");
        assert!(resolve_subject(Some("Crypto")).unwrap_err().is_validation());
    }

    fn args(email: &str) -> ContactArgs {
        ContactArgs {
            name: "Ravi Kumar".into(),
            email: email.into(),
            phone: "+91 63995 88252".into(),
            subject: Some("forex".into()),
            message: "Need a travel card.".into(),
            endpoint: None,
        }
    }

    #[test]
    fn test_send_contact_success() {
        let transport = FakeTransport::responding(200, "");
        send_contact(&transport, "https://example.test/send_info", args("ravi@example.com")).unwrap();

        let request = transport.last_request().unwrap();
        assert_eq!(request.body["subject"], "Forex");
    }

    #[test]
    fn test_send_contact_reports_each_failure_once() {
        let transport = FakeTransport::failing("connection refused");
        let err = send_contact(&transport, "https://example.test/send_info", args("ravi@example.com"))
            .unwrap_err();
        assert_eq!(err.to_string(), NETWORK_MESSAGE);
        assert_eq!(err.chain().count(), 2);

        let transport = FakeTransport::responding(500, "");
        let err = send_contact(&transport, "https://example.test/send_info", args("ravi@example.com"))
            .unwrap_err();
        assert_eq!(err.to_string(), REJECTED_MESSAGE);

        let transport = FakeTransport::responding(200, "");
        let err = send_contact(&transport, "https://example.test/send_info", args("not-an-email"))
            .unwrap_err();
        assert!(err.to_string().contains("Invalid email address"));
        assert_eq!(err.chain().count(), 1);
        assert_eq!(transport.request_count(), 0);
    }
}
