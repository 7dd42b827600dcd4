//! Contact form model
//!
//! The query form a prospective client fills in. It serializes to the exact
//! JSON object the submission endpoint expects.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Subject option for queries not tied to a catalog service
pub const OTHER_SUBJECT: &str = "Other";

/// Validation failures for the contact form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactValidationError {
    MissingField(&'static str),
    InvalidEmail(String),
}

impl fmt::Display for ContactValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingField(field) => write!(f, "{} is required", field),
            Self::InvalidEmail(email) => write!(f, "Invalid email address: '{}'", email),
        }
    }
}

impl std::error::Error for ContactValidationError {}

/// A client query
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    /// Service of interest; empty when none was chosen
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    /// Create an empty form
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty form with the subject prefilled
    pub fn with_subject(subject: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            ..Self::default()
        }
    }

    /// Check required fields
    ///
    /// Name, email, phone and message must be non-blank; the email needs an
    /// `@` with text on both sides. The subject is optional.
    pub fn validate(&self) -> Result<(), ContactValidationError> {
        let required = [
            ("Full name", &self.name),
            ("Phone number", &self.phone),
            ("Email address", &self.email),
            ("Message", &self.message),
        ];
        for (label, value) in required {
            if value.trim().is_empty() {
                return Err(ContactValidationError::MissingField(label));
            }
        }

        let email = self.email.trim();
        match email.split_once('@') {
            Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(()),
            _ => Err(ContactValidationError::InvalidEmail(email.to_string())),
        }
    }

    /// Copy of the form with surrounding whitespace removed
    pub fn trimmed(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            subject: self.subject.trim().to_string(),
            message: self.message.trim().to_string(),
        }
    }

    /// Reset every field
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        ContactForm {
            name: "Asha Verma".into(),
            email: "asha@example.com".into(),
            phone: "+91 98765 43210".into(),
            subject: "Mutual Funds".into(),
            message: "I would like to start a SIP.".into(),
        }
    }

    #[test]
    fn test_valid_form() {
        assert!(filled().validate().is_ok());

        let mut no_subject = filled();
        no_subject.subject.clear();
        assert!(no_subject.validate().is_ok());
    }

    #[test]
    fn test_missing_fields() {
        let mut form = filled();
        form.name = "   ".into();
        assert_eq!(
            form.validate(),
            Err(ContactValidationError::MissingField("Full name"))
        );

        let mut form = filled();
        form.message.clear();
        assert_eq!(
            form.validate().unwrap_err().to_string(),
            "Message is required"
        );
    }

    #[test]
    fn test_invalid_email() {
        let mut form = filled();
        form.email = "asha.example.com".into();
        assert!(matches!(
            form.validate(),
            Err(ContactValidationError::InvalidEmail(_))
        ));

        form.email = "@example.com".into();
        assert!(form.validate().is_err());
    }

    #[test]
    fn test_with_subject_and_clear() {
        let mut form = ContactForm::with_subject("Forex");
        assert_eq!(form.subject, "Forex");
        assert!(form.name.is_empty());

        form.name = "Someone".into();
        form.clear();
        assert_eq!(form, ContactForm::new());
    }

    #[test]
    fn test_payload_shape() {
        let value = serde_json::to_value(filled()).unwrap();
        let object = value.as_object().unwrap();
        let mut keys: Vec<_> = object.keys().cloned().collect();
        keys.sort();
        assert_eq!(keys, vec!["email", "message", "name", "phone", "subject"]);
        assert_eq!(object["subject"], "Mutual Funds");
    }

    #[test]
    fn test_trimmed() {
        let mut form = filled();
        form.name = "  Asha  ".into();
        assert_eq!(form.trimmed().name, "Asha");
    }
}
