//! AI assistant service
//!
//! Answers a free-text question through the text-generation API with a
//! fixed system instruction describing the firm. The service never fails:
//! missing credentials, transport errors and empty answers all come back as
//! a polite fallback message flagged as an error.

use serde::Deserialize;
use serde_json::json;

use crate::config::settings::AssistantSettings;
use crate::error::{ConsultError, ConsultResult};
use crate::models::ChatMessage;

use super::http::HttpTransport;

/// Persona and scope given to the model with every question
pub const SYSTEM_INSTRUCTION: &str = "You are an expert AI Financial Consultant for 'FC and Sons Consulting'.
We specialize in:
1. Mutual Funds
2. Demat Services
3. Insurance (Health and Vehicle)
4. Forex
5. Custom Duty
6. Accounting & Taxation
7. Auditing & Assurance
8. Real Estate
9. Bill Discounting
10. FD and Bonds

Your goal is to answer client questions professionally, briefly (under 100 words), and encourage them to use our contact form for a full consultation.
Maintain a polite, professional, and wealthy tone.";

/// Reply when no API key is configured
pub const MISSING_KEY_REPLY: &str =
    "I'm sorry, I cannot connect to the service right now. Please check the configuration.";

/// Reply when the model returns no text
pub const EMPTY_REPLY: &str = "I apologize, I couldn't generate a response at this time.";

/// Reply when the call fails
pub const UNAVAILABLE_REPLY: &str =
    "Our AI assistant is momentarily unavailable. Please try again later.";

#[derive(Debug, Default, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Default, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<Content>,
}

#[derive(Debug, Default, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Default, Deserialize)]
struct Part {
    #[serde(default)]
    text: Option<String>,
}

impl GenerateResponse {
    /// Concatenated text of the first candidate, if any
    fn text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text: String = content
            .parts
            .iter()
            .filter_map(|p| p.text.as_deref())
            .collect();
        let text = text.trim();
        (!text.is_empty()).then(|| text.to_string())
    }
}

/// Service answering client questions
pub struct AssistantService<'a> {
    transport: &'a dyn HttpTransport,
    settings: &'a AssistantSettings,
    api_key: Option<String>,
}

impl<'a> AssistantService<'a> {
    /// Create a new assistant, reading the key from the configured variable
    pub fn new(transport: &'a dyn HttpTransport, settings: &'a AssistantSettings) -> Self {
        let api_key = std::env::var(&settings.api_key_env).ok();
        Self::with_api_key(transport, settings, api_key)
    }

    /// Create a new assistant with an explicit key
    pub fn with_api_key(
        transport: &'a dyn HttpTransport,
        settings: &'a AssistantSettings,
        api_key: Option<String>,
    ) -> Self {
        let api_key = api_key.filter(|k| !k.trim().is_empty());
        Self {
            transport,
            settings,
            api_key,
        }
    }

    /// Whether a credential is available
    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    /// Ask a question and get the assistant's reply
    pub fn ask(&self, query: &str) -> ChatMessage {
        let Some(api_key) = self.api_key.as_deref() else {
            log::error!(
                "{} is missing from environment variables.",
                self.settings.api_key_env
            );
            return ChatMessage::model_error(MISSING_KEY_REPLY);
        };

        match self.generate(api_key, query) {
            Ok(Some(text)) => ChatMessage::model(text),
            Ok(None) => ChatMessage::model_error(EMPTY_REPLY),
            Err(e) => {
                log::error!("assistant request failed: {}", e);
                ChatMessage::model_error(UNAVAILABLE_REPLY)
            }
        }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.settings.endpoint_base.trim_end_matches('/'),
            self.settings.model
        )
    }

    fn generate(&self, api_key: &str, query: &str) -> ConsultResult<Option<String>> {
        let body = json!({
            "systemInstruction": { "parts": [{ "text": SYSTEM_INSTRUCTION }] },
            "contents": [{ "role": "user", "parts": [{ "text": query }] }],
        });

        let response =
            self.transport
                .post_json(&self.endpoint(), &[("x-goog-api-key", api_key)], &body)?;
        if !response.is_success() {
            return Err(ConsultError::UnexpectedStatus {
                status: response.status,
            });
        }

        let parsed: GenerateResponse = serde_json::from_str(&response.body)?;
        Ok(parsed.text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ChatRole;
    use crate::services::http::fake::FakeTransport;

    const ANSWER: &str = r#"{
        "candidates": [{
            "content": {
                "role": "model",
                "parts": [{ "text": "An ELSS fund offers tax savings. " }, { "text": "Contact us to begin." }]
            },
            "finishReason": "STOP"
        }]
    }"#;

    #[test]
    fn test_missing_key_skips_network() {
        let transport = FakeTransport::responding(200, ANSWER);
        let settings = AssistantSettings::default();
        let assistant = AssistantService::with_api_key(&transport, &settings, None);

        let reply = assistant.ask("What is ELSS?");
        assert!(!assistant.is_configured());
        assert!(reply.is_error);
        assert_eq!(reply.text, MISSING_KEY_REPLY);
        assert_eq!(transport.request_count(), 0);
    }

    #[test]
    fn test_blank_key_counts_as_missing() {
        let transport = FakeTransport::responding(200, ANSWER);
        let settings = AssistantSettings::default();
        let assistant = AssistantService::with_api_key(&transport, &settings, Some("  ".into()));
        assert!(!assistant.is_configured());
    }

    #[test]
    fn test_answer_is_joined() {
        let transport = FakeTransport::responding(200, ANSWER);
        let settings = AssistantSettings::default();
        let assistant = AssistantService::with_api_key(&transport, &settings, Some("k".into()));

        let reply = assistant.ask("What is ELSS?");
        assert_eq!(reply.role, ChatRole::Model);
        assert!(!reply.is_error);
        assert_eq!(
            reply.text,
            "An ELSS fund offers tax savings. Contact us to begin."
        );
    }

    #[test]
    fn test_request_shape() {
        let transport = FakeTransport::responding(200, ANSWER);
        let settings = AssistantSettings::default();
        let assistant =
            AssistantService::with_api_key(&transport, &settings, Some("secret".into()));
        assistant.ask("Tell me about Forex");

        let request = transport.last_request().unwrap();
        assert!(request
            .url
            .ends_with("/models/gemini-2.5-flash:generateContent"));
        assert_eq!(
            request.headers,
            vec![("x-goog-api-key".to_string(), "secret".to_string())]
        );
        assert_eq!(
            request.body["contents"][0]["parts"][0]["text"],
            "Tell me about Forex"
        );
        assert_eq!(
            request.body["systemInstruction"]["parts"][0]["text"],
            SYSTEM_INSTRUCTION
        );
    }

    #[test]
    fn test_empty_answer_falls_back() {
        let transport = FakeTransport::responding(200, r#"{"candidates":[]}"#);
        let settings = AssistantSettings::default();
        let assistant = AssistantService::with_api_key(&transport, &settings, Some("k".into()));

        let reply = assistant.ask("Hello");
        assert!(reply.is_error);
        assert_eq!(reply.text, EMPTY_REPLY);
    }

    #[test]
    fn test_errors_fall_back() {
        let settings = AssistantSettings::default();

        let rejected = FakeTransport::responding(403, r#"{"error":{}}"#);
        let assistant = AssistantService::with_api_key(&rejected, &settings, Some("k".into()));
        assert_eq!(assistant.ask("Hi").text, UNAVAILABLE_REPLY);

        let offline = FakeTransport::failing("dns failure");
        let assistant = AssistantService::with_api_key(&offline, &settings, Some("k".into()));
        assert_eq!(assistant.ask("Hi").text, UNAVAILABLE_REPLY);

        let garbled = FakeTransport::responding(200, "<html>");
        let assistant = AssistantService::with_api_key(&garbled, &settings, Some("k".into()));
        assert_eq!(assistant.ask("Hi").text, UNAVAILABLE_REPLY);
    }
}
