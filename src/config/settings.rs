//! User settings for fcsons
//!
//! Holds the remote endpoints, assistant configuration and calculator
//! preferences. Every field has a default so partial files still load.

use serde::{Deserialize, Serialize};

use super::paths::ConsultPaths;
use crate::error::ConsultError;
use crate::models::InvestmentMode;

/// Default endpoint receiving contact-form submissions
pub const DEFAULT_CONTACT_ENDPOINT: &str = "https://fcandsonsconsulting-back.vercel.app/send_info";

/// Default base URL of the text-generation API
pub const DEFAULT_ASSISTANT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Assistant (text-generation) settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssistantSettings {
    /// Model identifier passed to the API
    #[serde(default = "default_model")]
    pub model: String,

    /// Name of the environment variable holding the API key
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,

    /// Base URL of the API (without the `/models/...` suffix)
    #[serde(default = "default_assistant_endpoint")]
    pub endpoint_base: String,
}

impl Default for AssistantSettings {
    fn default() -> Self {
        Self {
            model: default_model(),
            api_key_env: default_api_key_env(),
            endpoint_base: default_assistant_endpoint(),
        }
    }
}

/// Calculator preferences
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculatorSettings {
    /// Mode the calculator opens in
    #[serde(default)]
    pub default_mode: InvestmentMode,
}

/// User settings for fcsons
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used in summaries
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Where contact-form submissions are posted
    #[serde(default = "default_contact_endpoint")]
    pub contact_endpoint: String,

    /// AI assistant configuration
    #[serde(default)]
    pub assistant: AssistantSettings,

    /// Calculator preferences
    #[serde(default)]
    pub calculator: CalculatorSettings,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "₹".to_string()
}

fn default_contact_endpoint() -> String {
    DEFAULT_CONTACT_ENDPOINT.to_string()
}

fn default_model() -> String {
    "gemini-2.5-flash".to_string()
}

fn default_api_key_env() -> String {
    "API_KEY".to_string()
}

fn default_assistant_endpoint() -> String {
    DEFAULT_ASSISTANT_ENDPOINT.to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            contact_endpoint: default_contact_endpoint(),
            assistant: AssistantSettings::default(),
            calculator: CalculatorSettings::default(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &ConsultPaths) -> Result<Self, ConsultError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                ConsultError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                ConsultError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            log::debug!("loaded settings from {}", settings_path.display());
            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &ConsultPaths) -> Result<(), ConsultError> {
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            ConsultError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(&settings_path, contents).map_err(|e| {
            ConsultError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.currency_symbol, "₹");
        assert_eq!(settings.contact_endpoint, DEFAULT_CONTACT_ENDPOINT);
        assert_eq!(settings.assistant.model, "gemini-2.5-flash");
        assert_eq!(settings.assistant.api_key_env, "API_KEY");
        assert_eq!(settings.calculator.default_mode, InvestmentMode::Sip);
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ConsultPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.contact_endpoint = "http://localhost:9000/send_info".into();
        settings.calculator.default_mode = InvestmentMode::Lumpsum;

        settings.save(&paths).unwrap();
        assert!(paths.is_initialized());

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.contact_endpoint, "http://localhost:9000/send_info");
        assert_eq!(loaded.calculator.default_mode, InvestmentMode::Lumpsum);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ConsultPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"assistant":{"model":"other"}}"#).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.assistant.model, "other");
        assert_eq!(loaded.assistant.api_key_env, "API_KEY");
        assert_eq!(loaded.contact_endpoint, DEFAULT_CONTACT_ENDPOINT);
    }

    #[test]
    fn test_invalid_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ConsultPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "not json").unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, ConsultError::Config(_)));
    }
}
