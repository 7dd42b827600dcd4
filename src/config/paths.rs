//! Path management for fcsons
//!
//! ## Path Resolution Order
//!
//! 1. `FCSONS_CLI_DATA_DIR` environment variable (if set)
//! 2. The platform config directory (`$XDG_CONFIG_HOME` / `~/.config` on Unix,
//!    `%APPDATA%` on Windows, `~/Library/Application Support` on macOS)
//!    joined with `fcsons-cli`

use std::path::PathBuf;

use directories::BaseDirs;

use crate::error::ConsultError;

/// Environment variable overriding the base directory
pub const DATA_DIR_ENV: &str = "FCSONS_CLI_DATA_DIR";

const APP_DIR_NAME: &str = "fcsons-cli";

/// Manages all paths used by fcsons
#[derive(Debug, Clone)]
pub struct ConsultPaths {
    /// Base directory for all fcsons files
    base_dir: PathBuf,
}

impl ConsultPaths {
    /// Create a new ConsultPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined and no
    /// override is set.
    pub fn new() -> Result<Self, ConsultError> {
        let base_dir = if let Ok(custom) = std::env::var(DATA_DIR_ENV) {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create ConsultPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the config directory (same as base for simplicity)
    pub fn config_dir(&self) -> PathBuf {
        self.base_dir.clone()
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), ConsultError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| ConsultError::Io(format!("Failed to create base directory: {}", e)))?;

        Ok(())
    }

    /// Check if fcsons has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

fn resolve_default_path() -> Result<PathBuf, ConsultError> {
    let dirs = BaseDirs::new()
        .ok_or_else(|| ConsultError::Config("Could not determine home directory".into()))?;
    Ok(dirs.config_dir().join(APP_DIR_NAME))
}
