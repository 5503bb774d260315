//! Configuration for the LS-8 emulator.
//!
//! The ISA itself has no knobs: RAM size, register count, and the initial SP
//! are fixed constants (see [`crate::common::constants`]). This module holds the
//! run-time settings a host may choose:
//! 1. **Tracing:** Whether a trace snapshot is emitted before each instruction.
//! 2. **Step bound:** An optional cap on executed instructions per run.
//!
//! Configuration is supplied as JSON or built with `Config::default()`.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::common::error::ConfigError;

/// Root configuration structure.
///
/// # Examples
///
/// ```
/// use ls8_core::config::Config;
///
/// let config = Config::default();
/// assert!(!config.general.trace_instructions);
/// assert_eq!(config.general.max_steps, None);
///
/// let config = Config::from_json(r#"{ "general": { "max_steps": 1000 } }"#).unwrap();
/// assert_eq!(config.general.max_steps, Some(1000));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// General run settings.
    pub general: GeneralConfig,
}

/// General run settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneralConfig {
    /// Emit a trace snapshot before every executed instruction.
    pub trace_instructions: bool,

    /// Stop after this many instructions even if `HLT` was not reached.
    pub max_steps: Option<u64>,
}

impl Config {
    /// Parses a configuration from JSON. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Parse`] for malformed JSON or unknown fields.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a JSON configuration file.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Io`] if the file cannot be read, [`ConfigError::Parse`]
    /// if its contents are invalid.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }
}
