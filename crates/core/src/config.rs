//! Factory configuration
//!
//! Settings are plain TOML, either embedded by the caller or read from a
//! file. Every field has a default, so an empty document is a valid config.
//!
//! ```toml
//! # Accept contracts that declare no accessors (default: true)
//! allow_empty_contracts = true
//!
//! # Emit a TRACE event for every successful update (default: false)
//! trace_updates = false
//! ```

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration consulted by the forwarder factory on every `create`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactoryConfig {
    /// Accept contracts with zero accessors.
    #[serde(default = "default_allow_empty_contracts")]
    pub allow_empty_contracts: bool,
    /// Emit a `tracing` TRACE event for every successful update.
    #[serde(default)]
    pub trace_updates: bool,
}

fn default_allow_empty_contracts() -> bool {
    true
}

impl Default for FactoryConfig {
    fn default() -> Self {
        Self {
            allow_empty_contracts: default_allow_empty_contracts(),
            trace_updates: false,
        }
    }
}

impl FactoryConfig {
    /// Reject contracts that have nothing to forward.
    pub fn strict() -> Self {
        Self {
            allow_empty_contracts: false,
            ..Self::default()
        }
    }

    /// Parse a config from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the text is not valid TOML or a field has
    /// the wrong type. Unknown keys are ignored.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Read and parse a config file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the file cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("cannot read {}: {}", path.display(), e)))?;
        Self::from_toml_str(&text)
    }

    /// Serialize to TOML text.
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }

    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# swapcell factory configuration
#
# Accept contracts that declare no accessors.
allow_empty_contracts = true

# Emit a TRACE event for every successful update.
trace_updates = false
"#
    }
}
