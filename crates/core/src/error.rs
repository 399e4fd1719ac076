//! Error types for swapcell
//!
//! This module defines all error types surfaced by the forwarder factory and
//! its handles. We use `thiserror` for automatic `Display` and `Error` trait
//! implementations.
//!
//! Every error is raised synchronously to the caller of the failing operation
//! and nothing is retried internally.

use thiserror::Error;

/// Result type alias for swapcell operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for swapcell
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A seed or replacement value was absent or otherwise unusable
    #[error("Invalid argument `{argument}`: {reason}")]
    InvalidArgument {
        /// Name of the offending argument
        argument: &'static str,
        /// Why it was rejected
        reason: String,
    },

    /// The contract contains members that cannot be forwarded
    #[error("Unsupported contract {contract}: {reason}")]
    UnsupportedContract {
        /// Contract name as introspected
        contract: &'static str,
        /// The offending member, if a single member is to blame
        member: Option<&'static str>,
        /// Why the contract was rejected
        reason: String,
    },

    /// Factory configuration could not be read or parsed
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Build an [`Error::InvalidArgument`]
    pub fn invalid_argument(argument: &'static str, reason: impl Into<String>) -> Self {
        Error::InvalidArgument {
            argument,
            reason: reason.into(),
        }
    }

    /// Build an [`Error::UnsupportedContract`]
    pub fn unsupported_contract(
        contract: &'static str,
        member: Option<&'static str>,
        reason: impl Into<String>,
    ) -> Self {
        Error::UnsupportedContract {
            contract,
            member,
            reason: reason.into(),
        }
    }

    /// True for [`Error::InvalidArgument`]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Error::InvalidArgument { .. })
    }

    /// True for [`Error::UnsupportedContract`]
    pub fn is_unsupported_contract(&self) -> bool {
        matches!(self, Error::UnsupportedContract { .. })
    }
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Error::Config(e.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(e: toml::ser::Error) -> Self {
        Error::Config(e.to_string())
    }
}
