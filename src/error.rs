//! Error types for configuration loading.
//!
//! The geometry kernel and index never fail; only reading and validating a
//! `SimConfig` can.

use std::error::Error;
use std::fmt;
use std::io;

/// Errors from loading, saving or validating a `SimConfig`.
#[derive(Debug)]
pub enum ConfigError {
    /// The config file could not be read or written.
    Io(io::Error),
    /// The file is not valid config JSON.
    Parse(serde_json::Error),
    /// A field value is out of range.
    Invalid {
        /// What went wrong.
        reason: String,
    },
}

impl ConfigError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::Invalid {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "config i/o failed: {e}"),
            Self::Parse(e) => write!(f, "config is not valid JSON: {e}"),
            Self::Invalid { reason } => write!(f, "invalid config: {reason}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Parse(e) => Some(e),
            Self::Invalid { .. } => None,
        }
    }
}

impl From<io::Error> for ConfigError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(e)
    }
}
