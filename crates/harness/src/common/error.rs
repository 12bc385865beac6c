//! Harness error definitions.
//!
//! This module defines the single error type returned by fallible testbench operations:
//! 1. **Configuration misuse:** Degenerate bounds rejected at construction time.
//! 2. **Parsing:** Malformed JSON configuration or suite manifests.
//! 3. **I/O:** Reading configuration/manifests and writing result reports.
//!
//! Trap causes reported by the model are never errors; they are classified into verdicts.

use std::path::PathBuf;

/// Errors raised while configuring or driving the testbench.
#[derive(Debug, thiserror::Error)]
pub enum HarnessError {
    /// A configuration value would produce a degenerate run.
    ///
    /// Raised for a zero `max_sim_time` (the loop would never run) and for a
    /// zero reset window (reset would never be applied).
    #[error("invalid configuration: {field}: {reason}")]
    InvalidConfiguration {
        /// Name of the offending configuration field.
        field: &'static str,
        /// Why the value was rejected.
        reason: String,
    },

    /// JSON configuration or manifest could not be parsed.
    #[error("failed to parse JSON: {0}")]
    ConfigParse(#[from] serde_json::Error),

    /// A file could not be read or written.
    #[error("I/O error on '{}': {source}", .path.display())]
    Io {
        /// Path of the file being accessed.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}

impl HarnessError {
    /// Builds an [`HarnessError::InvalidConfiguration`] for `field`.
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            field,
            reason: reason.into(),
        }
    }

    /// Builds an [`HarnessError::Io`] carrying the path that failed.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Returns `true` if this error reports configuration misuse.
    pub const fn is_invalid_configuration(&self) -> bool {
        matches!(self, Self::InvalidConfiguration { .. })
    }
}
