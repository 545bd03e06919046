//! Error types for PPI resolution
//!
//! The core has a single, recoverable failure: a hardware identifier that
//! the classification table does not know. Everything else here belongs to
//! the outer surface (configuration, extra table rows, the binary).

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure of an exact identifier lookup.
///
/// Never fatal: the resolver recovers by estimating and attaches this value
/// to the best-guess outcome so callers can log it.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LookupError {
    #[error("Unknown hardware identifier: {identifier:?}")]
    UnknownHardwareIdentifier { identifier: String },
}

impl LookupError {
    /// The identifier that failed to match
    pub fn identifier(&self) -> &str {
        match self {
            LookupError::UnknownHardwareIdentifier { identifier } => identifier,
        }
    }
}

/// Unified error type for the crate
#[derive(Error, Debug)]
pub enum Error {
    // =========================================================================
    // Lookup Errors
    // =========================================================================
    #[error(transparent)]
    Lookup(#[from] LookupError),

    // =========================================================================
    // Table Errors
    // =========================================================================
    #[error("Hardware identifier {identifier:?} mapped twice: {first_ppi} and {second_ppi} ppi")]
    DuplicateIdentifier {
        identifier: String,
        first_ppi: f64,
        second_ppi: f64,
    },

    #[error("Invalid density for {identifier:?}: {ppi} ppi")]
    InvalidPpi { identifier: String, ppi: f64 },

    #[error("Invalid display scale: logical {logical}, native {native}")]
    InvalidScale { logical: f64, native: f64 },

    // =========================================================================
    // Configuration Errors
    // =========================================================================
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("YAML parse error: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // =========================================================================
    // IO Errors
    // =========================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Whether a caller can keep going with a usable PPI value.
    ///
    /// Only an unknown identifier qualifies; everything else is a data or
    /// configuration problem that needs fixing before use.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Error::Lookup(_))
    }

    /// Whether the error points at authored data (table rows or config)
    pub fn is_data_error(&self) -> bool {
        matches!(
            self,
            Error::DuplicateIdentifier { .. }
                | Error::InvalidPpi { .. }
                | Error::InvalidScale { .. }
                | Error::Configuration(_)
                | Error::YamlParse(_)
        )
    }
}

/// Result type alias for the crate
pub type Result<T> = std::result::Result<T, Error>;
