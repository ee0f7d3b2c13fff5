//! Error types for the chimp SDK.
//!
//! Remote faults are classified by their fault-code range so callers can
//! react to a whole class of problems (list-level, validation, ...) without
//! inspecting raw codes.

use thiserror::Error;
use xmlrpc::{Fault, Value};

/// Result type for MailChimp operations.
pub type Result<T> = std::result::Result<T, ChimpError>;

/// Errors that can occur when using the chimp SDK.
#[derive(Error, Debug)]
pub enum ChimpError {
    /// Client construction failed: missing or malformed API key.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Remote fault in the 100-199 range: account or user level problem.
    #[error("user error ({code}): {message}")]
    User {
        /// Fault code reported by the API.
        code: i32,
        /// Human-readable fault message.
        message: String,
    },

    /// Remote fault in the 200-299 range: list level problem.
    #[error("list error ({code}): {message}")]
    List { code: i32, message: String },

    /// Remote fault in the 300-399 range: campaign level problem.
    #[error("campaign error ({code}): {message}")]
    Campaign { code: i32, message: String },

    /// Remote fault in the 500-599 range: the supplied data was rejected.
    #[error("validation error ({code}): {message}")]
    Validation { code: i32, message: String },

    /// Remote fault outside every classified range.
    #[error("API error ({code}): {message}")]
    Api { code: i32, message: String },

    /// Transport, decoding, or argument failure outside the fault protocol.
    #[error("communication error: {0}")]
    Communication(String),
}

impl ChimpError {
    /// Classifies a structured remote fault by its code range.
    ///
    /// Total over all codes: every unmapped range falls back to [`ChimpError::Api`].
    pub(crate) fn from_fault(fault: &Fault) -> Self {
        let code = fault.fault_code;
        let message = fault.fault_string.clone();
        match code {
            100..=199 => ChimpError::User { code, message },
            200..=299 => ChimpError::List { code, message },
            300..=399 => ChimpError::Campaign { code, message },
            500..=599 => ChimpError::Validation { code, message },
            _ => ChimpError::Api { code, message },
        }
    }

    /// Returns the fault code if this error originated as a remote fault.
    pub fn fault_code(&self) -> Option<i32> {
        match self {
            ChimpError::User { code, .. }
            | ChimpError::List { code, .. }
            | ChimpError::Campaign { code, .. }
            | ChimpError::Validation { code, .. }
            | ChimpError::Api { code, .. } => Some(*code),
            _ => None,
        }
    }

    /// Returns true if this error originated as a structured remote fault.
    pub fn is_fault(&self) -> bool {
        self.fault_code().is_some()
    }
}

/// Maps a non-fault transport failure onto the error taxonomy.
///
/// The v1.2 API reports certain argument problems as a bare "Wrong type!"
/// runtime message instead of a structured fault. When that happens, the
/// nil-valued keys of any struct argument are named in the resulting
/// message; everything else keeps the original failure text.
pub(crate) fn classify_transport_failure(message: String, args: &[Value]) -> ChimpError {
    if message.contains("Wrong type!") {
        let nil_keys: Vec<String> = args
            .iter()
            .filter_map(|arg| match arg {
                Value::Struct(map) => Some(map),
                _ => None,
            })
            .flat_map(|map| map.iter())
            .filter(|(_, value)| matches!(value, Value::Nil))
            .map(|(key, _)| format!("{key} is Nil."))
            .collect();
        if !nil_keys.is_empty() {
            return ChimpError::Communication(nil_keys.join(" "));
        }
    }
    ChimpError::Communication(message)
}

impl From<reqwest::Error> for ChimpError {
    fn from(err: reqwest::Error) -> Self {
        ChimpError::Communication(err.to_string())
    }
}

impl From<serde_json::Error> for ChimpError {
    fn from(err: serde_json::Error) -> Self {
        ChimpError::Communication(err.to_string())
    }
}
