//! Error types for projctl
//!
//! Device-side outcomes (timeouts, `F` replies, unparseable payloads) are not
//! errors; they are reported through [`crate::outcome::Query`] and
//! [`crate::outcome::Ack`]. This type covers misuse and environment faults.

use thiserror::Error;

/// Result type alias using ProjectorError
pub type Result<T> = std::result::Result<T, ProjectorError>;

/// Unified error type for projctl operations
#[derive(Debug, Error)]
pub enum ProjectorError {
    // -------------------------------------------------------------------------
    // Transport Errors
    // -------------------------------------------------------------------------
    #[error("failed to open serial port {port}: {source}")]
    Open {
        port: String,
        #[source]
        source: serialport::Error,
    },

    #[error("transport {op} failed: {source}")]
    Transport {
        op: &'static str,
        #[source]
        source: std::io::Error,
    },

    // -------------------------------------------------------------------------
    // Caller Errors
    // -------------------------------------------------------------------------
    #[error("invalid argument for {feature}: {reason}")]
    InvalidArgument { feature: String, reason: String },

    #[error("{feature} does not support {op}")]
    Unsupported { feature: String, op: &'static str },

    #[error("unknown feature: {0}")]
    UnknownFeature(String),

    // -------------------------------------------------------------------------
    // Settings Document Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ProjectorError {
    /// Wrap an I/O error raised while talking to the device
    pub(crate) fn transport(op: &'static str, source: std::io::Error) -> Self {
        ProjectorError::Transport { op, source }
    }

    pub(crate) fn invalid(feature: impl Into<String>, reason: impl Into<String>) -> Self {
        ProjectorError::InvalidArgument {
            feature: feature.into(),
            reason: reason.into(),
        }
    }

    /// True for faults on the physical link (open/read/write)
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            ProjectorError::Open { .. } | ProjectorError::Transport { .. }
        )
    }
}

impl From<serde_json::Error> for ProjectorError {
    fn from(e: serde_json::Error) -> Self {
        ProjectorError::Serialization(e.to_string())
    }
}

impl From<toml::de::Error> for ProjectorError {
    fn from(e: toml::de::Error) -> Self {
        ProjectorError::Serialization(e.to_string())
    }
}

impl From<toml::ser::Error> for ProjectorError {
    fn from(e: toml::ser::Error) -> Self {
        ProjectorError::Serialization(e.to_string())
    }
}
