//! Error types for orca
//!
//! Centralized error handling using thiserror. Everything here is fatal: a
//! config, transport, or protocol failure aborts the run with exit code 1.
//! Tool failures are deliberately NOT represented here; they are absorbed
//! into the conversation as `"ERROR: ..."` result strings (see `tools`).

use thiserror::Error;

/// All fatal error types that can occur in orca
#[derive(Debug, Error)]
pub enum OrcaError {
    /// Bad or missing CLI flag value, missing API key
    #[error("Config error: {0}")]
    Config(String),

    /// Connection-level failure talking to the completion service
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Completion service answered with a non-2xx status
    #[error("Completion service returned {status}: {body}")]
    Status { status: u16, body: String },

    /// Response body was not the expected chat-completion shape
    #[error("Protocol error: {0}")]
    Protocol(String),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for orca operations
pub type Result<T> = std::result::Result<T, OrcaError>;
