//! Error types for voice-catalog operations.

use thiserror::Error;

/// Primary error type for all voice-catalog operations.
///
/// The three user-visible failure kinds (non-success status, transport
/// failure, anything else) are each covered by a variant, so the boundary
/// that renders them can match exhaustively.
#[derive(Error, Debug)]
pub enum VoicesError {
    #[error("ElevenLabs API returned status {status}")]
    Api { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Timeout after {0}ms")]
    Timeout(u64),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, VoicesError>;
