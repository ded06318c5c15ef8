//! The single JSON document written to stdout or stderr.
//!
//! A parent process captures exactly one line per invocation: the
//! provider's payload on success, a normalized `{error, message}` object
//! on any failure.

use serde::{Deserialize, Serialize};

use crate::error::VoicesError;

/// Normalized failure shape consumed by the parent process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    pub error: String,
    pub message: String,
}

impl From<&VoicesError> for ErrorEnvelope {
    fn from(err: &VoicesError) -> Self {
        match err {
            VoicesError::Api { status, message } => Self {
                error: format!("ElevenLabs API returned status {status}"),
                message: message.clone(),
            },
            VoicesError::Network(source) => Self {
                error: "Request failed".to_string(),
                message: source.to_string(),
            },
            VoicesError::Timeout(ms) => Self {
                error: "Request failed".to_string(),
                message: format!("request timed out after {ms}ms"),
            },
            VoicesError::Serialization(source) => Self {
                error: "Unexpected error".to_string(),
                message: source.to_string(),
            },
        }
    }
}

impl ErrorEnvelope {
    /// Render as the compact single-line form the parent process expects.
    pub fn to_json_line(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| {
            r#"{"error":"Unexpected error","message":"failed to encode error envelope"}"#
                .to_string()
        })
    }
}

/// A rendered envelope, tagged with the stream that must receive it.
///
/// Exactly one stream carries output per invocation; the other stays
/// silent.
#[derive(Debug, PartialEq, Eq)]
pub enum Rendered {
    Stdout(String),
    Stderr(String),
}

/// Convert a fetch result into the one line the process prints.
///
/// Even a payload that fails to serialize back (which a
/// [`serde_json::Value`] cannot, in practice) ends up as an error
/// envelope rather than partial output.
pub fn render(result: &crate::error::Result<serde_json::Value>) -> Rendered {
    match result {
        Ok(payload) => match serde_json::to_string(payload) {
            Ok(line) => Rendered::Stdout(line),
            Err(err) => Rendered::Stderr(
                ErrorEnvelope::from(&VoicesError::Serialization(err)).to_json_line(),
            ),
        },
        Err(err) => Rendered::Stderr(ErrorEnvelope::from(err).to_json_line()),
    }
}
