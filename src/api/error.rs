//! Backend error types
//!
//! Every failed call to the CRM backend lands in one of three buckets so the
//! store can tell a dead server from a rejected request from a garbled payload.

use thiserror::Error;

/// Errors that can occur while talking to the CRM backend
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Connection refused, timeout, TLS failure, body read failure
    #[error("request failed: {0}")]
    Transport(String),

    /// Backend answered with a non-2xx status
    #[error("server returned {status}{}", message_suffix(.message))]
    Status { status: u16, message: Option<String> },

    /// Backend answered 2xx but the payload does not match the expected shape
    #[error("malformed response from {endpoint}: {reason}")]
    Decode { endpoint: String, reason: String },
}

fn message_suffix(message: &Option<String>) -> String {
    message
        .as_deref()
        .map(|m| format!(": {m}"))
        .unwrap_or_default()
}

impl ApiError {
    pub fn transport(err: reqwest::Error) -> Self {
        let kind = if err.is_timeout() {
            "timed out"
        } else if err.is_connect() {
            "could not connect"
        } else {
            "transport error"
        };
        Self::Transport(format!("{kind} ({err})"))
    }

    pub fn decode(endpoint: impl Into<String>, err: serde_json::Error) -> Self {
        Self::Decode {
            endpoint: endpoint.into(),
            reason: err.to_string(),
        }
    }

    /// Text suitable for a notice: the server's own message when it sent one
    pub fn user_message(&self) -> String {
        match self {
            Self::Status {
                message: Some(message),
                ..
            } => message.clone(),
            other => other.to_string(),
        }
    }

    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decode { .. })
    }

    /// HTTP status when the backend responded at all
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
