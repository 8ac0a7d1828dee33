//! Failure taxonomy for backend calls.
//!
//! Every failure the endpoint client can observe collapses into one of four
//! kinds. The client never panics on a failed call; it hands back an
//! `EndpointError` and lets the view decide what to show.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// Classification of an endpoint failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ErrorKind {
    /// The request never reached the server or no response came back.
    Network,
    /// The server answered with a 4xx status.
    Http4xx,
    /// The server answered with a 5xx status.
    Http5xx,
    /// The response body did not match the expected shape.
    Decode,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Network => "Network",
            ErrorKind::Http4xx => "HTTP4xx",
            ErrorKind::Http5xx => "HTTP5xx",
            ErrorKind::Decode => "Decode",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A tagged endpoint failure: kind plus human-readable message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {message}")]
pub struct EndpointError {
    pub kind: ErrorKind,
    pub message: String,
}

impl EndpointError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Network, message)
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Decode, message)
    }

    /// Map a non-success HTTP status to `Http5xx` or `Http4xx`.
    ///
    /// Anything outside 500-599 that is still not a success (a redirect that
    /// was not followed, an informational status) is reported as `Http4xx`.
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        let kind = if (500..600).contains(&status) {
            ErrorKind::Http5xx
        } else {
            ErrorKind::Http4xx
        };
        Self::new(kind, message)
    }

    /// Build from a transport-level reqwest error.
    pub fn from_transport(err: &reqwest::Error) -> Self {
        if err.is_timeout() {
            return Self::network("timeout");
        }
        if err.is_decode() {
            return Self::decode(err.to_string());
        }
        Self::network(err.to_string())
    }
}

/// Result of a single endpoint call.
pub type EndpointResult<T = serde_json::Value> = Result<T, EndpointError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_classification() {
        assert_eq!(EndpointError::from_status(404, "x").kind, ErrorKind::Http4xx);
        assert_eq!(EndpointError::from_status(400, "x").kind, ErrorKind::Http4xx);
        assert_eq!(EndpointError::from_status(500, "x").kind, ErrorKind::Http5xx);
        assert_eq!(EndpointError::from_status(503, "x").kind, ErrorKind::Http5xx);
        assert_eq!(EndpointError::from_status(304, "x").kind, ErrorKind::Http4xx);
    }

    #[test]
    fn test_display_includes_kind_and_message() {
        let err = EndpointError::network("timeout");
        assert_eq!(err.to_string(), "Network: timeout");
        assert_eq!(ErrorKind::Http5xx.to_string(), "HTTP5xx");
    }
}
