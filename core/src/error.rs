//! Error types for the APOD client.
//!
//! # Design
//! An upstream error response (a decoded body carrying an `"error"` key)
//! gets a dedicated variant with the payload preserved, because callers
//! routinely distinguish "the API rejected the request" from "the network
//! or the JSON layer failed." Transport and decode failures land in their
//! own variants instead of escaping as raw transport errors.

use std::fmt;

use serde_json::Value;

/// Errors returned by `ApodClient` operations.
#[derive(Debug)]
pub enum ApodError {
    /// The server answered with a body containing an `"error"` key.
    Upstream(UpstreamError),

    /// The HTTP round-trip itself failed (connect, send, or read).
    Transport(String),

    /// The response body was not valid JSON, or did not fit the expected shape.
    Deserialization(String),
}

/// Payload of an error-shaped APOD response.
///
/// The upstream body is passed through without re-validation: `code` and
/// `message` are extracted when the `"error"` value is an object (or a bare
/// string), and `body` always holds the full decoded response.
#[derive(Debug, Clone, PartialEq)]
pub struct UpstreamError {
    pub status: u16,
    pub code: Option<String>,
    pub message: Option<String>,
    pub body: Value,
}

impl UpstreamError {
    /// Build from a decoded body known to contain an `"error"` key.
    pub(crate) fn from_body(status: u16, body: Value) -> Self {
        let (code, message) = match body.get("error") {
            Some(Value::Object(err)) => (
                err.get("code").and_then(Value::as_str).map(str::to_string),
                err.get("message").and_then(Value::as_str).map(str::to_string),
            ),
            Some(Value::String(msg)) => (None, Some(msg.clone())),
            _ => (None, None),
        };
        Self {
            status,
            code,
            message,
            body,
        }
    }
}

impl fmt::Display for ApodError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApodError::Upstream(err) => {
                write!(f, "APOD API error (HTTP {})", err.status)?;
                if let Some(code) = &err.code {
                    write!(f, " [{code}]")?;
                }
                if let Some(message) = &err.message {
                    write!(f, ": {message}")?;
                }
                Ok(())
            }
            ApodError::Transport(msg) => write!(f, "transport failed: {msg}"),
            ApodError::Deserialization(msg) => {
                write!(f, "deserialization failed: {msg}")
            }
        }
    }
}

impl std::error::Error for ApodError {}
