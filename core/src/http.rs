//! Blocking HTTP transport for the APOD endpoint.
//!
//! # Design
//! `HttpResponse` describes a response as plain data so the client's parse
//! step stays deterministic and testable without a network. `get` is the
//! only I/O in the crate: one `ureq` agent per call, no retries, the
//! transport's default timeouts. Status-as-error is disabled so 4xx/5xx
//! bodies come back as data and the client interprets status and shape
//! itself.

use crate::error::ApodError;

/// An HTTP response described as plain data.
///
/// Produced by [`get`] (or constructed directly in tests), then handed to
/// `ApodClient::parse_search` for interpretation.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

/// Execute one blocking GET and read the full body.
///
/// Any connect/send/read failure is a transport error; non-2xx statuses
/// are not.
pub fn get(url: &str) -> Result<HttpResponse, ApodError> {
    let agent = ureq::Agent::config_builder()
        .http_status_as_error(false)
        .build()
        .new_agent();

    tracing::debug!(url, "requesting APOD");
    let mut response = agent
        .get(url)
        .call()
        .map_err(|e| ApodError::Transport(e.to_string()))?;

    let status = response.status().as_u16();
    let body = response
        .body_mut()
        .read_to_string()
        .map_err(|e| ApodError::Transport(e.to_string()))?;
    tracing::debug!(status, bytes = body.len(), "APOD response received");

    Ok(HttpResponse { status, body })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn refused_connection_is_a_transport_error() {
        // Bind-then-drop guarantees the port is closed.
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        let err = get(&format!("http://127.0.0.1:{port}/planetary/apod")).unwrap_err();
        assert!(matches!(err, ApodError::Transport(_)));
    }
}
