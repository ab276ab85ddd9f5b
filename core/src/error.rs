//! Error types for the employee API client.
//!
//! # Design
//! `NotFound` and `Validation` get dedicated variants because the controller
//! reports them differently from "the server misbehaved." Other non-2xx
//! responses land in `Http` with the raw status and body for debugging.

use thiserror::Error;

/// Errors produced by the transport, the client codec and the gateway.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced an HTTP response (DNS, connect, timeout).
    #[error("network error: {0}")]
    Network(String),

    /// The response body is not in the expected shape.
    #[error("decode failed: {0}")]
    Decode(String),

    /// The server returned 404 for the requested employee.
    #[error("employee not found")]
    NotFound,

    /// The server rejected the submitted fields.
    #[error("rejected by server (HTTP {status}): {message}")]
    Validation { status: u16, message: String },

    /// The server returned some other non-2xx status.
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),
}
