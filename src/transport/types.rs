//! Type definitions for the delivery transport

use bytes::Bytes;
use http::StatusCode;
use std::time::Duration;
use thiserror::Error;

/// Successful delivery outcome, optionally carrying a reply body
#[derive(Clone, Debug, Default)]
pub struct Acknowledgment {
    /// Reply payload returned by the target, when non-empty
    pub reply: Option<Bytes>,
}

/// Errors that can occur delivering a single event
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("Event not acknowledged: target responded {status}: {detail}")]
    NotAcknowledged { status: StatusCode, detail: String },

    #[error("Request timeout after {0:?}")]
    RequestTimeout(Duration),

    #[error("Connection error: {0}")]
    Connect(#[from] hyper_util::client::legacy::Error),

    #[error("Failed to read reply body: {0}")]
    ReplyBody(#[from] hyper::Error),

    #[error("Invalid target URI: {0}")]
    InvalidTargetUri(String),

    #[error("HTTP error: {0}")]
    Http(#[from] http::Error),
}

/// Result type for transport operations
pub type TransportResult<T> = Result<T, TransportError>;
