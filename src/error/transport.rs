use std::time::Duration;

use thiserror::Error;

/// Terminal failure of a single call. Recorded in the call's outcome and
/// never propagated past the worker that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("timed out after {timeout:?}")]
    Timeout { timeout: Duration },
    #[error("connection failed: {message}")]
    Connect { message: String },
    #[error("invalid request: {message}")]
    Build { message: String },
    #[error("request failed: {message}")]
    Request { message: String },
    #[error("failed to read response body: {message}")]
    Body { message: String },
}
