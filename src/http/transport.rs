use async_trait::async_trait;
use futures_util::StreamExt;
use futures_util::stream::BoxStream;

use crate::domain::Job;
use crate::error::TransportError;

/// Response body as a stream of chunk sizes in bytes.
pub type BodyStream = BoxStream<'static, Result<u64, TransportError>>;

/// Response whose headers have arrived; the body is still pending.
pub struct TransportResponse {
    status: u16,
    body: BodyStream,
}

impl TransportResponse {
    #[must_use]
    pub fn new(status: u16, body: BodyStream) -> Self {
        Self { status, body }
    }

    #[must_use]
    pub const fn status(&self) -> u16 {
        self.status
    }

    /// Reads and drops the body so the connection can be reused.
    ///
    /// # Errors
    ///
    /// Returns the first error raised while streaming the body.
    pub async fn drain(self) -> Result<u64, TransportError> {
        let mut body = self.body;
        let mut total_bytes: u64 = 0;
        while let Some(chunk) = body.next().await {
            total_bytes = total_bytes.saturating_add(chunk?);
        }
        Ok(total_bytes)
    }
}

impl std::fmt::Debug for TransportResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TransportResponse")
            .field("status", &self.status)
            .finish_non_exhaustive()
    }
}

/// Performs one HTTP call. Implementations carry their own per-call
/// timeout and must be safe to share across workers.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Sends the job's request and resolves once response headers arrive.
    ///
    /// # Errors
    ///
    /// Returns a `TransportError` when no response was produced.
    async fn execute(&self, job: &Job) -> Result<TransportResponse, TransportError>;
}
