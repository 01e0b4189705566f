use std::time::Duration;

use serde::Serialize;

use crate::error::TransportError;

use super::{JobRef, Threshold};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Pass,
    Fail,
    Error,
}

/// Timed result of one job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    job: JobRef,
    elapsed: Duration,
    verdict: Verdict,
    status: Option<u16>,
    error: Option<TransportError>,
}

impl Outcome {
    /// The transport returned response headers after `elapsed`.
    #[must_use]
    pub fn completed(job: JobRef, elapsed: Duration, status: u16, threshold: Threshold) -> Self {
        Self {
            job,
            elapsed,
            verdict: threshold.classify(elapsed),
            status: Some(status),
            error: None,
        }
    }

    /// The transport gave up after `elapsed` without a response.
    #[must_use]
    pub const fn failed(job: JobRef, elapsed: Duration, error: TransportError) -> Self {
        Self {
            job,
            elapsed,
            verdict: Verdict::Error,
            status: None,
            error: Some(error),
        }
    }

    #[must_use]
    pub const fn job(&self) -> &JobRef {
        &self.job
    }

    #[must_use]
    pub const fn elapsed(&self) -> Duration {
        self.elapsed
    }

    #[must_use]
    pub const fn verdict(&self) -> Verdict {
        self.verdict
    }

    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        self.status
    }

    #[must_use]
    pub const fn error(&self) -> Option<&TransportError> {
        self.error.as_ref()
    }

    #[must_use]
    pub fn is_pass(&self) -> bool {
        self.verdict == Verdict::Pass
    }
}
