use std::time::Duration;

use serde::Serialize;

use crate::args::{DEFAULT_TIMEOUT, PositiveUsize};
use crate::domain::Threshold;

/// What happens after the first failing call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FailurePolicy {
    /// Run every call, report, then fail the process if anything failed.
    #[default]
    FailSoft,
    /// Stop pulling new calls, drain the in-flight ones, then fail.
    FailFast,
}

impl FailurePolicy {
    #[must_use]
    pub const fn from_flag(fail_fast: bool) -> Self {
        if fail_fast {
            FailurePolicy::FailFast
        } else {
            FailurePolicy::FailSoft
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            FailurePolicy::FailSoft => "fail-soft",
            FailurePolicy::FailFast => "fail-fast",
        }
    }
}

/// Effective run settings after CLI, config and defaults are merged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProbeSettings {
    pub workers: PositiveUsize,
    pub threshold: Threshold,
    pub timeout: Duration,
    pub policy: FailurePolicy,
}

impl Default for ProbeSettings {
    fn default() -> Self {
        Self {
            workers: PositiveUsize::try_from(crate::args::DEFAULT_WORKERS)
                .unwrap_or(PositiveUsize::MIN),
            threshold: Threshold::default(),
            timeout: DEFAULT_TIMEOUT,
            policy: FailurePolicy::FailSoft,
        }
    }
}
