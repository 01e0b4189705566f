use std::time::Duration;

use tracing::warn;

use crate::args::parse_duration_arg;
use crate::error::ValidationError;

use super::Verdict;

/// Used whenever the configured threshold cannot be parsed.
pub const DEFAULT_THRESHOLD: Duration = Duration::from_secs(3);

/// Maximum acceptable response time. Always > 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Threshold(Duration);

impl Threshold {
    /// # Errors
    ///
    /// Returns `DurationZero` for a zero duration.
    pub fn new(value: Duration) -> Result<Self, ValidationError> {
        if value.is_zero() {
            return Err(ValidationError::DurationZero);
        }
        Ok(Self(value))
    }

    /// Parses `value` (`<n>[ms|s|m|h]`, bare numbers are seconds) and falls
    /// back to [`DEFAULT_THRESHOLD`] with a warning instead of failing.
    #[must_use]
    pub fn parse_or_default(value: &str) -> Self {
        match parse_duration_arg(value) {
            Ok(duration) => Self(duration),
            Err(err) => {
                warn!(
                    "Invalid threshold value '{}' ({}), using default threshold of {} seconds.",
                    value.trim(),
                    err,
                    DEFAULT_THRESHOLD.as_secs()
                );
                Self::default()
            }
        }
    }

    #[must_use]
    pub const fn get(self) -> Duration {
        self.0
    }

    #[must_use]
    pub fn classify(self, elapsed: Duration) -> Verdict {
        classify(elapsed, self)
    }
}

impl Default for Threshold {
    fn default() -> Self {
        Self(DEFAULT_THRESHOLD)
    }
}

/// `Fail` only when `elapsed` is strictly greater than the threshold.
#[must_use]
pub fn classify(elapsed: Duration, threshold: Threshold) -> Verdict {
    if elapsed > threshold.0 {
        Verdict::Fail
    } else {
        Verdict::Pass
    }
}
