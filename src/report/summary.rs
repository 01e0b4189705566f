use std::time::Duration;

use crate::domain::Verdict;
use crate::engine::{ProbeSettings, RunReport};

/// Counts derived from a finished run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunSummary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub errors: usize,
    pub skipped: usize,
    pub slowest: Option<Duration>,
    pub wall_time: Duration,
}

impl RunSummary {
    #[must_use]
    pub fn from_report(report: &RunReport) -> Self {
        let mut summary = Self {
            skipped: report.skipped(),
            wall_time: report.wall_time(),
            ..Self::default()
        };
        for outcome in report.outcomes() {
            match outcome.verdict() {
                Verdict::Pass => summary.passed = summary.passed.saturating_add(1),
                Verdict::Fail => summary.failed = summary.failed.saturating_add(1),
                Verdict::Error => summary.errors = summary.errors.saturating_add(1),
            }
            if outcome.verdict() != Verdict::Error {
                summary.slowest = summary.slowest.max(Some(outcome.elapsed()));
            }
        }
        summary.total = report.outcomes().len().saturating_add(summary.skipped);
        summary
    }

    /// Every scheduled call ran and passed. Vacuously true for zero calls.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.failed == 0 && self.errors == 0 && self.skipped == 0
    }
}

#[must_use]
pub fn summary_lines(summary: &RunSummary, settings: &ProbeSettings) -> Vec<String> {
    let mut lines = vec![
        format!("Calls: {}", summary.total),
        format!("Passed: {}", summary.passed),
        format!("Too slow: {}", summary.failed),
        format!("Errors: {}", summary.errors),
    ];
    if summary.skipped > 0 {
        lines.push(format!("Skipped: {}", summary.skipped));
    }
    if let Some(slowest) = summary.slowest {
        lines.push(format!("Slowest response: {:?}", slowest));
    }
    lines.push(format!(
        "Threshold: {:?} | Workers: {} | Timeout: {:?} | Policy: {}",
        settings.threshold.get(),
        settings.workers,
        settings.timeout,
        settings.policy.as_str()
    ));
    lines.push(format!("Run time: {:?}", summary.wall_time));
    if summary.is_success() {
        lines.push("Test passed.".to_owned());
    } else {
        lines.push(format!(
            "Test failed: {} call(s) over {:?}, {} errored, {} skipped.",
            summary.failed,
            settings.threshold.get(),
            summary.errors,
            summary.skipped
        ));
    }
    lines
}
