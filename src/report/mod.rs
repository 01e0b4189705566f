//! Per-outcome lines, the end-of-run summary and the JSON export.
mod export;
mod lines;
mod summary;


use crate::domain::Outcome;

pub use export::export_json;
pub use lines::{LineReporter, format_outcome_line};
pub use summary::{RunSummary, summary_lines};

/// Receives each outcome as soon as a worker produces it. Called from a
/// single task, so implementations never see concurrent writes.
pub trait OutcomeSink: Send {
    fn record(&mut self, outcome: &Outcome);
}

impl OutcomeSink for Vec<Outcome> {
    fn record(&mut self, outcome: &Outcome) {
        self.push(outcome.clone());
    }
}
