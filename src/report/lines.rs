use std::io::Write;

use tracing::warn;

use crate::domain::{Outcome, Verdict};

use super::OutcomeSink;

#[must_use]
pub fn format_outcome_line(outcome: &Outcome) -> String {
    let url = &outcome.job().url;
    let elapsed = outcome.elapsed();
    match outcome.verdict() {
        Verdict::Pass => format!("Request to {} completed in {:?}", url, elapsed),
        Verdict::Fail => format!("Request to {} took too long ({:?})", url, elapsed),
        Verdict::Error => match outcome.error() {
            Some(err) => format!("Error: request to {} failed after {:?}: {}", url, elapsed, err),
            None => format!("Error: request to {} failed after {:?}", url, elapsed),
        },
    }
}

/// Writes one line per outcome and flushes immediately.
pub struct LineReporter<W> {
    writer: W,
}

impl<W: Write> LineReporter<W> {
    #[must_use]
    pub const fn new(writer: W) -> Self {
        Self { writer }
    }

    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send> OutcomeSink for LineReporter<W> {
    fn record(&mut self, outcome: &Outcome) {
        let line = format_outcome_line(outcome);
        let written = writeln!(self.writer, "{}", line).and_then(|()| self.writer.flush());
        if let Err(err) = written {
            warn!("Failed to write outcome line: {}", err);
        }
    }
}
