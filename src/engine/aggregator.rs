use tokio::sync::mpsc;
use tracing::warn;

use crate::domain::Outcome;
use crate::report::OutcomeSink;
use crate::shutdown::{ShutdownSender, request_shutdown};

use super::FailurePolicy;

pub(super) struct Aggregator<'run> {
    policy: FailurePolicy,
    shutdown_tx: &'run ShutdownSender,
}

impl<'run> Aggregator<'run> {
    pub(super) const fn new(policy: FailurePolicy, shutdown_tx: &'run ShutdownSender) -> Self {
        Self {
            policy,
            shutdown_tx,
        }
    }

    /// Reports outcomes as they arrive until every worker has hung up.
    pub(super) async fn collect(
        &self,
        mut outcome_rx: mpsc::Receiver<Outcome>,
        sink: &mut dyn OutcomeSink,
    ) -> Vec<Outcome> {
        let mut outcomes = Vec::new();
        let mut stopping = false;
        while let Some(outcome) = outcome_rx.recv().await {
            sink.record(&outcome);
            if self.policy == FailurePolicy::FailFast && !stopping && !outcome.is_pass() {
                warn!(
                    "Fail-fast: {} did not pass, no further calls will be started.",
                    outcome.job().url
                );
                request_shutdown(self.shutdown_tx);
                stopping = true;
            }
            outcomes.push(outcome);
        }
        outcomes
    }
}
