use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::domain::Job;
use crate::shutdown::{ShutdownReceiver, wait_for_shutdown};

#[derive(Debug, Clone, Copy)]
pub(super) struct DispatchStats {
    pub(super) dispatched: usize,
    pub(super) undispatched: usize,
}

/// Pushes jobs in source order, then closes the channel by dropping the
/// sender. Stops early when shutdown is raised.
pub(super) fn spawn_dispatcher(
    jobs: Vec<Job>,
    job_tx: mpsc::Sender<Job>,
    mut shutdown_rx: ShutdownReceiver,
) -> JoinHandle<DispatchStats> {
    tokio::spawn(async move {
        let total = jobs.len();
        let mut dispatched = 0usize;
        for job in jobs {
            let sent = tokio::select! {
                biased;
                () = wait_for_shutdown(&mut shutdown_rx) => false,
                result = job_tx.send(job) => result.is_ok(),
            };
            if !sent {
                break;
            }
            dispatched = dispatched.saturating_add(1);
        }
        drop(job_tx);
        debug!("Dispatcher closed the queue after {} call(s).", dispatched);

        DispatchStats {
            dispatched,
            undispatched: total.saturating_sub(dispatched),
        }
    })
}
