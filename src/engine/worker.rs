use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::{debug, warn};

use crate::domain::{Job, Outcome, Threshold};
use crate::http::Transport;
use crate::shutdown::{ShutdownReceiver, ShutdownSender, is_shutdown, wait_for_shutdown};

use super::queue::JobQueue;

#[derive(Debug, Clone, Copy)]
pub(super) struct WorkerStats {
    pub(super) id: usize,
    pub(super) processed: usize,
}

struct Worker {
    id: usize,
    queue: JobQueue,
    transport: Arc<dyn Transport>,
    threshold: Threshold,
    outcome_tx: mpsc::Sender<Outcome>,
    shutdown_rx: ShutdownReceiver,
}

impl Worker {
    async fn run(mut self) -> WorkerStats {
        let mut processed = 0usize;
        loop {
            if is_shutdown(&self.shutdown_rx) {
                break;
            }
            let next = tokio::select! {
                biased;
                () = wait_for_shutdown(&mut self.shutdown_rx) => break,
                job = self.queue.next() => job,
            };
            let Some(job) = next else {
                break;
            };

            let outcome = execute_job(self.transport.as_ref(), job, self.threshold).await;
            processed = processed.saturating_add(1);
            if self.outcome_tx.send(outcome).await.is_err() {
                break;
            }
        }

        WorkerStats {
            id: self.id,
            processed,
        }
    }
}

/// Spawns the pool. Workers start idle and block on the queue.
pub(super) fn spawn_workers(
    count: usize,
    queue: &JobQueue,
    transport: &Arc<dyn Transport>,
    threshold: Threshold,
    outcome_tx: &mpsc::Sender<Outcome>,
    shutdown_tx: &ShutdownSender,
) -> Vec<JoinHandle<WorkerStats>> {
    let mut handles = Vec::with_capacity(count);
    for id in 0..count {
        let worker = Worker {
            id,
            queue: queue.clone(),
            transport: Arc::clone(transport),
            threshold,
            outcome_tx: outcome_tx.clone(),
            shutdown_rx: shutdown_tx.subscribe(),
        };
        handles.push(tokio::spawn(worker.run()));
    }
    handles
}

/// Times one call from dispatch to response headers, classifies it, then
/// drains the body so the connection can be reused, whatever the verdict.
pub(super) async fn execute_job(
    transport: &dyn Transport,
    job: Job,
    threshold: Threshold,
) -> Outcome {
    let reference = job.reference();
    debug!("Sending {} {}", reference.method, reference.url);

    let start = Instant::now();
    let result = transport.execute(&job).await;
    let elapsed = start.elapsed();
    drop(job);

    match result {
        Ok(response) => {
            let outcome = Outcome::completed(reference, elapsed, response.status(), threshold);
            if let Err(err) = response.drain().await {
                warn!(
                    "Failed to read response body from {}: {}",
                    outcome.job().url,
                    err
                );
            }
            outcome
        }
        Err(err) => {
            debug!("{} {} failed: {}", reference.method, reference.url, err);
            Outcome::failed(reference, elapsed, err)
        }
    }
}
