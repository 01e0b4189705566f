//! Concurrent dispatch and evaluation engine.
//!
//! Jobs flow from the dispatcher through a bounded queue to a fixed pool of
//! workers; each worker times one call at a time and hands the outcome to
//! the aggregator, which reports it and applies the failure policy.
mod aggregator;
mod dispatcher;
mod queue;
mod settings;
mod worker;


use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::Instant;
use tracing::{debug, error, info, warn};

use crate::domain::{Job, Outcome};
use crate::http::Transport;
use crate::report::OutcomeSink;
use crate::shutdown::ShutdownSender;

use aggregator::Aggregator;
use dispatcher::spawn_dispatcher;
use queue::JobQueue;
use worker::spawn_workers;

pub use settings::{FailurePolicy, ProbeSettings};

/// Outcome buffer between the workers and the aggregator.
const OUTCOME_CHANNEL_CAPACITY: usize = 256;
/// Upper bound on jobs buffered between the dispatcher and the workers.
const MAX_JOB_QUEUE_CAPACITY: usize = 1024;

/// Everything the engine observed during one run.
#[derive(Debug, Clone)]
pub struct RunReport {
    outcomes: Vec<Outcome>,
    skipped: usize,
    wall_time: Duration,
    interrupted: bool,
}

impl RunReport {
    #[must_use]
    pub const fn new(
        outcomes: Vec<Outcome>,
        skipped: usize,
        wall_time: Duration,
        interrupted: bool,
    ) -> Self {
        Self {
            outcomes,
            skipped,
            wall_time,
            interrupted,
        }
    }

    /// Outcomes in the order they were reported.
    #[must_use]
    pub fn outcomes(&self) -> &[Outcome] {
        &self.outcomes
    }

    /// Jobs that never ran because the run was stopped early.
    #[must_use]
    pub const fn skipped(&self) -> usize {
        self.skipped
    }

    #[must_use]
    pub const fn wall_time(&self) -> Duration {
        self.wall_time
    }

    /// True when fail-fast or a signal stopped the run.
    #[must_use]
    pub const fn interrupted(&self) -> bool {
        self.interrupted
    }
}

/// Runs every job through the worker pool and reports each outcome to
/// `sink` as soon as it arrives.
///
/// Raising `shutdown_tx` (or a fail-fast trigger) stops new jobs from being
/// pulled; calls already in flight still complete and are reported.
#[must_use]
pub async fn run_probe(
    jobs: Vec<Job>,
    transport: &Arc<dyn Transport>,
    settings: &ProbeSettings,
    sink: &mut dyn OutcomeSink,
    shutdown_tx: &ShutdownSender,
) -> RunReport {
    let started = Instant::now();
    let total = jobs.len();
    let workers = pool_size(settings.workers.get(), total);
    if workers < settings.workers.get() {
        debug!(
            "Using {} worker(s) instead of {} for {} call(s).",
            workers,
            settings.workers.get(),
            total
        );
    }
    info!(
        "Probing {} call(s) with {} worker(s), threshold {:?}, policy {}.",
        total,
        workers,
        settings.threshold.get(),
        settings.policy.as_str()
    );

    let (job_tx, job_rx) = mpsc::channel::<Job>(job_queue_capacity(workers));
    let queue = JobQueue::new(job_rx);
    let (outcome_tx, outcome_rx) = mpsc::channel::<Outcome>(OUTCOME_CHANNEL_CAPACITY);

    let worker_handles = spawn_workers(
        workers,
        &queue,
        transport,
        settings.threshold,
        &outcome_tx,
        shutdown_tx,
    );
    drop(outcome_tx);
    let dispatcher = spawn_dispatcher(jobs, job_tx, shutdown_tx.subscribe());

    let outcomes = Aggregator::new(settings.policy, shutdown_tx)
        .collect(outcome_rx, sink)
        .await;

    for handle in worker_handles {
        match handle.await {
            Ok(stats) => debug!(
                "Worker {} finished after {} call(s).",
                stats.id, stats.processed
            ),
            Err(err) => error!("Worker task failed: {}", err),
        }
    }
    match dispatcher.await {
        Ok(stats) if stats.undispatched > 0 => warn!(
            "Stopped dispatching after {} of {} call(s).",
            stats.dispatched, total
        ),
        Ok(_) => {}
        Err(err) => error!("Dispatcher task failed: {}", err),
    }
    let abandoned = queue.close_and_count().await;
    if abandoned > 0 {
        debug!("{} queued call(s) were never picked up.", abandoned);
    }

    let skipped = total.saturating_sub(outcomes.len());
    RunReport::new(
        outcomes,
        skipped,
        started.elapsed(),
        *shutdown_tx.borrow(),
    )
}

/// Never more workers than jobs, and at least one so an empty run still
/// closes cleanly.
fn pool_size(configured: usize, total: usize) -> usize {
    configured.min(total.max(1))
}

fn job_queue_capacity(workers: usize) -> usize {
    workers.saturating_mul(2).clamp(1, MAX_JOB_QUEUE_CAPACITY)
}
