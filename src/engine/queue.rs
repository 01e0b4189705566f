use std::sync::Arc;

use tokio::sync::{Mutex, mpsc};

use crate::domain::Job;

/// Shared end of the distribution channel. Each job is received by exactly
/// one worker.
#[derive(Clone)]
pub(super) struct JobQueue {
    receiver: Arc<Mutex<mpsc::Receiver<Job>>>,
}

impl JobQueue {
    pub(super) fn new(receiver: mpsc::Receiver<Job>) -> Self {
        Self {
            receiver: Arc::new(Mutex::new(receiver)),
        }
    }

    /// Next job, or `None` once the dispatcher closed the channel and it
    /// has been drained.
    pub(super) async fn next(&self) -> Option<Job> {
        let mut receiver = self.receiver.lock().await;
        receiver.recv().await
    }

    /// Closes the channel and drops whatever is still buffered.
    pub(super) async fn close_and_count(&self) -> usize {
        let mut receiver = self.receiver.lock().await;
        receiver.close();
        let mut remaining = 0usize;
        while receiver.try_recv().is_ok() {
            remaining = remaining.saturating_add(1);
        }
        remaining
    }
}
