//! Owner-thread scheduling.
//!
//! Surface and label mutations must happen on the single thread that owns
//! them. The validation engine never touches them directly: it hands a job
//! to an [`OwnerScheduler`] and waits for it to run.
//!
//! [`channel`] creates a queue whose [`OwnerLoop`] half is driven by the
//! owner thread, either as a task (`run().await`), by polling between frames
//! (`run_pending()`), or as a dedicated thread (`run_blocking()`).

use log::{debug, trace};
use tokio::sync::mpsc;

use crate::error::ValidationError;

/// A unit of work that must execute on the owner thread.
pub type OwnerJob = Box<dyn FnOnce() + Send + 'static>;

/// Capability to run a job on the owner thread.
pub trait OwnerScheduler: Send + Sync {
    /// Schedule `job` to run on the owner thread.
    ///
    /// Returns [`ValidationError::OwnerGone`] if the owner no longer accepts
    /// work. Success only means the job was accepted; it may run later.
    fn run_on_owner(&self, job: OwnerJob) -> Result<(), ValidationError>;
}

/// Sender half of the owner queue.
#[derive(Clone, Debug)]
pub struct OwnerHandle {
    tx: mpsc::UnboundedSender<OwnerJob>,
}

impl OwnerScheduler for OwnerHandle {
    fn run_on_owner(&self, job: OwnerJob) -> Result<(), ValidationError> {
        trace!("queueing owner job");
        self.tx.send(job).map_err(|_| ValidationError::OwnerGone)
    }
}

/// Receiver half of the owner queue. Lives on the owner thread.
pub struct OwnerLoop {
    rx: mpsc::UnboundedReceiver<OwnerJob>,
}

impl OwnerLoop {
    /// Run jobs as they arrive until every [`OwnerHandle`] is dropped.
    pub async fn run(mut self) {
        while let Some(job) = self.rx.recv().await {
            job();
        }
        debug!("owner loop finished: all handles dropped");
    }

    /// Run every job that is already queued, without waiting.
    ///
    /// Returns the number of jobs executed. Meant for hosts that pump the
    /// queue once per frame.
    pub fn run_pending(&mut self) -> usize {
        let mut ran = 0;
        while let Ok(job) = self.rx.try_recv() {
            job();
            ran += 1;
        }
        ran
    }

    /// Block the current thread running jobs until every handle is dropped.
    ///
    /// Must not be called from inside an async runtime.
    pub fn run_blocking(mut self) {
        while let Some(job) = self.rx.blocking_recv() {
            job();
        }
        debug!("owner loop finished: all handles dropped");
    }

    /// Stop accepting new jobs. Jobs already queued can still be drained.
    pub fn close(&mut self) {
        self.rx.close();
    }
}

/// Create a new owner queue.
pub fn channel() -> (OwnerHandle, OwnerLoop) {
    let (tx, rx) = mpsc::unbounded_channel();
    (OwnerHandle { tx }, OwnerLoop { rx })
}

/// Runs every job immediately on the calling thread.
///
/// Only correct when all callers already run on the owner thread.
#[derive(Debug, Default, Clone, Copy)]
pub struct InlineScheduler;

impl OwnerScheduler for InlineScheduler {
    fn run_on_owner(&self, job: OwnerJob) -> Result<(), ValidationError> {
        job();
        Ok(())
    }
}
