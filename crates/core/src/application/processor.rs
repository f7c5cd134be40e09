// Request Processor - dequeues at most one request and simulates work

use crate::domain::{PauseRange, RequestId};
use crate::port::{RandomSource, RequestQueue, Sleeper};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::info;

/// Outcome of one processor invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessOutcome {
    /// Queue was empty; nothing changed
    Empty,
    /// Request was removed and its simulated work finished
    Processed(RequestId),
}

/// Request Processor
///
/// Random draws per call: one for the processing time, only when a
/// request was dequeued.
pub struct RequestProcessor {
    queue: Arc<dyn RequestQueue>,
    random: Arc<dyn RandomSource>,
    sleeper: Arc<dyn Sleeper>,
    processing_time: PauseRange,
    dequeued: AtomicU64,
    completed: AtomicU64,
}

impl RequestProcessor {
    pub fn new(
        queue: Arc<dyn RequestQueue>,
        random: Arc<dyn RandomSource>,
        sleeper: Arc<dyn Sleeper>,
        processing_time: PauseRange,
    ) -> Self {
        Self {
            queue,
            random,
            sleeper,
            processing_time,
            dequeued: AtomicU64::new(0),
            completed: AtomicU64::new(0),
        }
    }

    /// Process the head request, if any
    pub async fn process_next(&self) -> ProcessOutcome {
        let request = match self.queue.pop() {
            Some(r) => r,
            None => {
                info!("The queue is empty - there is nothing to process.");
                return ProcessOutcome::Empty;
            }
        };
        self.dequeued.fetch_add(1, Ordering::SeqCst);

        info!(request_id = request.id(), "Processing started: {}", request);

        let work = self.processing_time.sample(self.random.next_unit());
        self.sleeper.sleep(work).await;

        self.completed.fetch_add(1, Ordering::SeqCst);
        info!(
            request_id = request.id(),
            work_ms = work.as_millis() as u64,
            "Processing completed: Request(id={})",
            request.id()
        );
        ProcessOutcome::Processed(request.id())
    }

    /// Requests removed from the queue so far
    pub fn dequeued(&self) -> u64 {
        self.dequeued.load(Ordering::SeqCst)
    }

    /// Requests whose simulated work finished
    pub fn completed(&self) -> u64 {
        self.completed.load(Ordering::SeqCst)
    }
}
