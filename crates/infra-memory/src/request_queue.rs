// In-memory FIFO request queue
use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::trace;

use queuesim_core::domain::Request;
use queuesim_core::port::RequestQueue;

/// Unbounded FIFO guarded by a single mutex
///
/// The lock is held only for the push/pop itself, never across an await.
#[derive(Default)]
pub struct InMemoryRequestQueue {
    inner: Mutex<VecDeque<Request>>,
}

impl InMemoryRequestQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// A panic while holding the lock cannot leave the deque half-updated,
    /// so a poisoned lock is still safe to use.
    fn lock(&self) -> MutexGuard<'_, VecDeque<Request>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl RequestQueue for InMemoryRequestQueue {
    fn push(&self, request: Request) {
        let mut queue = self.lock();
        let id = request.id();
        queue.push_back(request);
        trace!(request_id = id, len = queue.len(), "Enqueued");
    }

    fn pop(&self) -> Option<Request> {
        let mut queue = self.lock();
        let request = queue.pop_front()?;
        trace!(request_id = request.id(), len = queue.len(), "Dequeued");
        Some(request)
    }

    fn len(&self) -> usize {
        self.lock().len()
    }
}
