// Request Queue Port (Interface)

use crate::domain::Request;

/// Shared FIFO of pending requests
///
/// `push` and `pop` must be atomic with respect to each other: concurrent
/// callers never observe a request twice, lose one, or reorder them.
pub trait RequestQueue: Send + Sync {
    /// Append a request at the tail
    fn push(&self, request: Request);

    /// Remove the head request, if any (never blocks waiting for work)
    fn pop(&self) -> Option<Request>;

    /// Number of pending requests
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// ============================================================================
// Mock Implementations for Testing
// ============================================================================

pub mod mocks {
    use super::*;
    use crate::domain::RequestId;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    /// Queue mock that also records the id of every push and pop
    #[derive(Default)]
    pub struct RecordingQueue {
        inner: Mutex<VecDeque<Request>>,
        pushed: Mutex<Vec<RequestId>>,
        popped: Mutex<Vec<RequestId>>,
    }

    impl RecordingQueue {
        pub fn new() -> Self {
            Self::default()
        }
        pub fn pushed(&self) -> Vec<RequestId> {
            self.pushed.lock().unwrap().clone()
        }
        pub fn popped(&self) -> Vec<RequestId> {
            self.popped.lock().unwrap().clone()
        }
        pub fn pending_ids(&self) -> Vec<RequestId> {
            self.inner.lock().unwrap().iter().map(Request::id).collect()
        }
    }

    impl RequestQueue for RecordingQueue {
        fn push(&self, request: Request) {
            self.pushed.lock().unwrap().push(request.id());
            self.inner.lock().unwrap().push_back(request);
        }
        fn pop(&self) -> Option<Request> {
            let request = self.inner.lock().unwrap().pop_front()?;
            self.popped.lock().unwrap().push(request.id());
            Some(request)
        }
        fn len(&self) -> usize {
            self.inner.lock().unwrap().len()
        }
    }
}
