// ID Provider Port (sequence allocator, injected for deterministic testing)

use crate::domain::RequestId;
use std::sync::atomic::{AtomicU64, Ordering};

/// ID provider interface
pub trait IdProvider: Send + Sync {
    /// Allocate the next request ID (strictly increasing, never reused)
    fn next_id(&self) -> RequestId;

    /// How many IDs have been handed out so far
    fn issued(&self) -> u64;
}

/// Sequential provider starting at 1 (production)
///
/// Owned by the orchestrator and shared with the generator, so every
/// simulation run (and every test) gets its own sequence.
#[derive(Debug)]
pub struct SequentialIdProvider {
    next: AtomicU64,
}

impl SequentialIdProvider {
    pub const FIRST_ID: RequestId = 1;

    pub fn new() -> Self {
        Self {
            next: AtomicU64::new(Self::FIRST_ID),
        }
    }
}

impl Default for SequentialIdProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl IdProvider for SequentialIdProvider {
    fn next_id(&self) -> RequestId {
        self.next.fetch_add(1, Ordering::SeqCst)
    }

    fn issued(&self) -> u64 {
        self.next.load(Ordering::SeqCst) - Self::FIRST_ID
    }
}
