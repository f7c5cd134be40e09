// Worker - producer, consumer, and sequential loop drivers

mod consumer;
mod producer;
mod sequential;
mod shutdown; // Public via re-export for the orchestrator and callers

pub use consumer::ConsumerLoop;
pub use producer::ProducerLoop;
pub use sequential::SequentialLoop;
pub use shutdown::{shutdown_channel, ShutdownSender, ShutdownToken};

/// Counters returned by a loop once it observed the stop signal
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoopSummary {
    /// Completed iterations (each ends with a pause)
    pub iterations: u64,
    /// Generator or processor invocations that touched the queue
    pub actions: u64,
}
