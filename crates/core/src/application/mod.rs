// Application Layer - Simulation use cases

pub mod generator;
pub mod orchestrator;
pub mod processor;
pub mod worker;

// Re-exports
pub use generator::RequestGenerator;
pub use orchestrator::Orchestrator;
pub use processor::{ProcessOutcome, RequestProcessor};
pub use worker::{
    shutdown_channel, ConsumerLoop, LoopSummary, ProducerLoop, SequentialLoop, ShutdownSender,
    ShutdownToken,
};
