// Port Layer - Interfaces for external dependencies

pub mod id_provider; // Sequence allocator
pub mod random_source;
pub mod request_queue;
pub mod sleeper;
pub mod time_provider;

// Re-exports
pub use id_provider::{IdProvider, SequentialIdProvider};
pub use random_source::RandomSource;
pub use request_queue::RequestQueue;
pub use sleeper::{Sleeper, TokioSleeper};
pub use time_provider::{SystemTimeProvider, TimeProvider};
