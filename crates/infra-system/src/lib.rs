// Queuesim Infrastructure - System Adapters
// Implements: RandomSource

pub mod random_source;

pub use random_source::{SeededRandomSource, ThreadRandomSource};
