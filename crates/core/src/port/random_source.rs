// Random Source Port (injected so tests can script every draw)

/// Source of uniform samples
///
/// Every random decision in the simulation (batch size, labels, pauses,
/// processing time) is derived from one `next_unit` draw.
pub trait RandomSource: Send + Sync {
    /// Uniform sample in [0, 1)
    fn next_unit(&self) -> f64;
}

// ============================================================================
// Mock Implementations for Testing
// ============================================================================

pub mod mocks {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Replays a fixed list of samples, wrapping around at the end
    pub struct ScriptedRandomSource {
        values: Vec<f64>,
        cursor: AtomicUsize,
    }

    impl ScriptedRandomSource {
        pub fn new(values: Vec<f64>) -> Self {
            assert!(!values.is_empty(), "scripted source needs at least one value");
            Self {
                values,
                cursor: AtomicUsize::new(0),
            }
        }
        /// Always returns `value`
        pub fn constant(value: f64) -> Self {
            Self::new(vec![value])
        }
        /// Number of samples drawn so far
        pub fn draws(&self) -> usize {
            self.cursor.load(Ordering::SeqCst)
        }
    }

    impl RandomSource for ScriptedRandomSource {
        fn next_unit(&self) -> f64 {
            let i = self.cursor.fetch_add(1, Ordering::SeqCst);
            self.values[i % self.values.len()]
        }
    }
}
