//! Shared wiring for the end-to-end tests

use std::sync::Arc;
use std::time::Duration;

use queuesim_core::application::Orchestrator;
use queuesim_core::domain::{PauseRange, SimulationConfig, SimulationMode};
use queuesim_core::port::{RandomSource, SequentialIdProvider, SystemTimeProvider, TokioSleeper};
use queuesim_infra_memory::InMemoryRequestQueue;

/// Default shape with millisecond-scale intervals
pub fn fast_config(mode: SimulationMode) -> SimulationConfig {
    SimulationConfig {
        mode,
        producer_pause: PauseRange::new(Duration::from_millis(2), Duration::from_millis(8)),
        consumer_pause: PauseRange::new(Duration::from_millis(2), Duration::from_millis(5)),
        processing_time: PauseRange::new(Duration::from_millis(3), Duration::from_millis(10)),
        sequential_pause: Duration::from_millis(5),
        shutdown_timeout: Duration::from_secs(2),
        ..Default::default()
    }
}

/// Orchestrator over real adapters, sharing `queue` with the caller
pub fn orchestrator(
    config: SimulationConfig,
    queue: Arc<InMemoryRequestQueue>,
    random: Arc<dyn RandomSource>,
) -> Orchestrator {
    Orchestrator::new(
        config,
        queue,
        Arc::new(SequentialIdProvider::new()),
        Arc::new(SystemTimeProvider),
        random,
        Arc::new(TokioSleeper),
    )
    .expect("valid config")
}
