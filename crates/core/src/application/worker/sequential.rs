// Sequential Loop (single execution unit, no concurrency)

use super::{LoopSummary, ShutdownToken};
use crate::application::generator::RequestGenerator;
use crate::application::processor::{ProcessOutcome, RequestProcessor};
use crate::port::Sleeper;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

/// Alternates one generate, one process, and a fixed pause until stopped
pub struct SequentialLoop {
    generator: Arc<RequestGenerator>,
    processor: Arc<RequestProcessor>,
    sleeper: Arc<dyn Sleeper>,
    pause: Duration,
}

impl SequentialLoop {
    pub fn new(
        generator: Arc<RequestGenerator>,
        processor: Arc<RequestProcessor>,
        sleeper: Arc<dyn Sleeper>,
        pause: Duration,
    ) -> Self {
        Self {
            generator,
            processor,
            sleeper,
            pause,
        }
    }

    /// Run until the stop signal is observed at the top of a cycle
    pub async fn run(self, shutdown: ShutdownToken) -> LoopSummary {
        info!("Sequential loop started");
        let mut summary = LoopSummary::default();

        while !shutdown.is_shutdown() {
            self.generator.generate();
            summary.actions += 1;
            if let ProcessOutcome::Processed(_) = self.processor.process_next().await {
                summary.actions += 1;
            }

            debug!(pause_ms = self.pause.as_millis() as u64, "Sequential cycle pausing");
            self.sleeper.sleep(self.pause).await;
            summary.iterations += 1;
        }

        info!(
            cycles = summary.iterations,
            actions = summary.actions,
            "Sequential loop stopped"
        );
        summary
    }
}
