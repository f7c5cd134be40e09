// Consumer Loop

use super::{LoopSummary, ShutdownToken};
use crate::application::processor::{ProcessOutcome, RequestProcessor};
use crate::domain::PauseRange;
use crate::port::{RandomSource, Sleeper};
use std::sync::Arc;
use tracing::{debug, info};

/// Invokes the processor once, then pauses, until stopped
pub struct ConsumerLoop {
    processor: Arc<RequestProcessor>,
    random: Arc<dyn RandomSource>,
    sleeper: Arc<dyn Sleeper>,
    pause: PauseRange,
}

impl ConsumerLoop {
    pub fn new(
        processor: Arc<RequestProcessor>,
        random: Arc<dyn RandomSource>,
        sleeper: Arc<dyn Sleeper>,
        pause: PauseRange,
    ) -> Self {
        Self {
            processor,
            random,
            sleeper,
            pause,
        }
    }

    /// Run until the stop signal is observed at the top of an iteration
    pub async fn run(self, shutdown: ShutdownToken) -> LoopSummary {
        info!("Consumer loop started");
        let mut summary = LoopSummary::default();

        while !shutdown.is_shutdown() {
            if let ProcessOutcome::Processed(_) = self.processor.process_next().await {
                summary.actions += 1;
            }

            let pause = self.pause.sample(self.random.next_unit());
            debug!(pause_ms = pause.as_millis() as u64, "Consumer pausing");
            self.sleeper.sleep(pause).await;
            summary.iterations += 1;
        }

        info!(
            iterations = summary.iterations,
            processed = summary.actions,
            "Consumer loop stopped"
        );
        summary
    }
}
