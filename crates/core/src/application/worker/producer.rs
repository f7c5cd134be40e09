// Producer Loop

use super::{LoopSummary, ShutdownToken};
use crate::application::generator::RequestGenerator;
use crate::domain::{BatchDistribution, PauseRange};
use crate::port::{RandomSource, Sleeper};
use std::sync::Arc;
use tracing::{debug, info};

/// Generates a random-sized batch of requests, then pauses, until stopped
///
/// Random draws per iteration: batch size, the generator's draws for each
/// request in the batch, then the pause.
pub struct ProducerLoop {
    generator: Arc<RequestGenerator>,
    random: Arc<dyn RandomSource>,
    sleeper: Arc<dyn Sleeper>,
    batch_weights: BatchDistribution,
    pause: PauseRange,
}

impl ProducerLoop {
    pub fn new(
        generator: Arc<RequestGenerator>,
        random: Arc<dyn RandomSource>,
        sleeper: Arc<dyn Sleeper>,
        batch_weights: BatchDistribution,
        pause: PauseRange,
    ) -> Self {
        Self {
            generator,
            random,
            sleeper,
            batch_weights,
            pause,
        }
    }

    /// Run until the stop signal is observed at the top of an iteration
    pub async fn run(self, shutdown: ShutdownToken) -> LoopSummary {
        info!("Producer loop started");
        let mut summary = LoopSummary::default();

        while !shutdown.is_shutdown() {
            let batch = self.batch_weights.sample(self.random.next_unit());
            debug!(batch, "Producer batch sampled");
            for _ in 0..batch {
                self.generator.generate();
                summary.actions += 1;
            }

            let pause = self.pause.sample(self.random.next_unit());
            debug!(pause_ms = pause.as_millis() as u64, "Producer pausing");
            self.sleeper.sleep(pause).await;
            summary.iterations += 1;
        }

        info!(
            iterations = summary.iterations,
            generated = summary.actions,
            "Producer loop stopped"
        );
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::worker::shutdown_channel;
    use crate::port::id_provider::SequentialIdProvider;
    use crate::port::random_source::mocks::ScriptedRandomSource;
    use crate::port::request_queue::mocks::RecordingQueue;
    use crate::port::sleeper::mocks::RecordingSleeper;
    use crate::port::time_provider::mocks::FixedTimeProvider;
    use crate::port::{RequestQueue, Sleeper};
    use async_trait::async_trait;
    use std::time::Duration;

    fn pause() -> PauseRange {
        PauseRange::new(Duration::from_millis(200), Duration::from_millis(800))
    }

    fn generator(queue: Arc<RecordingQueue>, random: Arc<ScriptedRandomSource>) -> Arc<RequestGenerator> {
        Arc::new(RequestGenerator::new(
            queue,
            Arc::new(SequentialIdProvider::new()),
            Arc::new(FixedTimeProvider::new(0)),
            random,
        ))
    }

    /// Sleeper that trips the stop signal after `limit` pauses
    struct StopAfter {
        inner: RecordingSleeper,
        limit: usize,
        stop: crate::application::worker::ShutdownSender,
    }

    #[async_trait]
    impl Sleeper for StopAfter {
        async fn sleep(&self, duration: Duration) {
            self.inner.sleep(duration).await;
            if self.inner.call_count() >= self.limit {
                self.stop.shutdown();
            }
        }
    }

    #[tokio::test]
    async fn test_stopped_before_start_does_nothing() {
        let queue = Arc::new(RecordingQueue::new());
        let random = Arc::new(ScriptedRandomSource::constant(0.5));
        let sleeper = Arc::new(RecordingSleeper::new());
        let (tx, token) = shutdown_channel();
        tx.shutdown();

        let producer = ProducerLoop::new(
            generator(queue.clone(), random.clone()),
            random.clone(),
            sleeper.clone(),
            BatchDistribution::default(),
            pause(),
        );
        let summary = producer.run(token).await;

        assert_eq!(summary, LoopSummary::default());
        assert_eq!(queue.len(), 0);
        assert_eq!(random.draws(), 0);
        assert_eq!(sleeper.call_count(), 0);
    }

    #[tokio::test]
    async fn test_batches_follow_distribution() {
        let queue = Arc::new(RecordingQueue::new());
        // iteration 1: batch 0.5 -> 1, labels 0.0/0.0, pause 0.0
        // iteration 2: batch 0.9 -> 2, labels x4, pause 1.0
        // iteration 3: batch 0.1 -> 0, pause 0.5
        let random = Arc::new(ScriptedRandomSource::new(vec![
            0.5, 0.0, 0.0, 0.0, //
            0.9, 0.0, 0.0, 0.0, 0.0, 1.0, //
            0.1, 0.5,
        ]));
        let (tx, token) = shutdown_channel();
        let sleeper = Arc::new(StopAfter {
            inner: RecordingSleeper::new(),
            limit: 3,
            stop: tx,
        });

        let producer = ProducerLoop::new(
            generator(queue.clone(), random.clone()),
            random.clone(),
            sleeper.clone(),
            BatchDistribution::default(),
            pause(),
        );
        let summary = producer.run(token).await;

        assert_eq!(summary.iterations, 3);
        assert_eq!(summary.actions, 3);
        assert_eq!(queue.pushed(), vec![1, 2, 3]);
        assert_eq!(random.draws(), 12);
        assert_eq!(
            sleeper.inner.calls(),
            vec![
                Duration::from_millis(200),
                Duration::from_millis(800),
                Duration::from_millis(500)
            ]
        );
    }
}
