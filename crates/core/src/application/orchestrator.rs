//! Orchestrator - wires the loops together and owns the stop signal
//!
//! - Concurrent mode: producer and consumer run as two tokio tasks
//! - Sequential mode: one loop on the calling task, no concurrency
//!
//! Both modes stop cooperatively: the stop signal is set once the interrupt
//! future resolves (or the stop handle is used), and each loop is given
//! `shutdown_timeout` to notice it at its next iteration boundary.

use crate::application::generator::RequestGenerator;
use crate::application::processor::RequestProcessor;
use crate::application::worker::{
    shutdown_channel, ConsumerLoop, LoopSummary, ProducerLoop, SequentialLoop, ShutdownSender,
    ShutdownToken,
};
use crate::domain::{SimulationConfig, SimulationMode, SimulationReport};
use crate::error::Result;
use crate::port::{IdProvider, RandomSource, RequestQueue, Sleeper, TimeProvider};
use std::future::Future;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{error, info, warn};

/// Orchestrator for one simulation run
pub struct Orchestrator {
    config: SimulationConfig,
    queue: Arc<dyn RequestQueue>,
    id_provider: Arc<dyn IdProvider>,
    random: Arc<dyn RandomSource>,
    sleeper: Arc<dyn Sleeper>,
    generator: Arc<RequestGenerator>,
    processor: Arc<RequestProcessor>,
    shutdown_tx: ShutdownSender,
    shutdown_rx: ShutdownToken,
}

impl Orchestrator {
    /// Create an orchestrator; rejects invalid intervals or batch weights
    pub fn new(
        config: SimulationConfig,
        queue: Arc<dyn RequestQueue>,
        id_provider: Arc<dyn IdProvider>,
        time_provider: Arc<dyn TimeProvider>,
        random: Arc<dyn RandomSource>,
        sleeper: Arc<dyn Sleeper>,
    ) -> Result<Self> {
        config.validate()?;

        let generator = Arc::new(RequestGenerator::new(
            Arc::clone(&queue),
            Arc::clone(&id_provider),
            time_provider,
            Arc::clone(&random),
        ));
        let processor = Arc::new(RequestProcessor::new(
            Arc::clone(&queue),
            Arc::clone(&random),
            Arc::clone(&sleeper),
            config.processing_time,
        ));
        let (shutdown_tx, shutdown_rx) = shutdown_channel();

        Ok(Self {
            config,
            queue,
            id_provider,
            random,
            sleeper,
            generator,
            processor,
            shutdown_tx,
            shutdown_rx,
        })
    }

    /// Cloneable handle that sets the stop signal
    pub fn stop_handle(&self) -> ShutdownSender {
        self.shutdown_tx.clone()
    }

    /// Run until `interrupt` resolves (or the stop handle fires), then report
    pub async fn run<F>(&self, interrupt: F) -> SimulationReport
    where
        F: Future<Output = ()>,
    {
        info!(mode = %self.config.mode, "Start simulation");

        let unjoined = match self.config.mode {
            SimulationMode::Concurrent => self.run_concurrent(interrupt).await,
            SimulationMode::Sequential => self.run_sequential(interrupt).await,
        };

        let report = self.report(unjoined);
        if report.remaining > 0 {
            info!(remaining = report.remaining, "Remaining in the queue: {}", report.remaining);
        }
        info!(
            generated = report.generated,
            dequeued = report.dequeued,
            completed = report.completed,
            unjoined_loops = report.unjoined_loops,
            "Done"
        );
        report
    }

    async fn run_concurrent<F>(&self, interrupt: F) -> usize
    where
        F: Future<Output = ()>,
    {
        let producer = ProducerLoop::new(
            Arc::clone(&self.generator),
            Arc::clone(&self.random),
            Arc::clone(&self.sleeper),
            self.config.batch_weights.clone(),
            self.config.producer_pause,
        );
        let consumer = ConsumerLoop::new(
            Arc::clone(&self.processor),
            Arc::clone(&self.random),
            Arc::clone(&self.sleeper),
            self.config.consumer_pause,
        );

        let producer_handle = tokio::spawn(producer.run(self.shutdown_rx.clone()));
        let consumer_handle = tokio::spawn(consumer.run(self.shutdown_rx.clone()));

        self.wait_for_stop(interrupt).await;

        let mut unjoined = 0;
        for (name, handle) in [("producer", producer_handle), ("consumer", consumer_handle)] {
            if self.join_loop(name, handle).await.is_none() {
                unjoined += 1;
            }
        }
        unjoined
    }

    async fn run_sequential<F>(&self, interrupt: F) -> usize
    where
        F: Future<Output = ()>,
    {
        let sequential = SequentialLoop::new(
            Arc::clone(&self.generator),
            Arc::clone(&self.processor),
            Arc::clone(&self.sleeper),
            self.config.sequential_pause,
        )
        .run(self.shutdown_rx.clone());
        tokio::pin!(sequential);

        // Drive the loop on this task; the interrupt only flips the signal
        let finished = tokio::select! {
            summary = &mut sequential => Some(summary),
            _ = self.wait_for_stop(interrupt) => None,
        };

        let summary = match finished {
            Some(summary) => {
                // Stop handle fired while the loop was between cycles
                self.shutdown_tx.shutdown();
                Some(summary)
            }
            None => tokio::time::timeout(self.config.shutdown_timeout, &mut sequential)
                .await
                .ok(),
        };

        match summary {
            Some(summary) => {
                info!(cycles = summary.iterations, "Sequential loop joined");
                0
            }
            None => {
                warn!(
                    timeout_ms = self.config.shutdown_timeout.as_millis() as u64,
                    "Sequential loop did not stop within shutdown timeout"
                );
                1
            }
        }
    }

    /// Idle until the interrupt resolves or someone sets the stop signal
    async fn wait_for_stop<F>(&self, interrupt: F)
    where
        F: Future<Output = ()>,
    {
        let mut token = self.shutdown_rx.clone();
        tokio::select! {
            _ = interrupt => info!("Stop signal received, terminating..."),
            _ = token.wait() => info!("Stop requested, terminating..."),
        }
        self.shutdown_tx.shutdown();
    }

    /// Best-effort join bounded by the shutdown timeout
    ///
    /// A loop that misses the deadline is aborted so it cannot touch the
    /// queue after the report is taken.
    async fn join_loop(&self, name: &str, mut handle: JoinHandle<LoopSummary>) -> Option<LoopSummary> {
        match tokio::time::timeout(self.config.shutdown_timeout, &mut handle).await {
            Ok(Ok(summary)) => {
                info!(
                    loop_name = name,
                    iterations = summary.iterations,
                    actions = summary.actions,
                    "Loop joined"
                );
                Some(summary)
            }
            Ok(Err(join_err)) => {
                if join_err.is_panic() {
                    error!(loop_name = name, "Loop panicked: {:?}", join_err);
                } else {
                    error!(loop_name = name, "Loop cancelled: {:?}", join_err);
                }
                None
            }
            Err(_) => {
                warn!(
                    loop_name = name,
                    timeout_ms = self.config.shutdown_timeout.as_millis() as u64,
                    "Loop did not stop within shutdown timeout"
                );
                handle.abort();
                let _ = handle.await;
                None
            }
        }
    }

    fn report(&self, unjoined_loops: usize) -> SimulationReport {
        SimulationReport {
            mode: self.config.mode,
            generated: self.id_provider.issued(),
            dequeued: self.processor.dequeued(),
            completed: self.processor.completed(),
            remaining: self.queue.len(),
            unjoined_loops,
        }
    }
}
