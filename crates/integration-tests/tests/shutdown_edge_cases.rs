//! Shutdown Edge Cases
//!
//! Stop-before-start, repeated stop signals, loops that outlive the join
//! timeout, and pauses that must finish before a loop exits.

use std::sync::Arc;
use std::time::{Duration, Instant};

use queuesim_core::application::Orchestrator;
use queuesim_core::domain::{BatchDistribution, PauseRange, SimulationConfig, SimulationMode};
use queuesim_infra_memory::InMemoryRequestQueue;
use queuesim_infra_system::SeededRandomSource;

fn seeded(config: SimulationConfig) -> Orchestrator {
    queuesim_integration_tests::orchestrator(
        config,
        Arc::new(InMemoryRequestQueue::new()),
        Arc::new(SeededRandomSource::new(99)),
    )
}

/// Edge Case 1: stop signal set before any iteration
#[tokio::test]
async fn test_stop_before_start() {
    for mode in [SimulationMode::Concurrent, SimulationMode::Sequential] {
        let orch = seeded(SimulationConfig {
            mode,
            ..Default::default()
        });
        assert!(orch.stop_handle().shutdown());

        let report = orch.run(std::future::pending()).await;

        assert_eq!(report.generated, 0, "{mode}: no generation expected");
        assert_eq!(report.dequeued, 0, "{mode}: no processing expected");
        assert_eq!(report.remaining, 0);
        assert_eq!(report.unjoined_loops, 0);
    }
}

/// Edge Case 2: signaling shutdown twice behaves like once
#[tokio::test]
async fn test_double_shutdown() {
    let orch = seeded(SimulationConfig {
        producer_pause: PauseRange::fixed(Duration::from_millis(2)),
        consumer_pause: PauseRange::fixed(Duration::from_millis(2)),
        processing_time: PauseRange::fixed(Duration::from_millis(2)),
        ..Default::default()
    });
    let stop = orch.stop_handle();

    let trigger = async {
        tokio::time::sleep(Duration::from_millis(50)).await;
        let first = stop.shutdown();
        let second = stop.shutdown();
        (first, second)
    };
    let (report, (first, second)) = tokio::join!(orch.run(std::future::pending()), trigger);

    assert!(first);
    assert!(!second);
    assert!(stop.is_shutdown());
    assert_eq!(report.unjoined_loops, 0);
    assert!(report.is_balanced());
}

/// Edge Case 3: a loop stuck in long processing is abandoned after the timeout
#[tokio::test]
async fn test_join_timeout_is_not_escalated() {
    let orch = seeded(SimulationConfig {
        batch_weights: BatchDistribution::new(vec![0.0, 1.0]).expect("valid weights"),
        producer_pause: PauseRange::fixed(Duration::from_millis(5)),
        consumer_pause: PauseRange::fixed(Duration::ZERO),
        processing_time: PauseRange::fixed(Duration::from_secs(30)),
        shutdown_timeout: Duration::from_millis(50),
        ..Default::default()
    });

    let started = Instant::now();
    let report = orch.run(tokio::time::sleep(Duration::from_millis(50))).await;

    // Consumer is mid-processing; producer stops at its next boundary
    assert_eq!(report.unjoined_loops, 1);
    assert_eq!(report.dequeued, 1);
    assert_eq!(report.completed, 0);
    assert!(report.is_balanced());
    assert!(started.elapsed() < Duration::from_secs(5));
}

/// Edge Case 4: an in-progress pause completes before the loop exits
#[tokio::test]
async fn test_pause_completes_before_exit() {
    let orch = seeded(SimulationConfig {
        batch_weights: BatchDistribution::new(vec![1.0]).expect("valid weights"),
        producer_pause: PauseRange::fixed(Duration::from_millis(150)),
        consumer_pause: PauseRange::fixed(Duration::from_millis(150)),
        shutdown_timeout: Duration::from_secs(2),
        ..Default::default()
    });

    let started = Instant::now();
    let report = orch.run(tokio::time::sleep(Duration::from_millis(10))).await;

    assert_eq!(report.unjoined_loops, 0);
    assert!(started.elapsed() >= Duration::from_millis(140));
    // Batch weights only allow empty batches; the consumer only ever idles
    assert_eq!(report.generated, 0);
    assert_eq!(report.dequeued, 0);
}
