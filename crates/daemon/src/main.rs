//! Queuesim - Main Entry Point
//! Simulated request queue: producer/consumer loops until Ctrl+C

mod args;

use anyhow::{Context, Result};
use clap::Parser;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

// Import workspace crates
use queuesim_core::application::Orchestrator;
use queuesim_core::port::{RandomSource, SequentialIdProvider, SystemTimeProvider, TokioSleeper};
use queuesim_infra_memory::InMemoryRequestQueue;
use queuesim_infra_system::{SeededRandomSource, ThreadRandomSource};

use args::{Args, LogFormat};

const VERSION: &str = env!("CARGO_PKG_VERSION");
const DEFAULT_LOG_FILTER: &str = "queuesim=info";

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // 1. Initialize logging
    init_logging(args.log_format)?;
    info!("Queuesim v{} starting...", VERSION);

    // 2. Load configuration
    let config = args.simulation_config()?;
    let run_for = args.run_for()?;
    info!(
        mode = %config.mode,
        batch_weights = ?config.batch_weights.weights(),
        seed = ?args.seed,
        "Configuration loaded"
    );

    // 3. Setup dependencies (DI wiring)
    let random: Arc<dyn RandomSource> = match args.seed {
        Some(seed) => Arc::new(SeededRandomSource::new(seed)),
        None => Arc::new(ThreadRandomSource),
    };
    let orchestrator = Orchestrator::new(
        config,
        Arc::new(InMemoryRequestQueue::new()),
        Arc::new(SequentialIdProvider::new()),
        Arc::new(SystemTimeProvider),
        random,
        Arc::new(TokioSleeper),
    )
    .context("failed to build orchestrator")?;

    info!("Press Ctrl+C to stop");

    // 4. Run until interrupted
    let report = orchestrator.run(interrupt(run_for)).await;

    if args.json_report {
        println!("{}", report.to_json()?);
    }
    Ok(())
}

fn init_logging(format: LogFormat) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(DEFAULT_LOG_FILTER))
        .context("failed to create env filter")?;

    let registry = tracing_subscriber::registry().with(env_filter);
    match format {
        // Production: JSON structured logging
        LogFormat::Json => registry.with(fmt::layer().json()).try_init(),
        LogFormat::Compact => registry.with(fmt::layer().compact()).try_init(),
        // Development: Pretty formatting with colors
        LogFormat::Pretty => registry.with(fmt::layer().pretty()).try_init(),
    }
    .context("failed to install tracing subscriber")
}

/// Resolves on Ctrl+C, or after `run_for` when given
async fn interrupt(run_for: Option<Duration>) {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = ?e, "Ctrl+C handler unavailable; waiting for --run-for deadline");
            std::future::pending::<()>().await;
        }
    };

    match run_for {
        Some(deadline) => {
            tokio::select! {
                _ = ctrl_c => {},
                _ = tokio::time::sleep(deadline) => info!(?deadline, "Run duration elapsed"),
            }
        }
        None => ctrl_c.await,
    }
}
