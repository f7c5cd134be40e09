//! Command-line / environment configuration for the daemon

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::time::Duration;

use queuesim_core::domain::config::secs_to_duration;
use queuesim_core::domain::{BatchDistribution, PauseRange, SimulationConfig, SimulationMode};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    Concurrent,
    Sequential,
}

impl From<ModeArg> for SimulationMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Concurrent => SimulationMode::Concurrent,
            ModeArg::Sequential => SimulationMode::Sequential,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Pretty,
    Compact,
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "queuesim")]
#[command(about = "Simulated request queue with randomized producer and consumer timing", long_about = None)]
#[command(version)]
pub struct Args {
    /// Operating mode
    #[arg(long, env = "QUEUESIM_MODE", value_enum, default_value = "concurrent")]
    pub mode: ModeArg,

    /// Weights for generating 0, 1, 2, ... requests per producer iteration
    #[arg(long, env = "QUEUESIM_BATCH_WEIGHTS", value_delimiter = ',', default_value = "0.2,0.6,0.2")]
    pub batch_weights: Vec<f64>,

    /// Producer pause lower bound (seconds)
    #[arg(long, env = "QUEUESIM_PRODUCER_PAUSE_MIN", default_value_t = 0.2)]
    pub producer_pause_min: f64,

    /// Producer pause upper bound (seconds)
    #[arg(long, env = "QUEUESIM_PRODUCER_PAUSE_MAX", default_value_t = 0.8)]
    pub producer_pause_max: f64,

    /// Consumer pause lower bound (seconds)
    #[arg(long, env = "QUEUESIM_CONSUMER_PAUSE_MIN", default_value_t = 0.2)]
    pub consumer_pause_min: f64,

    /// Consumer pause upper bound (seconds)
    #[arg(long, env = "QUEUESIM_CONSUMER_PAUSE_MAX", default_value_t = 0.5)]
    pub consumer_pause_max: f64,

    /// Simulated processing time lower bound (seconds)
    #[arg(long, env = "QUEUESIM_PROCESSING_MIN", default_value_t = 0.3)]
    pub processing_min: f64,

    /// Simulated processing time upper bound (seconds)
    #[arg(long, env = "QUEUESIM_PROCESSING_MAX", default_value_t = 1.0)]
    pub processing_max: f64,

    /// Fixed pause between sequential-mode cycles (seconds)
    #[arg(long, env = "QUEUESIM_SEQUENTIAL_PAUSE", default_value_t = 1.0)]
    pub sequential_pause: f64,

    /// How long to wait for each loop after the stop signal (seconds)
    #[arg(long, env = "QUEUESIM_SHUTDOWN_TIMEOUT", default_value_t = 2.0)]
    pub shutdown_timeout: f64,

    /// Seed for a reproducible random stream (thread RNG when absent)
    #[arg(long, env = "QUEUESIM_SEED")]
    pub seed: Option<u64>,

    /// Stop by itself after this many seconds instead of waiting for Ctrl+C
    #[arg(long, env = "QUEUESIM_RUN_FOR")]
    pub run_for: Option<f64>,

    /// Log output format
    #[arg(long, env = "QUEUESIM_LOG_FORMAT", value_enum, default_value = "pretty")]
    pub log_format: LogFormat,

    /// Print the final report as one JSON line on stdout
    #[arg(long)]
    pub json_report: bool,
}

impl Args {
    /// Build and validate the simulation configuration
    pub fn simulation_config(&self) -> Result<SimulationConfig> {
        let config = SimulationConfig {
            mode: self.mode.into(),
            batch_weights: BatchDistribution::new(self.batch_weights.clone())?,
            producer_pause: PauseRange::from_secs_f64(
                "producer_pause",
                self.producer_pause_min,
                self.producer_pause_max,
            )?,
            consumer_pause: PauseRange::from_secs_f64(
                "consumer_pause",
                self.consumer_pause_min,
                self.consumer_pause_max,
            )?,
            processing_time: PauseRange::from_secs_f64(
                "processing_time",
                self.processing_min,
                self.processing_max,
            )?,
            sequential_pause: secs_to_duration("sequential_pause", self.sequential_pause)?,
            shutdown_timeout: secs_to_duration("shutdown_timeout", self.shutdown_timeout)?,
        };
        config.validate().context("invalid simulation configuration")?;
        Ok(config)
    }

    /// Self-interrupt deadline, if any
    pub fn run_for(&self) -> Result<Option<Duration>> {
        self.run_for
            .map(|secs| secs_to_duration("run_for", secs))
            .transpose()
            .map_err(Into::into)
    }
}
