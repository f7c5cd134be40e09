// Simulation Configuration
//
// Every interval is expressed in seconds at the edges (CLI, defaults) and
// carried as `Duration` inside the simulation.

use super::error::{DomainError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Operating mode, fixed at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SimulationMode {
    /// Producer and consumer run as independent tasks
    #[default]
    Concurrent,
    /// One loop alternates generate / process / pause
    Sequential,
}

impl fmt::Display for SimulationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimulationMode::Concurrent => write!(f, "concurrent"),
            SimulationMode::Sequential => write!(f, "sequential"),
        }
    }
}

/// Closed interval of durations sampled uniformly
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PauseRange {
    pub min: Duration,
    pub max: Duration,
}

impl PauseRange {
    pub fn new(min: Duration, max: Duration) -> Self {
        Self { min, max }
    }

    /// Build from seconds; rejects negative, non-finite, or inverted bounds
    pub fn from_secs_f64(name: &str, min: f64, max: f64) -> Result<Self> {
        let range = Self::new(secs_to_duration(name, min)?, secs_to_duration(name, max)?);
        range.validate(name)?;
        Ok(range)
    }

    /// Degenerate range that always yields `value`
    pub fn fixed(value: Duration) -> Self {
        Self::new(value, value)
    }

    pub fn validate(&self, name: &str) -> Result<()> {
        if self.min > self.max {
            return Err(DomainError::InvalidInterval {
                name: name.to_string(),
                reason: format!("min {:?} exceeds max {:?}", self.min, self.max),
            });
        }
        Ok(())
    }

    /// Map a unit sample in [0, 1) onto the interval
    pub fn sample(&self, unit: f64) -> Duration {
        let span = self.max.saturating_sub(self.min);
        let offset = (span.as_nanos() as f64 * unit.clamp(0.0, 1.0)).round() as u64;
        self.min + Duration::from_nanos(offset)
    }
}

/// Convert a seconds value from the config surface into a `Duration`
pub fn secs_to_duration(name: &str, secs: f64) -> Result<Duration> {
    Duration::try_from_secs_f64(secs).map_err(|_| DomainError::InvalidInterval {
        name: name.to_string(),
        reason: format!("{secs} is not a finite, non-negative number of seconds"),
    })
}

/// Discrete distribution over batch sizes: weight `i` is the weight of generating `i` requests
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchDistribution {
    weights: Vec<f64>,
}

impl BatchDistribution {
    pub fn new(weights: Vec<f64>) -> Result<Self> {
        let dist = Self { weights };
        dist.validate()?;
        Ok(dist)
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Largest batch size with a non-zero weight
    pub fn max_batch(&self) -> u32 {
        self.weights
            .iter()
            .rposition(|w| *w > 0.0)
            .map(|i| i as u32)
            .unwrap_or(0)
    }

    pub fn validate(&self) -> Result<()> {
        if self.weights.is_empty() {
            return Err(DomainError::InvalidDistribution(
                "at least one weight is required".to_string(),
            ));
        }
        if let Some(w) = self.weights.iter().find(|w| !w.is_finite() || **w < 0.0) {
            return Err(DomainError::InvalidDistribution(format!(
                "weight {w} must be a finite, non-negative number"
            )));
        }
        if self.total() <= 0.0 {
            return Err(DomainError::InvalidDistribution(
                "weights must not all be zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Map a unit sample in [0, 1) onto a batch size via the cumulative weights
    pub fn sample(&self, unit: f64) -> u32 {
        let target = unit.clamp(0.0, 1.0) * self.total();
        let mut cumulative = 0.0;
        for (count, weight) in self.weights.iter().enumerate() {
            cumulative += weight;
            if target < cumulative {
                return count as u32;
            }
        }
        // unit == 1.0 or float rounding at the top edge
        self.max_batch()
    }

    fn total(&self) -> f64 {
        self.weights.iter().sum()
    }
}

impl Default for BatchDistribution {
    fn default() -> Self {
        Self {
            weights: vec![0.2, 0.6, 0.2],
        }
    }
}

/// Full simulation configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    pub mode: SimulationMode,
    pub batch_weights: BatchDistribution,
    pub producer_pause: PauseRange,
    pub consumer_pause: PauseRange,
    pub processing_time: PauseRange,
    /// Fixed pause between sequential-mode cycles
    pub sequential_pause: Duration,
    /// Upper bound on waiting for each loop after the stop signal
    pub shutdown_timeout: Duration,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            mode: SimulationMode::Concurrent,
            batch_weights: BatchDistribution::default(),
            producer_pause: PauseRange::new(Duration::from_millis(200), Duration::from_millis(800)),
            consumer_pause: PauseRange::new(Duration::from_millis(200), Duration::from_millis(500)),
            processing_time: PauseRange::new(Duration::from_millis(300), Duration::from_millis(1000)),
            sequential_pause: Duration::from_secs(1),
            shutdown_timeout: Duration::from_secs(2),
        }
    }
}

impl SimulationConfig {
    pub fn validate(&self) -> Result<()> {
        self.batch_weights.validate()?;
        self.producer_pause.validate("producer_pause")?;
        self.consumer_pause.validate("consumer_pause")?;
        self.processing_time.validate("processing_time")?;
        Ok(())
    }
}
