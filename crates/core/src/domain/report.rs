// Simulation Report (returned on shutdown)

use super::config::SimulationMode;
use serde::{Deserialize, Serialize};

/// Final queue state and counters observed after both loops stopped
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationReport {
    pub mode: SimulationMode,
    /// Request ids issued by the sequence allocator
    pub generated: u64,
    /// Requests removed from the queue by the processor
    pub dequeued: u64,
    /// Requests whose simulated work finished
    pub completed: u64,
    /// Queue length at shutdown
    pub remaining: usize,
    /// Loops that did not exit cleanly within the shutdown timeout (timed out or panicked)
    pub unjoined_loops: usize,
}

impl SimulationReport {
    /// Nothing lost or duplicated between generation and the final queue state
    pub fn is_balanced(&self) -> bool {
        self.generated == self.dequeued + self.remaining as u64
    }

    /// Single-line JSON rendering for machine consumers of the final report
    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_balanced_report() {
        let report = SimulationReport {
            mode: SimulationMode::Concurrent,
            generated: 10,
            dequeued: 7,
            completed: 6,
            remaining: 3,
            unjoined_loops: 0,
        };
        assert!(report.is_balanced());

        let lossy = SimulationReport {
            remaining: 2,
            ..report
        };
        assert!(!lossy.is_balanced());
    }

    #[test]
    fn test_report_json() {
        let report = SimulationReport {
            mode: SimulationMode::Sequential,
            generated: 2,
            dequeued: 2,
            completed: 2,
            remaining: 0,
            unjoined_loops: 0,
        };
        let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
        assert_eq!(json["mode"], "sequential");
        assert_eq!(json["generated"], 2);
        assert_eq!(json["remaining"], 0);
    }
}
