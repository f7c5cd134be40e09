// Domain Layer - Pure simulation entities and configuration

pub mod config;
pub mod error;
pub mod report;
pub mod request;

// Re-exports
pub use config::{BatchDistribution, PauseRange, SimulationConfig, SimulationMode};
pub use error::DomainError;
pub use report::SimulationReport;
pub use request::{Priority, Request, RequestId, RequestPayload, Source};
