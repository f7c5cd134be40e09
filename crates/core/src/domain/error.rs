// Domain Error Types

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Invalid interval {name}: {reason}")]
    InvalidInterval { name: String, reason: String },

    #[error("Invalid batch distribution: {0}")]
    InvalidDistribution(String),
}

pub type Result<T> = std::result::Result<T, DomainError>;
