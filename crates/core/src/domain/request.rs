// Request Domain Model

use serde::{Deserialize, Serialize};
use std::fmt;

/// Request ID (sequential, starts at 1)
pub type RequestId = u64;

/// Priority label (cosmetic, never used for ordering)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Normal,
    High,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::Low, Priority::Normal, Priority::High];

    /// Map a unit sample in [0, 1) onto one of the labels with equal weight
    pub fn from_unit(unit: f64) -> Self {
        Self::ALL[uniform_index(Self::ALL.len(), unit)]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Normal => "normal",
            Priority::High => "high",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Channel the request arrived from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    Web,
    Mobile,
    Email,
}

impl Source {
    pub const ALL: [Source; 3] = [Source::Web, Source::Mobile, Source::Email];

    pub fn from_unit(unit: f64) -> Self {
        Self::ALL[uniform_index(Self::ALL.len(), unit)]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Source::Web => "web",
            Source::Mobile => "mobile",
            Source::Email => "email",
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Request payload: exactly two fixed keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestPayload {
    pub priority: Priority,
    pub source: Source,
}

impl RequestPayload {
    pub fn new(priority: Priority, source: Source) -> Self {
        Self { priority, source }
    }
}

/// Request Entity
///
/// Fields are private: a request never changes after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Request {
    id: RequestId,
    created_at: i64, // epoch ms
    payload: RequestPayload,
}

impl Request {
    /// Create a new Request
    ///
    /// # Arguments
    ///
    /// * `id` - Unique request ID (injected, not generated)
    /// * `created_at` - Creation timestamp in epoch ms (injected, not system time)
    /// * `payload` - Priority/source labels
    pub fn new(id: RequestId, created_at: i64, payload: RequestPayload) -> Self {
        Self {
            id,
            created_at,
            payload,
        }
    }

    pub fn id(&self) -> RequestId {
        self.id
    }

    pub fn created_at(&self) -> i64 {
        self.created_at
    }

    pub fn payload(&self) -> &RequestPayload {
        &self.payload
    }

    pub fn priority(&self) -> Priority {
        self.payload.priority
    }

    pub fn source(&self) -> Source {
        self.payload.source
    }

    /// Creation time as local wall-clock `HH:MM:SS`
    pub fn created_at_clock(&self) -> String {
        match chrono::DateTime::from_timestamp_millis(self.created_at) {
            Some(utc) => utc
                .with_timezone(&chrono::Local)
                .format("%H:%M:%S")
                .to_string(),
            None => format!("{}ms", self.created_at),
        }
    }
}

impl fmt::Display for Request {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let payload = serde_json::to_string(&self.payload).map_err(|_| fmt::Error)?;
        write!(
            f,
            "Request(id={}, created_at={}, payload={})",
            self.id,
            self.created_at_clock(),
            payload
        )
    }
}

/// Index into a slice of `len` items for a unit sample, clamped so 1.0 stays in range
pub(crate) fn uniform_index(len: usize, unit: f64) -> usize {
    debug_assert!(len > 0, "cannot pick from an empty set");
    let scaled = (unit.clamp(0.0, 1.0) * len as f64) as usize;
    scaled.min(len - 1)
}
