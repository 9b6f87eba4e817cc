//! Pool health classification.
//!
//! This module is intentionally free of I/O. `zpool list -o health` output is
//! mapped onto a closed set of variants; anything unrecognised becomes
//! [`HealthStatus::Unknown`] and is never treated as usable.

use std::fmt;

/// Coarse health of an imported pool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HealthStatus {
    /// `ONLINE`
    Healthy,
    /// `DEGRADED`: redundancy lost but the pool still serves I/O.
    Degraded,
    /// `FAULTED`
    Faulted,
    /// Any other string, or no answer at all. Holds the raw value.
    Unknown(String),
}

impl HealthStatus {
    /// Classify the health column printed by `zpool list -H -o health`.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            "ONLINE" => Self::Healthy,
            "DEGRADED" => Self::Degraded,
            "FAULTED" => Self::Faulted,
            other => Self::Unknown(other.to_string()),
        }
    }

    /// Whether the pool can serve I/O.
    #[must_use]
    pub fn is_usable(&self) -> bool {
        matches!(self, Self::Healthy | Self::Degraded)
    }
}

impl fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Healthy => f.write_str("ONLINE"),
            Self::Degraded => f.write_str("DEGRADED"),
            Self::Faulted => f.write_str("FAULTED"),
            Self::Unknown(raw) if raw.is_empty() => f.write_str("<no output>"),
            Self::Unknown(raw) => write!(f, "{raw}"),
        }
    }
}
