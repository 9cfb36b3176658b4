//! Monitored metric identifiers
//!
//! A [`MetricId`] is the key for threshold lookup and cooldown tracking.
//! Keys are stable for the whole process lifetime.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a monitored quantity
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum MetricId {
    /// CPU package/core temperature in degrees Celsius
    #[serde(rename = "cpu_temp")]
    CpuTemp,
    /// Used memory as a percentage of total memory
    #[serde(rename = "memory")]
    MemoryPercent,
}

impl MetricId {
    /// Every monitored metric, in evaluation order
    pub const ALL: [MetricId; 2] = [MetricId::CpuTemp, MetricId::MemoryPercent];

    /// Stable key used in logs and the state map
    pub const fn key(&self) -> &'static str {
        match self {
            Self::CpuTemp => "cpu_temp",
            Self::MemoryPercent => "memory",
        }
    }

    /// Human-readable metric class, used in notification subjects
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::CpuTemp => "CPU Temperature",
            Self::MemoryPercent => "Memory Usage",
        }
    }

    /// Unit suffix for rendered values
    pub const fn unit(&self) -> &'static str {
        match self {
            Self::CpuTemp => "°C",
            Self::MemoryPercent => "%",
        }
    }

    /// Built-in threshold used when configuration does not provide one
    pub const fn default_threshold(&self) -> f64 {
        match self {
            Self::CpuTemp => 80.0,
            Self::MemoryPercent => 90.0,
        }
    }

    /// Format a value with this metric's unit
    pub fn format_value(&self, value: f64) -> String {
        format!("{:.2}{}", value, self.unit())
    }
}

impl fmt::Display for MetricId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
