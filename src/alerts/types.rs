//! Alert system domain types
//!
//! Defines the evaluation outcome and the transient breach event used to
//! build notification messages.

use crate::domain::MetricId;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use std::fmt;

/// Point in time used for cooldown bookkeeping and message bodies
pub type Timestamp = DateTime<Utc>;

/// Outcome of evaluating one metric sample
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Decision {
    /// No breach, or the notification could not be delivered
    Skipped,
    /// Breach is real but the metric is still cooling down
    Suppressed,
    /// Notification delivered and cooldown started
    Fired,
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Skipped => write!(f, "SKIPPED"),
            Self::Suppressed => write!(f, "SUPPRESSED"),
            Self::Fired => write!(f, "FIRED"),
        }
    }
}

/// A threshold breach, built per evaluation and discarded after dispatch
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlertEvent {
    /// Metric that breached
    pub metric: MetricId,
    /// Sampled value
    pub value: f64,
    /// Configured threshold
    pub threshold: f64,
    /// Evaluation time
    pub timestamp: Timestamp,
}

impl AlertEvent {
    pub fn new(metric: MetricId, value: f64, threshold: f64, timestamp: Timestamp) -> Self {
        Self {
            metric,
            value,
            threshold,
            timestamp,
        }
    }

    /// Notification subject naming the metric class
    pub fn subject(&self) -> String {
        format!("SystemMonitor: {} Alert", self.metric.display_name())
    }

    /// Notification body with value, threshold and time
    pub fn body(&self) -> String {
        format!(
            "{} exceeded threshold.\nCurrent: {}\nThreshold: {}\nTime: {}\n",
            self.metric.display_name(),
            self.metric.format_value(self.value),
            self.metric.format_value(self.threshold),
            self.timestamp.to_rfc3339_opts(SecondsFormat::Secs, true)
        )
    }
}
