//! Per-metric notification bookkeeping

use super::types::Timestamp;
use crate::domain::MetricId;
use std::collections::HashMap;

/// Last successful dispatch time per metric
///
/// Entries are created on the first successful notification for a metric and
/// overwritten afterwards. The engine is responsible for only recording
/// confirmed deliveries.
#[derive(Debug, Clone, Default)]
pub struct AlertState {
    last_sent: HashMap<MetricId, Timestamp>,
}

impl AlertState {
    pub fn new() -> Self {
        Self::default()
    }

    /// When the last notification for `metric` was delivered, if ever
    pub fn last_sent(&self, metric: MetricId) -> Option<Timestamp> {
        self.last_sent.get(&metric).copied()
    }

    /// Record a delivered notification
    pub fn record_sent(&mut self, metric: MetricId, timestamp: Timestamp) {
        self.last_sent.insert(metric, timestamp);
    }

    /// Number of metrics that have ever fired
    pub fn len(&self) -> usize {
        self.last_sent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.last_sent.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_empty_state() {
        let state = AlertState::new();
        assert!(state.is_empty());
        assert_eq!(state.last_sent(MetricId::CpuTemp), None);
    }

    #[test]
    fn test_record_and_overwrite() {
        let mut state = AlertState::new();
        let t0 = Utc.timestamp_opt(100, 0).unwrap();
        let t1 = Utc.timestamp_opt(200, 0).unwrap();

        state.record_sent(MetricId::CpuTemp, t0);
        assert_eq!(state.last_sent(MetricId::CpuTemp), Some(t0));
        assert_eq!(state.last_sent(MetricId::MemoryPercent), None);

        state.record_sent(MetricId::CpuTemp, t1);
        assert_eq!(state.last_sent(MetricId::CpuTemp), Some(t1));
        assert_eq!(state.len(), 1);
    }
}
