//! Alert engine implementation
//!
//! Decides, per metric sample, whether a notification fires now, and
//! dispatches it through the configured notifier.

use super::config::ThresholdConfig;
use super::notifier::Notifier;
use super::state::AlertState;
use super::types::{AlertEvent, Decision, Timestamp};
use crate::domain::MetricId;

/// Alert engine
///
/// Owns the threshold snapshot, the cooldown state and the notifier. All
/// mutation goes through `&mut self`; callers that share an engine between
/// threads must wrap it in a `Mutex`.
pub struct AlertEngine {
    config: ThresholdConfig,
    state: AlertState,
    notifier: Box<dyn Notifier>,
}

impl AlertEngine {
    /// Create a new alert engine
    pub fn new(config: ThresholdConfig, notifier: Box<dyn Notifier>) -> Self {
        Self {
            config,
            state: AlertState::new(),
            notifier,
        }
    }

    /// Evaluate one sample of `metric` taken at `now`
    ///
    /// A breach is strictly greater than the threshold. The state is only
    /// updated after the notifier confirms delivery, so a failed send is
    /// retried on the next breaching sample.
    pub fn evaluate(&mut self, metric: MetricId, value: f64, now: Timestamp) -> Decision {
        let threshold = self.config.threshold_for(metric);

        if value.is_nan() || value <= threshold {
            return Decision::Skipped;
        }

        if self.in_cooldown(metric, now) {
            log::debug!(
                "{} breach suppressed: {} > {} within cooldown",
                metric,
                metric.format_value(value),
                metric.format_value(threshold)
            );
            return Decision::Suppressed;
        }

        let event = AlertEvent::new(metric, value, threshold, now);
        if self.notifier.send(&event.subject(), &event.body()) {
            self.state.record_sent(metric, now);
            log::info!(
                "{} alert sent via {}: {} > {}",
                metric,
                self.notifier.name(),
                metric.format_value(value),
                metric.format_value(threshold)
            );
            Decision::Fired
        } else {
            log::warn!(
                "{} alert could not be delivered via {}; will retry on next breach",
                metric,
                self.notifier.name()
            );
            Decision::Skipped
        }
    }

    fn in_cooldown(&self, metric: MetricId, now: Timestamp) -> bool {
        let Some(last_sent) = self.state.last_sent(metric) else {
            return false;
        };

        // A clock that stepped backwards counts as still cooling down
        match (now - last_sent).to_std() {
            Ok(elapsed) => elapsed < self.config.cooldown(),
            Err(_) => true,
        }
    }

    /// Threshold snapshot
    pub fn config(&self) -> &ThresholdConfig {
        &self.config
    }

    /// Cooldown bookkeeping
    pub fn state(&self) -> &AlertState {
        &self.state
    }

    /// Name of the notifier in use
    pub fn notifier_name(&self) -> &str {
        self.notifier.name()
    }
}
