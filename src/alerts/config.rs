//! Threshold configuration
//!
//! Immutable per-metric thresholds plus the global notification cooldown.
//! Built once at startup and owned by the alert engine.

use crate::config::ConfigFile;
use crate::domain::MetricId;
use std::collections::BTreeMap;
use std::path::Path;
use std::time::Duration;

/// Cooldown used when configuration does not provide one
pub const DEFAULT_COOLDOWN: Duration = Duration::from_secs(3600);

/// Per-metric thresholds and notification cooldown
#[derive(Debug, Clone, PartialEq)]
pub struct ThresholdConfig {
    thresholds: BTreeMap<MetricId, f64>,
    cooldown: Duration,
}

impl ThresholdConfig {
    /// Create a threshold config from explicit values
    ///
    /// Metrics missing from `thresholds` use their built-in default, as do
    /// metrics given a non-finite threshold.
    pub fn new(thresholds: BTreeMap<MetricId, f64>, cooldown: Duration) -> Self {
        let config = Self {
            thresholds: BTreeMap::new(),
            cooldown,
        };
        thresholds
            .into_iter()
            .fold(config, |config, (metric, threshold)| {
                config.with_threshold(metric, threshold)
            })
    }

    /// Built-in defaults: CPU 80.0°C, memory 90.0%, one hour cooldown
    pub fn defaults() -> Self {
        let thresholds = MetricId::ALL
            .iter()
            .map(|m| (*m, m.default_threshold()))
            .collect();
        Self::new(thresholds, DEFAULT_COOLDOWN)
    }

    /// Load thresholds from a config file
    ///
    /// Never fails. An unreadable or malformed file yields [`Self::defaults`]
    /// and a logged warning.
    pub fn load(path: Option<&Path>) -> Self {
        ConfigFile::load_or_default(path).config.threshold_config()
    }

    /// Set the threshold for one metric
    ///
    /// A non-finite threshold is ignored and the previous value kept.
    pub fn with_threshold(mut self, metric: MetricId, threshold: f64) -> Self {
        if !threshold.is_finite() {
            log::warn!(
                "Ignoring non-finite threshold {} for {}",
                threshold,
                metric
            );
            return self;
        }
        self.thresholds.insert(metric, threshold);
        self
    }

    /// Set the cooldown
    pub fn with_cooldown(mut self, cooldown: Duration) -> Self {
        self.cooldown = cooldown;
        self
    }

    /// Threshold for a metric
    pub fn threshold_for(&self, metric: MetricId) -> f64 {
        self.thresholds
            .get(&metric)
            .copied()
            .unwrap_or_else(|| metric.default_threshold())
    }

    /// Minimum time between two notifications for the same metric
    pub fn cooldown(&self) -> Duration {
        self.cooldown
    }

    /// All configured thresholds, in metric order
    pub fn iter(&self) -> impl Iterator<Item = (MetricId, f64)> + '_ {
        MetricId::ALL.iter().map(move |m| (*m, self.threshold_for(*m)))
    }
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        Self::defaults()
    }
}
