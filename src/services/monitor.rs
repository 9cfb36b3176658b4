//! Sampling loop monitor
//!
//! Orchestrates the sampling loop: every tick samples each metric once and
//! feeds it to the alert engine.

use crate::alerts::{AlertEngine, Decision, Timestamp};
use crate::domain::MetricId;
use crate::source::MetricSource;

use chrono::Utc;
use serde::Serialize;
use std::time::Duration;

/// Configuration for the monitor
#[derive(Debug, Clone)]
pub struct MonitorConfig {
    /// Interval between sampling ticks
    pub interval: Duration,
    /// Whether to exit after one tick
    pub single_use: bool,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(1),
            single_use: false,
        }
    }
}

/// Result of one metric within a tick
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricReport {
    pub metric: MetricId,
    /// Sampled value, absent when sampling failed
    pub value: Option<f64>,
    pub threshold: f64,
    /// Engine decision, absent when sampling failed
    pub decision: Option<Decision>,
    /// Sampling error message
    pub error: Option<String>,
}

/// Result of one sampling tick
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TickReport {
    pub timestamp: Timestamp,
    pub metrics: Vec<MetricReport>,
}

impl TickReport {
    /// Number of notifications delivered during the tick
    pub fn fired_count(&self) -> usize {
        self.count(Decision::Fired)
    }

    /// Number of breaches held back by the cooldown
    pub fn suppressed_count(&self) -> usize {
        self.count(Decision::Suppressed)
    }

    /// Number of metrics that could not be sampled
    pub fn failed_samples(&self) -> usize {
        self.metrics.iter().filter(|m| m.error.is_some()).count()
    }

    fn count(&self, decision: Decision) -> usize {
        self.metrics
            .iter()
            .filter(|m| m.decision == Some(decision))
            .count()
    }
}

/// Sampling loop monitor
pub struct Monitor<S: MetricSource> {
    config: MonitorConfig,
    source: S,
    engine: AlertEngine,
}

impl<S: MetricSource> Monitor<S> {
    /// Create a new monitor with the given configuration
    pub fn new(config: MonitorConfig, source: S, engine: AlertEngine) -> Self {
        Self {
            config,
            source,
            engine,
        }
    }

    /// Execute a single tick at the current time
    pub fn tick(&mut self) -> TickReport {
        self.tick_at(Utc::now())
    }

    /// Execute a single tick, evaluating every metric at `now`
    ///
    /// A metric that fails to sample is skipped for this tick; the remaining
    /// metrics are still evaluated.
    pub fn tick_at(&mut self, now: Timestamp) -> TickReport {
        let mut metrics = Vec::with_capacity(MetricId::ALL.len());

        for metric in MetricId::ALL {
            let threshold = self.engine.config().threshold_for(metric);

            let report = match self.source.sample(metric) {
                Ok(value) => {
                    let decision = self.engine.evaluate(metric, value, now);
                    MetricReport {
                        metric,
                        value: Some(value),
                        threshold,
                        decision: Some(decision),
                        error: None,
                    }
                }
                Err(e) => {
                    log::warn!(
                        "Skipping {} this tick, {} source failed: {}",
                        metric,
                        self.source.name(),
                        e
                    );
                    MetricReport {
                        metric,
                        value: None,
                        threshold,
                        decision: None,
                        error: Some(e.to_string()),
                    }
                }
            };

            metrics.push(report);
        }

        TickReport {
            timestamp: now,
            metrics,
        }
    }

    /// Run the sampling loop
    ///
    /// `on_tick` observes each report. Returns only in single-use mode.
    pub fn run<F: FnMut(&TickReport)>(&mut self, mut on_tick: F) {
        loop {
            let report = self.tick();
            log::debug!(
                "Tick complete: {} fired, {} suppressed, {} sample failures",
                report.fired_count(),
                report.suppressed_count(),
                report.failed_samples()
            );
            on_tick(&report);

            if self.config.single_use {
                log::info!("Single-use mode: exiting after one tick");
                break;
            }

            std::thread::sleep(self.config.interval);
        }
    }

    /// Get the monitor configuration
    pub fn config(&self) -> &MonitorConfig {
        &self.config
    }

    /// Alert engine driven by this monitor
    pub fn engine(&self) -> &AlertEngine {
        &self.engine
    }

    /// Metric source sampled by this monitor
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Mutable access to the metric source
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }
}
