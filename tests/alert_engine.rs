//! End-to-end checks of the public alerting API

use chrono::{DateTime, TimeZone, Utc};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use sysalert::alerts::{AlertEngine, Decision, Notifier, ThresholdConfig, DEFAULT_COOLDOWN};
use sysalert::domain::MetricId;
use sysalert::error::SampleError;
use sysalert::services::{Monitor, MonitorConfig};
use sysalert::source::MetricSource;

#[derive(Clone, Default)]
struct Outbox(Arc<Mutex<Vec<String>>>);

impl Outbox {
    fn subjects(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }
}

impl Notifier for Outbox {
    fn send(&self, subject: &str, _body: &str) -> bool {
        self.0.lock().unwrap().push(subject.to_string());
        true
    }

    fn name(&self) -> &str {
        "outbox"
    }
}

/// Replays a fixed series of CPU readings; memory is always unreadable
struct Replay(VecDeque<f64>);

impl MetricSource for Replay {
    fn sample(&mut self, metric: MetricId) -> Result<f64, SampleError> {
        match metric {
            MetricId::CpuTemp => self
                .0
                .pop_front()
                .ok_or_else(|| SampleError::Unavailable("replay exhausted".to_string())),
            MetricId::MemoryPercent => Err(SampleError::SensorNotFound(metric.to_string())),
        }
    }

    fn name(&self) -> &str {
        "replay"
    }
}

fn at(secs: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(secs, 0).unwrap()
}

fn engine(cooldown: u64) -> (AlertEngine, Outbox) {
    let outbox = Outbox::default();
    let config = ThresholdConfig::defaults().with_cooldown(Duration::from_secs(cooldown));
    (AlertEngine::new(config, Box::new(outbox.clone())), outbox)
}

#[test]
fn cooldown_scenario() {
    let (mut engine, outbox) = engine(10);

    assert_eq!(engine.evaluate(MetricId::CpuTemp, 85.0, at(0)), Decision::Fired);
    assert_eq!(engine.evaluate(MetricId::CpuTemp, 90.0, at(5)), Decision::Suppressed);
    assert_eq!(engine.evaluate(MetricId::CpuTemp, 82.0, at(11)), Decision::Fired);
    assert_eq!(engine.evaluate(MetricId::CpuTemp, 75.0, at(12)), Decision::Skipped);

    assert_eq!(
        outbox.subjects(),
        vec![
            "SystemMonitor: CPU Temperature Alert".to_string(),
            "SystemMonitor: CPU Temperature Alert".to_string(),
        ]
    );
}

#[test]
fn at_most_one_fire_per_cooldown_window() {
    let (mut engine, outbox) = engine(30);

    let fired = (0..120)
        .map(|t| engine.evaluate(MetricId::MemoryPercent, 99.0, at(t)))
        .filter(|d| *d == Decision::Fired)
        .count();

    assert_eq!(fired, 4);
    assert_eq!(outbox.subjects().len(), 4);
}

#[test]
fn below_threshold_never_touches_state() {
    let (mut engine, outbox) = engine(10);

    for t in 0..20 {
        assert_eq!(
            engine.evaluate(MetricId::CpuTemp, 40.0 + t as f64, at(t)),
            Decision::Skipped
        );
    }

    assert!(engine.state().is_empty());
    assert!(outbox.subjects().is_empty());
}

#[test]
fn monitor_skips_unreadable_metrics() {
    let (engine, outbox) = engine(10);
    let config = MonitorConfig {
        interval: Duration::from_millis(1),
        single_use: false,
    };
    let mut monitor = Monitor::new(config, Replay(VecDeque::from(vec![85.0, 90.0])), engine);

    let first = monitor.tick_at(at(0));
    assert_eq!(first.fired_count(), 1);
    assert_eq!(first.failed_samples(), 1);

    let second = monitor.tick_at(at(5));
    assert_eq!(second.suppressed_count(), 1);

    let third = monitor.tick_at(at(20));
    assert_eq!(third.fired_count(), 0);
    assert_eq!(third.failed_samples(), 2);

    assert_eq!(outbox.subjects().len(), 1);
}

#[test]
fn config_file_overrides_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sysalert.toml");
    std::fs::write(
        &path,
        "[thresholds]\ncpu_temp_c = 70.0\n\n[email]\ncooldown_seconds = 60\n",
    )
    .unwrap();

    let config = ThresholdConfig::load(Some(&path));
    assert_eq!(config.threshold_for(MetricId::CpuTemp), 70.0);
    assert_eq!(config.threshold_for(MetricId::MemoryPercent), 90.0);
    assert_eq!(config.cooldown(), Duration::from_secs(60));
}

#[test]
fn unreadable_config_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();

    let missing = ThresholdConfig::load(Some(&dir.path().join("missing.toml")));
    assert_eq!(missing, ThresholdConfig::defaults());

    let broken = dir.path().join("config.json");
    std::fs::write(&broken, "{ \"thresholds\": ").unwrap();
    let config = ThresholdConfig::load(Some(&broken));
    assert_eq!(config.threshold_for(MetricId::CpuTemp), 80.0);
    assert_eq!(config.cooldown(), DEFAULT_COOLDOWN);
}
