//! Mock implementations for testing
//!
//! Provides a scripted metric source and a recording notifier so the alert
//! engine and sampling loop can be tested without sensors or a mail agent.

use crate::alerts::Notifier;
use crate::domain::MetricId;
use crate::error::SampleError;
use crate::source::MetricSource;

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Mock metric source returning preset readings
#[derive(Debug, Default)]
pub struct MockSource {
    readings: HashMap<MetricId, Result<f64, SampleError>>,
    samples_taken: usize,
}

impl MockSource {
    /// Create a source with no readings; every sample fails
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set a reading
    pub fn with_value(mut self, metric: MetricId, value: f64) -> Self {
        self.set_value(metric, value);
        self
    }

    /// Builder: make a metric fail
    pub fn with_error(mut self, metric: MetricId, error: SampleError) -> Self {
        self.readings.insert(metric, Err(error));
        self
    }

    /// Set the mock reading
    pub fn set_value(&mut self, metric: MetricId, value: f64) {
        self.readings.insert(metric, Ok(value));
    }

    /// Number of samples taken so far
    pub fn samples_taken(&self) -> usize {
        self.samples_taken
    }
}

impl MetricSource for MockSource {
    fn sample(&mut self, metric: MetricId) -> Result<f64, SampleError> {
        self.samples_taken += 1;
        self.readings
            .get(&metric)
            .cloned()
            .unwrap_or_else(|| Err(SampleError::SensorNotFound(metric.to_string())))
    }

    fn name(&self) -> &str {
        "mock"
    }
}

/// Mock notifier recording every delivery attempt
///
/// Clones share their log and success flag, so a test can keep one handle
/// while the engine owns another.
#[derive(Debug, Clone)]
pub struct MockNotifier {
    sent: Arc<Mutex<Vec<(String, String)>>>,
    attempts: Arc<AtomicUsize>,
    success: Arc<AtomicBool>,
}

impl MockNotifier {
    /// Create a notifier that accepts every message
    pub fn new() -> Self {
        Self {
            sent: Arc::new(Mutex::new(Vec::new())),
            attempts: Arc::new(AtomicUsize::new(0)),
            success: Arc::new(AtomicBool::new(true)),
        }
    }

    /// Create a notifier that rejects every message
    pub fn failing() -> Self {
        let notifier = Self::new();
        notifier.set_success(false);
        notifier
    }

    /// Choose whether subsequent sends succeed
    pub fn set_success(&self, success: bool) {
        self.success.store(success, Ordering::SeqCst);
    }

    /// Delivered messages as (subject, body)
    pub fn sent(&self) -> Vec<(String, String)> {
        self.sent.lock().unwrap().clone()
    }

    /// Number of delivered messages
    pub fn sent_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }

    /// Number of send calls, successful or not
    pub fn attempt_count(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }
}

impl Default for MockNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for MockNotifier {
    fn send(&self, subject: &str, body: &str) -> bool {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        if !self.success.load(Ordering::SeqCst) {
            return false;
        }
        self.sent
            .lock()
            .unwrap()
            .push((subject.to_string(), body.to_string()));
        true
    }

    fn name(&self) -> &str {
        "mock"
    }
}
