//! Trait definitions for metric sampling
//!
//! These traits abstract over the host so the sampling loop can be tested
//! with mocks.

use crate::domain::MetricId;
use crate::error::SampleError;

/// Trait for metric sources
///
/// A failed sample is reported per metric; the caller skips that metric for
/// the current tick and keeps going.
pub trait MetricSource {
    /// Take a fresh sample of `metric`
    fn sample(&mut self, metric: MetricId) -> Result<f64, SampleError>;

    /// Source name for logging
    fn name(&self) -> &str;
}

impl<S: MetricSource + ?Sized> MetricSource for Box<S> {
    fn sample(&mut self, metric: MetricId) -> Result<f64, SampleError> {
        (**self).sample(metric)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
