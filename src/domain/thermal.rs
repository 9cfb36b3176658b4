//! Thermal domain types

use serde::{Deserialize, Serialize};
use std::fmt;

/// Temperature in degrees Celsius
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Temperature(f64);

impl Temperature {
    /// Create a new Temperature
    pub const fn new(celsius: f64) -> Self {
        Self(celsius)
    }

    /// Get the temperature in Celsius
    #[inline]
    pub const fn as_celsius(&self) -> f64 {
        self.0
    }
}

impl fmt::Display for Temperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}°C", self.0)
    }
}

impl From<f32> for Temperature {
    fn from(value: f32) -> Self {
        Self::new(value as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_temperature_display() {
        assert_eq!(Temperature::new(47.26).to_string(), "47.3°C");
    }

    #[test]
    fn test_temperature_ordering() {
        assert!(Temperature::new(81.0) > Temperature::new(80.0));
        assert_eq!(Temperature::from(42.0f32).as_celsius(), 42.0);
    }
}
