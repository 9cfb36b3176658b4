//! Configuration system
//!
//! Handles TOML/JSON config file parsing and CLI argument merging.
//!
//! The file schema keeps the section names of the historical
//! `config/config.json` layout (`thresholds`, `email`) so existing files keep
//! working.

pub mod builder;
pub mod file;

pub use builder::ConfigBuilder;
pub use file::{ConfigFile, ConfigFormat, ConfigOrigin, LoadedConfig};

use crate::alerts::ThresholdConfig;
use crate::domain::MetricId;
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// General settings
    pub general: GeneralConfig,
    /// Per-metric alert thresholds
    pub thresholds: ThresholdsConfig,
    /// Notification delivery settings
    pub email: EmailConfig,
}

impl Config {
    /// Validate values that parse but make no sense
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (key, value) in [
            ("thresholds.cpu_temp_c", self.thresholds.cpu_temp_c),
            ("thresholds.memory_percent", self.thresholds.memory_percent),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::InvalidValue {
                    key: key.to_string(),
                    message: format!("must be a finite number, got {}", value),
                });
            }
        }

        if self.general.interval_seconds == 0 {
            return Err(ConfigError::InvalidValue {
                key: "general.interval_seconds".to_string(),
                message: "must be at least 1".to_string(),
            });
        }

        Ok(())
    }

    /// Build the immutable threshold snapshot used by the alert engine
    pub fn threshold_config(&self) -> ThresholdConfig {
        ThresholdConfig::defaults()
            .with_threshold(MetricId::CpuTemp, self.thresholds.cpu_temp_c)
            .with_threshold(MetricId::MemoryPercent, self.thresholds.memory_percent)
            .with_cooldown(Duration::from_secs(self.email.cooldown_seconds))
    }

    /// Sampling interval
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.general.interval_seconds)
    }
}

/// General configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Sampling loop interval in seconds
    pub interval_seconds: u64,
    /// Log notifications instead of delivering them
    pub dry_run: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            interval_seconds: 1,
            dry_run: false,
        }
    }
}

/// Threshold configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThresholdsConfig {
    /// CPU temperature threshold in Celsius
    pub cpu_temp_c: f64,
    /// Memory usage threshold in percent
    pub memory_percent: f64,
}

impl Default for ThresholdsConfig {
    fn default() -> Self {
        Self {
            cpu_temp_c: MetricId::CpuTemp.default_threshold(),
            memory_percent: MetricId::MemoryPercent.default_threshold(),
        }
    }
}

/// Email notification configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmailConfig {
    /// Recipient address
    pub to: String,
    /// Sender address, written as a From header
    pub from: String,
    /// Deliver through mailx; otherwise notifications go to the terminal
    pub use_mailx: bool,
    /// Minimum seconds between two notifications for the same metric
    pub cooldown_seconds: u64,
    /// mailx executable name or path
    pub mailx_command: String,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            to: String::new(),
            from: "system-monitor@localhost".to_string(),
            use_mailx: true,
            cooldown_seconds: 3600,
            mailx_command: "mailx".to_string(),
        }
    }
}
