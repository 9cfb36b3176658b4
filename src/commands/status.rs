//! Status command implementation
//!
//! Renders current host readings next to the configured thresholds.

use crate::cli::args::OutputFormat;
use crate::cli::output::{print_output, StatusView, ThresholdEntry};
use crate::config::ConfigBuilder;
use crate::error::Result;
use crate::source::SystemSource;

/// Execute the status command
pub fn run_status(format: OutputFormat, config_path: Option<&str>) -> Result<()> {
    let loaded = ConfigBuilder::new().with_file(config_path).build();
    let thresholds = loaded.config.threshold_config();

    let mut source = SystemSource::new();
    let (cpu_temperature, cpu_temperature_error) = match source.cpu_temperature() {
        Ok(temp) => (Some(temp), None),
        Err(e) => {
            log::warn!("Could not read CPU temperature: {}", e);
            (None, Some(e.to_string()))
        }
    };

    let view = StatusView {
        cpu_temperature,
        cpu_temperature_error,
        memory: source.memory(),
        uptime: source.uptime(),
        thresholds: thresholds
            .iter()
            .map(|(metric, threshold)| ThresholdEntry { metric, threshold })
            .collect(),
        cooldown_seconds: thresholds.cooldown().as_secs(),
    };

    print_output(&view, format)?;

    Ok(())
}
