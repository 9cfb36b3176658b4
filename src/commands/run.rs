//! Sampling loop commands
//!
//! `run` drives the monitor until interrupted; `check` performs one tick.

use crate::alerts::{notifier_from_config, AlertEngine};
use crate::cli::args::{OutputFormat, RunArgs};
use crate::cli::output::print_output;
use crate::config::{Config, ConfigBuilder};
use crate::error::Result;
use crate::services::{Monitor, MonitorConfig};
use crate::source::SystemSource;

/// Execute the run command
pub fn run_monitor(
    args: &RunArgs,
    format: OutputFormat,
    config_path: Option<&str>,
    dry_run: bool,
) -> Result<()> {
    let loaded = ConfigBuilder::new()
        .with_file(config_path)
        .with_interval(args.interval)
        .with_cooldown(args.cooldown)
        .with_dry_run(dry_run)
        .build();

    log::info!("Configuration: {}", loaded.origin);
    let mut monitor = build_monitor(&loaded.config, args.once);

    log::info!("Starting sampling loop");
    log::info!("  Interval: {:?}", monitor.config().interval);
    log::info!("  Cooldown: {:?}", monitor.engine().config().cooldown());
    log::info!("  Notifier: {}", monitor.engine().notifier_name());
    for (metric, threshold) in monitor.engine().config().iter() {
        log::info!("  Threshold {}: {}", metric, metric.format_value(threshold));
    }

    let mut output = Ok(());
    monitor.run(|report| {
        if args.once {
            output = print_output(report, format);
        }
    });
    output?;

    Ok(())
}

/// Execute the check command
pub fn run_check(format: OutputFormat, config_path: Option<&str>, dry_run: bool) -> Result<()> {
    let loaded = ConfigBuilder::new()
        .with_file(config_path)
        .with_dry_run(dry_run)
        .build();

    let mut monitor = build_monitor(&loaded.config, true);
    let report = monitor.tick();
    print_output(&report, format)?;

    Ok(())
}

fn build_monitor(config: &Config, single_use: bool) -> Monitor<SystemSource> {
    let engine = AlertEngine::new(config.threshold_config(), notifier_from_config(config));
    let monitor_config = MonitorConfig {
        interval: config.interval(),
        single_use,
    };
    Monitor::new(monitor_config, SystemSource::new(), engine)
}
