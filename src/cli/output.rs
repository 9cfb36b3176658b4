//! Output formatting utilities
//!
//! Provides table and JSON output formatting for CLI commands.

use crate::cli::args::OutputFormat;
use crate::config::{Config, ConfigOrigin};
use crate::domain::{MemoryUsage, MetricId, Temperature, Uptime};
use crate::services::TickReport;
use serde::Serialize;
use std::io::{self, Write};

/// Format and print output based on the selected format
pub fn print_output<T: Serialize + TableDisplay>(data: &T, format: OutputFormat) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();

    match format {
        OutputFormat::Table => {
            writeln!(handle, "{}", data.to_table())?;
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(data).unwrap_or_else(|_| "{}".to_string());
            writeln!(handle, "{}", json)?;
        }
        OutputFormat::Compact => {
            writeln!(handle, "{}", data.to_compact())?;
        }
    }

    Ok(())
}

/// Trait for types that can be displayed as a table
pub trait TableDisplay {
    /// Format as a table string
    fn to_table(&self) -> String;

    /// Format as a compact single line
    fn to_compact(&self) -> String {
        self.to_table().replace('\n', " | ")
    }
}

impl TableDisplay for TickReport {
    fn to_table(&self) -> String {
        let mut output = format!(
            "Tick at {}\n\n",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC")
        );
        output.push_str(&format!(
            "{:<18} {:>12} {:>12}  {}\n",
            "Metric", "Value", "Threshold", "Decision"
        ));

        for m in &self.metrics {
            let value = m
                .value
                .map(|v| m.metric.format_value(v))
                .unwrap_or_else(|| "n/a".to_string());
            let decision = match (&m.decision, &m.error) {
                (Some(d), _) => d.to_string(),
                (None, Some(e)) => format!("SAMPLE FAILED ({})", e),
                (None, None) => "-".to_string(),
            };
            output.push_str(&format!(
                "{:<18} {:>12} {:>12}  {}\n",
                m.metric.display_name(),
                value,
                m.metric.format_value(m.threshold),
                decision
            ));
        }

        output
    }

    fn to_compact(&self) -> String {
        self.metrics
            .iter()
            .map(|m| {
                let value = m
                    .value
                    .map(|v| format!("{:.1}", v))
                    .unwrap_or_else(|| "n/a".to_string());
                let decision = m
                    .decision
                    .map(|d| d.to_string())
                    .unwrap_or_else(|| "ERROR".to_string());
                format!("{}={} {}", m.metric, value, decision)
            })
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Configured threshold for display
#[derive(Debug, Clone, Serialize)]
pub struct ThresholdEntry {
    pub metric: MetricId,
    pub threshold: f64,
}

/// Current host readings for display
#[derive(Debug, Clone, Serialize)]
pub struct StatusView {
    pub cpu_temperature: Option<Temperature>,
    pub cpu_temperature_error: Option<String>,
    pub memory: MemoryUsage,
    pub uptime: Uptime,
    pub thresholds: Vec<ThresholdEntry>,
    pub cooldown_seconds: u64,
}

impl TableDisplay for StatusView {
    fn to_table(&self) -> String {
        let mut output = String::from("Host Status\n");

        let cpu = match (&self.cpu_temperature, &self.cpu_temperature_error) {
            (Some(t), _) => t.to_string(),
            (None, Some(e)) => format!("unavailable ({})", e),
            (None, None) => "unavailable".to_string(),
        };
        output.push_str(&format!("  CPU Temperature: {}\n", cpu));
        output.push_str(&format!("  Memory:          {}\n", self.memory));
        output.push_str(&format!(
            "  Available:       {} kB\n",
            self.memory.available_kib()
        ));
        output.push_str(&format!("  Uptime:          {}\n", self.uptime));

        output.push_str("\nThresholds\n");
        for entry in &self.thresholds {
            output.push_str(&format!(
                "  {:<16} {}\n",
                entry.metric.display_name(),
                entry.metric.format_value(entry.threshold)
            ));
        }
        output.push_str(&format!("  Cooldown:        {}s", self.cooldown_seconds));

        output
    }

    fn to_compact(&self) -> String {
        let cpu = self
            .cpu_temperature
            .map(|t| format!("{:.1}", t.as_celsius()))
            .unwrap_or_else(|| "n/a".to_string());
        let mem = self
            .memory
            .percent()
            .map(|p| format!("{:.1}", p))
            .unwrap_or_else(|| "n/a".to_string());
        format!(
            "cpu_temp={} memory={} uptime={}s",
            cpu,
            mem,
            self.uptime.as_duration().as_secs()
        )
    }
}

/// Effective configuration for display
#[derive(Debug, Clone, Serialize)]
pub struct ConfigView {
    pub origin: ConfigOrigin,
    pub config: Config,
}

impl TableDisplay for ConfigView {
    fn to_table(&self) -> String {
        let c = &self.config;
        let recipient = if c.email.to.is_empty() {
            "(none)"
        } else {
            c.email.to.as_str()
        };
        let channel = if c.general.dry_run {
            "dry-run"
        } else if c.email.use_mailx {
            "mailx"
        } else {
            "terminal"
        };

        format!(
            "Source: {}\n\n\
             [general]\n  interval_seconds = {}\n  dry_run = {}\n\n\
             [thresholds]\n  cpu_temp_c = {}\n  memory_percent = {}\n\n\
             [email]\n  to = {}\n  from = {}\n  use_mailx = {}\n  cooldown_seconds = {}\n  mailx_command = {}\n\n\
             Notification channel: {}",
            self.origin,
            c.general.interval_seconds,
            c.general.dry_run,
            c.thresholds.cpu_temp_c,
            c.thresholds.memory_percent,
            recipient,
            c.email.from,
            c.email.use_mailx,
            c.email.cooldown_seconds,
            c.email.mailx_command,
            channel
        )
    }
}

/// Simple message output
#[derive(Debug, Clone, Serialize)]
pub struct Message {
    pub message: String,
    pub success: bool,
}

impl TableDisplay for Message {
    fn to_table(&self) -> String {
        if self.success {
            format!("✓ {}", self.message)
        } else {
            format!("✗ {}", self.message)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alerts::Decision;
    use crate::services::MetricReport;
    use chrono::{TimeZone, Utc};

    fn report() -> TickReport {
        TickReport {
            timestamp: Utc.timestamp_opt(0, 0).unwrap(),
            metrics: vec![
                MetricReport {
                    metric: MetricId::CpuTemp,
                    value: Some(85.0),
                    threshold: 80.0,
                    decision: Some(Decision::Fired),
                    error: None,
                },
                MetricReport {
                    metric: MetricId::MemoryPercent,
                    value: None,
                    threshold: 90.0,
                    decision: None,
                    error: Some("No sensor available for memory".to_string()),
                },
            ],
        }
    }

    #[test]
    fn test_tick_report_table() {
        let output = report().to_table();
        assert!(output.contains("1970-01-01 00:00:00 UTC"));
        assert!(output.contains("85.00°C"));
        assert!(output.contains("FIRED"));
        assert!(output.contains("SAMPLE FAILED"));
    }

    #[test]
    fn test_tick_report_compact() {
        assert_eq!(
            report().to_compact(),
            "cpu_temp=85.0 FIRED, memory=n/a ERROR"
        );
    }

    #[test]
    fn test_tick_report_json() {
        let json = serde_json::to_value(report()).unwrap();
        assert_eq!(json["metrics"][0]["metric"], "cpu_temp");
        assert_eq!(json["metrics"][0]["decision"], "fired");
        assert!(json["metrics"][1]["value"].is_null());
    }

    #[test]
    fn test_status_view_table() {
        let view = StatusView {
            cpu_temperature: Some(Temperature::new(55.0)),
            cpu_temperature_error: None,
            memory: MemoryUsage {
                total_kib: 1000,
                used_kib: 500,
            },
            uptime: Uptime::from_secs(3661),
            thresholds: vec![ThresholdEntry {
                metric: MetricId::CpuTemp,
                threshold: 80.0,
            }],
            cooldown_seconds: 3600,
        };

        let output = view.to_table();
        assert!(output.contains("55.0°C"));
        assert!(output.contains("50.0%"));
        assert!(output.contains("Available:       500 kB"));
        assert!(output.contains("1 hours 1 minutes 1 seconds"));
        assert!(output.contains("80.00°C"));
        assert_eq!(view.to_compact(), "cpu_temp=55.0 memory=50.0 uptime=3661s");
    }

    #[test]
    fn test_config_view_table() {
        let view = ConfigView {
            origin: ConfigOrigin::Defaults,
            config: Config::default(),
        };
        let output = view.to_table();
        assert!(output.contains("built-in defaults"));
        assert!(output.contains("to = (none)"));
        assert!(output.contains("Notification channel: mailx"));
    }

    #[test]
    fn test_message_table() {
        let msg = Message {
            message: "Notification sent".to_string(),
            success: true,
        };

        assert!(msg.to_table().starts_with('✓'));
    }
}
