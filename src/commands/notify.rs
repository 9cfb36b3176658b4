//! Notify-test command implementation
//!
//! Sends one message through the configured channel, bypassing thresholds
//! and cooldowns.

use crate::alerts::{notifier_from_config, Notifier};
use crate::cli::args::OutputFormat;
use crate::cli::output::{print_output, Message};
use crate::config::ConfigBuilder;
use crate::error::{AppError, NotifyError, Result};

use chrono::{SecondsFormat, Utc};

const TEST_SUBJECT: &str = "SystemMonitor: Test Notification";

/// Execute the notify-test command
pub fn run_notify_test(format: OutputFormat, config_path: Option<&str>, dry_run: bool) -> Result<()> {
    let loaded = ConfigBuilder::new()
        .with_file(config_path)
        .with_dry_run(dry_run)
        .build();

    let config = &loaded.config;
    if !config.general.dry_run && config.email.use_mailx && config.email.to.is_empty() {
        return Err(NotifyError::NoRecipient.into());
    }

    let notifier = notifier_from_config(config);
    send_test(notifier.as_ref())?;

    let msg = Message {
        message: format!("Test notification sent via {}", notifier.name()),
        success: true,
    };
    print_output(&msg, format)?;

    Ok(())
}

fn send_test(notifier: &dyn Notifier) -> Result<()> {
    let body = format!(
        "This is a test notification from sysalert.\nTime: {}\n",
        Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
    );

    if notifier.send(TEST_SUBJECT, &body) {
        Ok(())
    } else {
        Err(AppError::DeliveryFailed(notifier.name().to_string()))
    }
}
