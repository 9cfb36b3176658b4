//! Alert and notification system
//!
//! Threshold evaluation with a per-metric cooldown, dispatched through a
//! pluggable notification channel.

mod config;
mod engine;
mod notifier;
mod state;
mod types;

pub use config::{ThresholdConfig, DEFAULT_COOLDOWN};
pub use engine::AlertEngine;
pub use notifier::{
    notifier_from_config, DryRunNotifier, MailxNotifier, Notifier, TerminalNotifier,
};
pub use state::AlertState;
pub use types::{AlertEvent, Decision, Timestamp};
