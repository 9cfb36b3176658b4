//! Service layer
//!
//! Services orchestrate metric sampling and alert evaluation.

pub mod monitor;

pub use monitor::{MetricReport, Monitor, MonitorConfig, TickReport};
