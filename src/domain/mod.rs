//! Domain models for sysalert
//!
//! Metric identifiers plus the typed readings produced by metric sources.

pub mod memory;
pub mod metric;
pub mod thermal;
pub mod uptime;

pub use memory::MemoryUsage;
pub use metric::MetricId;
pub use thermal::Temperature;
pub use uptime::Uptime;
