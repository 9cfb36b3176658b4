//! Metric source abstraction layer
//!
//! Provides trait-based abstractions over host metric collection for
//! testability. The production source is backed by `sysinfo`.

pub mod system;
pub mod traits;

pub use system::SystemSource;
pub use traits::MetricSource;
