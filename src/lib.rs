//! sysalert - host metric sampling with threshold alerts
//!
//! This library samples CPU temperature and memory usage, compares each
//! sample against a configured threshold, and sends rate-limited
//! notifications through mailx, the terminal, or a dry-run logger.
//!
//! # Modules
//!
//! - [`alerts`]: Threshold evaluation, cooldown state and notifiers
//! - [`cli`]: Command-line interface definitions
//! - [`commands`]: Command handlers
//! - [`config`]: Configuration system
//! - [`domain`]: Metric identifiers and reading types
//! - [`error`]: Error types
//! - [`services`]: Sampling loop
//! - [`source`]: Metric source abstraction

pub mod alerts;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod services;
pub mod source;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

pub use error::{AppError, Result};
