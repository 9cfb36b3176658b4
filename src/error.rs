//! Unified error types for sysalert
//!
//! This module defines all error types used throughout the application.
//! Uses thiserror for ergonomic error definitions.
//!
//! None of the errors below stop the sampling loop. They surface only at
//! startup (CLI commands) or are logged and degraded to "skip this metric
//! for this tick".

use thiserror::Error;

/// Top-level application error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from configuration parsing/validation
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Error reading a metric sample
    #[error("Sample error: {0}")]
    Sample(#[from] SampleError),

    /// Error delivering a notification
    #[error("Notification error: {0}")]
    Notify(#[from] NotifyError),

    /// A notifier reported that delivery failed
    #[error("Notification was not delivered via {0}")]
    DeliveryFailed(String),

    /// Refused to overwrite an existing file
    #[error("File already exists: {0} (use --force to overwrite)")]
    AlreadyExists(String),

    /// IO error (file operations)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors from configuration parsing and validation
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Config file not found
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    /// Config file exists but could not be read
    #[error("Cannot read configuration file {path}: {source}")]
    Unreadable {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse config file
    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    /// Invalid config value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// TOML parsing error
    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    /// JSON parsing/serialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Errors from metric sources
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SampleError {
    /// No sensor could provide the metric
    #[error("No sensor available for {0}")]
    SensorNotFound(String),

    /// The source returned a value that cannot be used
    #[error("Invalid reading for {metric}: {reason}")]
    InvalidReading { metric: String, reason: String },

    /// The underlying source could not be read
    #[error("Metric source unavailable: {0}")]
    Unavailable(String),
}

/// Errors from notification delivery
#[derive(Error, Debug)]
pub enum NotifyError {
    /// No recipient configured for email delivery
    #[error("No recipient configured")]
    NoRecipient,

    /// The delivery command could not be started
    #[error("Failed to start '{command}': {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// The delivery command exited unsuccessfully
    #[error("'{command}' exited with {status}")]
    ExitStatus { command: String, status: String },

    /// Writing the message failed
    #[error("Failed to write notification: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using AppError
pub type Result<T> = std::result::Result<T, AppError>;
