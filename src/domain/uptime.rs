//! Uptime domain type

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Time since the host booted
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Uptime(Duration);

impl Uptime {
    pub const fn from_secs(secs: u64) -> Self {
        Self(Duration::from_secs(secs))
    }

    pub const fn as_duration(&self) -> Duration {
        self.0
    }

    pub const fn hours(&self) -> u64 {
        self.0.as_secs() / 3600
    }

    pub const fn minutes(&self) -> u64 {
        (self.0.as_secs() % 3600) / 60
    }

    pub const fn seconds(&self) -> u64 {
        self.0.as_secs() % 60
    }
}

impl fmt::Display for Uptime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} hours {} minutes {} seconds",
            self.hours(),
            self.minutes(),
            self.seconds()
        )
    }
}
