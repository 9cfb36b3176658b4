//! Configuration builder
//!
//! Merges configuration from files and CLI arguments.

use crate::config::{Config, ConfigFile, ConfigOrigin, LoadedConfig};
use std::path::Path;

/// Builder for merging configuration sources
pub struct ConfigBuilder {
    config: Config,
    origin: ConfigOrigin,
}

impl ConfigBuilder {
    /// Create a new builder with default configuration
    pub fn new() -> Self {
        Self {
            config: Config::default(),
            origin: ConfigOrigin::Defaults,
        }
    }

    /// Load configuration from a file, or the default locations
    ///
    /// Never fails: an unusable file leaves the defaults in place.
    pub fn with_file(mut self, path: Option<&str>) -> Self {
        let loaded = ConfigFile::load_or_default(path.map(Path::new));
        self.config = loaded.config;
        self.origin = loaded.origin;
        self
    }

    /// Override with CLI interval
    pub fn with_interval(mut self, interval: Option<u64>) -> Self {
        match interval {
            Some(0) => log::warn!(
                "Ignoring --interval 0, keeping {}s",
                self.config.general.interval_seconds
            ),
            Some(i) => self.config.general.interval_seconds = i,
            None => {}
        }
        self
    }

    /// Override with CLI cooldown
    pub fn with_cooldown(mut self, cooldown: Option<u64>) -> Self {
        if let Some(c) = cooldown {
            self.config.email.cooldown_seconds = c;
        }
        self
    }

    /// Override with CLI dry-run flag
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        if dry_run {
            self.config.general.dry_run = true;
        }
        self
    }

    /// Build the final configuration
    pub fn build(self) -> LoadedConfig {
        LoadedConfig {
            config: self.config,
            origin: self.origin,
        }
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let loaded = ConfigBuilder::new().build();
        assert_eq!(loaded.config, Config::default());
        assert_eq!(loaded.origin, ConfigOrigin::Defaults);
    }

    #[test]
    fn test_builder_overrides() {
        let loaded = ConfigBuilder::new()
            .with_interval(Some(10))
            .with_cooldown(Some(30))
            .with_dry_run(true)
            .build();

        assert_eq!(loaded.config.general.interval_seconds, 10);
        assert_eq!(loaded.config.email.cooldown_seconds, 30);
        assert!(loaded.config.general.dry_run);
    }

    #[test]
    fn test_builder_ignores_zero_interval() {
        let loaded = ConfigBuilder::new().with_interval(Some(0)).build();
        assert_eq!(loaded.config.general.interval_seconds, 1);
    }

    #[test]
    fn test_builder_with_missing_file() {
        let loaded = ConfigBuilder::new()
            .with_file(Some("/nonexistent/sysalert.toml"))
            .with_cooldown(Some(5))
            .build();

        assert!(loaded.origin.is_default());
        assert_eq!(loaded.config.email.cooldown_seconds, 5);
    }
}
