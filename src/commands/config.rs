//! Config command implementation
//!
//! Shows the effective configuration or writes a default file.

use crate::cli::args::{ConfigArgs, ConfigCommands, OutputFormat};
use crate::cli::output::{print_output, ConfigView, Message};
use crate::config::{Config, ConfigBuilder, ConfigFile};
use crate::error::{AppError, Result};
use std::path::{Path, PathBuf};

/// Execute config commands
pub fn run_config(
    args: &ConfigArgs,
    format: OutputFormat,
    config_path: Option<&str>,
    dry_run: bool,
) -> Result<()> {
    match &args.command {
        ConfigCommands::Show => run_config_show(format, config_path, dry_run),
        ConfigCommands::Init { path, force } => {
            let path = path
                .as_deref()
                .map(PathBuf::from)
                .unwrap_or_else(ConfigFile::default_write_path);
            init_config(&path, *force)?;

            let msg = Message {
                message: format!("Wrote default configuration to {}", path.display()),
                success: true,
            };
            print_output(&msg, format)?;
            Ok(())
        }
    }
}

fn run_config_show(format: OutputFormat, config_path: Option<&str>, dry_run: bool) -> Result<()> {
    let loaded = ConfigBuilder::new()
        .with_file(config_path)
        .with_dry_run(dry_run)
        .build();

    let view = ConfigView {
        origin: loaded.origin,
        config: loaded.config,
    };
    print_output(&view, format)?;

    Ok(())
}

/// Write the default configuration, refusing to clobber unless forced
fn init_config(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(AppError::AlreadyExists(path.display().to_string()));
    }

    ConfigFile::save(&Config::default(), path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_writes_loadable_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sysalert.toml");

        init_config(&path, false).unwrap();
        assert_eq!(ConfigFile::load(&path).unwrap(), Config::default());
    }

    #[test]
    fn test_init_refuses_overwrite_without_force() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{}").unwrap();

        assert!(matches!(
            init_config(&path, false),
            Err(AppError::AlreadyExists(_))
        ));

        init_config(&path, true).unwrap();
        assert_eq!(ConfigFile::load(&path).unwrap(), Config::default());
    }
}
