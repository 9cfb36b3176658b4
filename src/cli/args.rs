//! CLI argument definitions using clap derive
//!
//! Defines all command-line arguments and subcommands.

use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

/// Host metric monitor with threshold alerts
///
/// Samples CPU temperature and memory usage and sends rate-limited
/// notifications when thresholds are exceeded.
#[derive(Parser, Debug)]
#[command(name = "sysalert")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Path to configuration file (TOML, or JSON by extension)
    #[arg(short, long, global = true, env = "SYSALERT_CONFIG")]
    pub config: Option<String>,

    /// Dry run mode - log notifications instead of sending them
    #[arg(long, global = true)]
    pub dry_run: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the sampling loop
    Run(RunArgs),

    /// Sample every metric once and report the alert decisions
    Check,

    /// Show current metric values and thresholds
    Status,

    /// Inspect or create the configuration file
    Config(ConfigArgs),

    /// Send a test notification through the configured channel
    NotifyTest,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Arguments for the sampling loop
#[derive(Parser, Debug)]
pub struct RunArgs {
    /// Sampling interval in seconds (overrides config)
    #[arg(short, long, value_parser = clap::value_parser!(u64).range(1..))]
    pub interval: Option<u64>,

    /// Notification cooldown in seconds (overrides config)
    #[arg(long)]
    pub cooldown: Option<u64>,

    /// Run one tick and exit (single-use mode)
    #[arg(long)]
    pub once: bool,
}

/// Arguments for config commands
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Print the effective configuration and where it came from
    Show,

    /// Write a default configuration file
    Init {
        /// Destination path (defaults to the user config directory)
        #[arg(long)]
        path: Option<String>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Output format
#[derive(ValueEnum, Debug, Clone, Copy, Default)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format for machine parsing
    Json,
    /// Compact single-line format
    Compact,
}

/// Generate shell completions and print to stdout
pub fn generate_completions(shell: Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
}
