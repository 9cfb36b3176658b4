//! sysalert - host metric alerting tool
//!
//! A command-line tool that samples CPU temperature and memory usage and
//! sends a notification when a threshold is exceeded.

use clap::Parser;
use sysalert::cli::args::{generate_completions, Cli, Commands};
use sysalert::commands::{run_check, run_config, run_monitor, run_notify_test, run_status};
use sysalert::error::{AppError, NotifyError};

fn main() {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Set log level based on verbose flag
    if cli.verbose {
        log::set_max_level(log::LevelFilter::Debug);
    }

    // Run the appropriate command
    let result = run(&cli);

    if let Err(e) = result {
        log::error!("{}", e);
        print_error(&e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), AppError> {
    let config = cli.config.as_deref();

    match &cli.command {
        Commands::Run(args) => run_monitor(args, cli.format, config, cli.dry_run),

        Commands::Check => run_check(cli.format, config, cli.dry_run),

        Commands::Status => run_status(cli.format, config),

        Commands::Config(args) => run_config(args, cli.format, config, cli.dry_run),

        Commands::NotifyTest => run_notify_test(cli.format, config, cli.dry_run),

        Commands::Completions { shell } => {
            generate_completions(*shell);
            Ok(())
        }
    }
}

fn print_error(err: &AppError) {
    eprintln!("Error: {}", err);

    // Print helpful hints for common errors
    match err {
        AppError::Notify(NotifyError::NoRecipient) => {
            eprintln!();
            eprintln!("Hint: Set email.to in the configuration file.");
        }
        AppError::DeliveryFailed(_) => {
            eprintln!();
            eprintln!("Hint: Run with -v for delivery details. If mailx is missing,");
            eprintln!("      set email.mailx_command or email.use_mailx = false.");
        }
        AppError::AlreadyExists(_) => {
            eprintln!();
            eprintln!("Hint: Pass --path to write somewhere else.");
        }
        _ => {}
    }
}
