//! Command-line interface
//!
//! Argument definitions (clap derive) and table/JSON output rendering.

pub mod args;
pub mod output;

pub use args::{Cli, Commands, OutputFormat};
