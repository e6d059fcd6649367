// CLI module
// Command-line interface, argument parsing and logging setup

mod args;
mod commands;
mod session;

pub use args::{CliArgs, Command, OutputFormat};
pub use commands::execute;

use crate::types::BankResult;
use clap::Parser;
use std::io::Write;
use tracing_subscriber::EnvFilter;

/// Parse command-line arguments using clap
///
/// If parsing fails (invalid arguments, missing subcommand, or `--help`),
/// clap prints the error or help text and exits the process.
pub fn parse_args() -> CliArgs {
    CliArgs::parse()
}

/// Execute the parsed command, writing results to `output`
///
/// `shell` reads its answers from stdin.
pub fn run(args: &CliArgs, output: &mut dyn Write) -> BankResult<()> {
    let stdin = std::io::stdin();
    execute(&args.command, &args.data_file, &mut stdin.lock(), output)
}

/// Install the global tracing subscriber
///
/// Logs go to stderr so they never mix with command output. `RUST_LOG`, when
/// set, takes precedence over the verbosity flag.
pub fn init_logging(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_log_level(verbosity)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn default_log_level(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}
