use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod cmd;
mod error;
mod format;
mod io;

pub use cli::{Cli, Command, OutputFormat, PathOrStdin};

use error::CliError;

fn main() {
    let cli = Cli::parse();

    // RUST_LOG, when set, overrides the flag-derived level.
    let default_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = dispatch(&cli) {
        eprintln!("{}", e.message());
        std::process::exit(e.exit_code());
    }
}

fn dispatch(cli: &Cli) -> Result<(), CliError> {
    match &cli.command {
        Command::Validate { ibans } => {
            cmd::validate::run(ibans, &cli.format, cli.quiet, cli.verbose, cli.no_color)
        }
        Command::Batch { file } => cmd::batch::run(
            file,
            cli.max_file_size,
            &cli.format,
            cli.quiet,
            cli.verbose,
            cli.no_color,
        ),
        Command::Countries { code, check } => {
            cmd::countries::run(code.as_deref(), *check, &cli.format, cli.quiet, cli.no_color)
        }
        Command::Version => {
            println!("{}", ibancheck_core::version());
            Ok(())
        }
    }
}
