mod cli;
mod commands;
mod error;
mod output;

use clap::Parser;
use salescast_core::PersistedModel;

use crate::cli::Cli;
use crate::error::CliError;

fn main() {
    if let Err(error) = run() {
        eprintln!("error: {error}");
        std::process::exit(error.exit_code());
    }
}

fn run() -> Result<(), CliError> {
    let cli = Cli::parse();

    // The loaded model is the only process-wide state: constructed here,
    // read-only, passed into the command path. A missing or unreadable file
    // halts startup before any command runs.
    let model = PersistedModel::load(&cli.model)?;

    let envelope = commands::run(&cli, &model)?;
    output::render(&envelope, cli.format, cli.pretty)
}
