mod commands;
mod core;

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use dotenv::dotenv;
use tracing_subscriber::EnvFilter;

use crate::commands::read::ReadCommand;
use crate::commands::schema::SchemaCommand;
use crate::core::error::CliError;

#[derive(Parser)]
#[command(name = "gigo-provider")]
#[command(about = "Read the facts Gigo exposes to workspace templates", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Read a data source and print its attributes as JSON
    Read(ReadCommand),
    /// Print data source schemas as JSON
    Schema(SchemaCommand),
}

fn main() -> ExitCode {
    dotenv().ok();

    // Logs go to stderr so stdout stays machine readable.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Read(cmd) => cmd.execute(),
        Commands::Schema(cmd) => cmd.execute(),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            match err.downcast_ref::<CliError>() {
                Some(cli_err) => cli_err.render(),
                None => CliError::Config(format!("{:#}", err)).render(),
            }
            ExitCode::FAILURE
        }
    }
}
