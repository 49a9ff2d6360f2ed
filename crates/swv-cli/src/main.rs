//! # swv CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use swv_cli::schemas::{run_schemas, SchemasArgs};
use swv_cli::validate::{run_validate, ValidateArgs};

/// Swagger component-schema validator.
///
/// Checks JSON payloads against the named schemas of an OpenAPI
/// `components.schemas` section and prints one path-qualified diagnostic per
/// violation.
#[derive(Parser, Debug)]
#[command(name = "swv", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate a JSON payload against a named schema.
    Validate(ValidateArgs),

    /// List the component schemas declared by a swagger document.
    Schemas(SchemasArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    tracing::debug!("swv CLI v{} starting", env!("CARGO_PKG_VERSION"));

    let result = match cli.command {
        Commands::Validate(args) => run_validate(&args),
        Commands::Schemas(args) => run_schemas(&args),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(2)
        }
    }
}
