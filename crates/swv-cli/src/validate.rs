//! # Validate Subcommand
//!
//! Reads a swagger document and a JSON payload from disk, validates the
//! payload against one named component schema, and prints the result.
//!
//! Text output keeps the classic report shape:
//!
//! ```text
//! swagger errors found:
//! 1: User.username: prop username is missing but required
//! 2: User.password: expected type string but found float64
//! ```

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};

use swv_schema::validate_source;

/// Arguments for the `swv validate` subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Swagger/OpenAPI document (YAML or JSON) declaring `components.schemas`.
    #[arg(long, value_name = "FILE")]
    pub swagger: PathBuf,

    /// Name of the component schema the payload must conform to.
    #[arg(long, value_name = "NAME")]
    pub schema: String,

    /// JSON payload to validate.
    #[arg(value_name = "DATA_FILE")]
    pub data: PathBuf,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// How diagnostics are printed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Numbered human-readable lines.
    Text,
    /// A JSON array of diagnostic strings.
    Json,
}

/// Execute the validate subcommand.
///
/// Returns exit code: 0 when the payload is valid, 1 when diagnostics were
/// reported. Unreadable files are errors (exit 2 at the top level).
pub fn run_validate(args: &ValidateArgs) -> Result<u8> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    execute(args, &mut out)
}

/// [`run_validate`] with an explicit output sink.
pub fn execute(args: &ValidateArgs, out: &mut impl Write) -> Result<u8> {
    let swagger = crate::read_input(&args.swagger)?;
    let payload = crate::read_input(&args.data)?;

    let messages = validate_source(&payload, &swagger, &args.schema);

    tracing::info!(
        schema = %args.schema,
        data = %args.data.display(),
        diagnostics = messages.len(),
        "validation finished"
    );

    write_report(out, args.format, &args.data, &messages).context("failed to write report")?;

    Ok(if messages.is_empty() { 0 } else { 1 })
}

fn write_report(
    out: &mut impl Write,
    format: OutputFormat,
    data: &Path,
    messages: &[String],
) -> Result<()> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, messages)?;
            writeln!(out)?;
        }
        OutputFormat::Text if messages.is_empty() => {
            writeln!(out, "OK: {}", data.display())?;
        }
        OutputFormat::Text => {
            writeln!(out, "swagger errors found:")?;
            for (i, message) in messages.iter().enumerate() {
                writeln!(out, "{}: {message}", i + 1)?;
            }
        }
    }
    Ok(())
}
