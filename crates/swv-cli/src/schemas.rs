//! # Schemas Subcommand
//!
//! Lists the component schema names a swagger document declares, in
//! declaration order. Useful for picking the `--schema` argument of
//! `swv validate`.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use swv_core::SchemaDocument;

/// Arguments for the `swv schemas` subcommand.
#[derive(Args, Debug)]
pub struct SchemasArgs {
    /// Swagger/OpenAPI document (YAML or JSON).
    #[arg(long, value_name = "FILE")]
    pub swagger: PathBuf,
}

/// Execute the schemas subcommand.
///
/// Returns exit code 0, or 1 when the document does not decode.
pub fn run_schemas(args: &SchemasArgs) -> Result<u8> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    execute(args, &mut out)
}

/// [`run_schemas`] with an explicit output sink.
pub fn execute(args: &SchemasArgs, out: &mut impl Write) -> Result<u8> {
    let source = crate::read_input(&args.swagger)?;
    let document = match SchemaDocument::from_yaml_str(&source) {
        Ok(document) => document,
        Err(e) => {
            writeln!(out, "FAIL: {}: {e}", args.swagger.display())?;
            return Ok(1);
        }
    };

    tracing::info!(count = document.len(), "decoded schema document");

    for name in document.names() {
        writeln!(out, "{name}")?;
    }
    Ok(0)
}
