//! # Regalia CLI
//!
//! Command-line host for the settlement pipeline.
//!
//! ## Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  regalia --authors a.csv --books b.csv --sales s.csv [--json]       │
//! │                                                                     │
//! │  csv_import ──► raw records ──► regalia-core ──► render             │
//! │                                      │                              │
//! │                                      └─► validation failure:        │
//! │                                          full violation list,       │
//! │                                          exit code 1                │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

mod csv_import;
mod error;
mod render;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use regalia_core::settle_royalties;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::error::CliError;

/// Computes per-author royalty statements from three CSV feeds.
#[derive(Debug, Parser)]
#[command(name = "regalia", version, about)]
struct Cli {
    /// Authors feed (idautor, nombre, ..., retencion)
    #[arg(long, value_name = "FILE")]
    authors: PathBuf,

    /// Books feed (idlibro, titulo, idautor, derechos)
    #[arg(long, value_name = "FILE")]
    books: PathBuf,

    /// Sales feed (idlibro, Uniddes, Regalias)
    #[arg(long, value_name = "FILE")]
    sales: PathBuf,

    /// Emit the statement records as JSON instead of rendered text
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(CliError::Pipeline(err)) => {
            render::print_failure(&err, cli.json);
            ExitCode::FAILURE
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let raw_authors = csv_import::read_records(&cli.authors)?;
    let raw_books = csv_import::read_records(&cli.books)?;
    let raw_sales = csv_import::read_records(&cli.sales)?;
    info!(
        authors = raw_authors.len(),
        books = raw_books.len(),
        sales = raw_sales.len(),
        "feeds ingested"
    );

    let report = settle_royalties(&raw_authors, &raw_books, &raw_sales)?;

    if cli.json {
        render::print_json(&report)?;
    } else {
        render::print_statements(&report);
    }
    Ok(())
}
