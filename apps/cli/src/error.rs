//! # CLI Error Type
//!
//! Unified error type for the `regalia` binary. Core validation failures
//! keep their typed payloads so the boundary can render the complete
//! violation lists; everything else wraps the underlying cause.

use std::path::PathBuf;

use regalia_core::PipelineError;
use thiserror::Error;

/// Errors surfaced at the CLI boundary.
#[derive(Debug, Error)]
pub enum CliError {
    /// A feed file could not be opened or parsed as CSV.
    #[error("failed to read {path}: {source}")]
    Feed {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Referential-integrity failure from the settlement pipeline.
    #[error(transparent)]
    Pipeline(#[from] PipelineError),

    /// The report could not be serialized for --json output.
    #[error("failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Wraps a csv-layer error with the offending file path.
    pub fn feed(path: &std::path::Path, source: csv::Error) -> Self {
        CliError::Feed {
            path: path.to_path_buf(),
            source,
        }
    }
}
