//! # CSV Ingestion
//!
//! Reads one feed file into the raw string-keyed records the core
//! consumes.
//!
//! ## Tokenizer Contract
//! The core expects cells that are already trimmed and quote-stripped;
//! this module owns that contract:
//! - the first row is the header; quoted fields may contain commas and
//!   `""` escapes;
//! - every header and cell is trimmed and stripped of any remaining `"`
//!   characters;
//! - blank lines are ignored;
//! - a data row whose field count differs from the header is skipped
//!   with a warning (a truncated export should not silently shift
//!   columns);
//! - a file with only a header yields an empty record set.

use std::path::Path;

use regalia_core::RawRecord;
use tracing::{debug, warn};

use crate::error::CliError;

/// Reads every record of a feed file.
pub fn read_records(path: &Path) -> Result<Vec<RawRecord>, CliError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .map_err(|e| CliError::feed(path, e))?;

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| CliError::feed(path, e))?
        .iter()
        .map(clean_cell)
        .collect();

    let mut rows = Vec::new();
    for (index, result) in reader.records().enumerate() {
        let record = result.map_err(|e| CliError::feed(path, e))?;
        if record.len() != headers.len() {
            // Header line is row 1, so the first data row is row 2.
            warn!(
                file = %path.display(),
                row = index + 2,
                expected = headers.len(),
                found = record.len(),
                "skipping row with mismatched column count"
            );
            continue;
        }

        let row: RawRecord = headers
            .iter()
            .cloned()
            .zip(record.iter().map(clean_cell))
            .collect();
        rows.push(row);
    }

    debug!(file = %path.display(), rows = rows.len(), "feed loaded");
    Ok(rows)
}

/// Trims a cell and strips any quote characters the unquoting pass left
/// behind.
fn clean_cell(cell: &str) -> String {
    cell.trim().replace('"', "")
}

// =============================================================================
// Unit Tests
// =============================================================================
