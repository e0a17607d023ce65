//! # Settlement Pipeline
//!
//! The single entry point that runs the stages in order.
//!
//! ## Stage Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Settlement Pipeline                            │
//! │                                                                     │
//! │  raw rows                                                           │
//! │     │                                                               │
//! │     ▼                                                               │
//! │  Normalizer ──► Validator ──┬─► PipelineError (stop, full batch)    │
//! │                             │                                       │
//! │                             ▼ (pass)                                │
//! │  Aggregator ──► Calculator ──► Assembler ──► Vec<AuthorStatement>   │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Execution Model
//! Synchronous and single-threaded: a pure in-memory transformation with
//! no suspension points. Hosts that must keep an interactive surface
//! responsive run the whole call on a worker thread; that is a caller
//! scheduling decision, not a property of this function. Every
//! invocation owns its inputs and outputs - nothing is memoized between
//! runs, so repeated calls with fresh feeds are always safe.

use tracing::{debug, info};

use crate::error::PipelineResult;
use crate::types::{AuthorStatement, RawRecord};
use crate::{aggregate, normalize, report, royalty, validate};

/// Runs the full settlement over the three raw feeds.
///
/// Returns the final ordered report, or the first referential-integrity
/// failure with its complete violation batch. There is no partial
/// success: either every statement is produced or none is.
pub fn settle_royalties(
    raw_authors: &[RawRecord],
    raw_books: &[RawRecord],
    raw_sales: &[RawRecord],
) -> PipelineResult<Vec<AuthorStatement>> {
    let authors = normalize::normalize_authors(raw_authors);
    let books = normalize::normalize_books(raw_books);
    let sales = normalize::normalize_sales(raw_sales);
    debug!(
        authors = authors.len(),
        books = books.len(),
        sales = sales.len(),
        "feeds normalized"
    );

    validate::check_author_references(&authors, &books)?;
    validate::check_sale_references(&books, &sales)?;

    let totals = aggregate::aggregate_sales(&sales);
    debug!(titles_sold = totals.len(), "sales aggregated");

    let statements = royalty::calculate_statements(&authors, &books, &totals);
    let report = report::assemble_report(statements);
    info!(statements = report.len(), "settlement complete");

    Ok(report)
}
