//! # Error Types
//!
//! Validation failures for the settlement pipeline.
//!
//! ## Propagation Policy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                     Failure Flow                                    │
//! │                                                                     │
//! │  Validator ──► PipelineError (returned value, never a panic)        │
//! │                      │                                              │
//! │                      ▼                                              │
//! │  Caller renders the FULL offending list in one pass, fixes the      │
//! │  feed, and reruns. The pipeline never retries internally and        │
//! │  never produces a partial report.                                   │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The two variants are mutually exclusive per run: the author check
//! always precedes the ISBN check and short-circuits it.

use thiserror::Error;

use crate::types::UnknownAuthorRef;

/// A referential-integrity failure between the three feeds.
///
/// Each variant carries the complete batch of violations, not just the
/// first, so the caller can correct the feed in a single pass.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PipelineError {
    /// One or more books reference an author NIF that does not exist in
    /// the authors feed. Collected in book order, every violation listed.
    #[error(
        "{} book(s) reference an author NIF that is not present in the authors file",
        .books.len()
    )]
    UnknownAuthors { books: Vec<UnknownAuthorRef> },

    /// One or more sale lines reference an ISBN that does not exist in
    /// the books feed. Deduplicated, first-occurrence order.
    #[error(
        "{} ISBN(s) in the sales file are not present in the books file",
        .isbns.len()
    )]
    UnknownIsbns { isbns: Vec<String> },
}

/// Convenience type alias for pipeline results.
pub type PipelineResult<T> = Result<T, PipelineError>;

// =============================================================================
// Unit Tests
// =============================================================================
