//! # Validator
//!
//! Referential-integrity checks between the three feeds. Runs after
//! normalization and before any calculation; a failure aborts the run.
//!
//! ## Two Sequential Checks
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  1. Author existence    every Book.author_nif ∈ authors             │
//! │          │              violations: ALL offending books             │
//! │          ▼ (pass)                                                   │
//! │  2. ISBN existence      every SaleLine.isbn ∈ books                 │
//! │                         violations: distinct ISBNs, first-seen      │
//! │                         order                                       │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Violations are batched, not fail-fast: the caller gets every problem
//! in one list and can fix the feed in a single pass.

use std::collections::HashSet;

use tracing::warn;

use crate::error::{PipelineError, PipelineResult};
use crate::types::{Author, Book, SaleLine, UnknownAuthorRef};

/// Checks that every book references a known author.
///
/// Collects all violating books, in book order, into the error payload.
pub fn check_author_references(authors: &[Author], books: &[Book]) -> PipelineResult<()> {
    let known: HashSet<&str> = authors.iter().map(|a| a.nif.as_str()).collect();

    let unknown: Vec<UnknownAuthorRef> = books
        .iter()
        .filter(|book| !known.contains(book.author_nif.as_str()))
        .map(|book| UnknownAuthorRef {
            nif: book.author_nif.clone(),
            isbn: book.isbn.clone(),
            title: book.title.clone(),
        })
        .collect();

    if unknown.is_empty() {
        Ok(())
    } else {
        warn!(count = unknown.len(), "books reference unknown author NIFs");
        Err(PipelineError::UnknownAuthors { books: unknown })
    }
}

/// Checks that every sale line references a known book.
///
/// Violating ISBNs are deduplicated; the first occurrence fixes the
/// position of each in the error payload.
pub fn check_sale_references(books: &[Book], sales: &[SaleLine]) -> PipelineResult<()> {
    let known: HashSet<&str> = books.iter().map(|b| b.isbn.as_str()).collect();

    let mut seen: HashSet<&str> = HashSet::new();
    let mut unknown: Vec<String> = Vec::new();
    for line in sales {
        if !known.contains(line.isbn.as_str()) && seen.insert(line.isbn.as_str()) {
            unknown.push(line.isbn.clone());
        }
    }

    if unknown.is_empty() {
        Ok(())
    } else {
        warn!(count = unknown.len(), "sale lines reference unknown ISBNs");
        Err(PipelineError::UnknownIsbns { isbns: unknown })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
