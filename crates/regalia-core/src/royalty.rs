//! # Royalty Calculator
//!
//! Joins authors to their books and the aggregated sales, and computes
//! each author's settlement figures.
//!
//! ## Per-Author Computation
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  For each author (input order):                                     │
//! │                                                                     │
//! │  owned books ──► totals lookup (zero when absent)                   │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  TitleEarnings: gross = title royalties × royalty share             │
//! │       │                                                             │
//! │       ▼  keep only titles with units sold > 0                       │
//! │                                                                     │
//! │  gross_total = Σ gross                                              │
//! │  withheld    = gross_total × retention / 100                        │
//! │  net_total   = gross_total − withheld                               │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A book that never sold stays owned by its author but is dropped from
//! the statement's title list. No rounding happens here; rendering owns
//! the two-decimal presentation.

use std::collections::HashMap;

use crate::money::Amount;
use crate::types::{Author, AuthorStatement, Book, SalesTotals, TitleEarnings};

/// Computes one (unfiltered) statement per author, in author input order.
///
/// The assembler decides afterwards which statements make the final
/// report; this stage keeps even zero-earning authors so the caller has
/// the complete picture.
pub fn calculate_statements(
    authors: &[Author],
    books: &[Book],
    totals: &HashMap<String, SalesTotals>,
) -> Vec<AuthorStatement> {
    // Group books per owning author, preserving books-feed order within
    // each group.
    let mut books_by_author: HashMap<&str, Vec<&Book>> = HashMap::new();
    for book in books {
        books_by_author
            .entry(book.author_nif.as_str())
            .or_default()
            .push(book);
    }

    authors
        .iter()
        .map(|author| {
            let owned = books_by_author
                .get(author.nif.as_str())
                .map(Vec::as_slice)
                .unwrap_or(&[]);

            let titles: Vec<TitleEarnings> = owned
                .iter()
                .map(|book| title_earnings(book, totals))
                .filter(|earnings| earnings.units_sold > 0)
                .collect();

            let gross_total: Amount = titles.iter().map(|t| t.gross_earnings).sum();
            let withheld = author.retention.withhold_from(gross_total);
            let net_total = gross_total - withheld;

            AuthorStatement {
                author: author.clone(),
                titles,
                gross_total,
                retention: author.retention,
                withheld,
                net_total,
            }
        })
        .collect()
}

/// Joins one book with its aggregated sales. Absent totals mean the book
/// had no sale lines at all: zero units, zero royalties.
fn title_earnings(book: &Book, totals: &HashMap<String, SalesTotals>) -> TitleEarnings {
    let sold = totals.get(&book.isbn).copied().unwrap_or_default();

    TitleEarnings {
        isbn: book.isbn.clone(),
        title: book.title.clone(),
        units_sold: sold.units,
        title_royalties: sold.royalties,
        royalty_share: book.royalty_share,
        gross_earnings: sold.royalties.author_share(book.royalty_share),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
