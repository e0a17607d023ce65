//! # Report Assembler
//!
//! Final pipeline stage: drops authors without earnings and orders the
//! remaining statements by author display name, ascending, using Spanish
//! collation (so "Álvarez" sorts before "Benítez" the way a Spanish
//! reader expects, not the way code points happen to compare).

use std::cmp::Ordering;

use icu_collator::{Collator, CollatorOptions, Strength};
use icu_locid::locale;

use crate::types::AuthorStatement;

/// Builds the Spanish collator used to order the report.
///
/// Collation data is compiled into the binary; construction only fails
/// if the es locale data were missing, in which case the assembler falls
/// back to byte order rather than abort a finished computation.
fn spanish_collator() -> Option<Collator> {
    let mut options = CollatorOptions::new();
    options.strength = Some(Strength::Tertiary);
    Collator::try_new(&locale!("es").into(), options).ok()
}

/// Filters and orders the calculated statements into the final report.
///
/// - statements with a non-positive gross total are dropped;
/// - the rest are sorted by author display name, ascending.
pub fn assemble_report(mut statements: Vec<AuthorStatement>) -> Vec<AuthorStatement> {
    statements.retain(|s| s.gross_total.is_positive());

    let collator = spanish_collator();
    statements.sort_by(|a, b| compare_names(&collator, &a.author.name, &b.author.name));
    statements
}

fn compare_names(collator: &Option<Collator>, a: &str, b: &str) -> Ordering {
    match collator {
        Some(collator) => collator.compare(a, b),
        None => a.cmp(b),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
