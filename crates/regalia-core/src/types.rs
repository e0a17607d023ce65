//! # Domain Types
//!
//! Entities parsed from the three feeds and the derived records the
//! pipeline produces from them.
//!
//! ## Type Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Type Flow                                   │
//! │                                                                     │
//! │  RawRecord ──► Author / Book / SaleLine        (normalize)          │
//! │                      │                                              │
//! │                      ▼                                              │
//! │               SalesTotals per ISBN             (aggregate)          │
//! │                      │                                              │
//! │                      ▼                                              │
//! │               TitleEarnings per sold book      (calculate)          │
//! │                      │                                              │
//! │                      ▼                                              │
//! │               AuthorStatement per author       (assemble)           │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Natural-Key Identity
//! Entities are keyed by the identifiers the feeds carry:
//! - `Author.nif` - the author's tax identifier
//! - `Book.isbn` - the book identifier
//! There are no surrogate keys; referential integrity between the feeds
//! is checked explicitly before any calculation runs.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::{Amount, RetentionRate, RoyaltyShare};

/// A raw, untyped row as produced by the upstream CSV tokenizer:
/// header name → cell value, both already trimmed and quote-stripped.
pub type RawRecord = HashMap<String, String>;

// =============================================================================
// Feed Entities
// =============================================================================

/// An author row from the authors feed.
///
/// Constructed once per input row; immutable after normalization. The
/// contact fields pass through the pipeline untouched and only matter to
/// whoever renders the statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    /// Tax identifier (NIF) - unique, non-empty, the author's primary key.
    pub nif: String,

    /// Display name, also the report sort key.
    pub name: String,

    /// Street address.
    pub street: String,

    /// City.
    pub city: String,

    /// Province.
    pub province: String,

    /// Postal code.
    pub postal_code: String,

    /// Contact phone.
    pub phone: String,

    /// Contact email.
    pub email: String,

    /// Bank account for the payout.
    pub iban: String,

    /// Withholding percentage applied to the author's gross earnings.
    pub retention: RetentionRate,
}

/// A book row from the books feed. Must reference an existing author.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    /// ISBN - unique within the books feed.
    pub isbn: String,

    /// Title.
    pub title: String,

    /// NIF of the owning author (foreign key into the authors feed).
    pub author_nif: String,

    /// Fraction of the book's royalties owed to the author.
    pub royalty_share: RoyaltyShare,
}

/// One line of the sales feed. Multiple lines may reference the same
/// book; they are summed by the aggregator, not pre-aggregated here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct SaleLine {
    /// ISBN of the sold book (foreign key into the books feed).
    pub isbn: String,

    /// Units sold on this line.
    pub units: i64,

    /// Gross royalty amount reported for this line, prior to the
    /// author-share multiplication.
    pub royalties: Amount,
}

// =============================================================================
// Derived Records
// =============================================================================

/// Per-book sums across every matching sale line. Keyed by ISBN in the
/// aggregator's output map.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct SalesTotals {
    /// Total units sold.
    pub units: i64,

    /// Total reported royalties.
    pub royalties: Amount,
}

impl SalesTotals {
    /// Folds one sale line into the running totals.
    pub fn accumulate(&mut self, line: &SaleLine) {
        self.units += line.units;
        self.royalties += line.royalties;
    }
}

/// One sold title on an author's statement: the book's aggregated sales
/// joined with its royalty share.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct TitleEarnings {
    /// ISBN of the title.
    pub isbn: String,

    /// Title.
    pub title: String,

    /// Aggregated units sold.
    pub units_sold: i64,

    /// Aggregated royalties reported for the title.
    pub title_royalties: Amount,

    /// The share applied to those royalties.
    pub royalty_share: RoyaltyShare,

    /// Author's gross earnings for the title: royalties × share.
    pub gross_earnings: Amount,
}

/// The final per-author report record: identity and contact data, the
/// sold titles, and the settlement totals.
///
/// ## Settlement Arithmetic
/// `gross_total` sums the kept titles' `gross_earnings`;
/// `withheld = gross_total × retention/100`; `net_total = gross_total −
/// withheld`. None of the three are rounded here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct AuthorStatement {
    /// The author the statement settles.
    pub author: Author,

    /// Sold titles only - books with zero aggregated units are dropped.
    pub titles: Vec<TitleEarnings>,

    /// Total gross earnings across the listed titles.
    pub gross_total: Amount,

    /// Withholding percentage applied.
    pub retention: RetentionRate,

    /// Amount withheld.
    pub withheld: Amount,

    /// Net earnings: gross minus withheld.
    pub net_total: Amount,
}

/// A book whose author NIF was not found in the authors feed. The
/// validator collects every such book so the caller can fix the feed in
/// one pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct UnknownAuthorRef {
    /// The unknown NIF the book references.
    pub nif: String,

    /// ISBN of the offending book.
    pub isbn: String,

    /// Title of the offending book.
    pub title: String,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Amount;

    #[test]
    fn test_sales_totals_accumulate() {
        let mut totals = SalesTotals::default();
        totals.accumulate(&SaleLine {
            isbn: "B1".into(),
            units: 5,
            royalties: Amount::from_value(50.0),
        });
        totals.accumulate(&SaleLine {
            isbn: "B1".into(),
            units: 3,
            royalties: Amount::from_value(30.0),
        });
        assert_eq!(totals.units, 8);
        assert_eq!(totals.royalties.value(), 80.0);
    }

    #[test]
    fn test_statement_serializes_camel_case() {
        let statement = AuthorStatement {
            author: Author {
                nif: "12345678Z".into(),
                name: "Ana Pérez".into(),
                street: "Calle Mayor 1".into(),
                city: "Madrid".into(),
                province: "Madrid".into(),
                postal_code: "28001".into(),
                phone: "600000000".into(),
                email: "ana@example.com".into(),
                iban: "ES0000000000000000000000".into(),
                retention: crate::money::RetentionRate::from_percent(15),
            },
            titles: vec![],
            gross_total: Amount::from_value(8.0),
            retention: crate::money::RetentionRate::from_percent(15),
            withheld: Amount::from_value(1.2),
            net_total: Amount::from_value(6.8),
        };

        let json = serde_json::to_value(&statement).unwrap();
        assert_eq!(json["grossTotal"], 8.0);
        assert_eq!(json["netTotal"], 6.8);
        assert_eq!(json["author"]["postalCode"], "28001");
    }
}
