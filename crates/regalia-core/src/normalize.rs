//! # Normalizer
//!
//! First pipeline stage: converts raw string-keyed rows into typed
//! entities.
//!
//! ## Contract
//! - Numeric cells are coerced with the parse-or-default functions in
//!   [`crate::money`]; a garbled number becomes zero, never an error.
//! - String cells pass through as-is (the upstream tokenizer already
//!   trimmed and quote-stripped them).
//! - A row missing an expected column behaves as if the cell were empty.
//! - Pure and order-preserving; no side effects.

use crate::money::{self, Amount, RetentionRate, RoyaltyShare};
use crate::types::{Author, Book, RawRecord, SaleLine};

// Expected header names per feed. The sales export spells its columns
// "Uniddes" and "Regalias"; the normalizer reads those keys verbatim.
const AUTHOR_NIF: &str = "idautor";
const AUTHOR_NAME: &str = "nombre";
const AUTHOR_STREET: &str = "domicilio";
const AUTHOR_CITY: &str = "poblacion";
const AUTHOR_PROVINCE: &str = "provincia";
const AUTHOR_POSTAL_CODE: &str = "cpostal";
const AUTHOR_PHONE: &str = "telefono";
const AUTHOR_EMAIL: &str = "email";
const AUTHOR_IBAN: &str = "iban";
const AUTHOR_RETENTION: &str = "retencion";

const BOOK_ISBN: &str = "idlibro";
const BOOK_TITLE: &str = "titulo";
const BOOK_AUTHOR_NIF: &str = "idautor";
const BOOK_ROYALTY_SHARE: &str = "derechos";

const SALE_ISBN: &str = "idlibro";
const SALE_UNITS: &str = "Uniddes";
const SALE_ROYALTIES: &str = "Regalias";

/// Returns a cell by header name, or the empty string when the column is
/// absent from the row.
fn field(row: &RawRecord, key: &str) -> String {
    row.get(key).cloned().unwrap_or_default()
}

/// Normalizes the authors feed. One `Author` per input row, input order
/// preserved.
pub fn normalize_authors(rows: &[RawRecord]) -> Vec<Author> {
    rows.iter()
        .map(|row| Author {
            nif: field(row, AUTHOR_NIF),
            name: field(row, AUTHOR_NAME),
            street: field(row, AUTHOR_STREET),
            city: field(row, AUTHOR_CITY),
            province: field(row, AUTHOR_PROVINCE),
            postal_code: field(row, AUTHOR_POSTAL_CODE),
            phone: field(row, AUTHOR_PHONE),
            email: field(row, AUTHOR_EMAIL),
            iban: field(row, AUTHOR_IBAN),
            retention: RetentionRate::parse_lenient(&field(row, AUTHOR_RETENTION)),
        })
        .collect()
}

/// Normalizes the books feed.
pub fn normalize_books(rows: &[RawRecord]) -> Vec<Book> {
    rows.iter()
        .map(|row| Book {
            isbn: field(row, BOOK_ISBN),
            title: field(row, BOOK_TITLE),
            author_nif: field(row, BOOK_AUTHOR_NIF),
            royalty_share: RoyaltyShare::parse_lenient(&field(row, BOOK_ROYALTY_SHARE)),
        })
        .collect()
}

/// Normalizes the sales feed.
pub fn normalize_sales(rows: &[RawRecord]) -> Vec<SaleLine> {
    rows.iter()
        .map(|row| SaleLine {
            isbn: field(row, SALE_ISBN),
            units: money::lenient_integer(&field(row, SALE_UNITS)),
            royalties: Amount::parse_lenient(&field(row, SALE_ROYALTIES)),
        })
        .collect()
}

// =============================================================================
// Unit Tests
// =============================================================================
