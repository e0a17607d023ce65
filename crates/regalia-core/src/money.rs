//! # Money Module
//!
//! Monetary amounts and the two rate types used by the settlement pipeline.
//!
//! ## Why `f64` Amounts?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  THE SETTLEMENT CONTRACT                                            │
//! │                                                                     │
//! │  Royalty feeds report fractional euro amounts ("12,5") and          │
//! │  fractional shares ("0.10"). The pipeline multiplies and sums       │
//! │  them WITHOUT internal rounding; two-decimal rounding happens       │
//! │  only when a statement is rendered.                                 │
//! │                                                                     │
//! │  Amounts therefore carry full float precision end to end.           │
//! │  Rendering (Display / the CLI) is the only place that rounds.       │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Lenient Parsing
//! Feed cells are coerced, never rejected: quote characters are stripped,
//! a comma decimal separator becomes a dot, and the leading numeric
//! prefix is read the way browser number parsing reads a cell - trailing
//! garbage like a unit suffix is ignored (`"80 €"` is 80), and a cell
//! with no leading number becomes zero. `parse_lenient` on each type is
//! the parse-or-default entry point; there is no throwing parse.
//!
//! ## Usage
//! ```rust
//! use regalia_core::money::{Amount, RetentionRate, RoyaltyShare};
//!
//! let royalties = Amount::parse_lenient("\"80,0\"");
//! let share = RoyaltyShare::parse_lenient("0.10");
//! let gross = royalties.author_share(share);
//! assert_eq!(gross.value(), 8.0);
//!
//! let retention = RetentionRate::parse_lenient("10");
//! assert_eq!(retention.withhold_from(gross).value(), 0.8);
//! ```

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub};

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Coerces a raw feed cell to a float.
///
/// Strips embedded quote characters, converts a comma decimal separator
/// to a dot, then reads the leading numeric prefix; trailing garbage is
/// ignored. A cell with no leading number (or a non-finite result)
/// becomes `0.0`.
fn lenient_decimal(raw: &str) -> f64 {
    let cleaned = raw.replace('"', "").replacen(',', ".", 1);
    match decimal_prefix(cleaned.trim()) {
        Some(value) if value.is_finite() => value,
        _ => 0.0,
    }
}

/// Parses the longest leading substring that forms a decimal literal:
/// optional sign, digits, fraction, exponent. `"80 €"` reads as 80 and
/// `"12.3,4"` as 12.3, matching how the feeds were consumed before.
fn decimal_prefix(s: &str) -> Option<f64> {
    let bytes = s.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }

    let mut saw_digit = false;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
        saw_digit = true;
    }
    if end < bytes.len() && bytes[end] == b'.' {
        end += 1;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
            saw_digit = true;
        }
    }
    if !saw_digit {
        return None;
    }

    // An exponent only counts when at least one digit follows it;
    // "12e" reads as 12.
    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp = end + 1;
        if exp < bytes.len() && matches!(bytes[exp], b'+' | b'-') {
            exp += 1;
        }
        let digits_start = exp;
        while exp < bytes.len() && bytes[exp].is_ascii_digit() {
            exp += 1;
        }
        if exp > digits_start {
            end = exp;
        }
    }

    s[..end].parse().ok()
}

/// Coerces a raw feed cell to a base-10 integer by reading the leading
/// digit run; `"15%"` reads as 15 and `"7.5"` as 7. A cell with no
/// leading digits becomes `0`.
pub(crate) fn lenient_integer(raw: &str) -> i64 {
    let cleaned = raw.replace('"', "");
    let trimmed = cleaned.trim();
    let bytes = trimmed.as_bytes();

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }
    let digits_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    if end == digits_start {
        return 0;
    }

    trimmed[..end].parse().unwrap_or(0)
}

// =============================================================================
// Amount
// =============================================================================

/// A monetary value in euros.
///
/// ## Design Decisions
/// - **f64**: feeds report fractional euros; the pipeline must not round
/// - **Signed**: negative feed lines pass through uncorrected
/// - **Single-field tuple struct**: zero-cost wrapper, serializes as a
///   plain number for presentation consumers
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Amount(f64);

impl Amount {
    /// Creates an amount from a raw euro value.
    #[inline]
    pub const fn from_value(value: f64) -> Self {
        Amount(value)
    }

    /// Returns the raw euro value.
    #[inline]
    pub const fn value(&self) -> f64 {
        self.0
    }

    /// Zero euros.
    #[inline]
    pub const fn zero() -> Self {
        Amount(0.0)
    }

    /// Checks whether the amount is strictly positive.
    #[inline]
    pub fn is_positive(&self) -> bool {
        self.0 > 0.0
    }

    /// Parses a feed cell, coercing failures to zero.
    ///
    /// ## Example
    /// ```rust
    /// use regalia_core::money::Amount;
    ///
    /// assert_eq!(Amount::parse_lenient("12,5").value(), 12.5);
    /// assert_eq!(Amount::parse_lenient("\"80\"").value(), 80.0);
    /// assert_eq!(Amount::parse_lenient("80 €").value(), 80.0);
    /// assert_eq!(Amount::parse_lenient("n/a").value(), 0.0);
    /// assert_eq!(Amount::parse_lenient("").value(), 0.0);
    /// ```
    pub fn parse_lenient(raw: &str) -> Self {
        Amount(lenient_decimal(raw))
    }

    /// Returns the author's portion of this amount under a royalty share.
    ///
    /// ## Example
    /// ```rust
    /// use regalia_core::money::{Amount, RoyaltyShare};
    ///
    /// let book_royalties = Amount::from_value(80.0);
    /// let share = RoyaltyShare::from_fraction(0.10);
    /// assert_eq!(book_royalties.author_share(share).value(), 8.0);
    /// ```
    #[inline]
    pub fn author_share(&self, share: RoyaltyShare) -> Amount {
        Amount(self.0 * share.fraction())
    }
}

/// Display rounds to two decimals with a euro suffix. This is the
/// rendering boundary; calculations never go through it.
impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} €", self.0)
    }
}

impl Add for Amount {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Amount(self.0 + other.0)
    }
}

impl AddAssign for Amount {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Amount {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Amount(self.0 - other.0)
    }
}

impl Sum for Amount {
    fn sum<I: Iterator<Item = Amount>>(iter: I) -> Self {
        iter.fold(Amount::zero(), |acc, amount| acc + amount)
    }
}

// =============================================================================
// Royalty Share
// =============================================================================

/// A book's royalty share: the fraction of the book's reported royalties
/// owed to its author (`0.10` = 10%).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RoyaltyShare(f64);

impl RoyaltyShare {
    /// Creates a share from a fraction (`0.10` = 10%).
    #[inline]
    pub const fn from_fraction(fraction: f64) -> Self {
        RoyaltyShare(fraction)
    }

    /// Returns the share as a fraction.
    #[inline]
    pub const fn fraction(&self) -> f64 {
        self.0
    }

    /// Returns the share as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 * 100.0
    }

    /// Parses a feed cell, coercing failures to zero.
    pub fn parse_lenient(raw: &str) -> Self {
        RoyaltyShare(lenient_decimal(raw))
    }
}

// =============================================================================
// Retention Rate
// =============================================================================

/// An author's withholding percentage, applied to total gross earnings.
///
/// Feeds carry it as an integer percent (0-100 expected). Out-of-range
/// values are not clamped; they flow into the withholding math as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RetentionRate(i64);

impl RetentionRate {
    /// Creates a rate from an integer percentage.
    #[inline]
    pub const fn from_percent(percent: i64) -> Self {
        RetentionRate(percent)
    }

    /// Returns the integer percentage.
    #[inline]
    pub const fn percent(&self) -> i64 {
        self.0
    }

    /// Parses a feed cell, coercing failures to zero.
    ///
    /// ## Example
    /// ```rust
    /// use regalia_core::money::RetentionRate;
    ///
    /// assert_eq!(RetentionRate::parse_lenient("15").percent(), 15);
    /// assert_eq!(RetentionRate::parse_lenient("15%").percent(), 15);
    /// assert_eq!(RetentionRate::parse_lenient("garbled").percent(), 0);
    /// ```
    pub fn parse_lenient(raw: &str) -> Self {
        RetentionRate(lenient_integer(raw))
    }

    /// Computes the withheld amount for a gross total.
    ///
    /// ## Example
    /// ```rust
    /// use regalia_core::money::{Amount, RetentionRate};
    ///
    /// let gross = Amount::from_value(8.0);
    /// let withheld = RetentionRate::from_percent(10).withhold_from(gross);
    /// assert_eq!(withheld.value(), 0.8);
    /// ```
    #[inline]
    pub fn withhold_from(&self, gross: Amount) -> Amount {
        Amount::from_value(gross.value() * (self.0 as f64 / 100.0))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_lenient_decimal() {
        assert_eq!(Amount::parse_lenient("80").value(), 80.0);
        assert_eq!(Amount::parse_lenient("12.5").value(), 12.5);
        // Locale comma decimal separator
        assert_eq!(Amount::parse_lenient("12,5").value(), 12.5);
        // Embedded quotes from sloppy exports
        assert_eq!(Amount::parse_lenient("\"7,25\"").value(), 7.25);
        // Negative values pass through uncorrected
        assert_eq!(Amount::parse_lenient("-3").value(), -3.0);
    }

    #[test]
    fn test_parse_lenient_decimal_reads_leading_prefix() {
        // Trailing garbage after the number is ignored, the way the
        // feeds were always consumed.
        assert_eq!(Amount::parse_lenient("80 €").value(), 80.0);
        assert_eq!(Amount::parse_lenient("1.5e2 EUR").value(), 150.0);
        assert_eq!(Amount::parse_lenient("12e").value(), 12.0);
        // Only the first comma is a decimal separator; the rest of the
        // cell is trailing garbage.
        assert_eq!(Amount::parse_lenient("12,3,4").value(), 12.3);
    }

    #[test]
    fn test_parse_lenient_decimal_coerces_garbage_to_zero() {
        assert_eq!(Amount::parse_lenient("").value(), 0.0);
        assert_eq!(Amount::parse_lenient("n/a").value(), 0.0);
        assert_eq!(Amount::parse_lenient("€ 80").value(), 0.0);
        assert_eq!(Amount::parse_lenient("NaN").value(), 0.0);
    }

    #[test]
    fn test_parse_lenient_integer() {
        assert_eq!(RetentionRate::parse_lenient("15").percent(), 15);
        assert_eq!(RetentionRate::parse_lenient("\"21\"").percent(), 21);
        assert_eq!(RetentionRate::parse_lenient("-5").percent(), -5);
        assert_eq!(RetentionRate::parse_lenient("").percent(), 0);
        assert_eq!(RetentionRate::parse_lenient("quince").percent(), 0);
    }

    #[test]
    fn test_parse_lenient_integer_reads_leading_digits() {
        assert_eq!(RetentionRate::parse_lenient("15%").percent(), 15);
        // A fractional cell truncates at the decimal point; the integer
        // read stops at the first non-digit.
        assert_eq!(RetentionRate::parse_lenient("7.5").percent(), 7);
    }

    #[test]
    fn test_author_share() {
        let royalties = Amount::from_value(80.0);
        let gross = royalties.author_share(RoyaltyShare::from_fraction(0.1));
        assert!((gross.value() - 8.0).abs() < 1e-9);
    }

    #[test]
    fn test_withholding() {
        let gross = Amount::from_value(8.0);
        let withheld = RetentionRate::from_percent(10).withhold_from(gross);
        assert!((withheld.value() - 0.8).abs() < 1e-9);
        let net = gross - withheld;
        assert!((net.value() - 7.2).abs() < 1e-9);
    }

    #[test]
    fn test_zero_retention_withholds_nothing() {
        let gross = Amount::from_value(100.0);
        let withheld = RetentionRate::from_percent(0).withhold_from(gross);
        assert_eq!(withheld.value(), 0.0);
    }

    #[test]
    fn test_sum_and_arithmetic() {
        let total: Amount = [1.5, 2.5, 4.0]
            .into_iter()
            .map(Amount::from_value)
            .sum();
        assert_eq!(total.value(), 8.0);
        assert_eq!((total - Amount::from_value(3.0)).value(), 5.0);

        let mut acc = Amount::zero();
        acc += Amount::from_value(2.0);
        assert_eq!(acc.value(), 2.0);
    }

    #[test]
    fn test_display_rounds_to_two_decimals() {
        assert_eq!(format!("{}", Amount::from_value(7.2)), "7.20 €");
        assert_eq!(format!("{}", Amount::from_value(1.239)), "1.24 €");
        assert_eq!(format!("{}", Amount::from_value(-0.5)), "-0.50 €");
    }

    #[test]
    fn test_share_percentage() {
        let share = RoyaltyShare::from_fraction(0.1);
        assert!((share.percentage() - 10.0).abs() < 1e-9);
    }
}
