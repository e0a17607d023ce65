//! # Aggregator
//!
//! Reduces the sale lines to one [`SalesTotals`] per distinct ISBN.
//! Summation is commutative, so the result is independent of input
//! order. Books with zero sale lines get no entry.

use std::collections::HashMap;

use crate::types::{SaleLine, SalesTotals};

/// Sums units and royalties per ISBN across all sale lines.
pub fn aggregate_sales(sales: &[SaleLine]) -> HashMap<String, SalesTotals> {
    let mut totals: HashMap<String, SalesTotals> = HashMap::new();
    for line in sales {
        totals
            .entry(line.isbn.clone())
            .or_default()
            .accumulate(line);
    }
    totals
}

// =============================================================================
// Unit Tests
// =============================================================================
