//! # regalia-core: Pure Settlement Logic for Regalia
//!
//! This crate is the **heart** of Regalia. It turns three raw tabular
//! feeds - authors, books, sales - into per-author royalty statements,
//! as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Regalia Architecture                           │
//! │                                                                     │
//! │  ┌───────────────────────────────────────────────────────────────┐  │
//! │  │                     apps/cli (regalia)                        │  │
//! │  │   CSV ingestion ──► raw records ──► rendered statements       │  │
//! │  └───────────────────────────────┬───────────────────────────────┘  │
//! │                                  │                                  │
//! │  ┌───────────────────────────────▼───────────────────────────────┐  │
//! │  │              ★ regalia-core (THIS CRATE) ★                    │  │
//! │  │                                                               │  │
//! │  │  normalize ─► validate ─► aggregate ─► royalty ─► report      │  │
//! │  │                                                               │  │
//! │  │  NO I/O • NO GLOBAL STATE • PURE FUNCTIONS                    │  │
//! │  └───────────────────────────────┬───────────────────────────────┘  │
//! │                                  │  AuthorStatement (JSON)           │
//! │  ┌───────────────────────────────▼───────────────────────────────┐  │
//! │  │        Presentation / export collaborators (external)         │  │
//! │  └───────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Feed entities and derived statement records
//! - [`money`] - `Amount` and the rate types, with lenient feed parsing
//! - [`error`] - Referential-integrity failure types
//! - [`normalize`] - Raw rows → typed entities
//! - [`validate`] - Cross-feed referential checks
//! - [`aggregate`] - Per-ISBN sales sums
//! - [`royalty`] - Per-author settlement math
//! - [`report`] - Final filtering and locale-aware ordering
//! - [`pipeline`] - The single entry point, [`settle_royalties`]
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same feeds in, same report out, every time
//! 2. **No I/O**: files, terminals, and networks live in the app layer
//! 3. **Lenient Numerics**: feed cells coerce to zero, they never throw
//! 4. **Batched Failures**: validation returns the complete violation
//!    list as a value, so the caller fixes the feed in one pass
//!
//! ## Example Usage
//!
//! ```rust
//! use regalia_core::{settle_royalties, RawRecord};
//!
//! fn row(pairs: &[(&str, &str)]) -> RawRecord {
//!     pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
//! }
//!
//! let authors = [row(&[("idautor", "12345678Z"), ("nombre", "Ana Pérez"), ("retencion", "10")])];
//! let books = [row(&[
//!     ("idlibro", "978-84-376-0494-7"),
//!     ("titulo", "La colmena"),
//!     ("idautor", "12345678Z"),
//!     ("derechos", "0,10"),
//! ])];
//! let sales = [row(&[("idlibro", "978-84-376-0494-7"), ("Uniddes", "8"), ("Regalias", "80")])];
//!
//! let report = settle_royalties(&authors, &books, &sales).unwrap();
//! assert_eq!(report.len(), 1);
//! assert_eq!(report[0].titles[0].units_sold, 8);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod aggregate;
pub mod error;
pub mod money;
pub mod normalize;
pub mod pipeline;
pub mod report;
pub mod royalty;
pub mod types;
pub mod validate;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use regalia_core::AuthorStatement` instead of
// `use regalia_core::types::AuthorStatement`.

pub use error::{PipelineError, PipelineResult};
pub use money::{Amount, RetentionRate, RoyaltyShare};
pub use pipeline::settle_royalties;
pub use types::*;
