//! # Statement Rendering
//!
//! Turns the computed report into terminal output. This is the rounding
//! boundary: the core carries full precision and every figure is
//! formatted to two decimals here, when a statement is rendered.
//!
//! ## Statement Layout
//! ```text
//! ── Royalty Statement ───────────────────────────────────────
//! Ana Pérez
//! Calle Mayor 1, Madrid, Madrid
//! NIF: 12345678Z                           Date: 2026-08-04
//!
//! Title            ISBN        Units   Royalties   Share     Gross
//! La colmena       978-...         8     80.00 €  10.00%    8.00 €
//!
//! Total gross earnings:                                     8.00 €
//! Retention (10%):                                         -0.80 €
//! Net earnings:                                             7.20 €
//! ```
//!
//! The formatting helpers are pure (string in, string out); the print
//! functions only add the terminal and the statement date.

use std::fmt::Write as _;

use chrono::Local;
use regalia_core::{AuthorStatement, PipelineError};

/// Renders every statement as plain text to stdout.
pub fn print_statements(report: &[AuthorStatement]) {
    let date = Local::now().format("%Y-%m-%d").to_string();

    for statement in report {
        print!("{}", format_statement(statement, &date));
    }

    println!("{} statement(s) generated.", report.len());
}

/// Formats one statement. All two-decimal rounding happens in here; the
/// core hands over unrounded figures.
fn format_statement(statement: &AuthorStatement, date: &str) -> String {
    let author = &statement.author;
    let mut out = String::new();

    let _ = writeln!(out, "── Royalty Statement {}", "─".repeat(59));
    let _ = writeln!(out, "{}", author.name);
    let _ = writeln!(out, "{}, {}, {}", author.street, author.city, author.province);
    let _ = writeln!(out, "NIF: {:<40} Date: {}", author.nif, date);
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "{:<30} {:<17} {:>6} {:>12} {:>8} {:>10}",
        "Title", "ISBN", "Units", "Royalties", "Share", "Gross"
    );
    for title in &statement.titles {
        let _ = writeln!(
            out,
            "{:<30} {:<17} {:>6} {:>12} {:>7.2}% {:>10}",
            title.title,
            title.isbn,
            title.units_sold,
            title.title_royalties.to_string(),
            title.royalty_share.percentage(),
            title.gross_earnings.to_string(),
        );
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "Total gross earnings: {}", statement.gross_total);
    let _ = writeln!(
        out,
        "Retention ({}%): -{:.2} €",
        statement.retention.percent(),
        statement.withheld.value()
    );
    let _ = writeln!(out, "Net earnings: {}", statement.net_total);
    let _ = writeln!(out);

    out
}

/// Emits the report as pretty JSON for export collaborators.
pub fn print_json(report: &[AuthorStatement]) -> Result<(), serde_json::Error> {
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}

/// Renders a settlement failure with its complete violation list, in
/// text or JSON depending on the output mode.
pub fn print_failure(error: &PipelineError, json: bool) {
    if json {
        eprintln!("{:#}", failure_payload(error));
    } else {
        eprint!("{}", format_failure_text(error));
    }
}

/// JSON failure envelope consumed by export collaborators: the summary
/// message under `error`, the violation list under `missingAuthors` or
/// `missingISBNs`.
fn failure_payload(error: &PipelineError) -> serde_json::Value {
    match error {
        PipelineError::UnknownAuthors { books } => serde_json::json!({
            "error": error.to_string(),
            "missingAuthors": books,
        }),
        PipelineError::UnknownIsbns { isbns } => serde_json::json!({
            "error": error.to_string(),
            "missingISBNs": isbns,
        }),
    }
}

fn format_failure_text(error: &PipelineError) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Validation error: {error}");

    match error {
        PipelineError::UnknownAuthors { books } => {
            let _ = writeln!(out, "Add these authors to the authors file and rerun:");
            for book in books {
                let _ = writeln!(
                    out,
                    "  NIF: {} - book \"{}\" (ISBN: {})",
                    book.nif, book.title, book.isbn
                );
            }
        }
        PipelineError::UnknownIsbns { isbns } => {
            let _ = writeln!(out, "Add these ISBNs to the books file and rerun:");
            for isbn in isbns {
                let _ = writeln!(out, "  {isbn}");
            }
        }
    }

    out
}

// =============================================================================
// Unit Tests
// =============================================================================
