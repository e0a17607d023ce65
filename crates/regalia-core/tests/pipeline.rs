//! End-to-end tests for the settlement pipeline, driven through the raw
//! record interface the app layer uses.

use regalia_core::{settle_royalties, PipelineError, RawRecord};

fn row(pairs: &[(&str, &str)]) -> RawRecord {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn author(nif: &str, name: &str, retention: &str) -> RawRecord {
    row(&[
        ("idautor", nif),
        ("nombre", name),
        ("domicilio", "Calle Mayor 1"),
        ("poblacion", "Madrid"),
        ("provincia", "Madrid"),
        ("cpostal", "28001"),
        ("telefono", "600000000"),
        ("email", "autor@example.com"),
        ("iban", "ES0000000000000000000000"),
        ("retencion", retention),
    ])
}

fn book(isbn: &str, title: &str, nif: &str, share: &str) -> RawRecord {
    row(&[
        ("idlibro", isbn),
        ("titulo", title),
        ("idautor", nif),
        ("derechos", share),
    ])
}

fn sale(isbn: &str, units: &str, royalties: &str) -> RawRecord {
    row(&[("idlibro", isbn), ("Uniddes", units), ("Regalias", royalties)])
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn settles_the_reference_scenario() {
    // A1 (retention 10%) owns B1 (share 0.1); two sale lines for B1:
    // (5 units, 50) and (3 units, 30).
    let authors = [author("A1", "Ana Pérez", "10")];
    let books = [book("B1", "La colmena", "A1", "0.1")];
    let sales = [sale("B1", "5", "50"), sale("B1", "3", "30")];

    let report = settle_royalties(&authors, &books, &sales).unwrap();
    assert_eq!(report.len(), 1);

    let s = &report[0];
    assert_eq!(s.author.nif, "A1");
    assert_eq!(s.titles.len(), 1);
    assert_eq!(s.titles[0].units_sold, 8);
    assert!(close(s.titles[0].title_royalties.value(), 80.0));
    assert!(close(s.titles[0].gross_earnings.value(), 8.0));
    assert!(close(s.gross_total.value(), 8.0));
    assert!(close(s.withheld.value(), 0.8));
    assert!(close(s.net_total.value(), 7.2));
}

#[test]
fn valid_feeds_never_fail() {
    let authors = [author("A1", "Ana", "15"), author("A2", "Berto", "7")];
    let books = [
        book("B1", "First", "A1", "0.1"),
        book("B2", "Second", "A2", "0.12"),
    ];
    let sales = [sale("B1", "2", "20"), sale("B2", "1", "15,5")];

    assert!(settle_royalties(&authors, &books, &sales).is_ok());
}

#[test]
fn unknown_author_reported_with_full_detail() {
    let authors = [author("A1", "Ana", "10")];
    let books = [
        book("B1", "Known", "A1", "0.1"),
        book("B2", "Ghost Writer", "X999", "0.1"),
    ];
    let sales = [sale("B1", "1", "10")];

    let err = settle_royalties(&authors, &books, &sales).unwrap_err();
    match err {
        PipelineError::UnknownAuthors { books } => {
            assert_eq!(books.len(), 1);
            assert_eq!(books[0].nif, "X999");
            assert_eq!(books[0].isbn, "B2");
            assert_eq!(books[0].title, "Ghost Writer");
        }
        other => panic!("expected UnknownAuthors, got {other:?}"),
    }
}

#[test]
fn author_check_precedes_isbn_check() {
    // Both problems present: a book with an unknown author AND a sale
    // with an unknown ISBN. Only the author failure is reported.
    let authors = [author("A1", "Ana", "10")];
    let books = [book("B2", "Ghost Writer", "X999", "0.1")];
    let sales = [sale("NO-SUCH-ISBN", "1", "10")];

    let err = settle_royalties(&authors, &books, &sales).unwrap_err();
    assert!(matches!(err, PipelineError::UnknownAuthors { .. }));
}

#[test]
fn unknown_isbns_deduplicated_in_first_seen_order() {
    let authors = [author("A1", "Ana", "10")];
    let books = [book("B1", "Known", "A1", "0.1")];
    let sales = [
        sale("MISSING-2", "1", "10"),
        sale("B1", "1", "10"),
        sale("MISSING-1", "1", "10"),
        sale("MISSING-2", "4", "40"),
    ];

    let err = settle_royalties(&authors, &books, &sales).unwrap_err();
    match err {
        PipelineError::UnknownIsbns { isbns } => {
            assert_eq!(isbns, vec!["MISSING-2".to_string(), "MISSING-1".to_string()]);
        }
        other => panic!("expected UnknownIsbns, got {other:?}"),
    }
}

#[test]
fn aggregation_is_order_independent() {
    let authors = [author("A1", "Ana", "10")];
    let books = [book("B1", "First", "A1", "0.1")];
    let forward = [sale("B1", "5", "50"), sale("B1", "3", "30")];
    let reversed = [sale("B1", "3", "30"), sale("B1", "5", "50")];

    let a = settle_royalties(&authors, &books, &forward).unwrap();
    let b = settle_royalties(&authors, &books, &reversed).unwrap();
    assert_eq!(a, b);
}

#[test]
fn author_with_no_sold_units_excluded() {
    let authors = [author("A1", "Ana", "10"), author("A2", "Berto", "10")];
    let books = [
        book("B1", "Sells", "A1", "0.1"),
        book("B2", "Shelved", "A2", "0.1"),
    ];
    // B2 has no sale lines at all.
    let sales = [sale("B1", "2", "20")];

    let report = settle_royalties(&authors, &books, &sales).unwrap();
    assert_eq!(report.len(), 1);
    assert_eq!(report[0].author.nif, "A1");
}

#[test]
fn report_sorted_by_name_with_spanish_collation() {
    let authors = [
        author("A1", "Zurita, Marta", "0"),
        author("A2", "Álvarez, Pilar", "0"),
        author("A3", "Benítez, Luis", "0"),
    ];
    let books = [
        book("B1", "One", "A1", "0.1"),
        book("B2", "Two", "A2", "0.1"),
        book("B3", "Three", "A3", "0.1"),
    ];
    let sales = [
        sale("B1", "1", "10"),
        sale("B2", "1", "10"),
        sale("B3", "1", "10"),
    ];

    let report = settle_royalties(&authors, &books, &sales).unwrap();
    let names: Vec<&str> = report.iter().map(|s| s.author.name.as_str()).collect();
    assert_eq!(names, vec!["Álvarez, Pilar", "Benítez, Luis", "Zurita, Marta"]);
}

#[test]
fn garbled_numeric_cells_settle_as_zero() {
    // Deliberate leniency: a garbled retention withholds nothing and a
    // garbled royalties cell contributes nothing.
    let authors = [author("A1", "Ana", "diez")];
    let books = [book("B1", "First", "A1", "0.1")];
    let sales = [sale("B1", "5", "50"), sale("B1", "3", "not-a-number")];

    let report = settle_royalties(&authors, &books, &sales).unwrap();
    let s = &report[0];
    assert_eq!(s.retention.percent(), 0);
    assert_eq!(s.titles[0].units_sold, 8);
    assert!(close(s.titles[0].title_royalties.value(), 50.0));
    assert!(close(s.withheld.value(), 0.0));
    assert!(close(s.net_total.value(), s.gross_total.value()));
}

#[test]
fn repeated_invocations_are_stateless() {
    let authors = [author("A1", "Ana", "10")];
    let books = [book("B1", "First", "A1", "0.1")];
    let sales = [sale("B1", "5", "50")];

    let first = settle_royalties(&authors, &books, &sales).unwrap();
    let second = settle_royalties(&authors, &books, &sales).unwrap();
    assert_eq!(first, second);
}
