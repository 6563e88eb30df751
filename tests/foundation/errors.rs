//! Integration tests for Error types
//!
//! Tests error construction, display, context, and error kinds.

use commonplace::foundation::{Error, ErrorContext, ErrorKind, SemanticLimit};

// =============================================================================
// Error Construction
// =============================================================================

#[test]
fn error_invalid_argument() {
    let err = Error::invalid_argument("start is after end");
    assert!(err.is_invalid_argument());
    assert!(format!("{err}").contains("start is after end"));
}

#[test]
fn error_invalid_date() {
    let err = Error::invalid_date("2023-02-29");
    assert!(matches!(err.kind, ErrorKind::InvalidDate(_)));
    assert!(format!("{err}").contains("2023-02-29"));
}

#[test]
fn error_out_of_range() {
    let err = Error::out_of_range("+262143-12-31 plus 1 days");
    assert!(matches!(err.kind, ErrorKind::OutOfRange(_)));
}

#[test]
fn error_limit_exceeded() {
    let err = Error::limit_exceeded(SemanticLimit::MaxIntervalPoints {
        limit: 100,
        requested: 366,
    });
    let msg = format!("{err}");
    assert!(msg.contains("100"));
    assert!(msg.contains("366"));
}

// =============================================================================
// Error Context
// =============================================================================

#[test]
fn error_context_operation() {
    let err = Error::invalid_format("%d/%m", "input is not enough for a unique date")
        .with_context(ErrorContext::new().with_operation("parse_date"));

    assert_eq!(err.operation(), Some("parse_date"));
    let rendered = format!("{}", err.context.as_ref().unwrap());
    assert_eq!(rendered, "in parse_date");
}

// =============================================================================
// Error Kind Matching
// =============================================================================

#[test]
fn error_kind_unsupported_granularity() {
    let err = Error::unsupported_granularity("minutes", "date");
    if let ErrorKind::UnsupportedGranularity { granularity, point } = &err.kind {
        assert_eq!(*granularity, "minutes");
        assert_eq!(*point, "date");
    } else {
        panic!("expected UnsupportedGranularity");
    }
}

#[test]
fn errors_are_std_errors() {
    fn takes_std_error(_: &dyn std::error::Error) {}
    takes_std_error(&Error::invalid_argument("x"));
}
