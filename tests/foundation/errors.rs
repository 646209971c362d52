//! Integration tests for Error types
//!
//! Tests error construction, display, context, and error kinds.

use tereo_foundation::{Error, ErrorContext, ErrorKind};

// =============================================================================
// Error Construction
// =============================================================================

#[test]
fn error_word_not_found() {
    let err = Error::word_not_found("n_waka");
    assert!(matches!(err.kind, ErrorKind::WordNotFound(_)));
    assert!(format!("{err}").contains("n_waka"));
}

#[test]
fn error_unknown_pattern() {
    let err = Error::unknown_pattern("kia");
    assert!(matches!(err.kind, ErrorKind::UnknownPattern(_)));
    assert!(format!("{err}").contains("kia"));
}

#[test]
fn error_slot_out_of_range() {
    let err = Error::slot_out_of_range(7, 3);
    let msg = format!("{err}");
    assert!(msg.contains('7'));
    assert!(msg.contains('3'));
}

#[test]
fn error_lookup_kinds() {
    assert!(matches!(
        Error::lesson_not_found("lesson_9_9").kind,
        ErrorKind::LessonNotFound(_)
    ));
    assert!(matches!(
        Error::challenge_not_found("c_9_9_9").kind,
        ErrorKind::ChallengeNotFound(_)
    ));
    assert!(matches!(Error::io("disk").kind, ErrorKind::Io(_)));
    assert!(matches!(
        Error::no_active_challenge().kind,
        ErrorKind::NoActiveChallenge
    ));
}

// =============================================================================
// Error Context
// =============================================================================

#[test]
fn error_with_context() {
    let err = Error::word_not_found("n_waka").with_context(
        ErrorContext::new()
            .with_source("c_1_1_1")
            .with_frame("deal"),
    );
    let context = err.context.as_ref().unwrap();
    assert_eq!(context.source.as_deref(), Some("c_1_1_1"));
    assert_eq!(context.stack, vec!["deal".to_string()]);
}

#[test]
fn error_is_std_error() {
    fn takes_std_error(_: &dyn std::error::Error) {}
    takes_std_error(&Error::io("x"));
}
