//! Attempt-log save and load

use tereo_foundation::ErrorKind;
use tereo_runtime::{
    LessonStatus, Session, SessionConfig, from_bytes, load_from_file, save_to_file, to_bytes,
};

/// A session with one attempt at `lesson_1_1` in its log.
fn session_with_attempt() -> Session {
    let mut session = Session::new(SessionConfig::new().with_decoys(0));
    session.start_lesson("lesson_1_1").unwrap();
    for (slot, id) in ["p_ko", "art_te", "n_whare"].into_iter().enumerate() {
        let index = session.hand().iter().position(|c| c.id == id).unwrap();
        session.place(index, slot).unwrap();
    }
    session.submit().unwrap();
    session
}

#[test]
fn session_log_survives_a_file_roundtrip() {
    let session = session_with_attempt();

    let path = std::env::temp_dir().join("tereo_integration_log.msgpack");
    save_to_file(session.log(), &path).unwrap();
    let restored = load_from_file(&path).unwrap();
    let _ = std::fs::remove_file(&path);

    assert_eq!(&restored, session.log());
    assert_eq!(
        restored.progress("lesson_1_1").map(|p| p.status),
        Some(LessonStatus::InProgress)
    );
}

#[test]
fn truncated_bytes_fail_cleanly() {
    let session = session_with_attempt();

    let bytes = to_bytes(session.log()).unwrap();
    let err = from_bytes(&bytes[..bytes.len() / 2]).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::Serialization(_)));
}
