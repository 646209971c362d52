//! Scripted REPL runs

use std::io::Write;

use tereo_foundation::{ErrorKind, Result};
use tereo_runtime::{LineEditor, ReadResult, Repl, Session, SessionConfig};

/// An editor with no interactive input.
struct ScriptOnly;

impl LineEditor for ScriptOnly {
    fn read_line(&mut self, _prompt: &str) -> Result<ReadResult> {
        Ok(ReadResult::Eof)
    }

    fn add_history(&mut self, _line: &str) {}

    fn set_keywords(&mut self, _keywords: Vec<String>) {}
}

fn repl() -> Repl<ScriptOnly> {
    Repl::with_editor(ScriptOnly)
        .with_session(Session::new(SessionConfig::new().with_decoys(0)))
        .without_banner()
}

fn script(name: &str, body: &str) -> std::path::PathBuf {
    let path = std::env::temp_dir().join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(body.as_bytes()).unwrap();
    path
}

#[test]
fn script_runs_until_quit() {
    let path = script(
        "tereo_script_quit.txt",
        "# warm up\n:lesson lesson_2_1\n\nKei te pai au\n:quit\n:lesson lesson_1_1\n",
    );
    let mut repl = repl();
    repl.eval_file(&path).unwrap();
    let _ = std::fs::remove_file(&path);

    assert_eq!(repl.session().lesson_id(), Some("lesson_2_1"));
}

#[test]
fn script_error_names_the_line() {
    let path = script("tereo_script_error.txt", ":lessons\n:place 0 0\n");
    let mut repl = repl();
    let err = repl.eval_file(&path).unwrap_err();
    let _ = std::fs::remove_file(&path);

    assert!(matches!(err.kind, ErrorKind::NoActiveChallenge));
    let source = err.context.and_then(|c| c.source).unwrap();
    assert!(source.ends_with(":2"));
}

#[test]
fn missing_script_is_io_error() {
    let err = repl()
        .eval_file(std::path::Path::new("/nonexistent/tereo/script.txt"))
        .unwrap_err();
    assert!(matches!(err.kind, ErrorKind::Io(_)));
}
