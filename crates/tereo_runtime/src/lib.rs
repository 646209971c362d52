//! Practice sessions, attempt logging, REPL and CLI for tereo.
//!
//! This crate provides:
//! - [`Session`] - Lesson and free-build state: hand, slots, score
//! - [`AttemptLog`] - Submitted attempts and lesson progress, saved as `MessagePack`
//! - [`Repl`] - Interactive read-eval-print loop over session commands
//! - The `tereo` binary

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod attempts;
pub mod editor;
pub mod highlight;
pub mod repl;
pub mod serialize;
pub mod session;

pub use attempts::{AttemptLog, AttemptRecord, BuiltWord, LessonProgress, LessonStatus};
pub use editor::{LineEditor, ReadResult, RustylineEditor};
pub use highlight::TereoHighlighter;
pub use repl::Repl;
pub use serialize::{from_bytes, load_from_file, save_to_file, to_bytes};
pub use session::{Session, SessionConfig, Submission};
