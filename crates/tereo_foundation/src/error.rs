//! Error types for tereo.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.
//!
//! Structural rejection of a sentence is never an error: validators always
//! return a complete result. These errors cover lookups, session state and
//! persistence.

use std::fmt;

use thiserror::Error;

/// Result alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for tereo operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates a word-not-found error.
    #[must_use]
    pub fn word_not_found(id: impl Into<String>) -> Self {
        Self::new(ErrorKind::WordNotFound(id.into()))
    }

    /// Creates an unknown pattern error.
    #[must_use]
    pub fn unknown_pattern(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownPattern(name.into()))
    }

    /// Creates a challenge-not-found error.
    #[must_use]
    pub fn challenge_not_found(id: impl Into<String>) -> Self {
        Self::new(ErrorKind::ChallengeNotFound(id.into()))
    }

    /// Creates a lesson-not-found error.
    #[must_use]
    pub fn lesson_not_found(id: impl Into<String>) -> Self {
        Self::new(ErrorKind::LessonNotFound(id.into()))
    }

    /// Creates a slot index error.
    #[must_use]
    pub fn slot_out_of_range(index: usize, len: usize) -> Self {
        Self::new(ErrorKind::SlotOutOfRange { index, len })
    }

    /// Creates an error for a session operation that needs a challenge.
    #[must_use]
    pub fn no_active_challenge() -> Self {
        Self::new(ErrorKind::NoActiveChallenge)
    }

    /// Creates an error for submitting a sentence with empty slots.
    #[must_use]
    pub fn incomplete_sentence(empty: usize) -> Self {
        Self::new(ErrorKind::IncompleteSentence(empty))
    }

    /// Creates an I/O error with a message.
    #[must_use]
    pub fn io(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Io(message.into()))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// A word id is not present in the catalog.
    #[error("word not found: {0}")]
    WordNotFound(String),

    /// A pattern type string does not name a supported pattern.
    #[error("unknown sentence pattern: {0}")]
    UnknownPattern(String),

    /// A challenge id is not present in the curriculum.
    #[error("challenge not found: {0}")]
    ChallengeNotFound(String),

    /// A lesson id is not present in the curriculum.
    #[error("lesson not found: {0}")]
    LessonNotFound(String),

    /// A module id is not present in the curriculum.
    #[error("module not found: {0}")]
    ModuleNotFound(String),

    /// A sentence slot index is past the end of the sentence.
    #[error("slot {index} out of range (sentence has {len} slots)")]
    SlotOutOfRange {
        /// The slot that was addressed.
        index: usize,
        /// The number of slots in the sentence.
        len: usize,
    },

    /// A card was placed into a slot that already holds one.
    #[error("slot {0} is already occupied")]
    SlotOccupied(usize),

    /// A card was taken from a slot that holds none.
    #[error("slot {0} is empty")]
    SlotEmpty(usize),

    /// A session operation needs a started lesson or free build.
    #[error("no active challenge (start a lesson or free build first)")]
    NoActiveChallenge,

    /// A sentence was submitted with empty slots.
    #[error("complete the sentence first ({0} empty slot(s))")]
    IncompleteSentence(usize),

    /// A hand index does not name a card in the hand.
    #[error("no card at hand position {0}")]
    HandIndex(usize),

    /// File system failure.
    #[error("I/O error: {0}")]
    Io(String),

    /// Encoding or decoding failure.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Challenge or lesson the operation was working on.
    pub source: Option<String>,
    /// Chain of operations leading to the error.
    pub stack: Vec<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the source.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Adds a stack frame.
    #[must_use]
    pub fn with_frame(mut self, frame: impl Into<String>) -> Self {
        self.stack.push(frame.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(source) = &self.source {
            write!(f, "at {source}")?;
        }
        if !self.stack.is_empty() {
            writeln!(f)?;
            for frame in &self.stack {
                writeln!(f, "  in {frame}")?;
            }
        }
        Ok(())
    }
}
