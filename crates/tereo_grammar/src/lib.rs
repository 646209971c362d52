//! Sentence-pattern validation for tereo.
//!
//! This crate provides:
//! - [`ko`], [`he`], [`equative`], [`kei_te`] - One validator per sentence pattern
//! - [`Pattern`] - The shared validator interface, with [`detect`] and [`validate`] dispatch
//! - [`ValidationResult`] - Verdict, feedback, translation and per-word breakdown
//! - [`morphology`] - English pluralization and gerunds for translations
//!
//! Validators are pure functions of the cards, the optional target and the
//! [`GrammarOptions`]. Gates run in a fixed order and the first failure wins.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod equative;
pub mod he;
pub mod kei_te;
pub mod ko;
pub mod morphology;
pub mod options;
pub mod pattern;
pub mod result;
pub mod subjects;

pub use options::{GrammarOptions, KoPlural};
pub use pattern::{Pattern, PatternKindExt, detect, hint, validate};
pub use result::{Feedback, FeedbackKind, Gate, Naturalness, ValidationResult, WordBreakdown};
pub use subjects::{Copula, Subject, Tense, subject};
