//! Core types for tereo.
//!
//! This crate provides:
//! - [`Word`] - Catalog lexical entries with their grammatical [`WordType`]
//! - [`Card`] - A word placed into play, and [`SentenceSlots`] for sentences under construction
//! - [`Challenge`] - A lesson challenge naming a [`PatternKind`] and an optional [`Target`]
//! - [`Error`] - Rich error types with context

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod card;
pub mod challenge;
pub mod error;
pub mod word;

pub use card::{Card, CardExtra, SentenceSlots};
pub use challenge::{Challenge, PatternKind, SlotType, Target};
pub use error::{Error, ErrorContext, ErrorKind, Result};
pub use word::{CardColor, Word, WordType};
