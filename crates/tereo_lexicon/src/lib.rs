//! Word catalog and curriculum for tereo.
//!
//! This crate provides:
//! - [`Catalog`] - Immutable word lookup table with a surface tokenizer
//! - [`Curriculum`] - Modules, lessons and the challenge bank
//! - [`author`] - Deriving a challenge's slots and cards from its target sentence
//! - [`hand`] - Dealing shuffled, reproducible hands with decoy cards

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod author;
pub mod catalog;
pub mod curriculum;
pub mod hand;
pub mod words;

pub use author::challenge_from_target;
pub use catalog::{Catalog, Token};
pub use curriculum::{Curriculum, Grammar, Lesson, LessonKind, Module};
pub use hand::{deal, deal_seeded};
