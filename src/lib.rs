//! tereo - Sentence-pattern grammar validation for te reo Māori
//!
//! This crate re-exports all layers of the tereo system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: tereo_runtime    — Practice sessions, attempt log, REPL, CLI
//! Layer 2: tereo_debug      — Validation tracing
//! Layer 1: tereo_grammar    — Pattern validators, hints, detection
//!          tereo_lexicon    — Word catalog, curriculum, hand dealing
//! Layer 0: tereo_foundation — Core types (Word, Card, Challenge, Error)
//! ```

pub use tereo_debug as debug;
pub use tereo_foundation as foundation;
pub use tereo_grammar as grammar;
pub use tereo_lexicon as lexicon;
pub use tereo_runtime as runtime;
