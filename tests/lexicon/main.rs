//! Integration tests for Layer 1: Lexicon
//!
//! Tests for the standard catalog, tokenizer, curriculum and hand dealing.

mod catalog;
mod curriculum;
