//! Integration tests for Layer 0: Foundation
//!
//! Tests for core types: Word, Card, SentenceSlots, Challenge and Error.

mod cards;
mod challenges;
mod errors;
