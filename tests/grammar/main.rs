//! Integration tests for Layer 1: Grammar
//!
//! Tests the four pattern validators end to end against the standard catalog.

mod patterns;
mod properties;
mod targets;

use tereo_foundation::Card;
use tereo_lexicon::Catalog;

/// Cards for catalog ids, in order.
pub fn cards(ids: &[&str]) -> Vec<Card> {
    let catalog = Catalog::standard();
    ids.iter().map(|id| catalog.card(id).unwrap()).collect()
}
