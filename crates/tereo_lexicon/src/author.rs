//! Challenge authoring from a target sentence.
//!
//! The slot shape and the cards to deal are derived from the target surface,
//! so a challenge only has to name its pattern and sentence.

use tereo_foundation::{Challenge, PatternKind, SlotType, Target, WordType};

use crate::catalog::{Catalog, Token};

/// Strips macrons and lowercases, for deriving fallback ids.
#[must_use]
pub fn fold_macrons(word: &str) -> String {
    word.chars()
        .map(|c| match c {
            'ā' | 'Ā' => 'a',
            'ē' | 'Ē' => 'e',
            'ī' | 'Ī' => 'i',
            'ō' | 'Ō' => 'o',
            'ū' | 'Ū' => 'u',
            other => other.to_ascii_lowercase(),
        })
        .collect()
}

/// What a slot holding a word of this type expects.
fn slot_for(word_type: WordType, surface: &str) -> SlotType {
    match word_type {
        WordType::Particle | WordType::Article | WordType::TenseMarker => {
            SlotType::Literal(surface.to_string())
        }
        other => SlotType::Word(other),
    }
}

/// Builds a challenge whose slots and required cards follow `target`.
///
/// Words the catalog lacks fall back to a macron-stripped `n_{word}` id and a
/// noun slot; if that id is unknown too, dealing produces a placeholder card.
#[must_use]
pub fn challenge_from_target(
    catalog: &Catalog,
    id: impl Into<String>,
    pattern: PatternKind,
    target: Target,
) -> Challenge {
    let mut slots = Vec::new();
    let mut required = Vec::new();

    for token in catalog.tokenize(&target.surface) {
        match token {
            Token::Known(card) => {
                slots.push(slot_for(card.word_type, &card.maori));
                required.push(card.id);
            }
            Token::Unknown(word) => {
                let fallback = format!("n_{}", fold_macrons(&word));
                let slot = catalog
                    .word(&fallback)
                    .map_or(SlotType::Word(WordType::Noun), |w| slot_for(w.word_type, &w.maori));
                slots.push(slot);
                required.push(fallback);
            }
        }
    }

    Challenge::new(id, pattern)
        .with_instruction(format!("Build: {}", target.gloss))
        .with_slots(slots)
        .with_required_cards(required)
        .with_target(target)
}
