//! Integration tests for Word, Card and SentenceSlots

use tereo_foundation::card::surface;
use tereo_foundation::{Card, CardColor, ErrorKind, SentenceSlots, Word, WordType};

fn card(id: &str, maori: &str, word_type: WordType) -> Card {
    Card::new(id, maori, "gloss", word_type, CardColor::Blue)
}

// =============================================================================
// Word and Card
// =============================================================================

#[test]
fn card_copies_word_fields() {
    let word = Word::new("n_whare", "whare", "house", WordType::Noun, CardColor::Blue, 1)
        .with_pronunciation("fah-reh");
    let card = Card::from(&word);
    assert_eq!(card.id, "n_whare");
    assert_eq!(card.maori, "whare");
    assert_eq!(card.english, "house");
    assert!(card.is(WordType::Noun));
    assert!(!card.is_variation());
    assert!(!card.is_placeholder());
}

#[test]
fn placeholder_card() {
    let card = Card::placeholder("n_waka");
    assert_eq!(card.maori, "?n_waka");
    assert_eq!(card.english, "unknown word");
    assert_eq!(card.color, CardColor::Gray);
    assert!(card.is_placeholder());
}

#[test]
fn variation_flag() {
    let card = card("n_kuri", "kurī", WordType::Noun).into_variation();
    assert!(card.is_variation());
}

#[test]
fn word_type_names_and_prefixes() {
    assert_eq!(WordType::LocativeParticle.name(), "particle_locative");
    assert_eq!(WordType::from_name("tense_marker"), Some(WordType::TenseMarker));
    assert_eq!(WordType::from_id("pl_ki"), Some(WordType::LocativeParticle));
    assert_eq!(WordType::from_id("p_ko"), Some(WordType::Particle));
    assert_eq!(WordType::from_id("adj_pai"), Some(WordType::Adjective));
    assert_eq!(WordType::from_id("zz_x"), None);
}

#[test]
fn color_hex_values() {
    assert_eq!(CardColor::Purple.hex(), "#9333EA");
    assert_eq!(CardColor::Gray.hex(), "#6B7280");
    assert_eq!(CardColor::Yellow.hex(), "#EAB308");
}

#[test]
fn surface_joins_with_single_spaces() {
    let cards = [
        card("tm_keite", "Kei te", WordType::TenseMarker),
        card("adj_pai", "pai", WordType::Adjective),
    ];
    assert_eq!(surface(&cards), "Kei te pai");
    assert_eq!(surface(&[]), "");
}

// =============================================================================
// Sentence Slots
// =============================================================================

#[test]
fn slots_place_take_complete() {
    let mut slots = SentenceSlots::new(2);
    assert!(!slots.is_complete());
    assert_eq!(slots.complete(), None);

    slots.place(1, card("n_whare", "whare", WordType::Noun)).unwrap();
    assert!(slots.filled().is_empty());

    slots.place(0, card("p_he", "He", WordType::Particle)).unwrap();
    assert!(slots.is_complete());
    assert_eq!(surface(&slots.complete().unwrap()), "He whare");

    let taken = slots.take(0).unwrap();
    assert_eq!(taken.maori, "He");
    assert!(matches!(slots.take(0).unwrap_err().kind, ErrorKind::SlotEmpty(0)));
}

#[test]
fn slots_reject_bad_indices() {
    let mut slots = SentenceSlots::new(1);
    let err = slots.place(3, card("n_whare", "whare", WordType::Noun)).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::SlotOutOfRange { index: 3, len: 1 }));

    slots.place(0, card("n_whare", "whare", WordType::Noun)).unwrap();
    let err = slots.place(0, card("n_kuri", "kurī", WordType::Noun)).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::SlotOccupied(0)));
}

#[test]
fn clear_returns_placed_cards() {
    let mut slots = SentenceSlots::new(3);
    slots.place(0, card("p_ko", "Ko", WordType::Particle)).unwrap();
    slots.place(2, card("n_whare", "whare", WordType::Noun)).unwrap();
    assert_eq!(slots.clear().len(), 2);
    assert!(slots.iter().all(|s| s.is_none()));
}
