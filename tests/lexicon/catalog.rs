//! Integration tests for the word catalog

use tereo_foundation::{CardColor, ErrorKind, WordType};
use tereo_lexicon::{Catalog, Token};

#[test]
fn standard_catalog_is_shared() {
    assert!(std::ptr::eq(Catalog::standard(), Catalog::standard()));
}

#[test]
fn ids_follow_type_prefixes() {
    for word in Catalog::standard().words() {
        assert_eq!(
            WordType::from_id(&word.id),
            Some(word.word_type),
            "{} has a mismatched prefix",
            word.id
        );
    }
}

#[test]
fn module_one_vocabulary() {
    let catalog = Catalog::standard();
    for surface in ["Ko", "He", "te", "ngā", "whare", "kaiako", "au", "tēnei", "tērā"] {
        let word = catalog.by_surface(surface).unwrap_or_else(|| panic!("{surface}"));
        assert_eq!(word.module, 1, "{surface}");
    }
}

#[test]
fn lookups_by_category() {
    let catalog = Catalog::standard();
    assert_eq!(catalog.by_type(WordType::Adjective).len(), 10);
    assert_eq!(catalog.by_type(WordType::Verb).len(), 7);
    assert!(catalog.by_color(CardColor::Purple).iter().all(|w| w.word_type == WordType::Particle));
}

#[test]
fn card_lookup_errors() {
    let catalog = Catalog::standard();
    assert_eq!(catalog.card("n_whare").unwrap().english, "house");
    assert!(matches!(
        catalog.card("n_waka").unwrap_err().kind,
        ErrorKind::WordNotFound(_)
    ));
    assert!(catalog.card_or_placeholder("n_waka").is_placeholder());
}

#[test]
fn tokenize_multi_word_surfaces() {
    let tokens = Catalog::standard().tokenize("Kei te tino pai au!");
    let ids: Vec<_> = tokens
        .iter()
        .filter_map(|t| match t {
            Token::Known(card) => Some(card.id.as_str()),
            Token::Unknown(_) => None,
        })
        .collect();
    assert_eq!(ids, ["tm_keite", "int_tino", "adj_pai", "pr_au"]);
}

#[test]
fn tokenize_empty_text() {
    assert!(Catalog::standard().tokenize("   ").is_empty());
}
