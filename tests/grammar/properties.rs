//! Properties over random card sequences

use proptest::prelude::*;
use tereo_foundation::{Card, PatternKind, Target};
use tereo_grammar::{GrammarOptions, PatternKindExt, detect, hint, validate};
use tereo_lexicon::Catalog;

fn any_card() -> impl Strategy<Value = Card> {
    let words = Catalog::standard().words();
    (0..words.len()).prop_map(move |i| Card::from(&words[i]))
}

fn any_kind() -> impl Strategy<Value = PatternKind> {
    prop::sample::select(PatternKind::ALL.to_vec())
}

fn sentence() -> impl Strategy<Value = Vec<Card>> {
    prop::collection::vec(any_card(), 0..7)
}

proptest! {
    #[test]
    fn correct_implies_valid(
        kind in any_kind(),
        cards in sentence(),
        with_target in any::<bool>()
    ) {
        let target = Target::new("Ko te whare", "The house");
        let target = with_target.then_some(&target);
        let result = validate(kind, &cards, target, &GrammarOptions::default());
        prop_assert!(!result.correct || result.valid);
        prop_assert_eq!(result.valid, result.gate.is_none());
    }

    #[test]
    fn validation_is_repeatable(kind in any_kind(), cards in sentence()) {
        let options = GrammarOptions::default();
        prop_assert_eq!(
            validate(kind, &cards, None, &options),
            validate(kind, &cards, None, &options)
        );
    }

    #[test]
    fn hints_are_total(kind in any_kind(), cards in sentence()) {
        let _ = hint(kind, &cards);
        let _ = detect(&cards);
    }

    #[test]
    fn detected_pattern_matches(cards in sentence()) {
        if let Some(kind) = detect(&cards) {
            prop_assert!(kind.validator().matches(&cards));
        }
    }
}
