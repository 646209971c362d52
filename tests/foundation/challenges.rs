//! Integration tests for PatternKind, Target and Challenge

use tereo_foundation::{Challenge, ErrorKind, PatternKind, SlotType, Target, WordType};

#[test]
fn pattern_kind_parses_wire_names() {
    for kind in PatternKind::ALL {
        assert_eq!(kind.name().parse::<PatternKind>().unwrap(), kind);
    }
    assert_eq!("kei_te".parse::<PatternKind>().unwrap(), PatternKind::KeiTe);
}

#[test]
fn unknown_pattern_is_an_error_not_ko() {
    let err = "kia".parse::<PatternKind>().unwrap_err();
    assert!(matches!(err.kind, ErrorKind::UnknownPattern(_)));
    assert!("Ko".parse::<PatternKind>().is_err());
}

#[test]
fn target_normalizes_whitespace() {
    let target = Target::new("  Kei te   pai au ", "I am good");
    assert_eq!(target.normalized(), "Kei te pai au");
}

#[test]
fn challenge_builder() {
    let challenge = Challenge::new("c_1_2_1", PatternKind::He)
        .with_instruction("Build: A house")
        .with_target(Target::new("He whare", "A house"))
        .with_slots(vec![
            SlotType::Literal("He".into()),
            SlotType::Word(WordType::Noun),
        ])
        .with_required_cards(["p_he", "n_whare"])
        .with_hint("Start with He");

    assert!(!challenge.is_free_build());
    assert_eq!(challenge.slots.len(), 2);
    assert_eq!(challenge.required_cards, vec!["p_he", "n_whare"]);
    assert_eq!(challenge.hints, vec!["Start with He"]);
}

#[test]
fn challenge_without_target_is_free_build() {
    assert!(Challenge::new("free_ko", PatternKind::Ko).is_free_build());
}
