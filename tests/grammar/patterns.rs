//! Per-pattern validation outcomes

use crate::cards;
use tereo_foundation::PatternKind;
use tereo_grammar::{FeedbackKind, Gate, GrammarOptions, ValidationResult, validate};

fn check(kind: PatternKind, ids: &[&str]) -> ValidationResult {
    validate(kind, &cards(ids), None, &GrammarOptions::default())
}

// =============================================================================
// Ko
// =============================================================================

#[test]
fn ko_three_cards() {
    let result = check(PatternKind::Ko, &["p_ko", "art_te", "n_whare"]);
    assert!(result.valid && result.correct);
    assert_eq!(result.translation, "The house");
    assert_eq!(result.breakdown.len(), 3);
}

#[test]
fn ko_with_demonstrative() {
    let result = check(PatternKind::Ko, &["p_ko", "art_te", "n_whare", "d_tenei"]);
    assert!(result.valid);
    assert!(result.translation.contains("This"));
    assert_eq!(result.breakdown.len(), 4);
}

#[test]
fn ko_wrong_order() {
    let result = check(PatternKind::Ko, &["art_te", "p_ko", "n_whare"]);
    assert!(!result.valid);
    assert_eq!(result.feedback.kind, FeedbackKind::Error);
    assert!(result.feedback.message.contains("First card must be Ko"));
}

// =============================================================================
// He
// =============================================================================

#[test]
fn he_rejects_articles_specifically() {
    let result = check(PatternKind::He, &["p_he", "art_te", "n_whare"]);
    assert!(!result.valid);
    assert_eq!(result.gate, Some(Gate::NoArticle));
    assert!(result.feedback.message.contains("te or ngā"));
}

#[test]
fn he_classification() {
    let result = check(PatternKind::He, &["p_he", "n_kaiako", "pr_au"]);
    assert!(result.valid);
    assert_eq!(result.translation, "I am a teacher");
}

// =============================================================================
// Equative
// =============================================================================

#[test]
fn equative_identification() {
    let result = check(PatternKind::Equative, &["p_ko", "pr_au", "art_te", "n_kaiako"]);
    assert!(result.valid);
    assert_eq!(result.translation, "I am the teacher");
    assert_eq!(result.breakdown.len(), 4);
}

#[test]
fn equative_plural_uses_irregular_plural() {
    let result = check(PatternKind::Equative, &["p_ko", "pr_au", "art_nga", "n_tangata"]);
    assert!(result.valid);
    assert!(result.translation.contains("people"));
    assert!(!result.translation.contains("persons"));
}

// =============================================================================
// Kei te and tense markers
// =============================================================================

#[test]
fn kei_te_verbs_take_gerunds() {
    for (verb, expected) in [
        ("v_haere", "I am going"),
        ("v_kai", "I am eating"),
        ("v_noho", "I am sitting"),
        ("v_oma", "I am running"),
    ] {
        let result = check(PatternKind::KeiTe, &["tm_keite", verb, "pr_au"]);
        assert_eq!(result.translation, expected);
    }
}

#[test]
fn kei_te_intensifier() {
    let result = check(PatternKind::KeiTe, &["tm_keite", "int_tino", "adj_pai", "pr_au"]);
    assert_eq!(result.translation, "I am very good");
}

#[test]
fn kei_te_locative() {
    let result = check(
        PatternKind::KeiTe,
        &["tm_keite", "v_noho", "pr_au", "pl_i", "n_tamaki"],
    );
    assert!(result.valid);
    assert!(result.translation.contains("in/at"));
}

#[test]
fn kei_te_rejects_adjective_with_locative() {
    let result = check(
        PatternKind::KeiTe,
        &["tm_keite", "adj_pai", "pr_au", "pl_i", "n_kura"],
    );
    assert!(!result.valid);
    assert_eq!(result.gate, Some(Gate::Verb));
}

#[test]
fn kei_te_length_gate_ignores_content() {
    for ids in [
        &["tm_keite", "adj_pai"][..],
        &["p_ko", "p_ko"][..],
        &["tm_keite", "v_noho", "pr_au", "pl_i", "n_kura", "d_tenei"][..],
    ] {
        let result = check(PatternKind::KeiTe, ids);
        assert_eq!(result.gate, Some(Gate::Length));
    }
}

#[test]
fn past_and_future_markers() {
    assert_eq!(
        check(PatternKind::KeiTe, &["tm_i", "adj_ngenge", "pr_au"]).translation,
        "I was tired"
    );
    assert_eq!(
        check(PatternKind::KeiTe, &["tm_ka", "v_ako", "pr_tatou"]).translation,
        "We all will be learning"
    );
}
