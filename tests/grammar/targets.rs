//! Challenge targets against their own validators

use tereo_foundation::Target;
use tereo_grammar::{FeedbackKind, GrammarOptions, validate};
use tereo_lexicon::{Catalog, Curriculum};

#[test]
fn every_curriculum_target_is_correct_when_built() {
    let catalog = Catalog::standard();
    let options = GrammarOptions::default();
    for challenge in Curriculum::standard().challenges() {
        let built: Vec<_> = challenge
            .required_cards
            .iter()
            .map(|id| catalog.card(id).unwrap())
            .collect();
        let result = validate(challenge.pattern, &built, challenge.target.as_ref(), &options);
        assert!(result.correct, "{} rejected: {}", challenge.id, result.feedback.message);
        assert_eq!(result.feedback.kind, FeedbackKind::Success);
    }
}

#[test]
fn valid_but_off_target_is_a_warning() {
    let built = crate::cards(&["p_ko", "art_te", "n_whare"]);
    let target = Target::new("Ko te ngeru", "The cat");
    let result = validate(
        tereo_foundation::PatternKind::Ko,
        &built,
        Some(&target),
        &GrammarOptions::default(),
    );
    assert!(result.valid);
    assert!(!result.correct);
    assert_eq!(result.feedback.kind, FeedbackKind::Warning);
    assert_eq!(result.gate, None);
}

#[test]
fn target_match_is_full_not_prefix() {
    let built = crate::cards(&["p_ko", "art_te", "n_whare"]);
    let target = Target::new("Ko te whare tēnei", "This is the house");
    let result = validate(
        tereo_foundation::PatternKind::Ko,
        &built,
        Some(&target),
        &GrammarOptions::default(),
    );
    assert!(result.valid);
    assert!(!result.correct);
}
