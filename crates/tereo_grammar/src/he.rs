//! He sentences: classifying what kind of thing something is.
//!
//! `He + noun`, optionally followed by a pronoun or demonstrative subject.
//! Unlike Ko, He never takes an article.

use tereo_foundation::{Card, Target, WordType};

use crate::result::{Gate, Praise, ValidationResult, WordBreakdown, conclude, reject};
use crate::subjects::{Tense, subject};

const PRAISE: Praise = Praise {
    free_message: "Excellent He sentence!",
    target_hint: Some("Remember: He = classification (a teacher), Ko = identification (THE teacher)"),
    free_hint: Some("He is for CLASSIFICATION (what kind) - different from Ko (which specific thing)"),
};

fn is_article(card: &Card) -> bool {
    card.is(WordType::Article) || card.reads_as(&["te", "ngā"])
}

/// Validates a He sentence.
#[must_use]
pub fn validate(cards: &[Card], target: Option<&Target>) -> ValidationResult {
    let (he, noun, subj) = match cards {
        [a, b] => (a, b, None),
        [a, b, c] => (a, b, Some(c)),
        _ => {
            return reject(
                Gate::Length,
                "He sentences need exactly 2 or 3 cards",
                "Pattern: He + noun (indefinite) OR He + noun + subject (classification)",
                None,
            );
        }
    };

    if he.maori != "He" {
        return reject(
            Gate::Leader,
            "First card must be He",
            "He classifies things into categories (a/an, not the)",
            Some("He is used for classification - it says what KIND of thing something is"),
        );
    }
    if is_article(noun) {
        return reject(
            Gate::NoArticle,
            "He sentences do NOT use te or ngā",
            "He pattern: He + noun (NO article!)",
            Some(
                "This is the KEY difference: Ko uses articles (Ko te...), but He does NOT \
                 (He kaiako...). He classifies, Ko identifies.",
            ),
        );
    }
    if !noun.is(WordType::Noun) {
        return reject(
            Gate::Noun,
            "Second card must be a noun",
            "He + NOUN = a/an (category)",
            Some("After He, you need a noun that represents the category"),
        );
    }
    if subj.is_some_and(|s| !s.is(WordType::Pronoun) && !s.is(WordType::Demonstrative)) {
        return reject(
            Gate::Subject,
            "Third card must be a pronoun or demonstrative",
            "He + noun + WHO/WHAT (au, koe, ia, tēnei, etc.)",
            Some("The subject tells us WHO or WHAT belongs to this category"),
        );
    }

    let (translation, breakdown) = match subj {
        None => (
            format!("A {}", noun.english),
            vec![
                WordBreakdown::new(
                    &he.maori,
                    "classifier",
                    "indicates classification/category (a/an/some)",
                ),
                WordBreakdown::of(noun, "noun"),
            ],
        ),
        Some(s) => {
            let who = subject(s);
            (
                format!(
                    "{} {} a {}",
                    who.phrase,
                    Tense::Present.verb(who.copula),
                    noun.english
                ),
                vec![
                    WordBreakdown::new(
                        &he.maori,
                        "classifier",
                        "indicates classification (a/an - not THE)",
                    ),
                    WordBreakdown::of(noun, "noun/category"),
                    WordBreakdown::of(s, s.word_type.name()),
                ],
            )
        }
    };

    conclude(cards, target, translation, breakdown, &PRAISE)
}

/// Whether the sentence leads with He.
#[must_use]
pub fn is_he_pattern(cards: &[Card]) -> bool {
    cards.first().is_some_and(|c| c.maori == "He")
}

/// Next-step guidance for a partial He sentence.
#[must_use]
pub fn hint(cards: &[Card]) -> Option<&'static str> {
    match cards {
        [] => Some("Start with He to classify what KIND of thing something is"),
        [he] if he.maori == "He" => Some("Good! Now add a noun (the category)"),
        [he, second] if he.maori == "He" => Some(if second.is(WordType::Noun) {
            "Complete 2-card sentence! (Optional: add subject for 3-card sentence)"
        } else if second.reads_as(&["te", "ngā"]) {
            "He does NOT use articles! Use: He + noun (not He + te + noun)"
        } else {
            "After He, you need a noun (category)"
        }),
        [_, _, _] => Some(if validate(cards, None).valid {
            "Perfect He classification sentence!"
        } else {
            "Check the pattern: He + noun + subject (no articles!)"
        }),
        _ if cards.len() > 3 => Some("He sentences only need 2-3 cards"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tereo_lexicon::Catalog;

    fn cards(ids: &[&str]) -> Vec<Card> {
        let catalog = Catalog::standard();
        ids.iter().map(|id| catalog.card(id).unwrap()).collect()
    }

    #[test]
    fn two_card_indefinite() {
        let result = validate(&cards(&["p_he", "n_whare"]), None);
        assert!(result.valid);
        assert_eq!(result.translation, "A house");
        assert_eq!(result.breakdown[0].role, "classifier");
        assert!(result.feedback.hint.is_some());
    }

    #[test]
    fn three_card_classification() {
        let result = validate(&cards(&["p_he", "n_kaiako", "pr_au"]), None);
        assert!(result.valid);
        assert_eq!(result.translation, "I am a teacher");
        assert_eq!(result.breakdown[1].role, "noun/category");
        assert_eq!(result.breakdown[2].role, "pronoun");

        let this = validate(&cards(&["p_he", "n_ngeru", "d_tenei"]), None);
        assert_eq!(this.translation, "This is a cat");
        assert_eq!(this.breakdown[2].role, "demonstrative");
    }

    #[test]
    fn article_gets_its_own_error() {
        let result = validate(&cards(&["p_he", "art_te", "n_whare"]), None);
        assert!(!result.valid);
        assert_eq!(result.gate, Some(Gate::NoArticle));
        assert_eq!(result.feedback.message, "He sentences do NOT use te or ngā");
    }

    #[test]
    fn other_gates() {
        let gate = |ids: &[&str]| validate(&cards(ids), None).gate;
        assert_eq!(gate(&["p_he"]), Some(Gate::Length));
        assert_eq!(gate(&["p_ko", "n_whare"]), Some(Gate::Leader));
        assert_eq!(gate(&["p_he", "pr_au"]), Some(Gate::Noun));
        assert_eq!(gate(&["p_he", "n_whare", "n_kuri"]), Some(Gate::Subject));
    }

    #[test]
    fn matched_target_reminds_of_ko() {
        let result = validate(
            &cards(&["p_he", "n_whare"]),
            Some(&Target::new("He whare", "A house")),
        );
        assert!(result.correct);
        assert!(result.feedback.hint.as_deref().is_some_and(|h| h.contains("Ko = identification")));
    }

    #[test]
    fn hints() {
        assert_eq!(hint(&cards(&["p_he"])), Some("Good! Now add a noun (the category)"));
        assert_eq!(
            hint(&cards(&["p_he", "art_nga"])),
            Some("He does NOT use articles! Use: He + noun (not He + te + noun)")
        );
        assert_eq!(
            hint(&cards(&["p_he", "n_whare", "pr_ia"])),
            Some("Perfect He classification sentence!")
        );
        assert_eq!(
            hint(&cards(&["p_he", "n_whare", "pr_ia", "pr_au"])),
            Some("He sentences only need 2-3 cards")
        );
        assert_eq!(hint(&cards(&["p_ko", "n_whare"])), None);
    }
}
