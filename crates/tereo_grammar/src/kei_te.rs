//! Tense-marked predicates: `Kei te` (present continuous), `I` (past) and
//! `Ka` (future).
//!
//! All three markers share the same shapes, dispatched by card count:
//!
//! ```text
//! 3: [tense][adjective|verb][pronoun]
//! 4: [tense][intensifier][adjective|verb][pronoun]
//! 5: [tense][verb][pronoun][i|ki][noun|article]
//! ```
//!
//! Adjectives cannot take a locative complement, so the 5-card shape wants a
//! verb.

use tereo_foundation::{Card, Target, WordType};

use crate::morphology::gerund;
use crate::result::{Gate, Praise, ValidationResult, WordBreakdown, conclude, reject};
use crate::subjects::{Tense, subject};

impl Tense {
    fn praise(self) -> &'static Praise {
        const PRESENT: Praise = Praise {
            free_message: "Excellent Kei te sentence!",
            target_hint: Some("Remember: Kei te = present continuous (happening right now!)"),
            free_hint: Some("Kei te indicates present continuous - actions happening RIGHT NOW!"),
        };
        const PAST: Praise = Praise {
            free_message: "Excellent past tense sentence!",
            target_hint: Some("Remember: I = past tense (it already happened)"),
            free_hint: Some("I marks actions and states that already happened"),
        };
        const FUTURE: Praise = Praise {
            free_message: "Excellent future tense sentence!",
            target_hint: Some("Remember: Ka = future tense (it will happen)"),
            free_hint: Some("Ka marks actions and states that will happen"),
        };
        match self {
            Self::Present => &PRESENT,
            Self::Past => &PAST,
            Self::Future => &FUTURE,
        }
    }
}

fn is_predicate(card: &Card) -> bool {
    card.is(WordType::Adjective) || card.is(WordType::Verb)
}

/// English for an adjective or verb in continuous form.
fn predicate_english(card: &Card) -> String {
    if card.is(WordType::Adjective) {
        card.english.clone()
    } else {
        gerund(&card.english)
    }
}

/// `"{subject} {verb}"` for a pronoun card in a tense.
fn subject_phrase(tense: Tense, pronoun: &Card) -> String {
    let who = subject(pronoun);
    format!("{} {}", who.phrase, tense.verb(who.copula))
}

/// Validates a tense-marked sentence.
#[must_use]
pub fn validate(cards: &[Card], target: Option<&Target>) -> ValidationResult {
    let wrong_length = || {
        reject(
            Gate::Length,
            "Kei te sentences need 3, 4, or 5 cards",
            "Pattern: Kei te + adjective/verb + subject (+ optional intensifier or location)",
            None,
        )
    };
    if !(3..=5).contains(&cards.len()) {
        return wrong_length();
    }

    let Some(tense) = cards.first().and_then(|c| Tense::from_surface(&c.maori)) else {
        return reject(
            Gate::Leader,
            "First card must be \"Kei te\" (or the tense markers I, Ka)",
            "Kei te indicates actions or states happening RIGHT NOW",
            Some("Kei te is the present continuous tense marker"),
        );
    };

    match cards {
        [marker, predicate, pronoun] => {
            three_card(tense, marker, predicate, pronoun, cards, target)
        }
        [marker, intensifier, predicate, pronoun] => {
            four_card(tense, [marker, intensifier, predicate, pronoun], cards, target)
        }
        [marker, verb, pronoun, locative, place] => {
            five_card(tense, [marker, verb, pronoun, locative, place], cards, target)
        }
        _ => wrong_length(),
    }
}

fn three_card(
    tense: Tense,
    marker: &Card,
    predicate: &Card,
    pronoun: &Card,
    cards: &[Card],
    target: Option<&Target>,
) -> ValidationResult {
    if !is_predicate(predicate) {
        return reject(
            Gate::Predicate,
            "Second card must be an adjective or verb",
            "Kei te + [adjective/verb] + pronoun",
            Some("Adjectives describe states (pai, harikoa), verbs describe actions (haere, kai)"),
        );
    }
    if !pronoun.is(WordType::Pronoun) {
        return reject(
            Gate::Pronoun,
            "Third card must be a pronoun",
            "Kei te + adjective/verb + WHO (au, koe, ia, etc.)",
            Some("The pronoun tells us WHO is experiencing this state or doing this action"),
        );
    }

    let translation = format!(
        "{} {}",
        subject_phrase(tense, pronoun),
        predicate_english(predicate)
    );
    let marker_meaning = match tense {
        Tense::Present => "present continuous (right now)",
        other => other.description(),
    };
    let breakdown = vec![
        WordBreakdown::new(&marker.maori, "tense marker", marker_meaning),
        WordBreakdown::of(predicate, predicate.word_type.name()),
        WordBreakdown::of(pronoun, "pronoun"),
    ];

    conclude(cards, target, translation, breakdown, tense.praise())
}

fn four_card(
    tense: Tense,
    [marker, intensifier, predicate, pronoun]: [&Card; 4],
    cards: &[Card],
    target: Option<&Target>,
) -> ValidationResult {
    if !intensifier.is(WordType::Intensifier) {
        return reject(
            Gate::Intensifier,
            "For 4-card sentences, second card should be an intensifier",
            "Kei te + [tino/āhua] + adjective/verb + pronoun",
            Some("Intensifiers (tino=very, āhua=somewhat) modify the adjective or verb"),
        );
    }
    if !is_predicate(predicate) {
        return reject(
            Gate::Predicate,
            "Third card must be an adjective or verb",
            "Kei te + intensifier + [adjective/verb] + pronoun",
            None,
        );
    }
    if !pronoun.is(WordType::Pronoun) {
        return reject(
            Gate::Pronoun,
            "Fourth card must be a pronoun",
            "Kei te + intensifier + adjective/verb + WHO",
            None,
        );
    }

    let translation = format!(
        "{} {} {}",
        subject_phrase(tense, pronoun),
        intensifier.english,
        predicate_english(predicate)
    );
    let breakdown = vec![
        WordBreakdown::new(&marker.maori, "tense marker", tense.description()),
        WordBreakdown::of(intensifier, "intensifier"),
        WordBreakdown::of(predicate, predicate.word_type.name()),
        WordBreakdown::of(pronoun, "pronoun"),
    ];

    conclude(cards, target, translation, breakdown, tense.praise())
}

fn five_card(
    tense: Tense,
    [marker, verb, pronoun, locative, place]: [&Card; 5],
    cards: &[Card],
    target: Option<&Target>,
) -> ValidationResult {
    if !verb.is(WordType::Verb) {
        return reject(
            Gate::Verb,
            "Second card must be a verb for 5-card sentences",
            "Kei te + verb + pronoun + i/ki + location/object",
            Some("Only verbs can take locations or objects, not adjectives"),
        );
    }
    if !pronoun.is(WordType::Pronoun) {
        return reject(
            Gate::Pronoun,
            "Third card must be a pronoun",
            "Kei te + verb + WHO + i/ki + location",
            None,
        );
    }
    if !locative.is(WordType::LocativeParticle) {
        return reject(
            Gate::Locative,
            "Fourth card must be i or ki",
            "Use \"i\" for location (at/in) or \"ki\" for direction (to/towards)",
            Some("i = at/in (where you are), ki = to/towards (where you're going)"),
        );
    }
    if !place.is(WordType::Noun) && !place.is(WordType::Article) {
        return reject(
            Gate::Complement,
            "Fifth card must be a location or object (noun)",
            "Kei te + verb + pronoun + i/ki + PLACE/THING",
            None,
        );
    }

    let preposition = if locative.maori == "i" { "in/at" } else { "to" };
    let translation = format!(
        "{} {} {preposition} {}",
        subject_phrase(tense, pronoun),
        gerund(&verb.english),
        place.english
    );
    let breakdown = vec![
        WordBreakdown::new(&marker.maori, "tense marker", tense.description()),
        WordBreakdown::of(verb, "verb"),
        WordBreakdown::of(pronoun, "pronoun"),
        WordBreakdown::of(locative, "particle"),
        WordBreakdown::of(place, place.word_type.name()),
    ];

    conclude(cards, target, translation, breakdown, tense.praise())
}

/// Whether the sentence leads with a tense marker.
#[must_use]
pub fn is_kei_te_pattern(cards: &[Card]) -> bool {
    cards
        .first()
        .is_some_and(|c| Tense::from_surface(&c.maori).is_some())
}

/// Next-step guidance for a partial tense-marked sentence.
#[must_use]
pub fn hint(cards: &[Card]) -> Option<&'static str> {
    let leads = is_kei_te_pattern(cards);
    match cards {
        [] => Some("Start with \"Kei te\" for present tense"),
        [_] if leads => Some("Good! Now add an adjective (state) or verb (action)"),
        [_, second] if leads => Some(if is_predicate(second) {
            "Great! Now add a pronoun (who?)"
        } else if second.is(WordType::Intensifier) {
            "Good intensifier! Now add adjective/verb, then pronoun"
        } else {
            "After Kei te, add an adjective (pai, harikoa) or verb (haere, kai)"
        }),
        [_, _, _] => Some(if validate(cards, None).valid {
            "Perfect 3-card sentence! (Optional: add intensifier or location)"
        } else {
            "Check pattern: Kei te + adjective/verb + pronoun"
        }),
        [_, _, _, _] => Some(if validate(cards, None).valid {
            "Great sentence with intensifier!"
        } else {
            "Check pattern: Kei te + intensifier + adjective/verb + pronoun"
        }),
        [_, _, _, _, _] => Some(if validate(cards, None).valid {
            "Excellent sentence with location!"
        } else {
            "Check pattern: Kei te + verb + pronoun + i/ki + location"
        }),
        _ if cards.len() > 5 => Some("Kei te sentences need 3-5 cards maximum"),
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

    fn translate(ids: &[&str]) -> String {
        let result = validate(&cards(ids), None);
        assert!(result.valid, "{ids:?} rejected: {}", result.feedback.message);
        result.translation
    }

    #[test]
    fn three_card_adjective_and_verb() {
        assert_eq!(translate(&["tm_keite", "adj_pai", "pr_au"]), "I am good");
        assert_eq!(translate(&["tm_keite", "v_haere", "pr_au"]), "I am going");
        assert_eq!(translate(&["tm_keite", "v_kai", "pr_koe"]), "You are eating");
        assert_eq!(translate(&["tm_keite", "v_noho", "pr_ia"]), "He/She is sitting");
        assert_eq!(translate(&["tm_keite", "v_oma", "pr_ratou"]), "They are running");
        assert_eq!(translate(&["tm_keite", "v_mahaki", "pr_matou"]), "We (not you) are resting");
    }

    #[test]
    fn four_card_with_intensifier() {
        assert_eq!(translate(&["tm_keite", "int_tino", "adj_pai", "pr_au"]), "I am very good");
        assert_eq!(
            translate(&["tm_keite", "int_ahua", "v_mahi", "pr_koe"]),
            "You are somewhat/rather working"
        );
    }

    #[test]
    fn five_card_with_location() {
        let result = validate(
            &cards(&["tm_keite", "v_noho", "pr_au", "pl_i", "n_tamaki"]),
            None,
        );
        assert!(result.valid);
        assert_eq!(result.translation, "I am sitting in/at Auckland");
        assert_eq!(result.breakdown[3].role, "particle");
        assert_eq!(
            translate(&["tm_keite", "v_haere", "pr_ia", "pl_ki", "n_kura"]),
            "He/She is going to school"
        );
    }

    #[test]
    fn five_card_rejects_adjective() {
        let result = validate(&cards(&["tm_keite", "adj_pai", "pr_au", "pl_i", "n_kura"]), None);
        assert_eq!(result.gate, Some(Gate::Verb));
    }

    #[test]
    fn past_and_future_markers() {
        assert_eq!(translate(&["tm_i", "adj_ngenge", "pr_au"]), "I was tired");
        assert_eq!(translate(&["tm_i", "v_haere", "pr_koutou"]), "You (plural) were going");
        assert_eq!(translate(&["tm_ka", "v_ako", "pr_tatou"]), "We all will be learning");

        let result = validate(&cards(&["tm_ka", "adj_pai", "pr_au"]), None);
        assert_eq!(result.breakdown[0].meaning, "future tense");
        assert_eq!(result.feedback.message, "Excellent future tense sentence!");
    }

    #[test]
    fn length_outside_three_to_five() {
        for ids in [
            &["tm_keite", "adj_pai"][..],
            &["tm_keite", "v_noho", "pr_au", "pl_i", "n_kura", "n_kura"][..],
        ] {
            let result = validate(&cards(ids), None);
            assert_eq!(result.gate, Some(Gate::Length));
            assert_eq!(result.feedback.message, "Kei te sentences need 3, 4, or 5 cards");
        }
    }

    #[test]
    fn gates_in_order() {
        let gate = |ids: &[&str]| validate(&cards(ids), None).gate;
        assert_eq!(gate(&["p_ko", "adj_pai", "pr_au"]), Some(Gate::Leader));
        assert_eq!(gate(&["tm_keite", "n_whare", "pr_au"]), Some(Gate::Predicate));
        assert_eq!(gate(&["tm_keite", "adj_pai", "n_whare"]), Some(Gate::Pronoun));
        assert_eq!(gate(&["tm_keite", "adj_pai", "adj_pai", "pr_au"]), Some(Gate::Intensifier));
        assert_eq!(gate(&["tm_keite", "int_tino", "pr_au", "pr_au"]), Some(Gate::Predicate));
        assert_eq!(gate(&["tm_keite", "int_tino", "adj_pai", "n_kura"]), Some(Gate::Pronoun));
        assert_eq!(gate(&["tm_keite", "v_noho", "n_kura", "pl_i", "n_kura"]), Some(Gate::Pronoun));
        assert_eq!(
            gate(&["tm_keite", "v_noho", "pr_au", "art_te", "n_kura"]),
            Some(Gate::Locative)
        );
        assert_eq!(gate(&["tm_keite", "v_noho", "pr_au", "pl_i", "pr_au"]), Some(Gate::Complement));
    }

    #[test]
    fn multi_word_target() {
        let built = cards(&["tm_keite", "v_noho", "pr_au", "pl_i", "n_tamaki"]);
        let target = Target::new("Kei te noho au i Tāmaki Makaurau", "I am living in Auckland");
        let result = validate(&built, Some(&target));
        assert!(result.correct);
        assert_eq!(
            result.feedback.hint.as_deref(),
            Some("Remember: Kei te = present continuous (happening right now!)")
        );
    }

    #[test]
    fn hints() {
        assert_eq!(hint(&[]), Some("Start with \"Kei te\" for present tense"));
        assert_eq!(
            hint(&cards(&["tm_keite", "int_tino"])),
            Some("Good intensifier! Now add adjective/verb, then pronoun")
        );
        assert_eq!(
            hint(&cards(&["tm_keite", "pr_au"])),
            Some("After Kei te, add an adjective (pai, harikoa) or verb (haere, kai)")
        );
        assert_eq!(
            hint(&cards(&["tm_keite", "adj_pai", "pr_au"])),
            Some("Perfect 3-card sentence! (Optional: add intensifier or location)")
        );
        assert_eq!(hint(&cards(&["p_ko", "art_te"])), None);
        assert_eq!(
            hint(&cards(&["tm_keite", "v_noho", "pr_au", "pl_i", "n_kura", "n_kura"])),
            Some("Kei te sentences need 3-5 cards maximum")
        );
    }
}
