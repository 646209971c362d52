//! Equative sentences: who someone is.
//!
//! `Ko + pronoun + te/ngā + noun`. A plural article pluralizes the noun.

use tereo_foundation::{Card, Target, WordType};

use crate::morphology::pluralize;
use crate::result::{Gate, Praise, ValidationResult, WordBreakdown, conclude, reject};
use crate::subjects::{Tense, subject};

const PRAISE: Praise = Praise::plain("Excellent equative sentence!");

/// Validates an equative sentence.
#[must_use]
pub fn validate(cards: &[Card], target: Option<&Target>) -> ValidationResult {
    let [ko, pronoun, article, noun] = cards else {
        return reject(
            Gate::Length,
            "Equative sentences need exactly 4 cards",
            "Pattern: Ko + pronoun + te/ngā + noun",
            None,
        );
    };

    if ko.maori != "Ko" {
        return reject(
            Gate::Leader,
            "First card must be Ko",
            "Ko introduces WHO someone is",
            Some("Equative sentences start with Ko to identify a specific person"),
        );
    }
    if !pronoun.is(WordType::Pronoun) {
        return reject(
            Gate::Pronoun,
            "Second card must be a pronoun (au, koe, ia)",
            "Pattern: Ko + PRONOUN + te/ngā + noun",
            Some("The pronoun tells us WHO we're talking about"),
        );
    }
    if !article.reads_as(&["te", "ngā"]) {
        return reject(
            Gate::Article,
            "Third card must be te or ngā",
            "Ko + pronoun + ARTICLE + noun",
            Some("You need an article (te/ngā) before the noun"),
        );
    }
    if !noun.is(WordType::Noun) {
        return reject(
            Gate::Noun,
            "Fourth card must be a noun",
            "The noun tells us WHAT the person is",
            Some("Equative sentences identify WHO someone is: Ko + pronoun + te/ngā + NOUN"),
        );
    }

    let plural = article.maori == "ngā";
    let who = subject(pronoun);
    let noun_gloss = if plural {
        pluralize(&noun.english)
    } else {
        noun.english.clone()
    };
    let translation = format!(
        "{} {} the {noun_gloss}",
        who.phrase,
        Tense::Present.verb(who.copula)
    );

    let breakdown = vec![
        WordBreakdown::new(&ko.maori, "particle", "introduces specific person/identity"),
        WordBreakdown::new(&pronoun.maori, "pronoun", who.meaning),
        WordBreakdown::new(
            &article.maori,
            "article",
            if plural { "the (plural)" } else { "the (singular)" },
        ),
        WordBreakdown::of(noun, "noun"),
    ];

    conclude(cards, target, translation, breakdown, &PRAISE)
}

/// Whether the sentence leads with Ko followed by a pronoun.
#[must_use]
pub fn is_equative_pattern(cards: &[Card]) -> bool {
    matches!(cards, [ko, pronoun, ..] if ko.maori == "Ko" && pronoun.is(WordType::Pronoun))
}

/// Next-step guidance for a partial equative sentence.
#[must_use]
pub fn hint(cards: &[Card]) -> Option<&'static str> {
    match cards {
        [] => Some("Start with Ko to introduce WHO someone is"),
        [ko] if ko.maori == "Ko" => Some("Good! Now add a pronoun (au, koe, ia)"),
        [ko, second] if ko.maori == "Ko" => Some(if second.is(WordType::Pronoun) {
            "Perfect! Now add te or ngā"
        } else {
            "After Ko, you need a pronoun (au, koe, or ia)"
        }),
        [ko, pronoun, third] if ko.maori == "Ko" && pronoun.is(WordType::Pronoun) => {
            Some(if third.reads_as(&["te", "ngā"]) {
                "Almost there! Now add a noun to complete the sentence"
            } else {
                "After the pronoun, you need te or ngā"
            })
        }
        [_, _, _, _] => Some(if validate(cards, None).valid {
            "Perfect equative sentence!"
        } else {
            "Check the pattern: Ko + pronoun + te/ngā + noun"
        }),
        _ => None,
    }
}
