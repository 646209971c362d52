//! Ko sentences: identifying a specific thing.
//!
//! `Ko + te/ngā + noun`, optionally followed by a demonstrative.

use tereo_foundation::{Card, Target, WordType};

use crate::morphology::pluralize;
use crate::options::{GrammarOptions, KoPlural};
use crate::result::{Gate, Praise, ValidationResult, WordBreakdown, conclude, reject};

const ARTICLES: &[&str] = &["te", "ngā"];

const PRAISE: Praise = Praise::plain("Excellent sentence!");

/// Validates a Ko sentence with default options.
#[must_use]
pub fn validate(cards: &[Card], target: Option<&Target>) -> ValidationResult {
    validate_with(cards, target, &GrammarOptions::default())
}

/// Validates a Ko sentence.
#[must_use]
pub fn validate_with(
    cards: &[Card],
    target: Option<&Target>,
    options: &GrammarOptions,
) -> ValidationResult {
    let (ko, article, noun, demonstrative) = match cards {
        [a, b, c] => (a, b, c, None),
        [a, b, c, d] => (a, b, c, Some(d)),
        _ => {
            return reject(
                Gate::Length,
                "Need exactly 3 or 4 cards for Ko sentences",
                "Pattern: Ko + te/ngā + noun (+ optional demonstrative)",
                None,
            );
        }
    };

    if ko.maori != "Ko" {
        return reject(
            Gate::Leader,
            "First card must be Ko",
            "Ko comes first - it introduces the specific thing",
            Some("Ko is the definite particle that starts these sentences"),
        );
    }
    if !article.reads_as(ARTICLES) {
        return reject(
            Gate::Article,
            "Second card must be te or ngā",
            "Use te for singular, ngā for plural",
            Some("Articles come after Ko to specify if the noun is singular or plural"),
        );
    }
    if !noun.is(WordType::Noun) {
        return reject(
            Gate::Noun,
            "Third card must be a noun",
            "A noun is a thing (whare, ngeru, tangata, etc.)",
            Some("The sentence needs to end with what thing you are identifying"),
        );
    }
    if demonstrative.is_some_and(|d| !d.is(WordType::Demonstrative)) {
        return reject(
            Gate::Demonstrative,
            "Fourth card must be a demonstrative (tēnei, tēnā, tērā)",
            "Demonstratives point out WHERE the thing is",
            Some("Use tēnei (this/near me), tēnā (that/near you), or tērā (that/over there)"),
        );
    }

    let plural = article.maori == "ngā";
    let translation = translate(noun, demonstrative, plural, options.ko_plural);

    let mut breakdown = vec![
        WordBreakdown::new(&ko.maori, "definite particle", "introduces specific thing"),
        WordBreakdown::new(
            &article.maori,
            "article",
            if plural { "the (plural)" } else { "the (singular)" },
        ),
        WordBreakdown::of(noun, "noun"),
    ];
    if let Some(dem) = demonstrative {
        breakdown.push(WordBreakdown::of(dem, "demonstrative"));
    }

    conclude(cards, target, translation, breakdown, &PRAISE)
}

/// Distance note for a demonstrative surface.
fn distance(dem: &Card) -> &'static str {
    match dem.maori.as_str() {
        "tēnei" => " (this/near me)",
        "tēnā" => " (that/near you)",
        "tērā" => " (that/over there)",
        _ => "",
    }
}

fn translate(noun: &Card, demonstrative: Option<&Card>, plural: bool, mode: KoPlural) -> String {
    let pluralized = plural && mode == KoPlural::Pluralize;
    let noun_gloss = if pluralized {
        pluralize(&noun.english)
    } else {
        noun.english.clone()
    };

    match demonstrative {
        None => {
            let note = if plural && !pluralized { " (plural)" } else { "" };
            format!("The {noun_gloss}{note}")
        }
        Some(dem) => {
            let near = dem.maori == "tēnei";
            let lead = match (near, pluralized) {
                (true, false) => "This is",
                (false, false) => "That is",
                (true, true) => "These are",
                (false, true) => "Those are",
            };
            format!("{lead} the {noun_gloss}{}", distance(dem))
        }
    }
}

/// Whether the sentence leads with Ko.
#[must_use]
pub fn is_ko_pattern(cards: &[Card]) -> bool {
    cards.first().is_some_and(|c| c.maori == "Ko")
}

/// Next-step guidance for a partial Ko sentence.
#[must_use]
pub fn hint(cards: &[Card]) -> Option<&'static str> {
    match cards {
        [] => Some("Start with Ko to introduce a specific thing"),
        [ko] if ko.maori == "Ko" => Some("Good! Now add te (singular) or ngā (plural)"),
        [ko, article] if ko.maori == "Ko" => Some(if article.reads_as(ARTICLES) {
            "Perfect! Now add a noun (thing)"
        } else {
            "After Ko, you need te or ngā"
        }),
        [_, _, _] if validate(cards, None).valid => {
            Some("Your sentence is complete! (Optional: add a demonstrative)")
        }
        _ if cards.len() >= 4 => Some(if validate(cards, None).valid {
            "Perfect sentence with demonstrative!"
        } else {
            "Check the fourth card - should be tēnei, tēnā, or tērā"
        }),
        _ => None,
    }
}
