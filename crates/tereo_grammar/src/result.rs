//! The validation result model shared by every pattern.
//!
//! A validator never fails: structural rejection is a [`ValidationResult`]
//! with `valid == false` and a [`Gate`] naming the broken constraint.

use std::fmt;

use tereo_foundation::card::surface;
use tereo_foundation::{Card, Target};

/// Classification of feedback shown to the learner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FeedbackKind {
    /// Correct sentence.
    Success,
    /// Grammatical, but not the requested sentence.
    Warning,
    /// A structural gate failed.
    Error,
}

impl FeedbackKind {
    /// Lowercase name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for FeedbackKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How natural a correct sentence sounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Naturalness {
    /// Idiomatic.
    Natural,
}

/// Human-readable feedback.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Feedback {
    /// Classification.
    pub kind: FeedbackKind,
    /// Headline.
    pub message: String,
    /// What to try next.
    pub hint: Option<String>,
    /// Why.
    pub explanation: Option<String>,
    /// Set on success.
    pub naturalness: Option<Naturalness>,
}

impl Feedback {
    fn new(kind: FeedbackKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            hint: None,
            explanation: None,
            naturalness: None,
        }
    }

    /// Success feedback, marked natural.
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            naturalness: Some(Naturalness::Natural),
            ..Self::new(FeedbackKind::Success, message)
        }
    }

    /// Warning feedback.
    #[must_use]
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(FeedbackKind::Warning, message)
    }

    /// Error feedback.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(FeedbackKind::Error, message)
    }

    /// Sets the hint.
    #[must_use]
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    /// Sets the explanation.
    #[must_use]
    pub fn with_explanation(mut self, explanation: impl Into<String>) -> Self {
        self.explanation = Some(explanation.into());
        self
    }
}

/// One word's role in a sentence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WordBreakdown {
    /// Surface form.
    pub word: String,
    /// Grammatical role.
    pub role: String,
    /// Gloss.
    pub meaning: String,
}

impl WordBreakdown {
    /// Creates a breakdown entry.
    #[must_use]
    pub fn new(
        word: impl Into<String>,
        role: impl Into<String>,
        meaning: impl Into<String>,
    ) -> Self {
        Self {
            word: word.into(),
            role: role.into(),
            meaning: meaning.into(),
        }
    }

    /// An entry whose meaning is the card's own gloss.
    #[must_use]
    pub fn of(card: &Card, role: impl Into<String>) -> Self {
        Self::new(card.maori.clone(), role, card.english.clone())
    }
}

/// The structural check that rejected a sentence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Gate {
    /// Card count outside the pattern's shapes.
    Length,
    /// Wrong sentence-leading word.
    Leader,
    /// `te`/`ngā` expected.
    Article,
    /// An article where He forbids one.
    NoArticle,
    /// Noun expected.
    Noun,
    /// Demonstrative expected.
    Demonstrative,
    /// Pronoun expected.
    Pronoun,
    /// Pronoun or demonstrative expected.
    Subject,
    /// Adjective or verb expected.
    Predicate,
    /// Intensifier expected.
    Intensifier,
    /// Verb expected.
    Verb,
    /// Locative particle expected.
    Locative,
    /// Location or object expected.
    Complement,
}

impl Gate {
    /// Kebab-case name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Length => "length",
            Self::Leader => "leader",
            Self::Article => "article",
            Self::NoArticle => "no-article",
            Self::Noun => "noun",
            Self::Demonstrative => "demonstrative",
            Self::Pronoun => "pronoun",
            Self::Subject => "subject",
            Self::Predicate => "predicate",
            Self::Intensifier => "intensifier",
            Self::Verb => "verb",
            Self::Locative => "locative",
            Self::Complement => "complement",
        }
    }
}

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Outcome of validating a sentence.
///
/// `correct` implies `valid`; `gate` is set exactly when `valid` is false.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidationResult {
    /// Grammatically well formed for the invoked pattern.
    pub valid: bool,
    /// Matches the target, or valid in free building.
    pub correct: bool,
    /// What to show the learner.
    pub feedback: Feedback,
    /// Generated English rendering; empty when invalid.
    pub translation: String,
    /// One entry per card; empty when invalid.
    pub breakdown: Vec<WordBreakdown>,
    /// The gate that rejected the sentence.
    pub gate: Option<Gate>,
}

impl ValidationResult {
    /// A result for a sentence stopped at `gate`.
    #[must_use]
    pub fn rejected(gate: Gate, feedback: Feedback) -> Self {
        Self {
            valid: false,
            correct: false,
            feedback,
            translation: String::new(),
            breakdown: Vec::new(),
            gate: Some(gate),
        }
    }
}

/// Builds a rejection with the usual message/hint/explanation triple.
pub(crate) fn reject(
    gate: Gate,
    message: &str,
    hint: &str,
    explanation: Option<&str>,
) -> ValidationResult {
    let mut feedback = Feedback::error(message).with_hint(hint);
    feedback.explanation = explanation.map(str::to_string);
    ValidationResult::rejected(gate, feedback)
}

/// Pattern-specific wording for accepted sentences.
pub(crate) struct Praise {
    /// Headline in free building.
    pub free_message: &'static str,
    /// Hint attached when the target is matched.
    pub target_hint: Option<&'static str>,
    /// Hint attached in free building.
    pub free_hint: Option<&'static str>,
}

impl Praise {
    pub(crate) const fn plain(free_message: &'static str) -> Self {
        Self {
            free_message,
            target_hint: None,
            free_hint: None,
        }
    }
}

/// Finishes a sentence that passed every gate: compares it against the target
/// and picks the three-way feedback.
pub(crate) fn conclude(
    cards: &[Card],
    target: Option<&Target>,
    translation: String,
    breakdown: Vec<WordBreakdown>,
    praise: &Praise,
) -> ValidationResult {
    let built = surface(cards);
    let (correct, feedback) = match target {
        Some(target) if built == target.normalized() => {
            let mut feedback = Feedback::success("Perfect!")
                .with_explanation(format!("\"{}\" means \"{}\"", target.surface, target.gloss));
            feedback.hint = praise.target_hint.map(str::to_string);
            (true, feedback)
        }
        Some(target) => (
            false,
            Feedback::warning("Grammatically correct, but not the target sentence")
                .with_explanation(format!("You built: \"{built}\" which means \"{translation}\""))
                .with_hint(format!("The challenge asked for: \"{}\"", target.surface)),
        ),
        None => {
            let mut feedback = Feedback::success(praise.free_message)
                .with_explanation(format!("\"{built}\" means \"{translation}\""));
            feedback.hint = praise.free_hint.map(str::to_string);
            (true, feedback)
        }
    };

    ValidationResult {
        valid: true,
        correct,
        feedback,
        translation,
        breakdown,
        gate: None,
    }
}
