//! Subject phrases for pronouns and demonstratives, and tense copulas.

use tereo_foundation::Card;

/// Person/number agreement of an English subject.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Copula {
    /// First person singular.
    Am,
    /// Second person, or plural.
    Are,
    /// Third person singular.
    Is,
}

/// Tense named by the sentence-leading marker.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tense {
    /// `Kei te`: happening now.
    Present,
    /// `I`: already happened.
    Past,
    /// `Ka`: will happen.
    Future,
}

impl Tense {
    /// Every tense.
    pub const ALL: [Self; 3] = [Self::Present, Self::Past, Self::Future];

    /// Recognizes a tense marker surface.
    #[must_use]
    pub fn from_surface(surface: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.marker() == surface)
    }

    /// The marker's surface form.
    #[must_use]
    pub const fn marker(self) -> &'static str {
        match self {
            Self::Present => "Kei te",
            Self::Past => "I",
            Self::Future => "Ka",
        }
    }

    /// The English verb agreeing with `copula` in this tense.
    #[must_use]
    pub const fn verb(self, copula: Copula) -> &'static str {
        match (self, copula) {
            (Self::Present, Copula::Am) => "am",
            (Self::Present, Copula::Are) => "are",
            (Self::Present, Copula::Is) => "is",
            (Self::Past, Copula::Am | Copula::Is) => "was",
            (Self::Past, Copula::Are) => "were",
            (Self::Future, _) => "will be",
        }
    }

    /// Short description used in breakdowns.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Present => "present continuous",
            Self::Past => "past tense",
            Self::Future => "future tense",
        }
    }
}

/// How a subject word renders in English.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Subject<'a> {
    /// Sentence-initial phrase (`I`, `You two`, `This`).
    pub phrase: &'a str,
    /// Agreement.
    pub copula: Copula,
    /// Lowercase meaning for breakdowns.
    pub meaning: &'a str,
}

/// Surface, phrase, copula and lowercase meaning.
const SUBJECTS: &[(&str, &str, Copula, &str)] = &[
    ("au", "I", Copula::Am, "I"),
    ("koe", "You", Copula::Are, "you"),
    ("ia", "He/She", Copula::Is, "he/she"),
    ("tāua", "We two (you and I)", Copula::Are, "we two (you and I)"),
    ("māua", "We two (not you)", Copula::Are, "we two (not you)"),
    ("tātou", "We all", Copula::Are, "we all"),
    ("mātou", "We (not you)", Copula::Are, "we (not you)"),
    ("kōrua", "You two", Copula::Are, "you two"),
    ("rāua", "They two", Copula::Are, "they two"),
    ("koutou", "You (plural)", Copula::Are, "you (plural)"),
    ("rātou", "They", Copula::Are, "they"),
    ("tēnei", "This", Copula::Is, "this"),
    ("tēnā", "That (near you)", Copula::Is, "that (near you)"),
    ("tērā", "That (over there)", Copula::Is, "that (over there)"),
    ("ēnei", "These", Copula::Are, "these"),
    ("ēnā", "Those (near you)", Copula::Are, "those (near you)"),
    ("ērā", "Those (over there)", Copula::Are, "those (over there)"),
];

/// The English subject for a pronoun or demonstrative card.
///
/// Unknown surfaces fall back to the card's own gloss with `is`.
#[must_use]
pub fn subject(card: &Card) -> Subject<'_> {
    SUBJECTS
        .iter()
        .find(|(surface, ..)| *surface == card.maori)
        .map_or(
            Subject {
                phrase: &card.english,
                copula: Copula::Is,
                meaning: &card.english,
            },
            |&(_, phrase, copula, meaning)| Subject {
                phrase,
                copula,
                meaning,
            },
        )
}
