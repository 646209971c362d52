//! Challenges and the sentence patterns they ask for.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;
use crate::word::WordType;

/// The four supported sentence-construction families.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PatternKind {
    /// `Ko + te/ngā + noun (+ demonstrative)`: identification.
    Ko,
    /// `He + noun (+ subject)`: classification.
    He,
    /// `Ko + pronoun + te/ngā + noun`: who someone is.
    Equative,
    /// `Kei te/I/Ka + predicate + pronoun ...`: tense-marked predicates.
    KeiTe,
}

impl PatternKind {
    /// Every pattern kind.
    pub const ALL: [Self; 4] = [Self::Ko, Self::He, Self::Equative, Self::KeiTe];

    /// The pattern-type string challenges carry.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ko => "ko",
            Self::He => "he",
            Self::Equative => "equative",
            Self::KeiTe => "kei_te",
        }
    }

    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Ko => "Ko",
            Self::He => "He",
            Self::Equative => "Equative",
            Self::KeiTe => "Kei te",
        }
    }
}

impl FromStr for PatternKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|k| k.name() == s)
            .ok_or_else(|| Error::unknown_pattern(s))
    }
}

impl fmt::Display for PatternKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The sentence a challenge asks the learner to reproduce.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Target {
    /// Surface sentence, e.g. `Ko te whare`.
    pub surface: String,
    /// English meaning, e.g. `The house`.
    pub gloss: String,
}

impl Target {
    /// Creates a target.
    #[must_use]
    pub fn new(surface: impl Into<String>, gloss: impl Into<String>) -> Self {
        Self {
            surface: surface.into(),
            gloss: gloss.into(),
        }
    }

    /// The surface with runs of whitespace collapsed to single spaces.
    #[must_use]
    pub fn normalized(&self) -> String {
        self.surface.split_whitespace().collect::<Vec<_>>().join(" ")
    }
}

/// What a sentence slot expects.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SlotType {
    /// A fixed surface form (`Ko`, `te`, `Kei te`).
    Literal(String),
    /// Any word of a category.
    Word(WordType),
}

impl fmt::Display for SlotType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(s) => write!(f, "\"{s}\""),
            Self::Word(t) => write!(f, "{t}"),
        }
    }
}

/// A lesson exercise.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Challenge {
    /// Stable id, `c_{module}_{lesson}_{n}`.
    pub id: String,
    /// Pattern family the sentence must follow.
    pub pattern: PatternKind,
    /// Instruction shown to the learner.
    pub instruction: String,
    /// Sentence to reproduce; `None` for free building.
    pub target: Option<Target>,
    /// Expected slot shape.
    pub slots: Vec<SlotType>,
    /// Card ids dealt into the hand.
    pub required_cards: Vec<String>,
    /// Extra guidance lines.
    pub hints: Vec<String>,
}

impl Challenge {
    /// Creates a free-build challenge with no slots.
    #[must_use]
    pub fn new(id: impl Into<String>, pattern: PatternKind) -> Self {
        Self {
            id: id.into(),
            pattern,
            instruction: String::new(),
            target: None,
            slots: Vec::new(),
            required_cards: Vec::new(),
            hints: Vec::new(),
        }
    }

    /// Sets the instruction.
    #[must_use]
    pub fn with_instruction(mut self, instruction: impl Into<String>) -> Self {
        self.instruction = instruction.into();
        self
    }

    /// Sets the target sentence.
    #[must_use]
    pub fn with_target(mut self, target: Target) -> Self {
        self.target = Some(target);
        self
    }

    /// Sets the slot shape.
    #[must_use]
    pub fn with_slots(mut self, slots: Vec<SlotType>) -> Self {
        self.slots = slots;
        self
    }

    /// Sets the required card ids.
    #[must_use]
    pub fn with_required_cards<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.required_cards = ids.into_iter().map(Into::into).collect();
        self
    }

    /// Adds a guidance line.
    #[must_use]
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hints.push(hint.into());
        self
    }

    /// Whether any valid sentence counts as correct.
    #[must_use]
    pub fn is_free_build(&self) -> bool {
        self.target.is_none()
    }
}
