//! Lexical entries and their grammatical categories.

use std::fmt;

/// Grammatical category of a word.
///
/// Validators match on this, never on the display colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum WordType {
    /// Sentence-leading particles (Ko, He).
    Particle,
    /// Definite articles (te, ngā).
    Article,
    /// Things, people and places.
    Noun,
    /// Personal pronouns (au, koe, ia, ...).
    Pronoun,
    /// Demonstratives (tēnei, tēnā, tērā).
    Demonstrative,
    /// Action words.
    Verb,
    /// State words.
    Adjective,
    /// Tense markers (Kei te, I, Ka).
    TenseMarker,
    /// Degree modifiers (tino, āhua).
    Intensifier,
    /// Locative particles (i, ki).
    #[cfg_attr(feature = "serde", serde(rename = "particle_locative"))]
    LocativeParticle,
    /// Time words (inanahi, āpōpō, ...).
    TimeWord,
}

impl WordType {
    /// Every word type, in catalog order.
    pub const ALL: [Self; 11] = [
        Self::Particle,
        Self::Article,
        Self::Noun,
        Self::Pronoun,
        Self::Demonstrative,
        Self::Verb,
        Self::Adjective,
        Self::TenseMarker,
        Self::Intensifier,
        Self::LocativeParticle,
        Self::TimeWord,
    ];

    /// The wire name of this type.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Particle => "particle",
            Self::Article => "article",
            Self::Noun => "noun",
            Self::Pronoun => "pronoun",
            Self::Demonstrative => "demonstrative",
            Self::Verb => "verb",
            Self::Adjective => "adjective",
            Self::TenseMarker => "tense_marker",
            Self::Intensifier => "intensifier",
            Self::LocativeParticle => "particle_locative",
            Self::TimeWord => "time_word",
        }
    }

    /// The id prefix catalog entries of this type carry.
    #[must_use]
    pub const fn id_prefix(self) -> &'static str {
        match self {
            Self::Particle => "p_",
            Self::Article => "art_",
            Self::Noun => "n_",
            Self::Pronoun => "pr_",
            Self::Demonstrative => "d_",
            Self::Verb => "v_",
            Self::Adjective => "adj_",
            Self::TenseMarker => "tm_",
            Self::Intensifier => "int_",
            Self::LocativeParticle => "pl_",
            Self::TimeWord => "tw_",
        }
    }

    /// Parses a wire name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.name() == name)
    }

    /// Infers the type from a catalog id prefix.
    ///
    /// `pl_` is checked before `p_` since both start with `p`.
    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        let mut by_prefix_len = Self::ALL;
        by_prefix_len.sort_by_key(|t| std::cmp::Reverse(t.id_prefix().len()));
        by_prefix_len
            .into_iter()
            .find(|t| id.starts_with(t.id_prefix()))
    }
}

impl fmt::Display for WordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Display category of a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum CardColor {
    /// Particles.
    Purple,
    /// Articles.
    Gray,
    /// Nouns.
    Blue,
    /// Verbs.
    Green,
    /// Pronouns.
    Red,
    /// Demonstratives.
    Orange,
    /// Tense markers.
    Yellow,
    /// Adjectives.
    LightBlue,
    /// Locative particles.
    Brown,
    /// Intensifiers.
    Pink,
    /// Time words.
    Teal,
}

impl CardColor {
    /// Hex colour used by renderers.
    #[must_use]
    pub const fn hex(self) -> &'static str {
        match self {
            Self::Purple => "#9333EA",
            Self::Gray => "#6B7280",
            Self::Blue => "#3B82F6",
            Self::Green => "#10B981",
            Self::Red => "#EF4444",
            Self::Orange => "#F59E0B",
            Self::Yellow => "#EAB308",
            Self::LightBlue => "#38BDF8",
            Self::Brown => "#92400E",
            Self::Pink => "#EC4899",
            Self::Teal => "#14B8A6",
        }
    }

    /// Lowercase name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Purple => "purple",
            Self::Gray => "gray",
            Self::Blue => "blue",
            Self::Green => "green",
            Self::Red => "red",
            Self::Orange => "orange",
            Self::Yellow => "yellow",
            Self::LightBlue => "lightblue",
            Self::Brown => "brown",
            Self::Pink => "pink",
            Self::Teal => "teal",
        }
    }

    /// ANSI escape for terminal rendering.
    #[must_use]
    pub const fn ansi(self) -> &'static str {
        match self {
            Self::Purple => "\x1b[35m",
            Self::Gray => "\x1b[90m",
            Self::Blue => "\x1b[34m",
            Self::Green => "\x1b[32m",
            Self::Red => "\x1b[31m",
            Self::Orange => "\x1b[38;5;208m",
            Self::Yellow => "\x1b[33m",
            Self::LightBlue => "\x1b[96m",
            Self::Brown => "\x1b[38;5;130m",
            Self::Pink => "\x1b[95m",
            Self::Teal => "\x1b[36m",
        }
    }
}

impl fmt::Display for CardColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A catalog entry.
///
/// The id uniquely determines every other field.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Word {
    /// Stable identifier, prefixed by category (`n_whare`).
    pub id: String,
    /// Surface form in te reo Māori.
    pub maori: String,
    /// English gloss.
    pub english: String,
    /// Grammatical category.
    pub word_type: WordType,
    /// Display category.
    pub color: CardColor,
    /// Curriculum module that introduces the word.
    pub module: u8,
    /// Pronunciation guide.
    pub pronunciation: String,
    /// How the word is used.
    pub usage: Option<String>,
    /// Cultural background.
    pub cultural_note: Option<String>,
}

impl Word {
    /// Creates a word with no usage or cultural notes.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        maori: impl Into<String>,
        english: impl Into<String>,
        word_type: WordType,
        color: CardColor,
        module: u8,
    ) -> Self {
        Self {
            id: id.into(),
            maori: maori.into(),
            english: english.into(),
            word_type,
            color,
            module,
            pronunciation: String::new(),
            usage: None,
            cultural_note: None,
        }
    }

    /// Sets the pronunciation guide.
    #[must_use]
    pub fn with_pronunciation(mut self, pronunciation: impl Into<String>) -> Self {
        self.pronunciation = pronunciation.into();
        self
    }

    /// Sets the usage note.
    #[must_use]
    pub fn with_usage(mut self, usage: impl Into<String>) -> Self {
        self.usage = Some(usage.into());
        self
    }

    /// Sets the cultural note.
    #[must_use]
    pub fn with_cultural_note(mut self, note: impl Into<String>) -> Self {
        self.cultural_note = Some(note.into());
        self
    }
}
