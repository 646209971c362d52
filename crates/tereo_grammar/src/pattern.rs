//! Dispatch from a [`PatternKind`] to its validator.

use tereo_foundation::{Card, PatternKind, Target};

use crate::options::GrammarOptions;
use crate::result::ValidationResult;
use crate::{equative, he, kei_te, ko};

/// A sentence-pattern family.
///
/// Implementations are stateless; every call is independent.
pub trait Pattern: Sync {
    /// Which family this is.
    fn kind(&self) -> PatternKind;

    /// Runs the structural gates and, if they pass, compares against `target`.
    fn validate(
        &self,
        cards: &[Card],
        target: Option<&Target>,
        options: &GrammarOptions,
    ) -> ValidationResult;

    /// Cheap prefix sniff for picking a validator.
    fn matches(&self, cards: &[Card]) -> bool;

    /// Next-step guidance for a partial sentence.
    fn hint(&self, cards: &[Card]) -> Option<&'static str>;
}

struct Ko;
struct He;
struct Equative;
struct KeiTe;

impl Pattern for Ko {
    fn kind(&self) -> PatternKind {
        PatternKind::Ko
    }

    fn validate(
        &self,
        cards: &[Card],
        target: Option<&Target>,
        options: &GrammarOptions,
    ) -> ValidationResult {
        ko::validate_with(cards, target, options)
    }

    fn matches(&self, cards: &[Card]) -> bool {
        ko::is_ko_pattern(cards)
    }

    fn hint(&self, cards: &[Card]) -> Option<&'static str> {
        ko::hint(cards)
    }
}

impl Pattern for He {
    fn kind(&self) -> PatternKind {
        PatternKind::He
    }

    fn validate(
        &self,
        cards: &[Card],
        target: Option<&Target>,
        _: &GrammarOptions,
    ) -> ValidationResult {
        he::validate(cards, target)
    }

    fn matches(&self, cards: &[Card]) -> bool {
        he::is_he_pattern(cards)
    }

    fn hint(&self, cards: &[Card]) -> Option<&'static str> {
        he::hint(cards)
    }
}

impl Pattern for Equative {
    fn kind(&self) -> PatternKind {
        PatternKind::Equative
    }

    fn validate(
        &self,
        cards: &[Card],
        target: Option<&Target>,
        _: &GrammarOptions,
    ) -> ValidationResult {
        equative::validate(cards, target)
    }

    fn matches(&self, cards: &[Card]) -> bool {
        equative::is_equative_pattern(cards)
    }

    fn hint(&self, cards: &[Card]) -> Option<&'static str> {
        equative::hint(cards)
    }
}

impl Pattern for KeiTe {
    fn kind(&self) -> PatternKind {
        PatternKind::KeiTe
    }

    fn validate(
        &self,
        cards: &[Card],
        target: Option<&Target>,
        _: &GrammarOptions,
    ) -> ValidationResult {
        kei_te::validate(cards, target)
    }

    fn matches(&self, cards: &[Card]) -> bool {
        kei_te::is_kei_te_pattern(cards)
    }

    fn hint(&self, cards: &[Card]) -> Option<&'static str> {
        kei_te::hint(cards)
    }
}

/// Maps a pattern kind to its validator.
pub trait PatternKindExt {
    /// The validator for this kind.
    fn validator(self) -> &'static dyn Pattern;
}

impl PatternKindExt for PatternKind {
    fn validator(self) -> &'static dyn Pattern {
        match self {
            Self::Ko => &Ko,
            Self::He => &He,
            Self::Equative => &Equative,
            Self::KeiTe => &KeiTe,
        }
    }
}

/// Sniff order: Equative before Ko since both lead with Ko.
const DETECT_ORDER: [PatternKind; 4] = [
    PatternKind::Equative,
    PatternKind::Ko,
    PatternKind::He,
    PatternKind::KeiTe,
];

/// Guesses the pattern of a sentence from its leading cards.
#[must_use]
pub fn detect(cards: &[Card]) -> Option<PatternKind> {
    DETECT_ORDER
        .into_iter()
        .find(|kind| kind.validator().matches(cards))
}

/// Validates `cards` against the pattern `kind`.
#[must_use]
pub fn validate(
    kind: PatternKind,
    cards: &[Card],
    target: Option<&Target>,
    options: &GrammarOptions,
) -> ValidationResult {
    kind.validator().validate(cards, target, options)
}

/// Next-step guidance for `kind`.
#[must_use]
pub fn hint(kind: PatternKind, cards: &[Card]) -> Option<&'static str> {
    kind.validator().hint(cards)
}
