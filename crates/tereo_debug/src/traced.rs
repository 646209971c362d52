//! Traced entry points into the grammar engine.
//!
//! Each wrapper calls the pure engine function and records what happened.
//! With a disabled tracer they cost no more than the engine call.

use tereo_foundation::card::surface;
use tereo_foundation::{Card, PatternKind, Target};
use tereo_grammar::{GrammarOptions, ValidationResult};

use crate::trace::Tracer;

/// Validates `cards` as `kind`, recording start, rejection and completion.
pub fn validate(
    tracer: &mut Tracer,
    kind: PatternKind,
    cards: &[Card],
    target: Option<&Target>,
    options: &GrammarOptions,
) -> ValidationResult {
    if tracer.is_enabled() {
        tracer.validation_start(kind, surface(cards));
    }

    let result = tereo_grammar::validate(kind, cards, target, options);

    if let Some(gate) = result.gate {
        tracer.gate_rejected(kind, gate, &result.feedback.message);
    }
    tracer.validation_complete(kind, result.valid, result.correct, result.feedback.kind);
    result
}

/// Computes the hint for `kind`, recording it if one is issued.
pub fn hint(tracer: &mut Tracer, kind: PatternKind, cards: &[Card]) -> Option<&'static str> {
    let hint = tereo_grammar::hint(kind, cards);
    if let Some(text) = hint {
        tracer.hint_issued(kind, text);
    }
    hint
}

/// Sniffs the pattern of `cards`, recording a hit.
pub fn detect(tracer: &mut Tracer, cards: &[Card]) -> Option<PatternKind> {
    let kind = tereo_grammar::detect(cards);
    if let Some(kind) = kind {
        tracer.pattern_detected(kind);
    }
    kind
}
