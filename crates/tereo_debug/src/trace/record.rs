//! Trace event and record types.
//!
//! This module defines the events recorded while sentences are validated.

use tereo_foundation::PatternKind;
use tereo_grammar::{FeedbackKind, Gate};

// =============================================================================
// Trace Event
// =============================================================================

/// Events that can be traced while a learner builds sentences.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TraceEvent {
    /// A sentence was handed to a validator.
    ValidationStart {
        /// The pattern being checked.
        pattern: PatternKind,
        /// The built sentence, space-joined.
        sentence: String,
    },

    /// A structural gate rejected the sentence.
    GateRejected {
        /// The pattern being checked.
        pattern: PatternKind,
        /// The gate that failed.
        gate: Gate,
        /// The feedback headline.
        message: String,
    },

    /// Validation finished.
    ValidationComplete {
        /// The pattern that was checked.
        pattern: PatternKind,
        /// Whether the sentence was well formed.
        valid: bool,
        /// Whether it matched the target.
        correct: bool,
        /// The feedback classification.
        kind: FeedbackKind,
    },

    /// A pattern was sniffed from the leading cards.
    PatternDetected {
        /// The detected pattern.
        pattern: PatternKind,
    },

    /// A hint was shown.
    HintIssued {
        /// The pattern the hint is for.
        pattern: PatternKind,
        /// The hint text.
        hint: String,
    },

    /// A submitted attempt was written to the attempt log.
    AttemptRecorded {
        /// The challenge attempted.
        challenge: String,
        /// Whether the attempt was correct.
        correct: bool,
    },

    /// Custom user event.
    Custom {
        /// Event name.
        name: String,
        /// Event data.
        data: String,
    },
}

impl TraceEvent {
    /// Returns a short name for the event type.
    #[must_use]
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::ValidationStart { .. } => "validation-start",
            Self::GateRejected { .. } => "gate-rejected",
            Self::ValidationComplete { .. } => "validation-complete",
            Self::PatternDetected { .. } => "pattern-detected",
            Self::HintIssued { .. } => "hint-issued",
            Self::AttemptRecorded { .. } => "attempt-recorded",
            Self::Custom { .. } => "custom",
        }
    }

    /// Returns true if this event belongs to a validation pass.
    #[must_use]
    pub fn is_validation_event(&self) -> bool {
        matches!(
            self,
            Self::ValidationStart { .. }
                | Self::GateRejected { .. }
                | Self::ValidationComplete { .. }
        )
    }

    /// The pattern this event concerns, if any.
    #[must_use]
    pub fn pattern(&self) -> Option<PatternKind> {
        match self {
            Self::ValidationStart { pattern, .. }
            | Self::GateRejected { pattern, .. }
            | Self::ValidationComplete { pattern, .. }
            | Self::PatternDetected { pattern }
            | Self::HintIssued { pattern, .. } => Some(*pattern),
            Self::AttemptRecorded { .. } | Self::Custom { .. } => None,
        }
    }
}

// =============================================================================
// Trace Record
// =============================================================================

/// A timestamped trace record.
#[derive(Clone, Debug)]
pub struct TraceRecord {
    /// Unique record ID within the session.
    pub id: u64,
    /// The attempt number when this event occurred.
    pub attempt: u64,
    /// Timestamp in nanoseconds since session start.
    pub timestamp_ns: u64,
    /// The trace event.
    pub event: TraceEvent,
}

impl TraceRecord {
    /// Creates a new trace record.
    #[must_use]
    pub fn new(id: u64, attempt: u64, timestamp_ns: u64, event: TraceEvent) -> Self {
        Self {
            id,
            attempt,
            timestamp_ns,
            event,
        }
    }

    /// Returns the event type name.
    #[must_use]
    pub fn event_type(&self) -> &'static str {
        self.event.event_type()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_type_names() {
        let event = TraceEvent::PatternDetected {
            pattern: PatternKind::He,
        };
        assert_eq!(event.event_type(), "pattern-detected");

        let event = TraceEvent::GateRejected {
            pattern: PatternKind::Ko,
            gate: Gate::Leader,
            message: "First card must be Ko".into(),
        };
        assert_eq!(event.event_type(), "gate-rejected");
    }

    #[test]
    fn event_categories() {
        let start = TraceEvent::ValidationStart {
            pattern: PatternKind::KeiTe,
            sentence: "Kei te pai au".into(),
        };
        assert!(start.is_validation_event());
        assert_eq!(start.pattern(), Some(PatternKind::KeiTe));

        let attempt = TraceEvent::AttemptRecorded {
            challenge: "c_1_1_1".into(),
            correct: true,
        };
        assert!(!attempt.is_validation_event());
        assert_eq!(attempt.pattern(), None);
    }

    #[test]
    fn trace_record_creation() {
        let record = TraceRecord::new(
            1,
            5,
            1_000_000,
            TraceEvent::PatternDetected {
                pattern: PatternKind::Ko,
            },
        );

        assert_eq!(record.id, 1);
        assert_eq!(record.attempt, 5);
        assert_eq!(record.timestamp_ns, 1_000_000);
        assert_eq!(record.event_type(), "pattern-detected");
    }
}
