//! Tracing system for tereo.
//!
//! Records what the grammar engine did with each sentence: which pattern was
//! checked, which gate rejected it, which hints were shown. Costs a branch
//! when disabled. Supports both human-readable and JSON output formats.
//!
//! # Example
//!
//! ```text
//! :trace on                            ;; Enable tracing
//! :submit                              ;; Validate (traces will be recorded)
//! :trace show                          ;; Print recent trace records
//! :trace off                           ;; Disable tracing
//! ```

pub mod buffer;
pub mod format;
pub mod record;

pub use buffer::{TraceBuffer, TraceBufferStats};
pub use format::{HumanFormatter, JsonFormatter, TraceFormatter};
pub use record::{TraceEvent, TraceRecord};

use std::io::{self, Write};
use std::time::Instant;

use tereo_foundation::PatternKind;
use tereo_grammar::{FeedbackKind, Gate};

// =============================================================================
// Trace Output
// =============================================================================

/// Where trace output should be sent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TraceOutput {
    /// No output (traces still recorded in buffer).
    #[default]
    None,
    /// Write each record to stderr as it is recorded.
    Stderr,
}

// =============================================================================
// Tracer Configuration
// =============================================================================

/// Configuration for the tracer.
#[derive(Clone, Debug)]
pub struct TracerConfig {
    /// Whether tracing is enabled.
    pub enabled: bool,
    /// Maximum records to keep in buffer.
    pub buffer_size: usize,
    /// Where to output traces.
    pub output: TraceOutput,
    /// Whether to use JSON format.
    pub json_format: bool,
    /// Filter for specific event types (empty = all).
    pub event_filter: Vec<String>,
}

impl Default for TracerConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            buffer_size: 10000,
            output: TraceOutput::None,
            json_format: false,
            event_filter: Vec::new(),
        }
    }
}

impl TracerConfig {
    /// Creates a new tracer configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to enable tracing.
    #[must_use]
    pub fn enabled(mut self) -> Self {
        self.enabled = true;
        self
    }

    /// Builder method to set buffer size.
    #[must_use]
    pub fn with_buffer_size(mut self, size: usize) -> Self {
        self.buffer_size = size;
        self
    }

    /// Builder method to output to stderr.
    #[must_use]
    pub fn to_stderr(mut self) -> Self {
        self.output = TraceOutput::Stderr;
        self
    }

    /// Builder method to use JSON format.
    #[must_use]
    pub fn json(mut self) -> Self {
        self.json_format = true;
        self
    }

    /// Builder method to filter event types.
    #[must_use]
    pub fn filter_events(mut self, types: Vec<String>) -> Self {
        self.event_filter = types;
        self
    }
}

// =============================================================================
// Tracer
// =============================================================================

/// Records grammar-engine events into a bounded buffer.
///
/// The `record` method returns immediately if tracing is off.
#[derive(Debug)]
pub struct Tracer {
    config: TracerConfig,
    buffer: TraceBuffer,
    current_attempt: u64,
    start_time: Instant,
    human_formatter: HumanFormatter,
    json_formatter: JsonFormatter,
}

impl Tracer {
    /// Creates a new tracer with the given configuration.
    #[must_use]
    pub fn new(config: TracerConfig) -> Self {
        let buffer_size = config.buffer_size;
        Self {
            config,
            buffer: TraceBuffer::new(buffer_size),
            current_attempt: 0,
            start_time: Instant::now(),
            human_formatter: HumanFormatter::new().with_timestamps(),
            json_formatter: JsonFormatter::new(),
        }
    }

    /// Creates a tracer with default configuration (disabled).
    #[must_use]
    pub fn disabled() -> Self {
        Self::new(TracerConfig::default())
    }

    /// Returns whether tracing is enabled.
    #[must_use]
    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.config.enabled
    }

    /// Returns the active configuration.
    #[must_use]
    pub fn config(&self) -> &TracerConfig {
        &self.config
    }

    /// Enables tracing.
    pub fn enable(&mut self) {
        self.config.enabled = true;
    }

    /// Disables tracing.
    pub fn disable(&mut self) {
        self.config.enabled = false;
    }

    /// Advances to the next attempt and returns its number.
    pub fn next_attempt(&mut self) -> u64 {
        self.current_attempt += 1;
        self.current_attempt
    }

    /// Returns the current attempt number.
    #[must_use]
    pub fn current_attempt(&self) -> u64 {
        self.current_attempt
    }

    /// Sets whether to use JSON output format.
    pub fn set_json_format(&mut self, json: bool) {
        self.config.json_format = json;
    }

    /// Records a trace event.
    #[inline]
    pub fn record(&mut self, event: TraceEvent) {
        if !self.config.enabled {
            return;
        }

        self.record_internal(event);
    }

    fn record_internal(&mut self, event: TraceEvent) {
        if !self.config.event_filter.is_empty()
            && !self
                .config
                .event_filter
                .iter()
                .any(|t| t == event.event_type())
        {
            return;
        }

        #[allow(clippy::cast_possible_truncation)]
        let timestamp_ns = self.start_time.elapsed().as_nanos() as u64;
        self.buffer.push(self.current_attempt, timestamp_ns, event);

        if self.config.output == TraceOutput::Stderr {
            if let Some(record) = self.buffer.last() {
                let line = self.format_record(record);
                let _ = writeln!(io::stderr(), "{line}");
            }
        }
    }

    /// Formats a record using the current format settings.
    #[must_use]
    pub fn format_record(&self, record: &TraceRecord) -> String {
        if self.config.json_format {
            self.json_formatter.format(record)
        } else {
            self.human_formatter.format(record)
        }
    }

    /// Formats multiple records.
    #[must_use]
    pub fn format_records(&self, records: &[&TraceRecord]) -> String {
        if self.config.json_format {
            self.json_formatter.format_many(records)
        } else {
            self.human_formatter.format_many(records)
        }
    }

    /// Formats the most recent `count` records.
    #[must_use]
    pub fn format_recent(&self, count: usize) -> String {
        self.format_records(&self.buffer.recent(count))
    }

    /// Returns the trace buffer.
    #[must_use]
    pub fn buffer(&self) -> &TraceBuffer {
        &self.buffer
    }

    /// Clears the trace buffer.
    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Returns buffer statistics.
    #[must_use]
    pub fn stats(&self) -> TraceBufferStats {
        self.buffer.stats()
    }

    // -------------------------------------------------------------------------
    // Convenience methods for common events
    // -------------------------------------------------------------------------

    /// Records a validation start event.
    #[inline]
    pub fn validation_start(&mut self, pattern: PatternKind, sentence: impl Into<String>) {
        if self.is_enabled() {
            self.record(TraceEvent::ValidationStart {
                pattern,
                sentence: sentence.into(),
            });
        }
    }

    /// Records a gate rejection.
    #[inline]
    pub fn gate_rejected(&mut self, pattern: PatternKind, gate: Gate, message: &str) {
        if self.is_enabled() {
            self.record(TraceEvent::GateRejected {
                pattern,
                gate,
                message: message.to_string(),
            });
        }
    }

    /// Records a validation complete event.
    #[inline]
    pub fn validation_complete(
        &mut self,
        pattern: PatternKind,
        valid: bool,
        correct: bool,
        kind: FeedbackKind,
    ) {
        self.record(TraceEvent::ValidationComplete {
            pattern,
            valid,
            correct,
            kind,
        });
    }

    /// Records a detected pattern.
    #[inline]
    pub fn pattern_detected(&mut self, pattern: PatternKind) {
        self.record(TraceEvent::PatternDetected { pattern });
    }

    /// Records an issued hint.
    #[inline]
    pub fn hint_issued(&mut self, pattern: PatternKind, hint: &str) {
        if self.is_enabled() {
            self.record(TraceEvent::HintIssued {
                pattern,
                hint: hint.to_string(),
            });
        }
    }

    /// Records a logged attempt.
    #[inline]
    pub fn attempt_recorded(&mut self, challenge: &str, correct: bool) {
        if self.is_enabled() {
            self.record(TraceEvent::AttemptRecorded {
                challenge: challenge.to_string(),
                correct,
            });
        }
    }
}

impl Default for Tracer {
    fn default() -> Self {
        Self::disabled()
    }
}

// =============================================================================
// Tests
// =============================================================================
