//! Tracing for the tereo grammar engine.
//!
//! This crate provides:
//! - [`Tracer`] - Bounded, filterable recording of validation events
//! - [`traced`] - Validation, hint and detection wrappers that record as they go
//! - [`HumanFormatter`] and [`JsonFormatter`] - Rendering recorded events

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod trace;
pub mod traced;

pub use trace::{
    HumanFormatter, JsonFormatter, TraceBuffer, TraceBufferStats, TraceEvent, TraceFormatter,
    TraceOutput, TraceRecord, Tracer, TracerConfig,
};
