//! Integration tests for Layer 2: Debug
//!
//! Tests traced validation sessions, buffer bounds and output formats.

mod tracing;
