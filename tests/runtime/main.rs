//! Integration tests for Layer 3: Runtime
//!
//! Tests practice sessions, attempt-log persistence and scripted REPL runs.

mod persistence;
mod scripts;
mod sessions;
