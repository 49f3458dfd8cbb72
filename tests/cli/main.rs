//! CLI integration tests for chatmark.
//!
//! These tests execute the compiled binary and verify CLI behavior including:
//! - Subcommand behavior (annotate, parse)
//! - Stdin/stdout handling
//! - Exit codes
//! - Config discovery
//! - Error handling

mod annotate;
mod common;
mod parse;
