//! Parse phase tests.
//!
//! Tests for the `stak_lexer` and `stak_parse` crates, validating:
//! - Statement splitting and separators
//! - Sigil spellings
//! - Label resolution
//! - Every compile error kind and its location
//!
//! # Test Organization
//!
//! - `lexer` - Statements, separators and word classification
//! - `labels` - Label declarations and references
//! - `errors` - Compile errors, codes and rendered diagnostics

mod errors;
mod labels;
mod lexer;
