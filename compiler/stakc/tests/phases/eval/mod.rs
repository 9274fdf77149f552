//! Interpreter phase tests.
//!
//! Tests for the `stak_eval` crate, validating:
//! - Stack effects of every operation
//! - Prefix gating and quiet reads
//! - Relative and absolute jump boundaries
//! - Runtime errors and their diagnostics
//!
//! # Test Organization
//!
//! - `programs` - Whole-program results, including loops
//! - `gating` - `quiet`, `cond` and `qcond`
//! - `jumps` - `jump` and `to` targets and bounds
//! - `errors` - Runtime failures, step limits and rendering

mod errors;
mod gating;
mod jumps;
mod programs;
