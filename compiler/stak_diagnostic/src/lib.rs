//! Diagnostic system for stak error reporting.
//!
//! Both compile-time and runtime failures are converted to a [`Diagnostic`]:
//! - Error codes for searchability
//! - Clear messages (what went wrong)
//! - Primary span (where it went wrong)
//! - Notes and a help line (why, and how to fix)
//!
//! Rendering lives in [`emitter`]; line/column lookup in [`span_utils`].

mod diagnostic;
pub mod emitter;
mod error_code;
pub mod span_utils;

pub use diagnostic::{Diagnostic, Label, LabelStyle};
pub use error_code::ErrorCode;
