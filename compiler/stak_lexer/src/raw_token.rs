//! Raw Token Definition
//!
//! The `RawToken` enum is the logos-derived lexer output: separators and
//! whitespace-delimited words. Words are classified afterwards by
//! [`crate::classify`].

use logos::Logos;

/// Raw token from logos (before classification).
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\x0B\x0C]+")] // Skip horizontal whitespace
pub(crate) enum RawToken {
    #[token("\n")]
    Newline,

    #[token(";")]
    Semicolon,

    #[regex(r"[^ \t\r\n\x0B\x0C;]+")]
    Word,
}
