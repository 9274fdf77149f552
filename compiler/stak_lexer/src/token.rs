//! Word classification.

use stak_ir::{Operation, Prefix};

use crate::sigils;

/// Leading character marking a label declaration or reference.
pub const LABEL_SENTINEL: char = '@';

/// What a single word of a statement denotes.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum TokenKind<'src> {
    /// Operation, by canonical name or sigil.
    Operation(Operation),
    /// Prefix, by canonical name or sigil.
    Prefix(Prefix),
    /// Label name, sentinel included.
    Label(&'src str),
    /// Numeric literal.
    Number(f64),
}

/// Whether `text` is a label token.
#[inline]
pub fn is_label(text: &str) -> bool {
    text.starts_with(LABEL_SENTINEL)
}

/// Classify a word.
///
/// Names and sigils are tried before numbers, so a word is only a literal
/// when it is nothing else. Returns `None` for unrecognized words.
pub fn classify(text: &str) -> Option<TokenKind<'_>> {
    if let Some(op) = Operation::from_name(text).or_else(|| sigils::operation(text)) {
        return Some(TokenKind::Operation(op));
    }
    if let Some(prefix) = Prefix::from_name(text).or_else(|| sigils::prefix(text)) {
        return Some(TokenKind::Prefix(prefix));
    }
    if is_label(text) {
        return Some(TokenKind::Label(text));
    }
    text.parse::<f64>().ok().map(TokenKind::Number)
}
