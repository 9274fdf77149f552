//! Lexer for stak.
//!
//! Splits source text into statements and words using logos. A statement
//! ends at a newline or `;`; the two are interchangeable and may be mixed.
//! Empty statements are dropped here, so later phases only see statements
//! with at least one word.
//!
//! Words are classified separately by [`classify`], which consults the
//! canonical names and the [`sigils`] table.

mod raw_token;
pub mod sigils;
mod token;

use logos::Logos;
use smallvec::SmallVec;
use stak_ir::Span;

use raw_token::RawToken;

pub use token::{classify, is_label, TokenKind, LABEL_SENTINEL};

/// A whitespace-delimited word and where it sits in the source.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Word<'src> {
    pub text: &'src str,
    pub span: Span,
}

/// A non-empty statement.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Statement<'src> {
    pub words: SmallVec<[Word<'src>; 4]>,
    /// 1-based source line the statement starts on.
    pub line: u32,
}

impl<'src> Statement<'src> {
    /// Span from the first word to the last.
    pub fn span(&self) -> Span {
        match (self.words.first(), self.words.last()) {
            (Some(first), Some(last)) => first.span.merge(last.span),
            _ => Span::DUMMY,
        }
    }

    /// The label this statement declares, if it starts with one.
    pub fn label_declaration(&self) -> Option<Word<'src>> {
        self.words.first().copied().filter(|w| is_label(w.text))
    }
}

/// Split `source` into its non-empty statements, in order.
pub fn statements(source: &str) -> Vec<Statement<'_>> {
    let mut statements = Vec::new();
    let mut words: SmallVec<[Word<'_>; 4]> = SmallVec::new();
    let mut line: u32 = 1;
    let mut start_line = line;

    let mut lexer = RawToken::lexer(source);
    while let Some(token) = lexer.next() {
        match token {
            Ok(RawToken::Newline | RawToken::Semicolon) => {
                if !words.is_empty() {
                    statements.push(Statement {
                        words: std::mem::take(&mut words),
                        line: start_line,
                    });
                }
                if token == Ok(RawToken::Newline) {
                    line = line.saturating_add(1);
                }
            }
            // The word pattern covers every non-separator character, so
            // an error slice is still a word; classification rejects it.
            Ok(RawToken::Word) | Err(()) => {
                if words.is_empty() {
                    start_line = line;
                }
                words.push(Word {
                    text: lexer.slice(),
                    span: Span::from_range(lexer.span()),
                });
            }
        }
    }
    if !words.is_empty() {
        statements.push(Statement {
            words,
            line: start_line,
        });
    }
    statements
}
