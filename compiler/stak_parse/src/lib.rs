//! Compiler front end for stak.
//!
//! Source text is split into statements by `stak_lexer`, label declarations
//! are resolved in a pre-pass ([`resolve_labels`]), and each remaining
//! statement is compiled into a type-checked [`Instruction`].
//!
//! [`parse`] yields instructions lazily; [`compile`] collects them into a
//! [`Program`]. Compilation stops at the first error.

mod error;
mod labels;
mod statement;

use std::iter::FusedIterator;

use stak_ir::{Instruction, Program, Span};
use stak_lexer::Statement;

pub use error::{ParseError, ParseErrorKind};
pub use labels::{resolve_labels, LabelTable};

/// One-shot iterator over the compiled instructions of a source text.
///
/// Each item is an instruction with the span of its statement. After the
/// first error the iterator is exhausted.
pub struct Instructions<'src> {
    statements: std::vec::IntoIter<Statement<'src>>,
    labels: LabelTable<'src>,
    failed: bool,
}

impl<'src> Instructions<'src> {
    /// Labels declared in the source.
    pub fn labels(&self) -> &LabelTable<'src> {
        &self.labels
    }
}

impl Iterator for Instructions<'_> {
    type Item = Result<(Instruction, Span), ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let statement = self
            .statements
            .by_ref()
            .find(|s| s.label_declaration().is_none())?;

        let result = statement::compile_statement(&statement, &self.labels)
            .map(|instruction| (instruction, statement.span()));
        if let Err(err) = &result {
            tracing::debug!(line = err.line, error = %err.kind, "statement rejected");
            self.failed = true;
        }
        Some(result)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.failed {
            (0, Some(0))
        } else {
            (0, Some(self.statements.len()))
        }
    }
}

impl FusedIterator for Instructions<'_> {}

/// Split `source` into statements and resolve its labels.
///
/// Label errors are reported here; statement errors surface as the
/// iterator reaches them.
pub fn parse(source: &str) -> Result<Instructions<'_>, ParseError> {
    let statements = stak_lexer::statements(source);
    let labels = resolve_labels(&statements)?;
    Ok(Instructions {
        statements: statements.into_iter(),
        labels,
        failed: false,
    })
}

/// Compile `source` into a program. No partial program is returned on error.
#[tracing::instrument(level = "debug", skip_all, fields(bytes = source.len()))]
pub fn compile(source: &str) -> Result<Program, ParseError> {
    let program: Program = parse(source)?.collect::<Result<_, _>>()?;
    tracing::debug!(instructions = program.len(), "compiled");
    Ok(program)
}
