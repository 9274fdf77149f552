//! Label pre-pass.
//!
//! Binds every label declaration to the index of the instruction that
//! follows it. Only non-label statements advance the index; empty
//! statements never reach this pass.

use rustc_hash::FxHashMap;
use stak_ir::Span;
use stak_lexer::Statement;

use crate::error::{ParseError, ParseErrorKind};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
struct LabelEntry {
    index: usize,
    span: Span,
    line: u32,
}

/// Label name (sentinel included) to absolute instruction index.
#[derive(Clone, Debug, Default)]
pub struct LabelTable<'src> {
    entries: FxHashMap<&'src str, LabelEntry>,
}

impl<'src> LabelTable<'src> {
    /// Resolved index of `label`.
    pub fn get(&self, label: &str) -> Option<usize> {
        self.entries.get(label).map(|e| e.index)
    }

    /// Span of the declaration of `label`.
    pub fn declaration_span(&self, label: &str) -> Option<Span> {
        self.entries.get(label).map(|e| e.span)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Labels with their indexes, ordered by index then name.
    pub fn iter(&self) -> impl Iterator<Item = (&'src str, usize)> + '_ {
        let mut labels: Vec<_> = self.entries.iter().map(|(&name, e)| (name, e.index)).collect();
        labels.sort_unstable_by(|a, b| a.1.cmp(&b.1).then(a.0.cmp(b.0)));
        labels.into_iter()
    }
}

/// Build the label table for a statement sequence.
///
/// Fails on the first malformed label line or repeated declaration, in
/// source order.
#[tracing::instrument(level = "debug", skip_all, fields(statements = statements.len()))]
pub fn resolve_labels<'src>(statements: &[Statement<'src>]) -> Result<LabelTable<'src>, ParseError> {
    let mut table = LabelTable::default();
    let mut index = 0usize;

    for statement in statements {
        let Some(label) = statement.label_declaration() else {
            index += 1;
            continue;
        };

        if let Some(extra) = statement.words.get(1) {
            let trailing = Span::new(extra.span.start, statement.span().end);
            return Err(ParseError::new(
                ParseErrorKind::MalformedLabelLine {
                    label: label.text.to_owned(),
                },
                trailing,
                statement.line,
            ));
        }

        if let Some(first) = table.entries.get(label.text) {
            return Err(ParseError::new(
                ParseErrorKind::DuplicateLabelDeclaration {
                    label: label.text.to_owned(),
                    first_line: first.line,
                    first_span: first.span,
                },
                label.span,
                statement.line,
            ));
        }

        tracing::trace!(label = label.text, index, "label resolved");
        table.entries.insert(
            label.text,
            LabelEntry {
                index,
                span: label.span,
                line: statement.line,
            },
        );
    }

    tracing::debug!(labels = table.len(), instructions = index, "labels resolved");
    Ok(table)
}
