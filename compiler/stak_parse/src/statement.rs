//! Per-statement validation.
//!
//! A statement is checked in a fixed order so that the first error
//! reported for it is deterministic: token classification, operation count,
//! token order, prefixes, label use, then the argument signature.

use smallvec::SmallVec;
use stak_ir::{Instruction, Operation, Prefix, PrefixError, Prefixes, Span};
use stak_lexer::{classify, Statement, TokenKind, Word};

use crate::error::{ParseError, ParseErrorKind};
use crate::labels::LabelTable;

/// Classified words of one statement.
type Tokens<'src> = SmallVec<[(TokenKind<'src>, Word<'src>); 4]>;

/// Compile one non-label statement.
pub(crate) fn compile_statement(
    statement: &Statement<'_>,
    labels: &LabelTable<'_>,
) -> Result<Instruction, ParseError> {
    let error = |kind: ParseErrorKind, span: Span| ParseError::new(kind, span, statement.line);

    let tokens = classify_words(statement).map_err(|word| {
        error(
            ParseErrorKind::UnrecognizedToken {
                token: word.text.to_owned(),
            },
            word.span,
        )
    })?;

    let (op_pos, operation) = find_operation(&tokens).map_err(|(kind, span)| {
        error(kind, span.unwrap_or_else(|| statement.span()))
    })?;

    let (before, after) = tokens.split_at(op_pos);
    let after = &after[1..];

    // Only prefixes may precede the operation.
    let mut prefixes = Prefixes::EMPTY;
    for &(kind, word) in before {
        let TokenKind::Prefix(prefix) = kind else {
            return Err(error(
                ParseErrorKind::OperandBeforeOperation {
                    token: word.text.to_owned(),
                },
                word.span,
            ));
        };
        prefixes = add_prefix(prefixes, prefix).map_err(|kind| error(kind, word.span))?;
    }

    let mut arguments: SmallVec<[f64; 1]> = SmallVec::new();
    let mut label: Option<Word<'_>> = None;
    for &(kind, word) in after {
        match kind {
            TokenKind::Prefix(prefix) => {
                return Err(error(ParseErrorKind::PrefixAfterOperation(prefix), word.span));
            }
            TokenKind::Label(_) if label.is_some() => {
                return Err(error(ParseErrorKind::MultipleLabels, word.span));
            }
            TokenKind::Label(_) => label = Some(word),
            TokenKind::Number(value) => arguments.push(value),
            TokenKind::Operation(_) => {}
        }
    }

    let mut operation = operation;
    if let Some(word) = label {
        if !operation.accepts_label() {
            return Err(error(
                ParseErrorKind::LabelNotAllowedHere {
                    label: word.text.to_owned(),
                    operation,
                },
                word.span,
            ));
        }
        let Some(index) = labels.get(word.text) else {
            return Err(error(
                ParseErrorKind::UndefinedLabel(word.text.to_owned()),
                word.span,
            ));
        };
        // Both jump forms become an absolute jump to the label's index.
        #[allow(clippy::cast_precision_loss)]
        let address = index as f64;
        operation = Operation::To;
        arguments.clear();
        arguments.push(address);
    }

    Instruction::new(operation, arguments, prefixes)
        .map_err(|mismatch| error(mismatch.into(), statement.span()))
}

/// Classify every word, or return the first unrecognized one.
fn classify_words<'src>(statement: &Statement<'src>) -> Result<Tokens<'src>, Word<'src>> {
    statement
        .words
        .iter()
        .map(|&word| classify(word.text).map(|kind| (kind, word)).ok_or(word))
        .collect()
}

/// Position and kind of the statement's single operation.
fn find_operation(
    tokens: &Tokens<'_>,
) -> Result<(usize, Operation), (ParseErrorKind, Option<Span>)> {
    let mut found: Option<(usize, Operation)> = None;
    for (pos, &(kind, word)) in tokens.iter().enumerate() {
        let TokenKind::Operation(operation) = kind else {
            continue;
        };
        if let Some((_, first)) = found {
            return Err((
                ParseErrorKind::MultipleOperations {
                    first,
                    second: operation,
                },
                Some(word.span),
            ));
        }
        found = Some((pos, operation));
    }
    found.ok_or((ParseErrorKind::NoOperationFound, None))
}

fn add_prefix(prefixes: Prefixes, prefix: Prefix) -> Result<Prefixes, ParseErrorKind> {
    prefixes.with(prefix).map_err(|err| match err {
        PrefixError::Duplicate(prefix) => ParseErrorKind::DuplicatePrefix(prefix),
        PrefixError::Conflict => ParseErrorKind::ConflictingPrefixes,
    })
}
