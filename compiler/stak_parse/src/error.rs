//! Compile-time error types.
//!
//! Every failure carries the span of the offending word (or statement) and
//! the 1-based line it sits on, and converts to a [`Diagnostic`] with a
//! searchable [`ErrorCode`].

use stak_diagnostic::{Diagnostic, ErrorCode};
use stak_ir::{Operation, Prefix, SignatureMismatch, Span};

/// What went wrong while compiling a statement.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ParseErrorKind {
    #[error("unrecognized token `{token}`")]
    UnrecognizedToken { token: String },

    #[error("no operation found in statement")]
    NoOperationFound,

    #[error("statement has more than one operation: `{first}` and `{second}`")]
    MultipleOperations { first: Operation, second: Operation },

    #[error("prefix `{0}` given more than once")]
    DuplicatePrefix(Prefix),

    #[error("cannot use `cond` and `qcond` on the same instruction")]
    ConflictingPrefixes,

    #[error("prefix `{0}` must come before the operation")]
    PrefixAfterOperation(Prefix),

    #[error("`{token}` must come after the operation")]
    OperandBeforeOperation { token: String },

    #[error("statement references more than one label")]
    MultipleLabels,

    #[error("cannot use label `{label}` with `{operation}`")]
    LabelNotAllowedHere { label: String, operation: Operation },

    #[error("label `{0}` is not defined")]
    UndefinedLabel(String),

    #[error("label `{label}` is already declared on line {first_line}")]
    DuplicateLabelDeclaration {
        label: String,
        first_line: u32,
        first_span: Span,
    },

    #[error("label line `{label}` has trailing content")]
    MalformedLabelLine { label: String },

    #[error(transparent)]
    ArgumentShapeMismatch(#[from] SignatureMismatch),
}

impl ParseErrorKind {
    /// Get the error code for this kind.
    pub fn error_code(&self) -> ErrorCode {
        match self {
            ParseErrorKind::UnrecognizedToken { .. } => ErrorCode::E0001,
            ParseErrorKind::NoOperationFound => ErrorCode::E1001,
            ParseErrorKind::MultipleOperations { .. } => ErrorCode::E1002,
            ParseErrorKind::DuplicatePrefix(_) => ErrorCode::E1003,
            ParseErrorKind::ConflictingPrefixes => ErrorCode::E1004,
            ParseErrorKind::PrefixAfterOperation(_) => ErrorCode::E1005,
            ParseErrorKind::OperandBeforeOperation { .. } => ErrorCode::E1006,
            ParseErrorKind::MultipleLabels => ErrorCode::E1007,
            ParseErrorKind::LabelNotAllowedHere { .. } => ErrorCode::E1008,
            ParseErrorKind::ArgumentShapeMismatch(_) => ErrorCode::E2001,
            ParseErrorKind::UndefinedLabel(_) => ErrorCode::E3001,
            ParseErrorKind::DuplicateLabelDeclaration { .. } => ErrorCode::E3002,
            ParseErrorKind::MalformedLabelLine { .. } => ErrorCode::E3003,
        }
    }

    /// Short text shown under the offending span.
    fn label_text(&self) -> &'static str {
        match self {
            ParseErrorKind::UnrecognizedToken { .. } => "not an operation, prefix, label or number",
            ParseErrorKind::NoOperationFound => "expected an operation",
            ParseErrorKind::MultipleOperations { .. } => "second operation",
            ParseErrorKind::DuplicatePrefix(_) => "repeated prefix",
            ParseErrorKind::ConflictingPrefixes => "conflicting prefix",
            ParseErrorKind::PrefixAfterOperation(_) => "prefix after operation",
            ParseErrorKind::OperandBeforeOperation { .. } => "operand before operation",
            ParseErrorKind::MultipleLabels => "second label",
            ParseErrorKind::LabelNotAllowedHere { .. } => "label not allowed here",
            ParseErrorKind::UndefinedLabel(_) => "undefined label",
            ParseErrorKind::DuplicateLabelDeclaration { .. } => "declared again here",
            ParseErrorKind::MalformedLabelLine { .. } => "unexpected content after label",
            ParseErrorKind::ArgumentShapeMismatch(_) => "bad arguments",
        }
    }

    fn hint(&self) -> Option<&'static str> {
        match self {
            ParseErrorKind::NoOperationFound | ParseErrorKind::MultipleOperations { .. } => {
                Some("separate instructions with a newline or `;`")
            }
            ParseErrorKind::ConflictingPrefixes => {
                Some("`qcond` already gates on the top value; drop one of the two")
            }
            ParseErrorKind::LabelNotAllowedHere { .. } => Some("only `jump` and `to` accept a label"),
            ParseErrorKind::MalformedLabelLine { .. } => {
                Some("put the instruction on its own line after the label")
            }
            _ => None,
        }
    }
}

/// A compile-time error with its location.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[error("syntax error on line {line}: {kind}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub span: Span,
    /// 1-based source line.
    pub line: u32,
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, span: Span, line: u32) -> Self {
        ParseError { kind, span, line }
    }

    /// Get the error code.
    pub fn code(&self) -> ErrorCode {
        self.kind.error_code()
    }

    /// Convert to a diagnostic for rendering.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let mut diag = Diagnostic::new(self.code(), self.kind.to_string())
            .with_label(self.span, self.kind.label_text());

        if let ParseErrorKind::DuplicateLabelDeclaration { first_span, .. } = &self.kind {
            diag = diag.with_secondary_label(*first_span, "first declared here");
        }
        if let Some(hint) = self.kind.hint() {
            diag = diag.with_help(hint);
        }
        diag
    }
}
