use std::fmt;

use stak_ir::Span;

use crate::ErrorCode;

/// How a label is drawn under the source line.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum LabelStyle {
    /// Where the failure is; underlined with `^`.
    Primary,
    /// Related location, such as an earlier declaration; underlined with `-`.
    Secondary,
}

/// A message attached to a span of the program text.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Label {
    pub span: Span,
    pub message: String,
    pub style: LabelStyle,
}

impl Label {
    pub fn primary(span: Span, message: impl Into<String>) -> Self {
        Label {
            span,
            message: message.into(),
            style: LabelStyle::Primary,
        }
    }

    pub fn secondary(span: Span, message: impl Into<String>) -> Self {
        Label {
            span,
            message: message.into(),
            style: LabelStyle::Secondary,
        }
    }

    #[inline]
    pub fn is_primary(&self) -> bool {
        self.style == LabelStyle::Primary
    }
}

/// A compile-time or runtime failure, ready to render.
///
/// Every stak diagnostic is an error: compilation and execution both stop
/// at the first failure, so there is nothing to warn about.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[must_use = "diagnostics should be reported or returned, not silently dropped"]
pub struct Diagnostic {
    pub code: ErrorCode,
    /// One-line summary shown in the header.
    pub message: String,
    pub labels: Vec<Label>,
    /// Context lines, rendered as `= note: ...`.
    pub notes: Vec<String>,
    /// How to fix it, rendered as `= help: ...`.
    pub help: Option<String>,
}

impl Diagnostic {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Diagnostic {
            code,
            message: message.into(),
            labels: Vec::new(),
            notes: Vec::new(),
            help: None,
        }
    }

    /// Mark where the failure happened.
    pub fn with_label(mut self, span: Span, message: impl Into<String>) -> Self {
        self.labels.push(Label::primary(span, message));
        self
    }

    pub fn with_secondary_label(mut self, span: Span, message: impl Into<String>) -> Self {
        self.labels.push(Label::secondary(span, message));
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Set the fix-it hint, replacing any earlier one.
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    /// Span of the first primary label.
    pub fn primary_span(&self) -> Option<Span> {
        self.labels.iter().find(|l| l.is_primary()).map(|l| l.span)
    }

    /// Whether the failure happened while executing rather than compiling.
    pub fn is_runtime(&self) -> bool {
        self.code.is_eval_error()
    }
}

impl fmt::Display for Diagnostic {
    /// Plain rendering without source text; see [`crate::emitter`] for
    /// snippets.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "error[{}]: {}", self.code, self.message)?;
        for label in &self.labels {
            let marker = if label.is_primary() { "-->" } else { "   " };
            write!(f, "\n  {marker} {}: {}", label.span, label.message)?;
        }
        for note in &self.notes {
            write!(f, "\n  = note: {note}")?;
        }
        if let Some(help) = &self.help {
            write!(f, "\n  = help: {help}")?;
        }
        Ok(())
    }
}
