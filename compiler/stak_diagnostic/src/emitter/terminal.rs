//! Terminal Emitter
//!
//! Human-readable diagnostic output with optional ANSI color support.
//! When the emitter knows the source text, labels are rendered as an
//! annotated snippet; otherwise they fall back to byte ranges.
//!
//! ```text
//! error[E6002]: division by zero
//!  --> prog.stak:1:17
//!   |
//! 1 | push 1; push 0; div
//!   |                 ^^^ right operand is zero
//!   = note: while executing `div` (instruction 2)
//! ```

use std::io::{self, Write};

use stak_ir::Span;

use crate::span_utils::LineOffsetTable;
use crate::{Diagnostic, Label, LabelStyle};

use super::DiagnosticEmitter;

/// ANSI escape sequences.
mod colors {
    pub const ERROR: &str = "\x1b[1;31m"; // Bold red
    pub const HELP: &str = "\x1b[1;32m"; // Bold green
    pub const BOLD: &str = "\x1b[1m";
    pub const GUTTER: &str = "\x1b[1;34m"; // Bold blue
    pub const RESET: &str = "\x1b[0m";
}

/// Color output mode for terminal emitter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Color only when writing to a terminal.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Resolve to a boolean. `is_tty` only matters for `Auto`.
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }

    /// Parse the value of a `--color=` flag.
    pub fn from_flag(value: &str) -> Option<ColorMode> {
        match value {
            "auto" => Some(ColorMode::Auto),
            "always" => Some(ColorMode::Always),
            "never" => Some(ColorMode::Never),
            _ => None,
        }
    }
}

fn label_color(style: LabelStyle) -> &'static str {
    match style {
        LabelStyle::Primary => colors::ERROR,
        LabelStyle::Secondary => colors::GUTTER,
    }
}

fn underline_char(style: LabelStyle) -> &'static str {
    match style {
        LabelStyle::Primary => "^",
        LabelStyle::Secondary => "-",
    }
}

/// Program text plus its line table.
struct SourceContext {
    text: String,
    lines: LineOffsetTable,
}

impl SourceContext {
    /// 1-based line and column of a byte offset.
    fn position(&self, offset: u32) -> (u32, u32) {
        self.lines.offset_to_line_col(&self.text, offset)
    }

    /// Number of characters to underline for `label` on its first line.
    fn underline_width(&self, label: &Label, line: u32, line_text: &str) -> usize {
        let line_len = u32::try_from(line_text.len()).unwrap_or(u32::MAX);
        let line_end = self
            .lines
            .line_start_offset(line)
            .unwrap_or(0)
            .saturating_add(line_len);
        let start = label.span.start;
        let clipped = Span::new(start, label.span.end.min(line_end).max(start));
        clipped
            .slice(&self.text)
            .map_or(0, |s| s.chars().count())
            .max(1)
    }
}

/// Writes diagnostics to a terminal or any other writer.
pub struct TerminalEmitter<W: Write> {
    writer: W,
    colors: bool,
    source: Option<SourceContext>,
    file_path: Option<String>,
}

impl<W: Write> TerminalEmitter<W> {
    /// `is_tty` is only consulted for [`ColorMode::Auto`].
    pub fn with_color_mode(writer: W, mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter {
            writer,
            colors: mode.should_use_colors(is_tty),
            source: None,
            file_path: None,
        }
    }

    /// Attach the program text so labels render as annotated snippets.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        let text = source.into();
        let lines = LineOffsetTable::build(&text);
        self.source = Some(SourceContext { text, lines });
        self
    }

    /// Set the name shown in `-->` location headers. Defaults to `<input>`.
    #[must_use]
    pub fn with_file_path(mut self, path: impl Into<String>) -> Self {
        self.file_path = Some(path.into());
        self
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn paint(&mut self, text: &str, color: &str) {
        if self.colors {
            let _ = write!(self.writer, "{color}{text}{}", colors::RESET);
        } else {
            let _ = write!(self.writer, "{text}");
        }
    }

    /// `error[E6002]: message`
    fn write_header(&mut self, diagnostic: &Diagnostic) {
        self.paint("error", colors::ERROR);
        let code = format!("[{}]", diagnostic.code);
        self.paint(&code, colors::BOLD);
        let _ = writeln!(self.writer, ": {}", diagnostic.message);
    }

    /// `  --> 16..19: message`
    fn write_label_fallback(&mut self, label: &Label) {
        let marker = if label.is_primary() { "-->" } else { "   " };
        let _ = write!(self.writer, "  {marker} {:?}: ", label.span);
        self.paint(&label.message, label_color(label.style));
        let _ = writeln!(self.writer);
    }

    fn write_snippet(&mut self, source: &SourceContext, labels: &[Label]) {
        let max_line = labels
            .iter()
            .map(|l| source.lines.line_from_offset(l.span.start))
            .max()
            .unwrap_or(1);
        let gutter = max_line.to_string().len();

        // Location header from the first primary label, else the first label.
        if let Some(anchor) = labels.iter().find(|l| l.is_primary()).or(labels.first()) {
            let (line, col) = source.position(anchor.span.start);
            let path = self.file_path.clone().unwrap_or_else(|| "<input>".to_owned());
            let _ = write!(self.writer, "{:gutter$}", "");
            self.paint("-->", colors::GUTTER);
            let _ = writeln!(self.writer, " {path}:{line}:{col}");
        }

        let _ = write!(self.writer, "{:gutter$} ", "");
        self.paint("|", colors::GUTTER);
        let _ = writeln!(self.writer);

        for label in labels {
            let (line, col) = source.position(label.span.start);
            let line_text = source.lines.line_text(&source.text, line).unwrap_or("");

            self.paint(&format!("{line:>gutter$} |"), colors::GUTTER);
            let _ = writeln!(self.writer, " {line_text}");

            // Multi-line spans are underlined to the end of their first line.
            let width = source.underline_width(label, line, line_text);
            let padding = (col as usize).saturating_sub(1);
            let _ = write!(self.writer, "{:gutter$} ", "");
            self.paint("|", colors::GUTTER);
            let _ = write!(self.writer, " {:padding$}", "");
            let color = label_color(label.style);
            self.paint(&underline_char(label.style).repeat(width), color);
            if !label.message.is_empty() {
                let _ = write!(self.writer, " ");
                self.paint(&label.message, color);
            }
            let _ = writeln!(self.writer);
        }
    }
}

impl TerminalEmitter<io::Stderr> {
    pub fn stderr(mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter::with_color_mode(io::stderr(), mode, is_tty)
    }
}

impl<W: Write> DiagnosticEmitter for TerminalEmitter<W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        self.write_header(diagnostic);

        match self.source.take() {
            Some(source) if !diagnostic.labels.is_empty() => {
                self.write_snippet(&source, &diagnostic.labels);
                self.source = Some(source);
            }
            source => {
                self.source = source;
                for label in &diagnostic.labels {
                    self.write_label_fallback(label);
                }
            }
        }

        for note in &diagnostic.notes {
            let _ = write!(self.writer, "  = ");
            self.paint("note", colors::BOLD);
            let _ = writeln!(self.writer, ": {note}");
        }
        if let Some(help) = &diagnostic.help {
            let _ = write!(self.writer, "  = ");
            self.paint("help", colors::HELP);
            let _ = writeln!(self.writer, ": {help}");
        }

        let _ = writeln!(self.writer);
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }
}
