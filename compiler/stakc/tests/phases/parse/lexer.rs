//! Statement splitting and word classification.

use pretty_assertions::assert_eq;
use stak_ir::{Operation, Prefix, Span};
use stak_lexer::{classify, statements, TokenKind};

use crate::common::compile_ok;

#[test]
fn newline_and_semicolon_are_interchangeable() {
    let lines = compile_ok("push 1\npush 2\nadd");
    let inline = compile_ok("push 1; push 2; add");
    let mixed = compile_ok("push 1; push 2\nadd");
    assert_eq!(lines, inline);
    assert_eq!(inline, mixed);
}

#[test]
fn empty_statements_are_ignored() {
    let program = compile_ok(";;\npush 1;;;\n\n\n; add ;");
    assert_eq!(program.len(), 2);
}

#[test]
fn statement_lines_and_spans() {
    let stmts = statements("push 1\n\n  quiet add ; pop\n");
    assert_eq!(stmts.len(), 3);
    assert_eq!(stmts[0].line, 1);
    assert_eq!(stmts[1].line, 3);
    assert_eq!(stmts[1].span(), Span::new(10, 19));
    assert_eq!(stmts[2].line, 3);
    assert_eq!(stmts[2].words[0].text, "pop");
}

#[test]
fn crlf_line_endings() {
    let program = compile_ok("push 1\r\npush 2\r\nadd\r\n");
    assert_eq!(program.len(), 3);
}

#[test]
fn words_classify_by_kind() {
    assert_eq!(classify("push"), Some(TokenKind::Operation(Operation::Push)));
    assert_eq!(classify("←"), Some(TokenKind::Operation(Operation::Push)));
    assert_eq!(classify("quiet"), Some(TokenKind::Prefix(Prefix::Quiet)));
    assert_eq!(classify("¿"), Some(TokenKind::Prefix(Prefix::QCond)));
    assert_eq!(classify("@end"), Some(TokenKind::Label("@end")));
    assert_eq!(classify("-2.5"), Some(TokenKind::Number(-2.5)));
    assert_eq!(classify("frob"), None);
}

#[test]
fn sigils_compile_like_names() {
    assert_eq!(
        compile_ok("← 1; ← 2; ÷; ♯ ≥; ? ↑ 1"),
        compile_ok("push 1; push 2; div; quiet ge; cond jump 1")
    );
    assert_eq!(compile_ok("- ; −"), compile_ok("sub; sub"));
}

#[test]
fn special_float_literals() {
    let program = compile_ok("push inf; push -inf; push 1e3");
    assert_eq!(program[0].argument(), Some(f64::INFINITY));
    assert_eq!(program[1].argument(), Some(f64::NEG_INFINITY));
    assert_eq!(program[2].argument(), Some(1000.0));
}
