//! Compile errors: one test per kind, plus rendering.

use pretty_assertions::assert_eq;
use stak_diagnostic::ErrorCode;
use stak_ir::{Prefix, Span};
use stak_parse::ParseErrorKind;

use crate::common::{compile_err, render};

#[test]
fn unrecognized_token() {
    let err = compile_err("push 1\nfrob", ErrorCode::E0001);
    assert_eq!(err.span, Span::new(7, 11));
    assert_eq!(err.line, 2);
}

#[test]
fn no_operation() {
    compile_err("quiet", ErrorCode::E1001);
}

#[test]
fn multiple_operations() {
    let err = compile_err("push 1 add", ErrorCode::E1002);
    assert_eq!(err.span, Span::new(7, 10));
}

#[test]
fn duplicate_prefix() {
    let err = compile_err("quiet # add", ErrorCode::E1003);
    assert_eq!(err.kind, ParseErrorKind::DuplicatePrefix(Prefix::Quiet));
}

#[test]
fn conflicting_gates() {
    compile_err("cond qcond pop", ErrorCode::E1004);
    compile_err("? ?? pop", ErrorCode::E1004);
}

#[test]
fn prefix_after_operation() {
    compile_err("add quiet", ErrorCode::E1005);
}

#[test]
fn operand_before_operation() {
    compile_err("1 push", ErrorCode::E1006);
}

#[test]
fn multiple_labels() {
    compile_err("@a\n@b\njump @a @b", ErrorCode::E1007);
}

#[test]
fn argument_shape_mismatch() {
    compile_err("push", ErrorCode::E2001);
    compile_err("push 1 2", ErrorCode::E2001);
    compile_err("pop 1", ErrorCode::E2001);
    compile_err("dup 1.5", ErrorCode::E2001);
    compile_err("to inf", ErrorCode::E2001);
}

#[test]
fn first_error_wins() {
    // A label error found in the pre-pass beats an earlier bad statement.
    compile_err("frob\njump @nowhere\n@a\n@a", ErrorCode::E3002);
    compile_err("frob\npush 1 2", ErrorCode::E0001);
}

#[test]
fn parse_error_display_has_line() {
    let err = compile_err("push 1\n\npush 1 2", ErrorCode::E2001);
    assert!(err.to_string().starts_with("syntax error on line 3: "));
}

#[test]
fn rendered_duplicate_label_points_at_both() {
    let source = "@x\npush 1\n@x";
    let err = compile_err(source, ErrorCode::E3002);
    let text = render(source, &err.to_diagnostic());
    assert!(text.starts_with("error[E3002]: label `@x` is already declared on line 1\n"));
    assert!(text.contains("--> test.stak:3:1\n"));
    assert!(text.contains("^^ declared again here"));
    assert!(text.contains("-- first declared here"));
}

#[test]
fn rendered_label_misuse_has_help() {
    let source = "@x\npush @x";
    let err = compile_err(source, ErrorCode::E1008);
    let text = render(source, &err.to_diagnostic());
    assert!(text.contains("= help: only `jump` and `to` accept a label"));
}
