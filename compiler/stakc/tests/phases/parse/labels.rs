//! Label declarations and references.

use pretty_assertions::assert_eq;
use stak_diagnostic::ErrorCode;
use stak_ir::Operation;
use stak_parse::{parse, ParseErrorKind};

use crate::common::{compile_err, compile_ok};

#[test]
fn label_binds_to_next_instruction() {
    let program = compile_ok("push 1\n@mid\npush 2\njump @mid");
    assert_eq!(program.len(), 3);
    assert_eq!(program[2].operation(), Operation::To);
    assert_eq!(program[2].argument(), Some(1.0));
}

#[test]
fn forward_references_resolve() {
    let program = compile_ok("jump @end\npush 1\n@end\nnop");
    assert_eq!(program[0].operation(), Operation::To);
    assert_eq!(program[0].argument(), Some(2.0));
}

#[test]
fn trailing_label_points_past_the_end() {
    let program = compile_ok("to @end\npush 1\n@end");
    assert_eq!(program.len(), 2);
    assert_eq!(program[0].argument(), Some(2.0));
}

#[test]
fn prefixes_survive_label_rewrite() {
    let program = compile_ok("@top\nqcond jump @top");
    assert_eq!(program[0].to_string(), "qcond to 0");
}

#[test]
fn label_table_is_exposed() {
    let instructions = parse("@a\npush 1\n@b\n@c\npop").unwrap();
    let labels: Vec<_> = instructions.labels().iter().collect();
    assert_eq!(labels, vec![("@a", 0), ("@b", 1), ("@c", 1)]);
}

#[test]
fn undeclared_label_fails() {
    let err = compile_err("push 1\njump @missing", ErrorCode::E3001);
    assert_eq!(err.kind, ParseErrorKind::UndefinedLabel("@missing".to_owned()));
    assert_eq!(err.line, 2);
}

#[test]
fn duplicate_declaration_fails() {
    let err = compile_err("@x\npush 1\n@x\npop", ErrorCode::E3002);
    assert_eq!(err.line, 3);
    match err.kind {
        ParseErrorKind::DuplicateLabelDeclaration { first_line, .. } => assert_eq!(first_line, 1),
        other => panic!("unexpected kind {other:?}"),
    }
}

#[test]
fn label_line_must_be_alone() {
    compile_err("@x push 1", ErrorCode::E3003);
}

#[test]
fn label_only_with_jumps() {
    compile_err("@x\npush @x", ErrorCode::E1008);
    compile_err("@x\ndup @x", ErrorCode::E1008);
}
