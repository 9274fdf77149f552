//! Shared test utilities for phase tests.

use stak_diagnostic::emitter::ColorMode;
use stak_diagnostic::{Diagnostic, ErrorCode};
use stak_eval::EvalError;
use stak_ir::Program;
use stak_parse::ParseError;
use stakc::commands::report;
use stakc::Source;

/// Compile `source`, panicking with the rendered diagnostic on failure.
pub fn compile_ok(source: &str) -> Program {
    match stak_parse::compile(source) {
        Ok(program) => program,
        Err(err) => panic!(
            "expected `{source}` to compile, got:\n{}",
            render(source, &err.to_diagnostic())
        ),
    }
}

/// Compile `source` and assert it fails with `code`.
pub fn compile_err(source: &str, code: ErrorCode) -> ParseError {
    let Err(err) = stak_parse::compile(source) else {
        panic!("expected `{source}` to fail with {code}");
    };
    assert_eq!(err.code(), code, "wrong error for `{source}`: {err}");
    err
}

/// Compile and run `source` without a step limit.
pub fn run_ok(source: &str) -> Vec<f64> {
    let program = compile_ok(source);
    match stak_eval::execute(&program) {
        Ok(stack) => stack,
        Err(err) => panic!(
            "expected `{source}` to run, got:\n{}",
            render(source, &err.to_diagnostic(&program))
        ),
    }
}

/// Compile and run `source`, asserting the run fails with `code`.
pub fn run_err(source: &str, code: ErrorCode) -> EvalError {
    let program = compile_ok(source);
    let Err(err) = stak_eval::execute(&program) else {
        panic!("expected `{source}` to fail with {code}");
    };
    assert_eq!(err.code(), code, "wrong error for `{source}`: {err}");
    err
}

/// Render `diagnostic` against `source` without colour.
pub fn render(source: &str, diagnostic: &Diagnostic) -> String {
    let source = Source::new("test.stak", source);
    let out = report(diagnostic, &source, ColorMode::Never, false, Vec::new());
    String::from_utf8(out).expect("emitter writes UTF-8")
}
