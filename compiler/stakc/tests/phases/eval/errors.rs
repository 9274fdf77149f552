//! Runtime failures, step limits and rendered diagnostics.

use pretty_assertions::assert_eq;
use stak_diagnostic::ErrorCode;
use stak_eval::{EvalErrorKind, InterpreterBuilder};

use crate::common::{compile_ok, render, run_err};

#[test]
fn division_by_zero() {
    let err = run_err("push 1; push 0; div", ErrorCode::E6002);
    assert_eq!(err.index, 2);
}

#[test]
fn underflow_cases() {
    run_err("pop", ErrorCode::E6001);
    run_err("push 1; add", ErrorCode::E6001);
    run_err("not", ErrorCode::E6001);
    run_err("push 1; dup 2", ErrorCode::E6001);
    run_err("push 1; swap", ErrorCode::E6001);
    run_err("push 1; push 2; swap 2", ErrorCode::E6001);
    run_err("jump", ErrorCode::E6001);
}

#[test]
fn underflow_reports_counts() {
    let err = run_err("push 1; dup 3", ErrorCode::E6001);
    assert_eq!(err.kind, EvalErrorKind::StackUnderflow { needed: 3, available: 1 });
}

#[test]
fn negative_counts_name_the_count() {
    let err = run_err("push 1; dup -1", ErrorCode::E6001);
    assert_eq!(
        err.to_string(),
        "runtime error at instruction 1: element count must not be negative, got -1"
    );
    let err = run_err("push 1; push 2; swap -2", ErrorCode::E6001);
    assert_eq!(err.kind, EvalErrorKind::NegativeCount { count: -2 });
}

#[test]
fn zero_to_a_negative_power() {
    let err = run_err("push 0; push -1; pow", ErrorCode::E6002);
    assert_eq!(err.index, 2);
    run_err("push 0; push -0.5; pow", ErrorCode::E6002);
}

#[test]
fn runtime_error_display() {
    let err = run_err("push 1; push 0; div", ErrorCode::E6002);
    assert_eq!(err.to_string(), "runtime error at instruction 2: division by zero");
}

#[test]
fn step_limit_stops_infinite_loop() {
    let program = compile_ok("push 1\n@top\njump @top");
    let err = InterpreterBuilder::new(&program)
        .max_steps(Some(50))
        .build()
        .run()
        .unwrap_err();
    assert_eq!(err.kind, EvalErrorKind::StepLimitExceeded { limit: 50 });
    assert_eq!(err.code(), ErrorCode::E6005);
}

#[test]
fn step_limit_allows_finishing_programs() {
    let program = compile_ok("push 1; push 2; add");
    let stack = InterpreterBuilder::new(&program)
        .max_steps(Some(3))
        .build()
        .run()
        .unwrap();
    assert_eq!(stack, vec![3.0]);
}

#[test]
fn initial_stack_feeds_program() {
    let program = compile_ok("mul");
    let stack = InterpreterBuilder::new(&program)
        .initial_stack(vec![6.0, 7.0])
        .build()
        .run()
        .unwrap();
    assert_eq!(stack, vec![42.0]);
}

#[test]
fn rendered_runtime_error_on_later_line() {
    let source = "push 4\npush 0\n\ndiv";
    let program = compile_ok(source);
    let err = run_err(source, ErrorCode::E6002);
    let text = render(source, &err.to_diagnostic(&program));
    assert_eq!(
        text,
        "error[E6002]: division by zero\n \
         --> test.stak:4:1\n  \
         |\n\
         4 | div\n  \
         | ^^^ divides by zero\n  \
         = note: while executing `div` (instruction 2)\n\n"
    );
}

#[test]
fn rendered_out_of_range_explains_bounds() {
    let source = "to 0";
    let program = compile_ok(source);
    let err = run_err(source, ErrorCode::E6004);
    let text = render(source, &err.to_diagnostic(&program));
    assert!(text.contains("^^^^ jump lands outside the program"));
    assert!(text.contains(
        "= note: relative jumps may land on 0..=1; absolute addresses must lie strictly between 0 and 1"
    ));
}
