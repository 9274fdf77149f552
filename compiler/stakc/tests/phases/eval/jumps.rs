//! Relative and absolute jumps.
//!
//! Relative jumps may land one past the end. Absolute jumps reject address
//! 0 and anything at or beyond the instruction count.

use pretty_assertions::assert_eq;
use stak_diagnostic::ErrorCode;
use stak_eval::EvalErrorKind;

use crate::common::{run_err, run_ok};

#[test]
fn jump_one_is_next_instruction() {
    assert_eq!(run_ok("jump 1"), Vec::<f64>::new());
    assert_eq!(run_ok("jump 1; push 1"), vec![1.0]);
}

#[test]
fn jump_skips_instructions() {
    assert_eq!(run_ok("jump 2; push 1; push 2"), vec![2.0]);
}

#[test]
fn jump_past_end_plus_one_fails() {
    let err = run_err("jump 2", ErrorCode::E6004);
    assert_eq!(err.kind, EvalErrorKind::AddressOutOfRange { target: 2, len: 1 });
    assert_eq!(err.index, 0);
}

#[test]
fn jump_before_start_fails() {
    run_err("jump -1", ErrorCode::E6004);
}

#[test]
fn jump_zero_repeats_itself() {
    // `jump 0` lands on itself; bounded here by the gate running dry.
    assert_eq!(run_ok("push 0; push 1; cond jump 0"), Vec::<f64>::new());
}

#[test]
fn jump_distance_from_stack() {
    assert_eq!(run_ok("push 2; jump; push 1; push 2"), vec![2.0]);
    assert_eq!(run_ok("push 2; quiet jump; nop"), vec![2.0]);
}

#[test]
fn jump_distance_must_be_finite() {
    let err = run_err("push inf; jump", ErrorCode::E6003);
    assert!(matches!(err.kind, EvalErrorKind::TypeMismatch { .. }));
}

#[test]
fn to_address_zero_fails() {
    run_err("to 0; nop", ErrorCode::E6004);
}

#[test]
fn to_last_index_is_accepted() {
    assert_eq!(run_ok("to 2; push 1; push 2"), vec![2.0]);
}

#[test]
fn to_instruction_count_fails() {
    let err = run_err("to 3; nop; nop", ErrorCode::E6004);
    assert_eq!(err.kind, EvalErrorKind::AddressOutOfRange { target: 3, len: 3 });
}

#[test]
fn to_address_from_stack() {
    assert_eq!(run_ok("push 3; to; push 9; push 7"), vec![7.0]);
    assert_eq!(run_ok("push 3; quiet to; push 9; push 7"), vec![3.0, 7.0]);
}

#[test]
fn to_address_must_be_integer() {
    let err = run_err("push 1.5; to; nop", ErrorCode::E6003);
    assert_eq!(err.kind, EvalErrorKind::TypeMismatch { value: 1.5 });
}
