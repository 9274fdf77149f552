//! Prefix gating and quiet reads.

use pretty_assertions::assert_eq;
use stak_diagnostic::ErrorCode;

use crate::common::{run_err, run_ok};

#[test]
fn cond_skips_on_zero() {
    assert_eq!(run_ok("push 0; cond push 2"), Vec::<f64>::new());
    assert_eq!(run_ok("push 1; cond push 2"), vec![2.0]);
}

#[test]
fn cond_consumes_gate_even_when_taken() {
    assert_eq!(run_ok("push 5; push 1; cond push 2"), vec![5.0, 2.0]);
}

#[test]
fn qcond_restores_gate_value() {
    assert_eq!(run_ok("push 1; push 2; push 3; qcond push 4"), vec![1.0, 2.0, 4.0, 3.0]);
}

#[test]
fn qcond_leaves_zero_when_skipping() {
    assert_eq!(run_ok("push 7; push 0; qcond pop"), vec![7.0, 0.0]);
}

#[test]
fn qcond_operates_below_the_gate() {
    assert_eq!(run_ok("push 2; push 3; push 1; qcond add"), vec![5.0, 1.0]);
}

#[test]
fn quiet_binary_keeps_operands() {
    assert_eq!(run_ok("push 1; push 2; quiet add"), vec![1.0, 2.0, 3.0]);
    assert_eq!(run_ok("push 4; push 2; # ÷"), vec![4.0, 2.0, 2.0]);
}

#[test]
fn quiet_not_keeps_operand() {
    assert_eq!(run_ok("push 0; quiet not"), vec![0.0, 1.0]);
}

#[test]
fn quiet_and_gate_combine() {
    assert_eq!(run_ok("push 2; push 3; push 1; cond quiet mul"), vec![2.0, 3.0, 6.0]);
}

#[test]
fn gate_on_empty_stack_underflows() {
    run_err("cond nop", ErrorCode::E6001);
    run_err("qcond nop", ErrorCode::E6001);
}
