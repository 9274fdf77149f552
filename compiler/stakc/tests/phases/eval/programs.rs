//! Whole-program results.

use pretty_assertions::assert_eq;

use crate::common::run_ok;

#[test]
fn add_two_literals() {
    assert_eq!(run_ok("push 10; push 20; add"), vec![30.0]);
}

#[test]
fn swap_reaches_down() {
    assert_eq!(run_ok("push 1; push 2; push 3; push 4; swap 3"), vec![4.0, 2.0, 3.0, 1.0]);
}

#[test]
fn dup_copies_top_block() {
    assert_eq!(run_ok("push 1; dup; push 2; dup 3"), vec![1.0, 1.0, 2.0, 1.0, 1.0, 2.0]);
}

#[test]
fn dup_zero_is_noop() {
    assert_eq!(run_ok("push 5; dup 0"), vec![5.0]);
}

#[test]
fn operands_are_second_then_top() {
    assert_eq!(run_ok("push 10; push 3; sub"), vec![7.0]);
    assert_eq!(run_ok("push 9; push 2; div"), vec![4.5]);
    assert_eq!(run_ok("push 2; push 10; pow"), vec![1024.0]);
    assert_eq!(run_ok("push 1; push 2; lt"), vec![1.0]);
    assert_eq!(run_ok("push 1; push 2; gt"), vec![0.0]);
    assert_eq!(run_ok("push 2; push 2; le; push 3; push 2; ge"), vec![1.0, 1.0]);
}

#[test]
fn accumulator_pipeline() {
    // Each `push k; op` applies op between the running value and k.
    assert_eq!(run_ok("push 1; push 4; add; push 3; mul; push 5; sub"), vec![10.0]);
}

#[test]
fn not_and_eq() {
    assert_eq!(run_ok("push 0; not; push 7; not"), vec![1.0, 0.0]);
    assert_eq!(run_ok("push 3; push 3; eq"), vec![1.0]);
}

#[test]
fn empty_program_leaves_empty_stack() {
    assert_eq!(run_ok(""), Vec::<f64>::new());
    assert_eq!(run_ok("nop; ∅"), Vec::<f64>::new());
}

#[test]
fn countdown_loop() {
    let source = "push 3\n@loop\npush 1; sub\nqcond jump @loop";
    assert_eq!(run_ok(source), vec![0.0]);
}

#[test]
fn factorial_of_five() {
    // acc n -- runs while n != 0
    let source = "\
push 1
push 5
@loop
quiet mul
swap 2
pop
push 1
sub
qcond jump @loop
pop";
    assert_eq!(run_ok(source), vec![120.0]);
}

mod laws {
    use proptest::prelude::*;

    use crate::common::run_ok;

    proptest! {
        #[test]
        fn add_matches_float_addition(a in -1.0e9f64..1.0e9, b in -1.0e9f64..1.0e9) {
            let stack = run_ok(&format!("push {a}; push {b}; add"));
            prop_assert_eq!(stack, vec![a + b]);
        }

        #[test]
        fn lt_and_ge_are_complementary(a in -100i32..100, b in -100i32..100) {
            let stack = run_ok(&format!("push {a}; push {b}; lt; push {a}; push {b}; ge; add"));
            prop_assert_eq!(stack, vec![1.0]);
        }
    }
}
