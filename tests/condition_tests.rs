// Arithmetic and condition-clause tests

use piko::interpreter::Interpreter;
use piko::interpreter::pointer::{CmpOp, Direction};

fn run_capture(source: &str) -> String {
    let mut interpreter = Interpreter::from_source(source).expect("construction failed");
    let mut out = Vec::new();
    interpreter.run(&mut out).expect("write failed");
    String::from_utf8(out).expect("output was not UTF-8")
}

/// Step `n` times and hand back the interpreter for state assertions.
fn stepped(source: &str, n: usize) -> Interpreter {
    let mut interpreter = Interpreter::from_source(source).expect("construction failed");
    for _ in 0..n {
        interpreter.step();
    }
    interpreter
}

#[test]
fn test_operator_then_operand() {
    assert_eq!(run_capture("#5+3;"), "8\n");
    assert_eq!(run_capture("#5-3;"), "2\n");
    assert_eq!(run_capture("#5*3;"), "15\n");
    assert_eq!(run_capture("#8/2;"), "4\n");
}

#[test]
fn test_repeated_operator_token_is_an_operand() {
    // The second `+` does not re-latch; it is consumed as its character
    // code (43), so the register becomes 5 + 43
    assert_eq!(run_capture("#5++;"), "48\n");
}

#[test]
fn test_load_overwrites_register() {
    // The register is a scalar slot, not a stack: the 3 replaces the 5
    assert_eq!(run_capture("#53;"), "3\n");
}

#[test]
fn test_division_by_zero_propagates_infinity() {
    let interpreter = stepped("#5/0", 3);
    assert!(interpreter.pointer().register.is_infinite());
    assert!(interpreter.pointer().register > 0.0);
}

#[test]
fn test_equal_comparison_holds_keeps_facing() {
    let interpreter = stepped("#5?=5?", 5);
    assert_eq!(interpreter.pointer().direction, Direction::Right);
    assert!(interpreter.pointer().condition.is_none());
}

#[test]
fn test_equal_comparison_fails_rotates_counter_clockwise() {
    let interpreter = stepped("#5?=9?", 5);
    assert_eq!(interpreter.pointer().direction, Direction::Up);
}

#[test]
fn test_less_than_comparison() {
    // holds: 5 < 9, facing unchanged
    let interpreter = stepped("#5?<9?", 5);
    assert_eq!(interpreter.pointer().direction, Direction::Right);

    // fails: 5 >= 3, rotates clockwise
    let interpreter = stepped("#5?<3?", 5);
    assert_eq!(interpreter.pointer().direction, Direction::Down);
}

#[test]
fn test_greater_than_comparison() {
    // holds: 5 > 3, facing unchanged
    let interpreter = stepped("#5?>3?", 5);
    assert_eq!(interpreter.pointer().direction, Direction::Right);

    // fails: 5 <= 7, rotates counter-clockwise
    let interpreter = stepped("#5?>7?", 5);
    assert_eq!(interpreter.pointer().direction, Direction::Up);
}

#[test]
fn test_not_equal_comparison() {
    // holds: 5 != 4, facing unchanged
    let interpreter = stepped("#5?!4?", 5);
    assert_eq!(interpreter.pointer().direction, Direction::Right);

    // fails: values equal, rotates clockwise
    let interpreter = stepped("#5?!5?", 5);
    assert_eq!(interpreter.pointer().direction, Direction::Down);
}

#[test]
fn test_comparator_defaults_to_zero() {
    // No comparator cell between the operator and the closing `?`
    let interpreter = stepped("#0?=?", 4);
    assert_eq!(interpreter.pointer().direction, Direction::Right);
}

#[test]
fn test_comparator_overwrites_until_close() {
    // 9 then 7: the last value before the closing `?` wins
    let interpreter = stepped("#7?=97?", 6);
    assert_eq!(interpreter.pointer().direction, Direction::Right);
}

#[test]
fn test_spaces_in_clause_are_ignored() {
    let interpreter = stepped("#5?= 5 ?", 7);
    assert_eq!(interpreter.pointer().direction, Direction::Right);
}

#[test]
fn test_second_operator_token_becomes_comparator() {
    // The first `=` latches; the second cannot re-latch and falls through
    // to the comparator rule as its character code (61)
    let interpreter = stepped("#?==", 3);
    let clause = interpreter.pointer().condition.expect("clause still open");
    assert_eq!(clause.operator, Some(CmpOp::Eq));
    assert_eq!(clause.comparator, Some(61.0));

    // register 0 != 61, so the close rotates counter-clockwise
    let interpreter = stepped("#?==?", 4);
    assert_eq!(interpreter.pointer().direction, Direction::Up);
}

#[test]
fn test_question_mark_before_operator_becomes_comparator() {
    let interpreter = stepped("#??", 2);
    let clause = interpreter.pointer().condition.expect("clause still open");
    assert!(clause.operator.is_none());
    assert_eq!(clause.comparator, Some(63.0));
}

#[test]
fn test_quote_opens_string_mode_inside_condition_clause() {
    // Rule order: the quote is consumed by string mode even though a
    // condition clause is pending; the clause resumes after the close
    let interpreter = stepped("#?'a'=5?", 7);
    assert_eq!(interpreter.pointer().direction, Direction::Up);
    assert_eq!(interpreter.pointer().string_buffer, vec!['a']);
    assert!(interpreter.pointer().condition.is_none());
}

#[test]
fn test_non_digit_comparator_uses_character_code() {
    // comparator A = 65; register loaded with A as well, clause holds
    let interpreter = stepped("#A?=A?", 5);
    assert_eq!(interpreter.pointer().direction, Direction::Right);
}
