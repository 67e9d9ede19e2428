// Integration tests for the PIKOlang interpreter

use piko::interpreter::Interpreter;
use piko::interpreter::output::StepOutput;
use piko::interpreter::pointer::Direction;

/// Run a program to termination, capturing everything it writes.
fn run_capture(source: &str) -> String {
    let mut interpreter = Interpreter::from_source(source).expect("construction failed");
    let mut out = Vec::new();
    interpreter.run(&mut out).expect("write failed");
    String::from_utf8(out).expect("output was not UTF-8")
}

#[test]
fn test_termination_only() {
    // A lone `;` with no marker: the pointer starts on it, the first move
    // wraps straight back onto it, and the run ends with the initial register
    assert_eq!(run_capture(";"), "0\n");
}

#[test]
fn test_movement_stays_in_bounds() {
    for token in ['^', 'v', '<', '>'] {
        let source = format!("#{}.\n...\n...", token);
        let mut interpreter = Interpreter::from_source(&source).expect("construction failed");
        for _ in 0..12 {
            interpreter.step();
            let pointer = interpreter.pointer();
            assert!(pointer.x < interpreter.grid().width());
            assert!(pointer.y < interpreter.grid().height());
        }
    }
}

#[test]
fn test_up_from_top_row_wraps_to_bottom() {
    let mut interpreter = Interpreter::from_source("#^ \n   \n ; ").expect("construction failed");

    interpreter.step(); // onto ^, facing up
    let step = interpreter.step(); // wraps to the bottom row

    assert!(step.done);
    assert_eq!(
        (interpreter.pointer().x, interpreter.pointer().y),
        (1, 2)
    );
}

#[test]
fn test_down_from_bottom_row_wraps_to_top() {
    let mut interpreter = Interpreter::from_source(" ;\n#v").expect("construction failed");

    interpreter.step();
    let step = interpreter.step();

    assert!(step.done);
    assert_eq!(
        (interpreter.pointer().x, interpreter.pointer().y),
        (1, 0)
    );
}

#[test]
fn test_right_past_last_column_wraps_to_first() {
    let mut interpreter = Interpreter::from_source(";#").expect("construction failed");

    let step = interpreter.step();

    assert!(step.done);
    assert_eq!(
        (interpreter.pointer().x, interpreter.pointer().y),
        (0, 0)
    );
}

#[test]
fn test_left_past_first_column_wraps_to_last() {
    let mut interpreter = Interpreter::from_source("<#").expect("construction failed");

    interpreter.step(); // onto <, facing left
    interpreter.step(); // wraps from column 0 to the last column

    assert_eq!(
        (interpreter.pointer().x, interpreter.pointer().y),
        (1, 0)
    );
}

#[test]
fn test_marker_cell_behaves_as_space() {
    // The pointer turns around and crosses its own starting cell; were the
    // `#` still stored there, the default rule would load its character code
    let mut interpreter = Interpreter::from_source("#<").expect("construction failed");

    interpreter.step();
    interpreter.step();

    assert_eq!((interpreter.pointer().x, interpreter.pointer().y), (0, 0));
    assert_eq!(interpreter.pointer().register, 0.0);
}

#[test]
fn test_duplicate_marker_aborts_construction() {
    assert!(Interpreter::from_source("#\n#").is_err());
}

#[test]
fn test_string_round_trip() {
    // Queue order: & drains front to back
    assert_eq!(run_capture("#\"abc\"&:;"), "abc\n0\n");
}

#[test]
fn test_string_pop_order() {
    // ~ pops the back of the buffer, so two pops reverse "ab"
    assert_eq!(run_capture("#'ab'~~&:;"), "ba\n0\n");
}

#[test]
fn test_pop_on_empty_buffer_is_noop() {
    assert_eq!(run_capture("#~:;"), "\n0\n");
}

#[test]
fn test_string_mode_only_closes_on_its_own_delimiter() {
    // A double quote inside a single-quoted string is data
    assert_eq!(run_capture("#'a\"b'&:;"), "a\"b\n0\n");
}

#[test]
fn test_output_register_used_as_final_output() {
    // No `:` — the final line is the output register itself
    assert_eq!(run_capture("#'a'&;"), "a\n");
}

#[test]
fn test_emit_absent_output_register_is_empty_line() {
    assert_eq!(run_capture("#:;"), "\n0\n");
}

#[test]
fn test_emit_numeric_register() {
    // `=` prints the register and leaves the output register alone
    assert_eq!(run_capture("#5=;"), "5\n5\n");
}

#[test]
fn test_reset_clears_all_registers() {
    assert_eq!(run_capture("#5!;"), "0\n");
    assert_eq!(run_capture("#'a'&!;"), "0\n");
}

#[test]
fn test_floor() {
    assert_eq!(run_capture("#7/2_;"), "3\n");
}

#[test]
fn test_default_rule_loads_character_code() {
    assert_eq!(run_capture("#A;"), "65\n");
    assert_eq!(run_capture("#9;"), "9\n");
}

#[test]
fn test_four_facing_walk() {
    // Walks right, down, left, then up before terminating
    let source = "#  v\n;   \n    \n^  <";
    let mut interpreter = Interpreter::from_source(source).expect("construction failed");

    let mut last = interpreter.step();
    while !last.done {
        last = interpreter.step();
    }

    assert_eq!((interpreter.pointer().x, interpreter.pointer().y), (0, 1));
    assert_eq!(interpreter.steps_taken(), 11);
    assert_eq!(last.output, StepOutput::Number(0.0));
}

#[test]
fn test_direction_tokens_set_facing() {
    let mut interpreter = Interpreter::from_source("#^").expect("construction failed");
    interpreter.step();
    assert_eq!(interpreter.pointer().direction, Direction::Up);
}

#[test]
fn test_visual_grid_tracks_pointer() {
    let mut interpreter = Interpreter::from_source("# >").expect("construction failed");

    assert_eq!(interpreter.visual_rows()[0][0], '@');

    interpreter.step();

    assert_eq!(interpreter.visual_rows()[0][0], ' ');
    assert_eq!(interpreter.visual_rows()[0][1], '@');
    // the semantic grid is untouched
    assert_eq!(interpreter.grid().cell(1, 0).token, ' ');
}

#[test]
fn test_step_after_termination_is_noop() {
    let mut interpreter = Interpreter::from_source("#;").expect("construction failed");

    let first = interpreter.step();
    let again = interpreter.step();

    assert!(first.done);
    assert_eq!(again, first);
    assert_eq!(interpreter.steps_taken(), 1);
}
