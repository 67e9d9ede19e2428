// Execution engine for the PIKOlang interpreter

use crate::grid::Grid;
use crate::interpreter::errors::MalformedProgram;
use crate::interpreter::output::{OutputLog, StepOutput};
use crate::interpreter::pointer::{ArithOp, CmpOp, Condition, Direction, Pointer};
use std::io::{self, Write};

/// Result of one engine step
#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    /// A `;` terminal has been reached
    pub done: bool,

    /// Observable value of this step: output register if set, else the
    /// numeric register
    pub output: StepOutput,
}

/// The main interpreter that executes a PIKOlang program
pub struct Interpreter {
    /// The token grid; immutable for the lifetime of the run
    grid: Grid,

    /// Shadow copy of the grid with the pointer rendered as `@`; trace
    /// display only, never read for semantics
    visual: Vec<Vec<char>>,

    /// The single execution cursor
    pointer: Pointer,

    /// Lines emitted by `:` and `=`
    output: OutputLog,

    /// Whether execution has finished
    finished: bool,

    /// Steps taken so far (for the TUI status bar)
    steps_taken: usize,
}

impl Interpreter {
    /// Create an interpreter for an already-constructed grid
    pub fn new(grid: Grid) -> Self {
        let (x, y) = grid.start();
        let mut visual: Vec<Vec<char>> = grid
            .rows()
            .iter()
            .map(|row| row.iter().map(|cell| cell.token).collect())
            .collect();

        let mut pointer = Pointer::new(x, y, Direction::Right);
        pointer.current_cell = grid.cell(x, y).token;
        visual[y][x] = '@';

        Interpreter {
            grid,
            visual,
            pointer,
            output: OutputLog::new(),
            finished: false,
            steps_taken: 0,
        }
    }

    /// Build the grid from source text and create an interpreter for it
    pub fn from_source(source: &str) -> Result<Self, MalformedProgram> {
        Ok(Interpreter::new(Grid::parse(source)?))
    }

    /// Run to termination, streaming emitted lines to `out` as they are
    /// produced, then writing the final output value.
    ///
    /// Does not return for programs without a `;` terminal; that mirrors the
    /// language's intentional lack of a step limit.
    pub fn run<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        loop {
            let step = self.step();
            for line in self.output.take_unflushed() {
                writeln!(out, "{}", line)?;
            }
            if step.done {
                writeln!(out, "{}", step.output)?;
                return Ok(());
            }
        }
    }

    /// Advance one cell and consume the token there.
    ///
    /// Priority order: string mode, then condition mode, then instruction
    /// dispatch. Once finished, further calls are no-ops that keep reporting
    /// the final output.
    pub fn step(&mut self) -> Step {
        if self.finished {
            return Step {
                done: true,
                output: self.observable_output(),
            };
        }

        self.advance();
        self.steps_taken += 1;

        let token = self.pointer.current_cell;
        if !self.string_mode_check(token) && !self.condition_mode_check(token) {
            self.execute(token);
        }

        Step {
            done: self.finished,
            output: self.observable_output(),
        }
    }

    /// Move one cell in the facing direction, wrapping on every edge, and
    /// keep the visual grid's `@` overlay in sync.
    fn advance(&mut self) {
        self.visual[self.pointer.y][self.pointer.x] = self.pointer.current_cell;

        match self.pointer.direction {
            Direction::Up => {
                self.pointer.y = if self.pointer.y == 0 {
                    self.grid.height() - 1
                } else {
                    self.pointer.y - 1
                };
            }
            Direction::Down => {
                self.pointer.y = if self.pointer.y + 1 >= self.grid.height() {
                    0
                } else {
                    self.pointer.y + 1
                };
            }
            Direction::Left => {
                self.pointer.x = if self.pointer.x == 0 {
                    self.grid.width() - 1
                } else {
                    self.pointer.x - 1
                };
            }
            Direction::Right => {
                self.pointer.x = if self.pointer.x + 1 >= self.grid.width() {
                    0
                } else {
                    self.pointer.x + 1
                };
            }
        }

        self.pointer.current_cell = self.grid.cell(self.pointer.x, self.pointer.y).token;
        self.visual[self.pointer.y][self.pointer.x] = '@';
    }

    /// Rule 1: consume the cell as string data, or open string mode.
    ///
    /// Runs before the condition check, so a quote opens string mode even
    /// while a condition clause is pending.
    fn string_mode_check(&mut self, token: char) -> bool {
        if let Some(delimiter) = self.pointer.string_mode {
            if token == delimiter {
                // the closing delimiter itself is not appended
                self.pointer.string_mode = None;
            } else {
                self.pointer.string_buffer.push(token);
            }
            true
        } else if token == '\'' || token == '"' {
            self.pointer.string_mode = Some(token);
            true
        } else {
            false
        }
    }

    /// Rule 2: consume the cell as part of a `?<op><value>…?` clause.
    ///
    /// Only the first comparison-operator token latches; a later one falls
    /// through and becomes the comparator's character code, as does a `?`
    /// seen before any operator.
    fn condition_mode_check(&mut self, token: char) -> bool {
        let Some(mut clause) = self.pointer.condition else {
            return false;
        };

        if let Some(op) = CmpOp::from_token(token) {
            if clause.operator.is_none() {
                clause.operator = Some(op);
                self.pointer.condition = Some(clause);
                return true;
            }
        }

        if token == '?' && clause.operator.is_some() {
            self.branch(clause);
            self.pointer.condition = None;
            return true;
        }

        if let Some(digit) = token.to_digit(10) {
            clause.comparator = Some(digit as f64);
        } else if token != ' ' {
            clause.comparator = Some(token as u32 as f64);
        }
        self.pointer.condition = Some(clause);
        true
    }

    /// Finalize a condition clause: rotate the facing when the comparison
    /// fails (or, for `!`, when it holds).
    fn branch(&mut self, clause: Condition) {
        let comparator = clause.comparator.unwrap_or(0.0);
        let register = self.pointer.register;
        let direction = self.pointer.direction;

        match clause.operator {
            Some(CmpOp::Eq) => {
                if register != comparator {
                    self.pointer.direction = direction.counter_clockwise();
                }
            }
            Some(CmpOp::Lt) => {
                if register >= comparator {
                    self.pointer.direction = direction.clockwise();
                }
            }
            Some(CmpOp::Gt) => {
                if register <= comparator {
                    self.pointer.direction = direction.counter_clockwise();
                }
            }
            Some(CmpOp::Ne) => {
                if register == comparator {
                    self.pointer.direction = direction.clockwise();
                }
            }
            None => {}
        }
    }

    /// Rule 3: dispatch the cell as an instruction. Quotes never reach this
    /// point; rule 1 consumes them.
    fn execute(&mut self, token: char) {
        match token {
            ';' => self.finished = true,
            '&' => {
                let output = self.pointer.output.get_or_insert_with(String::new);
                output.extend(self.pointer.string_buffer.drain(..));
            }
            ':' => {
                let line = self.pointer.output.take().unwrap_or_default();
                self.output.push_line(line);
            }
            '~' => {
                if let Some(ch) = self.pointer.string_buffer.pop() {
                    self.pointer.output.get_or_insert_with(String::new).push(ch);
                }
            }
            '!' => self.pointer.reset(),
            'v' => self.pointer.direction = Direction::Down,
            '^' => self.pointer.direction = Direction::Up,
            '<' => self.pointer.direction = Direction::Left,
            '>' => self.pointer.direction = Direction::Right,
            '=' => {
                let line = format!("{}", self.pointer.register);
                self.output.push_line(line);
            }
            '?' => self.pointer.condition = Some(Condition::default()),
            '+' | '-' | '*' | '/' if self.pointer.pending_op.is_none() => {
                self.pointer.pending_op = ArithOp::from_token(token);
            }
            '_' => self.pointer.register = self.pointer.register.floor(),
            ' ' => {}
            // everything else, a latched operator token included, is an
            // operand (or a direct load when no operator is pending)
            _ => self.load_or_apply(token),
        }
    }

    /// Rule 3 default: apply the pending operator with this cell as the
    /// right operand, or load the cell's value into the register.
    fn load_or_apply(&mut self, token: char) {
        let value = cell_value(token);
        self.pointer.register = match self.pointer.pending_op.take() {
            Some(op) => op.apply(self.pointer.register, value),
            None => value,
        };
    }

    fn observable_output(&self) -> StepOutput {
        match &self.pointer.output {
            Some(text) => StepOutput::Text(text.clone()),
            None => StepOutput::Number(self.pointer.register),
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Rows of the visual grid, with the pointer's cell shown as `@`
    pub fn visual_rows(&self) -> &[Vec<char>] {
        &self.visual
    }

    pub fn pointer(&self) -> &Pointer {
        &self.pointer
    }

    pub fn output_log(&self) -> &OutputLog {
        &self.output
    }

    pub fn finished(&self) -> bool {
        self.finished
    }

    pub fn steps_taken(&self) -> usize {
        self.steps_taken
    }
}

/// A cell's numeric value: its digit value for `0`–`9`, otherwise its
/// character code.
fn cell_value(token: char) -> f64 {
    match token.to_digit(10) {
        Some(digit) => digit as f64,
        None => token as u32 as f64,
    }
}
