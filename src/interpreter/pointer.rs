//! The instruction pointer and its per-run state
//!
//! The pointer owns everything mutable during a run: position, facing,
//! the numeric register (a single scalar, despite the language calling it a
//! "stack"), the character buffer, the output register, and the three mode
//! slots. String mode and condition mode are separate options because a
//! quote can open string mode while a condition clause is still pending;
//! a latched arithmetic operator likewise survives either mode.

/// Facing direction of the pointer.
///
/// Declared in clockwise order so rotation is index arithmetic on
/// [`Direction::RING`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    /// The cyclic rotation order: one clockwise step advances by one.
    pub const RING: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    fn ring_index(self) -> usize {
        match self {
            Direction::Up => 0,
            Direction::Right => 1,
            Direction::Down => 2,
            Direction::Left => 3,
        }
    }

    /// Rotate one step clockwise (Left wraps to Up).
    pub fn clockwise(self) -> Direction {
        Direction::RING[(self.ring_index() + 1) % 4]
    }

    /// Rotate one step counter-clockwise (Up wraps to Left).
    pub fn counter_clockwise(self) -> Direction {
        Direction::RING[(self.ring_index() + 3) % 4]
    }
}

/// Comparison operator of a condition clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CmpOp {
    /// `=` — rotate counter-clockwise unless register == comparator
    Eq,
    /// `<` — rotate clockwise unless register < comparator
    Lt,
    /// `>` — rotate counter-clockwise unless register > comparator
    Gt,
    /// `!` — rotate clockwise if register == comparator
    Ne,
}

impl CmpOp {
    /// Map a comparison-operator token, if the character is one.
    pub fn from_token(token: char) -> Option<CmpOp> {
        match token {
            '=' => Some(CmpOp::Eq),
            '<' => Some(CmpOp::Lt),
            '>' => Some(CmpOp::Gt),
            '!' => Some(CmpOp::Ne),
            _ => None,
        }
    }
}

/// Latched arithmetic operator, applied by the next operand cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl ArithOp {
    pub fn from_token(token: char) -> Option<ArithOp> {
        match token {
            '+' => Some(ArithOp::Add),
            '-' => Some(ArithOp::Sub),
            '*' => Some(ArithOp::Mul),
            '/' => Some(ArithOp::Div),
            _ => None,
        }
    }

    /// Apply to the register and an operand. Division by zero follows f64
    /// semantics and yields an infinite or NaN value.
    pub fn apply(self, register: f64, operand: f64) -> f64 {
        match self {
            ArithOp::Add => register + operand,
            ArithOp::Sub => register - operand,
            ArithOp::Mul => register * operand,
            ArithOp::Div => register / operand,
        }
    }
}

/// In-progress condition clause state (`?<op><value>…?`).
///
/// Only the first operator token latches; the comparator may be overwritten
/// any number of times before the closing `?`, and defaults to 0 if never
/// set.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Condition {
    pub operator: Option<CmpOp>,
    pub comparator: Option<f64>,
}

/// The single execution cursor: position, facing, and all mode/register
/// state. One pointer is created per run and discarded at termination.
#[derive(Debug, Clone)]
pub struct Pointer {
    pub x: usize,
    pub y: usize,
    pub direction: Direction,

    /// Token of the cell the pointer currently occupies; restored into the
    /// visual grid when it moves on.
    pub current_cell: char,

    /// The numeric accumulator ("stack" in PIKOlang terms — a scalar slot,
    /// loads overwrite rather than append).
    pub register: f64,

    /// Character buffer filled by string mode, drained front-to-back by `&`
    /// and popped from the back by `~`.
    pub string_buffer: Vec<char>,

    /// Most recently produced textual output, if any; `None` falls back to
    /// the numeric register when a step's output is observed.
    pub output: Option<String>,

    /// Opening delimiter while string mode is active.
    pub string_mode: Option<char>,

    /// Clause state while condition mode is active.
    pub condition: Option<Condition>,

    /// Latched arithmetic operator awaiting its operand cell.
    pub pending_op: Option<ArithOp>,
}

impl Pointer {
    pub fn new(x: usize, y: usize, direction: Direction) -> Self {
        Pointer {
            x,
            y,
            direction,
            current_cell: ' ',
            register: 0.0,
            string_buffer: Vec::new(),
            output: None,
            string_mode: None,
            condition: None,
            pending_op: None,
        }
    }

    /// The `!` instruction: clear every register, keep position and facing.
    pub fn reset(&mut self) {
        self.register = 0.0;
        self.string_buffer.clear();
        self.output = None;
    }
}
