//! Emitted-output capture for the interpreter
//!
//! Every line produced by `:` and `=` lands in an [`OutputLog`] owned by the
//! engine. The run loop mirrors new lines to its output sink as they appear
//! (so endless programs still stream), while the TUI output pane and tests
//! read the retained log.

use std::fmt;

/// The observable value of a single step: the output register if set,
/// otherwise the numeric register.
#[derive(Debug, Clone, PartialEq)]
pub enum StepOutput {
    Text(String),
    Number(f64),
}

impl fmt::Display for StepOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StepOutput::Text(text) => write!(f, "{}", text),
            StepOutput::Number(value) => write!(f, "{}", value),
        }
    }
}

/// Log of all lines emitted so far, with a cursor for streaming.
#[derive(Debug, Clone, Default)]
pub struct OutputLog {
    lines: Vec<String>,
    flushed: usize,
}

impl OutputLog {
    pub fn new() -> Self {
        OutputLog::default()
    }

    pub fn push_line(&mut self, line: String) {
        self.lines.push(line);
    }

    /// All lines emitted so far, in order.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Lines emitted since the last call, advancing the stream cursor.
    pub fn take_unflushed(&mut self) -> &[String] {
        let from = self.flushed;
        self.flushed = self.lines.len();
        &self.lines[from..]
    }
}
