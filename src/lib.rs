//! # Introduction
//!
//! `piko` executes PIKOlang, a two-dimensional esoteric language: a single
//! instruction pointer walks a torus-shaped grid of one-character tokens,
//! accumulating a floating-point register, a character buffer, and an output
//! register as it moves.  Program output can stream to stdout or be stepped
//! through interactively in a terminal UI built with
//! [ratatui](https://docs.rs/ratatui).
//!
//! ## Execution pipeline
//!
//! ```text
//! Source → Grid → Interpreter (step loop) → Output lines / TUI
//! ```
//!
//! 1. [`grid`] — splits the source into a rectangular, space-padded token
//!    grid and extracts the `#` pointer-start marker.
//! 2. [`interpreter`] — the execution engine: one move per step, then string
//!    mode, condition mode, or instruction dispatch, in that priority order.
//! 3. [`ui`] — ratatui-based trace overlay showing the visual grid, pointer
//!    state, and output log; not part of the stable library API.
//!
//! ## Language summary
//!
//! Facing: `v ^ < >`.  Quotes open and close string mode.  `?` opens a
//! condition clause `?<op><value>…?` that rotates the pointer on a failed
//! comparison.  `+ - * /` latch an arithmetic operator applied by the next
//! cell.  `&` drains the character buffer into the output register, `~` pops
//! it, `:` emits it, `=` emits the numeric register, `!` resets, `;`
//! terminates.

pub mod grid;
pub mod interpreter;
pub mod ui;
