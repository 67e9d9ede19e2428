//! PIKOlang execution engine
//!
//! This module provides the core execution logic:
//! - [`engine`]: the step engine and run loop
//! - [`pointer`]: the instruction pointer and its mode/register state
//! - [`output`]: the emitted-line log and per-step observable output
//! - [`errors`]: construction error types
//!
//! # Execution Model
//!
//! Every step first moves the pointer one cell in its facing direction
//! (wrapping on all edges), then consumes the cell under it: as string data
//! if string mode is active, as part of a condition clause if condition mode
//! is active, and otherwise as an instruction. A step always produces an
//! observable value — the output register if set, else the numeric register.
//!
//! There is no step limit: a program without a `;` terminal runs forever by
//! design.

pub mod engine;
pub mod errors;
pub mod output;
pub mod pointer;

pub use engine::Interpreter;
