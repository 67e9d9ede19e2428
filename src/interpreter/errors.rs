//! Construction error types for the PIKOlang interpreter
//!
//! This module defines [`MalformedProgram`], raised while building the token
//! grid (as opposed to I/O errors in the CLI shell). There are no runtime
//! error kinds: every step is total, and degenerate arithmetic such as
//! division by zero propagates an infinite or NaN register value instead of
//! failing.
//!
//! All construction errors are fatal - the program is rejected before any
//! step runs.

use std::fmt;

/// Errors detected while constructing the token grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedProgram {
    /// More than one `#` pointer-start marker in the source
    MultiplePointerMarkers {
        first: (usize, usize),
        second: (usize, usize),
    },
}

impl fmt::Display for MalformedProgram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MalformedProgram::MultiplePointerMarkers { first, second } => {
                write!(
                    f,
                    "multiple pointer markers found: first at ({}, {}), again at ({}, {})",
                    first.0, first.1, second.0, second.1
                )
            }
        }
    }
}

impl std::error::Error for MalformedProgram {}
