//! Token grid construction for PIKOlang source
//!
//! Converts raw source text into a rectangular grid of one-character cells.
//! Lines are right-padded with spaces to the widest line so every row has the
//! same length; the grid wraps on all four edges at run time, so padding also
//! decides where a horizontally travelling pointer re-enters.
//!
//! The `#` pointer-start marker is extracted here: its cell is stored as a
//! space and its coordinates become the initial pointer position. More than
//! one marker is a construction error; zero markers start the pointer at the
//! origin.

use crate::interpreter::errors::MalformedProgram;

/// The character that marks the pointer's starting cell.
pub const POINTER_MARKER: char = '#';

/// One cell of the program grid: a single-character token with its position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    pub x: usize,
    pub y: usize,
    pub token: char,
}

/// A rectangular, space-padded grid of program tokens.
///
/// Immutable after construction; the interpreter keeps its own mutable
/// "visual" copy for trace display.
#[derive(Debug, Clone)]
pub struct Grid {
    width: usize,
    height: usize,
    rows: Vec<Vec<Cell>>,
    /// Where the `#` marker was found, or (0, 0) if the source had none.
    start: (usize, usize),
}

impl Grid {
    /// Build a grid from raw source text.
    ///
    /// Fails with [`MalformedProgram::MultiplePointerMarkers`] if the source
    /// contains more than one `#`. A markerless source is accepted; the
    /// pointer then starts at the origin.
    pub fn parse(source: &str) -> Result<Grid, MalformedProgram> {
        let lines: Vec<&str> = source.split('\n').collect();
        let height = lines.len();

        // Clamp to width 1 so a source of empty lines still yields a torus
        // with area; the lone padded space is a no-op cell.
        let width = lines
            .iter()
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0)
            .max(1);

        let mut rows = Vec::with_capacity(height);
        let mut start: Option<(usize, usize)> = None;

        for (y, line) in lines.iter().enumerate() {
            let mut row = Vec::with_capacity(width);
            for (x, ch) in line.chars().enumerate() {
                let token = if ch == POINTER_MARKER {
                    match start {
                        None => {
                            start = Some((x, y));
                            ' '
                        }
                        Some(first) => {
                            return Err(MalformedProgram::MultiplePointerMarkers {
                                first,
                                second: (x, y),
                            });
                        }
                    }
                } else {
                    ch
                };
                row.push(Cell { x, y, token });
            }
            // Right-pad short lines to the grid width
            for x in row.len()..width {
                row.push(Cell { x, y, token: ' ' });
            }
            rows.push(row);
        }

        Ok(Grid {
            width,
            height,
            rows,
            start: start.unwrap_or((0, 0)),
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Initial pointer position (the extracted marker cell, or the origin).
    pub fn start(&self) -> (usize, usize) {
        self.start
    }

    /// The cell at (x, y). Both coordinates must be in range; the
    /// interpreter's movement wrap guarantees this.
    pub fn cell(&self, x: usize, y: usize) -> &Cell {
        &self.rows[y][x]
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_padding_to_widest_line() {
        let grid = Grid::parse("ab\nabcd\na").unwrap();

        assert_eq!(grid.width(), 4);
        assert_eq!(grid.height(), 3);
        assert_eq!(grid.cell(2, 0).token, ' ');
        assert_eq!(grid.cell(3, 2).token, ' ');
        assert_eq!(grid.cell(3, 1).token, 'd');
    }

    #[test]
    fn test_marker_extracted_as_space() {
        let grid = Grid::parse("v <\n>#^").unwrap();

        assert_eq!(grid.start(), (1, 1));
        assert_eq!(grid.cell(1, 1).token, ' ');
    }

    #[test]
    fn test_missing_marker_starts_at_origin() {
        let grid = Grid::parse("abc").unwrap();
        assert_eq!(grid.start(), (0, 0));
    }

    #[test]
    fn test_duplicate_marker_rejected() {
        let err = Grid::parse("# #").unwrap_err();
        assert_eq!(
            err,
            MalformedProgram::MultiplePointerMarkers {
                first: (0, 0),
                second: (2, 0),
            }
        );
    }

    #[test]
    fn test_empty_source_has_area() {
        let grid = Grid::parse("").unwrap();

        assert_eq!(grid.width(), 1);
        assert_eq!(grid.height(), 1);
        assert_eq!(grid.cell(0, 0).token, ' ');
    }

    #[test]
    fn test_cells_know_their_coordinates() {
        let grid = Grid::parse("ab\ncd").unwrap();
        assert_eq!(grid.cell(1, 1), &Cell { x: 1, y: 1, token: 'd' });
    }
}
