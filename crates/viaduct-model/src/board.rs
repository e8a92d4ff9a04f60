// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Circuit Board and File Loader
//!
//! A `Board` is a fixed-size rectangular grid of [`Cell`]s with exactly one
//! start and one end component, produced by a validating loader.
//!
//! The input format: the first line holds two positive integers, rows and
//! columns; each of the next `rows` lines holds exactly `cols` characters
//! from `{O, X, 1, 2}` (whitespace inside a row is discarded before the
//! length check); exactly one '1' and one '2' must appear; any non-blank
//! line after the grid is an error. The trace marker 'T' is never valid
//! input.
//!
//! The loader accepts any `BufRead`, a file path, or a string slice, and
//! reports structured [`BoardError`]s that keep I/O failures (including
//! file-not-found) distinguishable from format violations.

use crate::cell::Cell;
use crate::position::Position;
use log::debug;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

/// The error type for board loading.
#[derive(Debug)]
pub enum BoardError {
    /// An I/O error occurred while reading the input. File-not-found
    /// surfaces here with its original `ErrorKind`.
    Io(std::io::Error),
    /// The first line does not contain two dimension tokens.
    MissingDimensions,
    /// A dimension token is not a positive integer.
    InvalidDimensions,
    /// The input ended before all declared rows were read.
    MissingRow {
        /// Declared number of rows.
        expected: usize,
        /// Rows actually present.
        found: usize,
    },
    /// A row does not hold exactly the declared number of characters.
    RowLength {
        /// Row index (0-based).
        row: usize,
        /// Declared number of columns.
        expected: usize,
        /// Characters actually present.
        found: usize,
    },
    /// A character outside `{O, X, 1, 2}` appeared in the grid.
    InvalidCharacter {
        /// The offending character.
        found: char,
        /// Row index (0-based).
        row: usize,
        /// Column index (0-based).
        col: usize,
    },
    /// A non-blank line followed the declared grid.
    TrailingData {
        /// Line number in the file (1-based).
        line: usize,
    },
    /// The grid does not hold exactly one start and one end component.
    ComponentCount {
        /// Number of '1' cells found.
        starts: usize,
        /// Number of '2' cells found.
        ends: usize,
    },
}

impl BoardError {
    /// Returns `true` for format violations (as opposed to I/O failures).
    #[inline]
    pub fn is_format(&self) -> bool {
        !matches!(self, BoardError::Io(_))
    }
}

impl std::fmt::Display for BoardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BoardError::Io(e) => write!(f, "I/O error: {}", e),
            BoardError::MissingDimensions => {
                write!(f, "first line must contain the number of rows and columns")
            }
            BoardError::InvalidDimensions => {
                write!(f, "rows and columns must be positive integers")
            }
            BoardError::MissingRow { expected, found } => write!(
                f,
                "not enough rows of board data: expected {}, found {}",
                expected, found
            ),
            BoardError::RowLength {
                row,
                expected,
                found,
            } => write!(
                f,
                "row {} has length {} but expected {}",
                row, found, expected
            ),
            BoardError::InvalidCharacter { found, row, col } => write!(
                f,
                "invalid character '{}' at row {}, col {}",
                found, row, col
            ),
            BoardError::TrailingData { line } => {
                write!(f, "extra data found after board rows (line {})", line)
            }
            BoardError::ComponentCount { starts, ends } => write!(
                f,
                "board must contain exactly one '1' and one '2': found {} start(s), {} end(s)",
                starts, ends
            ),
        }
    }
}

impl std::error::Error for BoardError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BoardError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for BoardError {
    fn from(e: std::io::Error) -> Self {
        BoardError::Io(e)
    }
}

/// The error reported when marking a non-open position as trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OccupiedError {
    /// The rejected position.
    pub position: Position,
    /// What the position holds, or `None` when it is out of range.
    pub found: Option<Cell>,
}

impl std::fmt::Display for OccupiedError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.found {
            Some(cell) => write!(f, "position {} contains '{}'", self.position, cell),
            None => write!(f, "position {} is outside the board", self.position),
        }
    }
}

impl std::error::Error for OccupiedError {}

/// A validated circuit board: a rectangular grid with exactly one start
/// and one end component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: Vec<Cell>,
    rows: usize,
    cols: usize,
    start: Position,
    end: Position,
}

impl Board {
    /// Loads a board from a file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, BoardError> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Loads a board from any buffered reader.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, BoardError> {
        let mut lines = reader.lines();

        let header = match lines.next() {
            Some(line) => line?,
            None => return Err(BoardError::MissingDimensions),
        };
        let mut tokens = header.split_whitespace();
        let rows: usize = tokens
            .next()
            .ok_or(BoardError::MissingDimensions)?
            .parse()
            .map_err(|_| BoardError::InvalidDimensions)?;
        let cols: usize = tokens
            .next()
            .ok_or(BoardError::MissingDimensions)?
            .parse()
            .map_err(|_| BoardError::InvalidDimensions)?;
        if rows == 0 || cols == 0 {
            return Err(BoardError::InvalidDimensions);
        }

        let mut cells = Vec::with_capacity(rows * cols);
        let mut start = None;
        let mut end = None;
        let mut starts = 0usize;
        let mut ends = 0usize;

        for row in 0..rows {
            let line = match lines.next() {
                Some(line) => line?,
                None => {
                    return Err(BoardError::MissingRow {
                        expected: rows,
                        found: row,
                    })
                }
            };
            // Whitespace inside a row carries no meaning.
            let compact: String = line.split_whitespace().collect();
            let found = compact.chars().count();
            if found != cols {
                return Err(BoardError::RowLength {
                    row,
                    expected: cols,
                    found,
                });
            }
            for (col, ch) in compact.chars().enumerate() {
                let cell = match Cell::from_char(ch) {
                    Some(Cell::Trace) | None => {
                        return Err(BoardError::InvalidCharacter { found: ch, row, col })
                    }
                    Some(cell) => cell,
                };
                match cell {
                    Cell::Start => {
                        starts += 1;
                        start = Some(Position::new(row, col));
                    }
                    Cell::End => {
                        ends += 1;
                        end = Some(Position::new(row, col));
                    }
                    _ => {}
                }
                cells.push(cell);
            }
        }

        for (offset, line) in lines.enumerate() {
            if !line?.trim().is_empty() {
                return Err(BoardError::TrailingData {
                    line: rows + 2 + offset,
                });
            }
        }

        if starts != 1 || ends != 1 {
            return Err(BoardError::ComponentCount { starts, ends });
        }
        let (Some(start), Some(end)) = (start, end) else {
            return Err(BoardError::ComponentCount { starts, ends });
        };

        debug!(
            "loaded {}x{} board, start {}, end {}",
            rows, cols, start, end
        );
        Ok(Self {
            cells,
            rows,
            cols,
            start,
            end,
        })
    }

    /// Returns the number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns the position of the start component.
    #[inline]
    pub fn start(&self) -> Position {
        self.start
    }

    /// Returns the position of the end component.
    #[inline]
    pub fn end(&self) -> Position {
        self.end
    }

    /// Returns the cell at an in-range position.
    #[inline]
    pub fn cell_at(&self, position: Position) -> Cell {
        debug_assert!(
            position.row < self.rows && position.col < self.cols,
            "called `Board::cell_at` with out-of-range position {}",
            position
        );
        self.cells[position.row * self.cols + position.col]
    }

    /// Returns `true` if `position` is in range and open. Out-of-range
    /// positions are simply not open.
    #[inline]
    pub fn is_open(&self, position: Position) -> bool {
        position.row < self.rows
            && position.col < self.cols
            && self.cell_at(position).is_open()
    }

    /// Returns `true` if a trace may step onto `position`: it is either
    /// open or the end component.
    #[inline]
    pub fn can_enter(&self, position: Position) -> bool {
        self.is_open(position) || position == self.end
    }

    /// Marks an open position as part of a trace.
    pub fn mark_trace(&mut self, position: Position) -> Result<(), OccupiedError> {
        if !self.is_open(position) {
            let found = (position.row < self.rows && position.col < self.cols)
                .then(|| self.cell_at(position));
            return Err(OccupiedError { position, found });
        }
        self.set_cell(position, Cell::Trace);
        Ok(())
    }

    /// Overwrites an in-range cell. Callers validate routability first.
    #[inline]
    pub(crate) fn set_cell(&mut self, position: Position, cell: Cell) {
        debug_assert!(position.row < self.rows && position.col < self.cols);
        self.cells[position.row * self.cols + position.col] = cell;
    }
}

impl FromStr for Board {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_reader(s.as_bytes())
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..self.rows {
            for col in 0..self.cols {
                if col > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", self.cells[row * self.cols + col])?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
