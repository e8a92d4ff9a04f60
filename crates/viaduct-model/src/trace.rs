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

//! # Trace States
//!
//! A [`TraceState`] is one candidate partial trace: a private copy of the
//! board with trace marks, the current position, and the path length.
//! States are immutable once created: extending a trace produces a new
//! state and never touches its parent. The full-grid copy per step is a
//! deliberate simplicity-over-efficiency tradeoff: a single shared board
//! with undo-on-backtrack is cheaper but is not order-equivalent under a
//! breadth-first frontier, where pending states are not nested the way
//! depth-first recursion is.

use crate::board::Board;
use crate::cell::Cell;
use crate::position::{Direction, Position};
use smallvec::SmallVec;

/// An immutable candidate partial trace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceState {
    board: Board,
    position: Position,
    length: usize,
}

impl TraceState {
    /// Creates a length-1 trace rooted at a neighbor of the board's start
    /// component. The cell is marked on a private copy of `board`; the end
    /// component keeps its '2' mark.
    pub fn first_step(board: &Board, position: Position) -> Self {
        debug_assert!(
            board.can_enter(position),
            "called `TraceState::first_step` with unroutable position {}",
            position
        );
        let mut copy = board.clone();
        if copy.is_open(position) {
            copy.set_cell(position, Cell::Trace);
        }
        Self {
            board: copy,
            position,
            length: 1,
        }
    }

    /// Creates the trace that extends `self` by one step onto `position`.
    /// The parent is left untouched.
    pub fn extend(&self, position: Position) -> Self {
        debug_assert!(
            self.board.can_enter(position),
            "called `TraceState::extend` with unroutable position {}",
            position
        );
        let mut copy = self.board.clone();
        if copy.is_open(position) {
            copy.set_cell(position, Cell::Trace);
        }
        Self {
            board: copy,
            position,
            length: self.length + 1,
        }
    }

    /// Returns this trace's private board copy.
    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the current position of the trace head.
    #[inline]
    pub fn position(&self) -> Position {
        self.position
    }

    /// Returns the number of cells stepped on so far.
    #[inline]
    pub fn length(&self) -> usize {
        self.length
    }

    /// Returns `true` once the trace head has reached the end component.
    /// A complete trace is never extended further.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.position == self.board.end()
    }

    /// Returns the positions this trace can be extended onto: 4-connected
    /// neighbors, in fixed up/down/left/right order, that are open on this
    /// state's private board copy or are the end component.
    pub fn next_steps(&self) -> SmallVec<[Position; 4]> {
        let mut steps = SmallVec::new();
        for direction in Direction::ALL {
            if let Some(neighbor) = self.position.step(direction) {
                if self.board.can_enter(neighbor) {
                    steps.push(neighbor);
                }
            }
        }
        steps
    }
}

impl std::fmt::Display for TraceState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.board)
    }
}
