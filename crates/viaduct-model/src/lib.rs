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

//! # Viaduct Model
//!
//! The circuit-board domain model for the Viaduct tracing ecosystem:
//!
//! - `cell`: the five cell states a board position can hold.
//! - `position`: row/column coordinates and the fixed 4-connected
//!   expansion directions.
//! - `board`: the validated grid, its file loader, and its queries.
//! - `trace`: the immutable per-step trace state that the search engine
//!   expands.
//!
//! A `Board` is validated once at load time; everything downstream may
//! assume exactly one start and one end component and a rectangular grid.

pub mod board;
pub mod cell;
pub mod position;
pub mod trace;

pub use board::{Board, BoardError, OccupiedError};
pub use cell::Cell;
pub use position::{Direction, Position};
pub use trace::TraceState;
