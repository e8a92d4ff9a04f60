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

/// The error type for list and cursor operations.
///
/// Errors are signaled at the point of violation and never recovered
/// internally; callers decide whether a violation is fatal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListError {
    /// An index was outside the valid range for the operation.
    OutOfBounds {
        /// The offending index.
        index: usize,
        /// The list length at the time of the call.
        len: usize,
    },
    /// The operation requires at least one element, but the list is empty.
    Empty,
    /// The target element is not present in the list.
    NotFound,
    /// A cursor was used after the list was structurally modified by
    /// someone other than that cursor.
    ConcurrentModification {
        /// The version the cursor captured.
        expected: u64,
        /// The list's current version.
        actual: u64,
    },
    /// A cursor operation needed a current element (the one most recently
    /// returned), but there is none.
    NoCurrentElement,
}

impl std::fmt::Display for ListError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ListError::OutOfBounds { index, len } => {
                write!(f, "index {} out of bounds for list of length {}", index, len)
            }
            ListError::Empty => write!(f, "operation requires a non-empty list"),
            ListError::NotFound => write!(f, "target element not found in list"),
            ListError::ConcurrentModification { expected, actual } => write!(
                f,
                "list was modified during cursor traversal (cursor version {}, list version {})",
                expected, actual
            ),
            ListError::NoCurrentElement => {
                write!(f, "cursor has no current element to operate on")
            }
        }
    }
}

impl std::error::Error for ListError {}
