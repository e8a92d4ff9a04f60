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

//! # Viaduct Collections
//!
//! Indexed, order-preserving containers for the Viaduct tracing ecosystem.
//! The crate centers on one contract, [`IndexedList`], with three
//! interchangeable backings that differ only in their complexity profile:
//!
//! - [`ArrayList`]: a contiguous growable buffer with amortized O(1) rear
//!   insertion and O(n) shifts at the front.
//! - [`SinglyLinkedList`]: a forward-only chain of slab-allocated nodes with
//!   O(1) prepend and O(1) append through a maintained tail index.
//! - [`DoublyLinkedList`]: adds a backward link so indexed access can walk
//!   from whichever end is nearer, and supports backward iteration and
//!   cursor-side insertion.
//!
//! ## Versioned cursors
//!
//! Every list carries a structural version counter that increments on each
//! mutation. A [`ListCursor`] holds no borrow of its list; instead it
//! captures the version at creation and re-validates it on every operation,
//! so use of a stale cursor is reported as a checked
//! [`ListError::ConcurrentModification`] rather than silently corrupting the
//! traversal. Removal through the cursor updates both version counters
//! together and keeps the cursor usable.
//!
//! Borrow-checked iteration (`iter()` on each backing) is also available and
//! needs no version bookkeeping: the borrow checker statically rules out
//! mutation for that form.

pub mod array;
pub mod doubly;
pub mod error;
pub mod list;
pub mod singly;

mod slab;

pub use array::ArrayList;
pub use doubly::DoublyLinkedList;
pub use error::ListError;
pub use list::{IndexedList, ListCursor};
pub use singly::SinglyLinkedList;
