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

//! # Indexed List Contract
//!
//! The [`IndexedList`] trait defines an ordered, index-addressable sequence
//! whose positions run `0..len()` and whose insertion order is semantically
//! significant. All backings in this crate implement the trait identically;
//! they differ only in which operations are cheap.
//!
//! ## Structural versioning
//!
//! Each list maintains a monotonically increasing version counter. Every
//! structural mutation (any `add_*`, `insert`, `remove_*`, `remove`, or
//! `clear`) increments it; read-only access never does. `set` replaces an
//! element without changing the sequence's structure and deliberately does
//! NOT increment the counter, so a cursor stays valid across `set`. The
//! policy is uniform across all backings.
//!
//! ## Cursors
//!
//! A [`ListCursor`] is a detached traversal handle: it holds no borrow of
//! its list and instead receives the list as an explicit argument on every
//! call, re-validating the version it captured at creation. This turns
//! use-after-mutation into a checked [`ListError::ConcurrentModification`]
//! result. Removal through the cursor is the one exempt mutation: it bumps
//! the list version and the cursor's captured version together, so the same
//! cursor remains valid for continued traversal.

use crate::error::ListError;

/// An ordered, index-addressable sequence of elements of a single type.
///
/// Invariants: `len()` equals the element count, and index arguments are
/// valid only for `0 <= index < len()` (insertion additionally allows
/// `index == len()`). Equality-based operations locate the first occurrence
/// of the target under `==`.
pub trait IndexedList<T: PartialEq> {
    /// The cursor type for detached, version-checked traversal.
    type Cursor: ListCursor<T, Self>;

    /// Inserts `element` at the front of the list.
    fn add_to_front(&mut self, element: T);

    /// Inserts `element` at the rear of the list.
    fn add_to_rear(&mut self, element: T);

    /// Inserts `element` at the rear of the list. Alias for
    /// [`add_to_rear`](IndexedList::add_to_rear).
    #[inline]
    fn add(&mut self, element: T) {
        self.add_to_rear(element);
    }

    /// Inserts `element` immediately after the first occurrence of
    /// `target`, or reports [`ListError::NotFound`] leaving the list
    /// unchanged.
    fn add_after(&mut self, element: T, target: &T) -> Result<(), ListError>;

    /// Inserts `element` at `index`, shifting later elements one position
    /// toward the rear. `index == len()` appends.
    fn insert(&mut self, index: usize, element: T) -> Result<(), ListError>;

    /// Removes and returns the first element.
    fn remove_first(&mut self) -> Result<T, ListError>;

    /// Removes and returns the last element.
    fn remove_last(&mut self) -> Result<T, ListError>;

    /// Removes and returns the first occurrence of `target`.
    fn remove_item(&mut self, target: &T) -> Result<T, ListError>;

    /// Removes and returns the element at `index`.
    fn remove(&mut self, index: usize) -> Result<T, ListError>;

    /// Replaces the element at `index`, returning the previous element.
    /// Not a structural mutation: the version counter is unchanged.
    fn set(&mut self, index: usize, element: T) -> Result<T, ListError>;

    /// Returns a reference to the element at `index`.
    fn get(&self, index: usize) -> Result<&T, ListError>;

    /// Returns the position of the first occurrence of `target`, if any.
    fn index_of(&self, target: &T) -> Option<usize>;

    /// Returns `true` if `target` occurs in the list.
    #[inline]
    fn contains(&self, target: &T) -> bool {
        self.index_of(target).is_some()
    }

    /// Returns a reference to the first element.
    fn first(&self) -> Result<&T, ListError>;

    /// Returns a reference to the last element.
    fn last(&self) -> Result<&T, ListError>;

    /// Returns the number of elements in the list.
    fn len(&self) -> usize;

    /// Returns `true` if the list holds no elements.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Removes all elements. Structural: increments the version counter.
    fn clear(&mut self);

    /// Returns the current structural version counter.
    fn version(&self) -> u64;

    /// Creates a detached cursor positioned before the first element,
    /// capturing the current version.
    fn cursor(&self) -> Self::Cursor
    where
        Self: Sized;
}

/// A detached, version-checked traversal handle over an [`IndexedList`].
///
/// The cursor owns no borrow; every operation takes the list explicitly and
/// first compares the cursor's captured version against the list's. A
/// mismatch yields [`ListError::ConcurrentModification`].
pub trait ListCursor<T, L: ?Sized> {
    /// Advances past the next element and returns a reference to it, or
    /// `Ok(None)` at the end of the list.
    fn next<'a>(&mut self, list: &'a L) -> Result<Option<&'a T>, ListError>;

    /// Removes the element most recently returned by an advance and returns
    /// it. At most one removal per advance; the cursor (and only this
    /// cursor) remains valid afterwards.
    fn remove(&mut self, list: &mut L) -> Result<T, ListError>;
}
