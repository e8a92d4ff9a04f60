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

//! # Frontier State Store
//!
//! [`StateStore`] adapts one [`IndexedList`] into the search frontier,
//! exposing exactly two disciplines chosen once at construction:
//!
//! - [`Discipline::Lifo`]: `store` prepends and `retrieve` takes the
//!   front, making it a stack and the exploration depth-first.
//! - [`Discipline::Fifo`]: `store` appends and `retrieve` takes the
//!   front, making it a queue and the exploration breadth-first.
//!
//! No other discipline is supported, and the discipline cannot change
//! after construction.

use std::marker::PhantomData;
use viaduct_collections::IndexedList;

/// The retrieval discipline of a [`StateStore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Discipline {
    /// Last-in-first-out: depth-first exploration.
    Lifo,
    /// First-in-first-out: breadth-first exploration.
    Fifo,
}

impl std::fmt::Display for Discipline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Discipline::Lifo => write!(f, "LIFO"),
            Discipline::Fifo => write!(f, "FIFO"),
        }
    }
}

/// A frontier over one backing list with a fixed discipline.
#[derive(Debug, Clone)]
pub struct StateStore<T, L> {
    list: L,
    discipline: Discipline,
    _marker: PhantomData<T>,
}

impl<T, L> StateStore<T, L>
where
    T: PartialEq,
    L: IndexedList<T>,
{
    /// Creates a LIFO (stack) store over `list`.
    #[inline]
    pub fn stack(list: L) -> Self {
        Self::with_discipline(Discipline::Lifo, list)
    }

    /// Creates a FIFO (queue) store over `list`.
    #[inline]
    pub fn queue(list: L) -> Self {
        Self::with_discipline(Discipline::Fifo, list)
    }

    /// Creates a store with the given discipline over `list`.
    #[inline]
    pub fn with_discipline(discipline: Discipline, list: L) -> Self {
        Self {
            list,
            discipline,
            _marker: PhantomData,
        }
    }

    /// Returns the discipline fixed at construction.
    #[inline]
    pub fn discipline(&self) -> Discipline {
        self.discipline
    }

    /// Adds an item to the frontier.
    #[inline]
    pub fn store(&mut self, item: T) {
        match self.discipline {
            Discipline::Lifo => self.list.add_to_front(item),
            Discipline::Fifo => self.list.add_to_rear(item),
        }
    }

    /// Removes and returns the next item, or `None` when empty.
    #[inline]
    pub fn retrieve(&mut self) -> Option<T> {
        self.list.remove_first().ok()
    }

    /// Returns `true` if the frontier holds no items.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Returns the number of pending items.
    #[inline]
    pub fn len(&self) -> usize {
        self.list.len()
    }
}

#[cfg(test)]
mod tests {
    use super::{Discipline, StateStore};
    use viaduct_collections::{ArrayList, DoublyLinkedList, SinglyLinkedList};

    #[test]
    fn test_lifo_retrieves_in_reverse_store_order() {
        let mut store = StateStore::stack(DoublyLinkedList::new());
        assert_eq!(store.discipline(), Discipline::Lifo);
        store.store(1);
        store.store(2);
        store.store(3);
        assert_eq!(store.len(), 3);
        assert_eq!(store.retrieve(), Some(3));
        assert_eq!(store.retrieve(), Some(2));
        assert_eq!(store.retrieve(), Some(1));
        assert_eq!(store.retrieve(), None);
        assert!(store.is_empty());
    }

    #[test]
    fn test_fifo_retrieves_in_store_order() {
        let mut store = StateStore::queue(DoublyLinkedList::new());
        assert_eq!(store.discipline(), Discipline::Fifo);
        store.store(1);
        store.store(2);
        store.store(3);
        assert_eq!(store.retrieve(), Some(1));
        assert_eq!(store.retrieve(), Some(2));
        assert_eq!(store.retrieve(), Some(3));
        assert_eq!(store.retrieve(), None);
    }

    #[test]
    fn test_disciplines_agree_across_backings() {
        let mut array = StateStore::stack(ArrayList::new());
        let mut singly = StateStore::stack(SinglyLinkedList::new());
        for i in 0..5 {
            array.store(i);
            singly.store(i);
        }
        for _ in 0..5 {
            assert_eq!(array.retrieve(), singly.retrieve());
        }
    }

    #[test]
    fn test_interleaved_store_retrieve() {
        let mut store = StateStore::queue(SinglyLinkedList::new());
        store.store('a');
        store.store('b');
        assert_eq!(store.retrieve(), Some('a'));
        store.store('c');
        assert_eq!(store.retrieve(), Some('b'));
        assert_eq!(store.retrieve(), Some('c'));
        assert_eq!(store.retrieve(), None);
    }

    #[test]
    fn test_display_discipline() {
        assert_eq!(format!("{}", Discipline::Lifo), "LIFO");
        assert_eq!(format!("{}", Discipline::Fifo), "FIFO");
    }
}
