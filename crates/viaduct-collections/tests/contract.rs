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

//! Contract tests: one battery run against every backing.
//!
//! All three list implementations must behave identically under the
//! `IndexedList` contract; only their complexity profiles may differ.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use viaduct_collections::{
    ArrayList, DoublyLinkedList, IndexedList, ListCursor, ListError, SinglyLinkedList,
};

fn contents<T, L>(list: &L) -> Vec<T>
where
    T: PartialEq + Clone,
    L: IndexedList<T>,
{
    let mut out = Vec::with_capacity(list.len());
    for i in 0..list.len() {
        out.push(list.get(i).expect("index within len").clone());
    }
    out
}

fn set_get_round_trip<L: IndexedList<i32> + Default>() {
    let mut list = L::default();
    for i in 0..5 {
        list.add_to_rear(i);
    }
    for i in 0..5 {
        let replaced = list.set(i as usize, i * 10).expect("valid index");
        assert_eq!(replaced, i);
        assert_eq!(list.get(i as usize), Ok(&(i * 10)));
    }
}

fn rear_add_remove_last_restores_len<L: IndexedList<i32> + Default>() {
    let mut list = L::default();
    list.add_to_rear(1);
    list.add_to_rear(2);
    let len_before = list.len();
    list.add_to_rear(42);
    assert_eq!(list.remove_last(), Ok(42));
    assert_eq!(list.len(), len_before);
    assert_eq!(contents(&list), vec![1, 2]);
}

fn cursor_invalidated_by_external_mutation<L: IndexedList<i32> + Default>() {
    let mutations: Vec<fn(&mut L)> = vec![
        |l| l.add_to_front(9),
        |l| l.add_to_rear(9),
        |l| {
            l.remove_first().expect("non-empty");
        },
        |l| l.clear(),
    ];
    for mutate in mutations {
        let mut list = L::default();
        list.add_to_rear(1);
        list.add_to_rear(2);
        let mut cursor = list.cursor();
        assert_eq!(cursor.next(&list), Ok(Some(&1)));

        mutate(&mut list);
        assert!(matches!(
            cursor.next(&list),
            Err(ListError::ConcurrentModification { .. })
        ));
        assert!(matches!(
            cursor.remove(&mut list),
            Err(ListError::ConcurrentModification { .. })
        ));
    }
}

fn cursor_remove_is_exempt<L: IndexedList<i32> + Default>() {
    let mut list = L::default();
    for i in 1..=5 {
        list.add_to_rear(i);
    }
    let mut cursor = list.cursor();
    let mut removed = Vec::new();
    // Remove every even element through the cursor; traversal never trips.
    loop {
        let value = match cursor.next(&list).expect("cursor stays valid") {
            Some(v) => *v,
            None => break,
        };
        if value % 2 == 0 {
            removed.push(cursor.remove(&mut list).expect("cursor stays valid"));
        }
    }
    assert_eq!(removed, vec![2, 4]);
    assert_eq!(list.len(), 3);
    assert_eq!(contents(&list), vec![1, 3, 5]);
}

fn cursor_remove_reduces_len_by_one<L: IndexedList<i32> + Default>() {
    let mut list = L::default();
    list.add_to_rear(7);
    list.add_to_rear(8);
    let mut cursor = list.cursor();
    cursor.next(&list).expect("valid").expect("element");
    assert_eq!(cursor.remove(&mut list), Ok(7));
    assert_eq!(list.len(), 1);
}

fn failed_add_after_leaves_list_unchanged<L: IndexedList<i32> + Default>() {
    let mut list = L::default();
    list.add_to_rear(1);
    list.add_to_rear(2);
    let version = list.version();
    assert_eq!(list.add_after(3, &99), Err(ListError::NotFound));
    assert_eq!(list.version(), version);
    assert_eq!(list.len(), 2);
    assert_eq!(contents(&list), vec![1, 2]);
}

fn version_accounting<L: IndexedList<i32> + Default>() {
    let mut list = L::default();
    let v0 = list.version();
    list.add_to_rear(1); // +1
    list.add_to_front(0); // +1
    list.add(2); // +1
    list.insert(1, 5).expect("valid"); // +1
    list.add_after(6, &5).expect("present"); // +1
    assert_eq!(list.version(), v0 + 5);

    // Reads and set leave the counter alone.
    let v = list.version();
    let _ = list.get(0);
    let _ = list.index_of(&2);
    let _ = list.contains(&2);
    let _ = list.first();
    let _ = list.last();
    list.set(0, 10).expect("valid");
    assert_eq!(list.version(), v);

    list.remove_first().expect("non-empty"); // +1
    list.remove_last().expect("non-empty"); // +1
    list.remove(0).expect("valid"); // +1
    list.remove_item(&6).expect("present"); // +1
    list.clear(); // +1
    assert_eq!(list.version(), v + 5);
}

fn empty_list_errors<L: IndexedList<i32> + Default>() {
    let mut list = L::default();
    assert_eq!(list.remove_first(), Err(ListError::Empty));
    assert_eq!(list.remove_last(), Err(ListError::Empty));
    assert_eq!(list.first(), Err(ListError::Empty));
    assert_eq!(list.last(), Err(ListError::Empty));
    assert_eq!(
        list.get(0),
        Err(ListError::OutOfBounds { index: 0, len: 0 })
    );
    assert_eq!(
        list.remove(0),
        Err(ListError::OutOfBounds { index: 0, len: 0 })
    );
    assert_eq!(
        list.set(0, 1),
        Err(ListError::OutOfBounds { index: 0, len: 0 })
    );
}

fn equality_duplicates_hit_first_occurrence<L: IndexedList<i32> + Default>() {
    let mut list = L::default();
    list.add_to_rear(1);
    list.add_to_rear(2);
    list.add_to_rear(1);
    assert_eq!(list.index_of(&1), Some(0));
    assert_eq!(list.remove_item(&1), Ok(1));
    // The later duplicate survives.
    assert_eq!(contents(&list), vec![2, 1]);
}

macro_rules! contract_suite {
    ($module:ident, $list:ty) => {
        mod $module {
            use super::*;

            #[test]
            fn test_set_get_round_trip() {
                set_get_round_trip::<$list>();
            }

            #[test]
            fn test_rear_add_remove_last_restores_len() {
                rear_add_remove_last_restores_len::<$list>();
            }

            #[test]
            fn test_cursor_invalidated_by_external_mutation() {
                cursor_invalidated_by_external_mutation::<$list>();
            }

            #[test]
            fn test_cursor_remove_is_exempt() {
                cursor_remove_is_exempt::<$list>();
            }

            #[test]
            fn test_cursor_remove_reduces_len_by_one() {
                cursor_remove_reduces_len_by_one::<$list>();
            }

            #[test]
            fn test_failed_add_after_leaves_list_unchanged() {
                failed_add_after_leaves_list_unchanged::<$list>();
            }

            #[test]
            fn test_version_accounting() {
                version_accounting::<$list>();
            }

            #[test]
            fn test_empty_list_errors() {
                empty_list_errors::<$list>();
            }

            #[test]
            fn test_equality_duplicates_hit_first_occurrence() {
                equality_duplicates_hit_first_occurrence::<$list>();
            }
        }
    };
}

contract_suite!(array_list, ArrayList<i32>);
contract_suite!(singly_linked, SinglyLinkedList<i32>);
contract_suite!(doubly_linked, DoublyLinkedList<i32>);

/// Drives a backing and a plain `Vec` with the same randomized operation
/// stream and checks they agree after every step.
fn differential<L: IndexedList<i32> + Default>(seed: u64) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut list = L::default();
    let mut model: Vec<i32> = Vec::new();

    for step in 0..500 {
        match rng.gen_range(0..8) {
            0 => {
                list.add_to_front(step);
                model.insert(0, step);
            }
            1 => {
                list.add_to_rear(step);
                model.push(step);
            }
            2 => {
                let index = rng.gen_range(0..=model.len());
                list.insert(index, step).expect("index within bounds");
                model.insert(index, step);
            }
            3 => {
                assert_eq!(list.remove_first().ok(), {
                    if model.is_empty() {
                        None
                    } else {
                        Some(model.remove(0))
                    }
                });
            }
            4 => {
                assert_eq!(list.remove_last().ok(), model.pop());
            }
            5 if !model.is_empty() => {
                let index = rng.gen_range(0..model.len());
                assert_eq!(list.remove(index), Ok(model.remove(index)));
            }
            6 if !model.is_empty() => {
                let index = rng.gen_range(0..model.len());
                assert_eq!(list.set(index, step), Ok(model[index]));
                model[index] = step;
            }
            _ => {
                let target = rng.gen_range(0..600);
                assert_eq!(list.index_of(&target), model.iter().position(|&x| x == target));
            }
        }
        assert_eq!(list.len(), model.len());
    }
    assert_eq!(contents(&list), model);
}

#[test]
fn test_differential_singly_vs_vec() {
    differential::<SinglyLinkedList<i32>>(0x5eed_0001);
}

#[test]
fn test_differential_doubly_vs_vec() {
    differential::<DoublyLinkedList<i32>>(0x5eed_0002);
}

#[test]
fn test_differential_array_vs_vec() {
    differential::<ArrayList<i32>>(0x5eed_0003);
}
