//! Property tests for the container family.
//!
//! Each property drives a container with generated operation sequences and
//! checks it against a `std` model (`Vec`, `VecDeque`) or against the
//! container's documented invariants.

use std::collections::VecDeque;

use proptest::prelude::*;

use linkage::{DoublyLinkedList, List, Queue, SinglyLinkedList, Stack};

proptest! {
    #[test]
    fn list_capacity_follows_growth_schedule(
        start in 0usize..32,
        growth in 0usize..8,
        values in prop::collection::vec(any::<i32>(), 0..200),
    ) {
        let mut list = List::new();
        list.init(start, growth);
        let g = growth.max(1);

        let mut previous = list.capacity();
        for &v in &values {
            list.add(v);
            let cap = list.capacity();
            // Capacity only grows, in exact increments of g from start
            prop_assert!(cap >= previous);
            prop_assert_eq!((cap - start) % g, 0);
            prop_assert!(list.len() <= cap);
            previous = cap;
        }
    }

    #[test]
    fn list_ordered_removal_matches_vec(
        values in prop::collection::vec(any::<i32>(), 1..64),
        picks in prop::collection::vec(any::<usize>(), 1..32),
    ) {
        let mut list = List::with_capacity(4, 3);
        let mut model = Vec::new();
        for &v in &values {
            list.add(v);
            model.push(v);
        }

        for &pick in &picks {
            if model.is_empty() {
                break;
            }
            let index = pick % model.len();
            let expected = model.remove(index);
            prop_assert_eq!(list.remove_at(index, true), expected);
            prop_assert_eq!(list.as_slice(), model.as_slice());
        }
    }

    #[test]
    fn list_cyclic_removal_matches_swap_remove(
        values in prop::collection::vec(any::<i32>(), 1..64),
        picks in prop::collection::vec(any::<usize>(), 1..32),
    ) {
        let mut list = List::with_capacity(4, 3);
        let mut model = Vec::new();
        for &v in &values {
            list.add(v);
            model.push(v);
        }

        for &pick in &picks {
            if model.is_empty() {
                break;
            }
            let index = pick % model.len();
            // Vec::swap_remove is exactly "move the last element into the slot"
            let expected = model.swap_remove(index);
            prop_assert_eq!(list.remove_at(index, false), expected);
            prop_assert_eq!(list.as_slice(), model.as_slice());
        }
    }

    #[test]
    fn index_of_absent_is_len(values in prop::collection::vec(0i32..100, 0..32)) {
        let absent = 1000;

        let mut list = List::with_capacity(8, 8);
        let mut singly: SinglyLinkedList<i32> = SinglyLinkedList::new();
        let mut doubly: DoublyLinkedList<i32> = DoublyLinkedList::new();
        for &v in &values {
            list.add(v);
            singly.add(v);
            doubly.add(v);
        }

        prop_assert_eq!(list.index_of(&absent), list.len());
        prop_assert_eq!(singly.index_of(&absent), singly.len());
        prop_assert_eq!(doubly.index_of(&absent), doubly.len());

        // Present values report their first occurrence
        if let Some(&first) = values.first() {
            let expected = values.iter().position(|&v| v == first).unwrap();
            prop_assert_eq!(list.index_of(&first), expected);
            prop_assert_eq!(singly.index_of(&first), expected);
            prop_assert_eq!(doubly.index_of(&first), expected);
        }
    }

    #[test]
    fn doubly_list_matches_vec_model(
        ops in prop::collection::vec((0u8..4, any::<i32>(), any::<usize>()), 1..64),
    ) {
        let mut list: DoublyLinkedList<i32> = DoublyLinkedList::new();
        let mut model = Vec::new();

        for &(op, value, raw_index) in &ops {
            match op {
                0 => {
                    list.add(value);
                    model.push(value);
                }
                1 => {
                    list.add_first(value);
                    model.insert(0, value);
                }
                2 if !model.is_empty() => {
                    let index = raw_index % model.len();
                    list.insert(value, index);
                    model.insert(index, value);
                }
                3 if !model.is_empty() => {
                    let index = raw_index % model.len();
                    prop_assert_eq!(list.remove_at(index), model.remove(index));
                }
                _ => {}
            }
            prop_assert_eq!(list.len(), model.len());
        }

        let forward: Vec<i32> = list.iter().copied().collect();
        prop_assert_eq!(&forward, &model);

        // Parent links mirror the child links exactly
        let mut backward: Vec<i32> = list.iter().rev().copied().collect();
        backward.reverse();
        prop_assert_eq!(&backward, &model);
    }

    #[test]
    fn singly_list_matches_vec_model(
        ops in prop::collection::vec((0u8..3, any::<i32>(), any::<usize>()), 1..64),
    ) {
        let mut list: SinglyLinkedList<i32> = SinglyLinkedList::new();
        let mut model = Vec::new();

        for &(op, value, raw_index) in &ops {
            match op {
                0 => {
                    list.add(value);
                    model.push(value);
                }
                1 => {
                    list.add_first(value);
                    model.insert(0, value);
                }
                2 if !model.is_empty() => {
                    let index = raw_index % model.len();
                    prop_assert_eq!(list.remove_at(index), model.remove(index));
                }
                _ => {}
            }
        }

        let collected: Vec<i32> = list.iter().copied().collect();
        prop_assert_eq!(&collected, &model);
    }

    #[test]
    fn clone_then_mutate_leaves_original_untouched(
        values in prop::collection::vec(any::<i32>(), 1..32),
    ) {
        let mut doubly: DoublyLinkedList<i32> = DoublyLinkedList::new();
        let mut singly: SinglyLinkedList<i32> = SinglyLinkedList::new();
        for &v in &values {
            doubly.add(v);
            singly.add(v);
        }

        let mut doubly_copy = doubly.clone();
        let mut singly_copy = singly.clone();
        doubly_copy.remove_at(0);
        doubly_copy.add(12345);
        singly_copy.remove_at(0);
        singly_copy.add(12345);

        let original: Vec<i32> = doubly.iter().copied().collect();
        prop_assert_eq!(&original, &values);
        let original: Vec<i32> = singly.iter().copied().collect();
        prop_assert_eq!(&original, &values);
    }

    #[test]
    fn stack_matches_vec_model(ops in prop::collection::vec((any::<bool>(), any::<i32>()), 1..64)) {
        let mut stack: Stack<i32> = Stack::new();
        let mut model = Vec::new();

        for &(push, value) in &ops {
            if push || model.is_empty() {
                stack.push(value);
                model.push(value);
            } else {
                prop_assert_eq!(stack.pop(), model.pop().unwrap());
            }
            prop_assert_eq!(stack.len(), model.len());
            if let Some(&top) = model.last() {
                prop_assert_eq!(*stack.peek(), top);
            }
        }
    }

    #[test]
    fn queue_matches_deque_model(ops in prop::collection::vec((any::<bool>(), any::<i32>()), 1..64)) {
        let mut queue: Queue<i32> = Queue::new();
        let mut model = VecDeque::new();

        for &(enqueue, value) in &ops {
            if enqueue || model.is_empty() {
                queue.enqueue(value);
                model.push_back(value);
            } else {
                prop_assert_eq!(queue.dequeue(), model.pop_front().unwrap());
            }
            prop_assert_eq!(queue.len(), model.len());
            if let Some(&front) = model.front() {
                prop_assert_eq!(*queue.peek(), front);
            }
        }
    }
}
