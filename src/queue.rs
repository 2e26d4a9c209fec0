//! First in, first out queue over a private node chain.
//!
//! [`Queue`] keeps a one-connection chain with a cached tail: enqueue appends
//! at the tail, dequeue removes at the head, both O(1). Dequeuing or peeking
//! an empty queue is a precondition violation and panics; check
//! [`Queue::is_empty`] first.
//!
//! # Example
//!
//! ```
//! use linkage::Queue;
//!
//! let mut queue: Queue<i32> = Queue::new();
//! queue.enqueue(1);
//! queue.enqueue(2);
//! queue.enqueue(3);
//!
//! assert_eq!(queue.dequeue(), 1);
//! assert_eq!(*queue.peek(), 2);
//! ```

use std::fmt;

use crate::node::NEXT;
use crate::{Arena, ChainNode, Key, Node};

/// A FIFO queue with owned nodes and a cached tail.
pub struct Queue<T, K: Key = u32> {
    arena: Arena<ChainNode<T, K>, K>,
    first: K,
    last: K,
    len: usize,
}

impl<T, K: Key> Queue<T, K> {
    /// Creates an empty queue.
    #[inline]
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            first: K::NONE,
            last: K::NONE,
            len: 0,
        }
    }

    /// Creates an empty queue with room for `capacity` nodes before the
    /// arena reallocates.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            arena: Arena::with_capacity(capacity),
            first: K::NONE,
            last: K::NONE,
            len: 0,
        }
    }

    /// Returns the number of elements.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the queue holds no elements.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` if the queue holds at least one element.
    #[inline]
    pub const fn has_more(&self) -> bool {
        self.len != 0
    }

    /// Appends a value at the back of the queue. O(1) via the cached tail.
    pub fn enqueue(&mut self, value: T) {
        let key = self.arena.insert(Node::new(value));
        if self.first.is_none() {
            self.first = key;
        } else {
            self.arena
                .get_mut(self.last)
                .expect("tail key is live")
                .set_link(NEXT, key);
        }
        self.last = key;
        self.len += 1;
    }

    /// Removes and returns the front value.
    ///
    /// # Panics
    ///
    /// Panics if the queue is empty.
    pub fn dequeue(&mut self) -> T {
        assert!(self.len != 0, "cannot dequeue from an empty queue");
        let node = self.arena.remove(self.first).expect("head key is live");
        self.first = node.link(NEXT).unwrap_or(K::NONE);
        if self.first.is_none() {
            self.last = K::NONE;
        }
        self.len -= 1;
        node.into_value()
    }

    /// Returns a reference to the front value without removing it.
    ///
    /// # Panics
    ///
    /// Panics if the queue is empty.
    pub fn peek(&self) -> &T {
        assert!(self.len != 0, "cannot peek on an empty queue");
        self.arena.get(self.first).expect("head key is live").value()
    }

    /// Returns `true` if some element equals `value`. O(len).
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        let mut cur = self.first;
        while cur.is_some() {
            let node = self.arena.get(cur).expect("chain key is live");
            if node.value() == value {
                return true;
            }
            cur = node.link(NEXT).unwrap_or(K::NONE);
        }
        false
    }

    /// Frees every node, resetting the queue to empty.
    pub fn clear(&mut self) {
        self.arena.clear();
        self.first = K::NONE;
        self.last = K::NONE;
        self.len = 0;
    }

    fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        let mut cur = self.first;
        std::iter::from_fn(move || {
            if cur.is_none() {
                return None;
            }
            let node = self.arena.get(cur).expect("chain key is live");
            cur = node.link(NEXT).unwrap_or(K::NONE);
            Some(node.value())
        })
    }
}

impl<T, K: Key> Default for Queue<T, K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone, K: Key> Clone for Queue<T, K> {
    /// Structurally clones the chain into a fresh arena, then recomputes the
    /// cached tail by walking the clone.
    fn clone(&self) -> Self {
        if self.len == 0 {
            return Self::new();
        }

        let mut arena = Arena::with_capacity(self.len);
        let first = Node::copy_connected(&self.arena, self.first, None, &mut arena);

        let mut last = first;
        for _ in 1..self.len {
            last = arena
                .get(last)
                .expect("clone is live")
                .link(NEXT)
                .expect("clone chain is complete");
        }

        Self {
            arena,
            first,
            last,
            len: self.len,
        }
    }
}

impl<T: fmt::Debug, K: Key> fmt::Debug for Queue<T, K> {
    /// Formats front to back.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
