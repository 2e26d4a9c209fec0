//! Generic containers over arena-backed node chains.
//!
//! This crate provides a small family of containers sharing one ownership
//! discipline: node-based structures (linked lists, stack, queue) are built
//! from a single generic [`Node`] with a configurable number of directional
//! connections, stored in a growable [`Arena`] addressed by stable keys. A
//! growable [`List`] with fixed-increment growth and a bounds-checked
//! [`Array`] round out the set.
//!
//! # Design Philosophy
//!
//! Pointer-linked nodes make ownership ambiguous: in a doubly-linked chain,
//! which side owns the node, parent or child? This crate sidesteps the
//! question by separating storage from structure:
//!
//! ```text
//! Arena (slab)          - owns every node, provides stable keys
//! Node links            - plain keys, never owning
//! Container (list, ...) - coordinates keys: first, last, count
//! ```
//!
//! Benefits:
//! - **Single owner**: dropping a container drops its arena, releasing every
//!   node exactly once, with no leaks, no double frees and no unsafe pointer walks
//! - **Cheap back-references**: parent links are keys like any other, with
//!   no reference-counting cycles to break
//! - **Structural deep copy**: cloning a container clones its nodes into a
//!   fresh arena and re-links the clones; copies never alias their source
//!
//! # Containers
//!
//! | Container | Shape | Key operations |
//! |-----------|-------|----------------|
//! | [`List`] | contiguous buffer | add, insert, ordered/cyclic removal |
//! | [`SinglyLinkedList`] | 1-connection chain | O(1) append/prepend, O(index) lookup |
//! | [`DoublyLinkedList`] | 2-connection chain | O(1) append/prepend, nearest-end lookup |
//! | [`Stack`] | 1-connection chain | O(1) push/pop/peek |
//! | [`Queue`] | 1-connection chain | O(1) enqueue/dequeue/peek |
//! | [`Array`] | fixed `[T; N]` | bounds-checked indexing |
//!
//! # Quick Start
//!
//! ```
//! use linkage::{DoublyLinkedList, List};
//!
//! // Growable list: capacity 5, grows by 5 when full
//! let mut list = List::with_capacity(5, 5);
//! for i in 0..6 {
//!     list.add(i);
//! }
//! assert_eq!((list.len(), list.capacity()), (6, 10));
//!
//! // Swap-with-last removal trades order for O(1)
//! list.remove_at(0, false);
//! assert_eq!(list[0], 5);
//!
//! // Doubly-linked list: indexed access walks from the nearer end
//! let mut chain: DoublyLinkedList<i32> = (1..=3).collect();
//! chain.insert(4, 2);
//! assert_eq!(chain.iter().copied().collect::<Vec<_>>(), vec![1, 2, 4, 3]);
//! ```
//!
//! # Lookup Conventions
//!
//! `index_of` returns `len()` when no element matches (one past the last
//! valid index), so callers compare against `len()` to detect absence. The
//! `position` methods are the `Option`-returning form of the same lookup.
//!
//! # Error Model
//!
//! Precondition violations (out-of-bounds index, uninitialized [`List`],
//! pop/peek on an empty structure) panic; they are caller bugs, not
//! recoverable states. "Not found" outcomes are ordinary values: sentinel
//! index, `Option`, or `bool`.
//!
//! # Concurrency
//!
//! None. Containers are single-threaded values; share them across threads by
//! moving them (they are `Send` when `T` is).

#![warn(missing_docs)]

pub mod arena;
pub mod array;
pub mod doubly;
pub mod key;
pub mod list;
pub mod node;
pub mod queue;
pub mod singly;
pub mod stack;

pub use arena::Arena;
pub use array::Array;
pub use doubly::DoublyLinkedList;
pub use key::Key;
pub use list::List;
pub use node::{BidiNode, ChainNode, Node, CHILD, NEXT, PARENT};
pub use queue::Queue;
pub use singly::SinglyLinkedList;
pub use stack::Stack;
