//! Generic chain node with a fixed number of directional connections.
//!
//! [`Node`] owns one value and `N` connection slots. A slot holds either
//! `K::NONE` (no neighbor) or the key of another node in the same
//! [`Arena`](crate::Arena). The node itself never owns its neighbors; the
//! container owning the arena manages every node's lifetime.
//!
//! Slot conventions: one-connection chains use slot [`NEXT`]; two-connection
//! chains use [`PARENT`] and [`CHILD`]. The two-connection shape gets named
//! accessors ([`Node::parent`], [`Node::set_child`], ...) on `Node<T, 2, K>`
//! directly: a compile-time specialization rather than a subtype.
//!
//! # Example
//!
//! ```
//! use linkage::{Arena, ChainNode, Node, NEXT};
//!
//! let mut arena: Arena<ChainNode<&str>> = Arena::new();
//!
//! let tail = arena.insert(Node::new("tail"));
//! let mut head = Node::new("head");
//! head.set_link(NEXT, tail);
//! let head = arena.insert(head);
//!
//! assert_eq!(arena.get(head).unwrap().link(NEXT), Some(tail));
//! assert_eq!(arena.get(tail).unwrap().link(NEXT), None);
//! ```

use std::fmt;

use crate::{Arena, Array, Key};

/// Slot index of the "next" connection in a one-connection chain.
pub const NEXT: usize = 0;

/// Slot index of the parent connection in a two-connection chain.
///
/// Parent links point toward the front of a chain and are never owning.
pub const PARENT: usize = 0;

/// Slot index of the child connection in a two-connection chain.
pub const CHILD: usize = 1;

/// A node in a one-connection (forward-only) chain.
pub type ChainNode<T, K = u32> = Node<T, 1, K>;

/// A node in a two-connection (bidirectional) chain.
pub type BidiNode<T, K = u32> = Node<T, 2, K>;

/// One owned value plus `N` connection slots.
///
/// Connections are keys into the arena that owns the node, so a node can be
/// moved, cloned, or dropped without touching its neighbors. Reading an
/// out-of-range slot yields "no neighbor" rather than panicking (writes do
/// panic); see [`Node::link`].
pub struct Node<T, const N: usize, K: Key = u32> {
    value: T,
    links: Array<K, N>,
}

impl<T, const N: usize, K: Key> Node<T, N, K> {
    /// Creates a node with all connection slots empty.
    #[inline]
    pub fn new(value: T) -> Self {
        Self {
            value,
            links: Array::filled(K::NONE),
        }
    }

    /// Returns a reference to the stored value.
    #[inline]
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Returns a mutable reference to the stored value.
    #[inline]
    pub fn value_mut(&mut self) -> &mut T {
        &mut self.value
    }

    /// Consumes the node, returning its value.
    #[inline]
    pub fn into_value(self) -> T {
        self.value
    }

    /// Returns the neighbor in `slot`.
    ///
    /// Returns `None` when the slot is unset or `slot >= N`; an out-of-range
    /// read means "no neighbor", not an error.
    #[inline]
    pub fn link(&self, slot: usize) -> Option<K> {
        match self.links.get(slot) {
            Some(key) if key.is_some() => Some(*key),
            _ => None,
        }
    }

    /// Sets the neighbor in `slot`, replacing any previous link.
    ///
    /// Pass `K::NONE` to clear the slot. No ownership is transferred; the
    /// owning container manages node lifetimes.
    ///
    /// # Panics
    ///
    /// Panics if `slot >= N`.
    #[inline]
    pub fn set_link(&mut self, slot: usize, key: K) {
        self.links[slot] = key;
    }

    /// Recursively clones the node at `key` and everything reachable through
    /// its connections, re-linking the clones to each other.
    ///
    /// The clone of `key` is inserted into `dst` and its key returned. Slot
    /// `exclude` is skipped during the walk, which keeps the recursion from
    /// turning back toward the caller in a bidirectional chain; when
    /// `exclude` is set, each cloned neighbor's excluded slot is re-pointed
    /// at the node that cloned it, restoring the back-links among the clones.
    ///
    /// Recursion depth is proportional to the longest connected path.
    ///
    /// # Panics
    ///
    /// Panics if `key` (or any reachable link) is not live in `src`.
    pub fn copy_connected(
        src: &Arena<Self, K>,
        key: K,
        exclude: Option<usize>,
        dst: &mut Arena<Self, K>,
    ) -> K
    where
        T: Clone,
    {
        let value = src.get(key).expect("invalid node key").value().clone();
        let clone = dst.insert(Self::new(value));

        for slot in 0..N {
            if Some(slot) == exclude {
                continue;
            }
            let neighbor = src.get(key).expect("invalid node key").link(slot);
            if let Some(neighbor) = neighbor {
                let copied = Self::copy_connected(src, neighbor, exclude, dst);
                dst.get_mut(clone).expect("clone is live").set_link(slot, copied);
                if let Some(back) = exclude {
                    dst.get_mut(copied).expect("clone is live").set_link(back, clone);
                }
            }
        }

        clone
    }
}

impl<T: Default, const N: usize, K: Key> Default for Node<T, N, K> {
    /// Creates a node holding `T::default()` with all slots empty.
    fn default() -> Self {
        Self::new(T::default())
    }
}

// =============================================================================
// Two-connection accessors
// =============================================================================

impl<T, K: Key> Node<T, 2, K> {
    /// Returns the parent link, if set.
    #[inline]
    pub fn parent(&self) -> Option<K> {
        self.link(PARENT)
    }

    /// Returns the child link, if set.
    #[inline]
    pub fn child(&self) -> Option<K> {
        self.link(CHILD)
    }

    /// Sets `this`'s child slot to `child`.
    ///
    /// With `fully_connect`, also points `child`'s parent slot back at
    /// `this`, maintaining the bidirectional invariant in one call. Plain
    /// calls are for callers that finish wiring the other side themselves.
    ///
    /// # Panics
    ///
    /// Panics if `this` (or, when back-linking, `child`) is not live.
    #[inline]
    pub fn set_child(arena: &mut Arena<Self, K>, this: K, child: K, fully_connect: bool) {
        arena
            .get_mut(this)
            .expect("invalid node key")
            .set_link(CHILD, child);
        if fully_connect && child.is_some() {
            arena
                .get_mut(child)
                .expect("invalid child key")
                .set_link(PARENT, this);
        }
    }

    /// Sets `this`'s parent slot to `parent`.
    ///
    /// With `fully_connect`, also points `parent`'s child slot back at
    /// `this`. Mirror of [`Node::set_child`].
    ///
    /// # Panics
    ///
    /// Panics if `this` (or, when back-linking, `parent`) is not live.
    #[inline]
    pub fn set_parent(arena: &mut Arena<Self, K>, this: K, parent: K, fully_connect: bool) {
        arena
            .get_mut(this)
            .expect("invalid node key")
            .set_link(PARENT, parent);
        if fully_connect && parent.is_some() {
            arena
                .get_mut(parent)
                .expect("invalid parent key")
                .set_link(CHILD, this);
        }
    }
}

impl<T: fmt::Debug, const N: usize, K: Key> fmt::Debug for Node<T, N, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("value", &self.value)
            .finish_non_exhaustive()
    }
}
