use std::cmp::Ordering;
use std::fmt::{self, Debug, Formatter};
use std::mem;

use super::{CursorMut, Iter, Link, Node, NodePtr, VisitorId};

/// An unbalanced binary search tree ordered by a comparator injected at construction. See also:
/// [`CursorMut`] for traversal with safe in-place removal.
///
/// # Ordering
/// The comparator must be a strict total order and must not change behaviour for the lifetime of
/// the tree. Values comparing [`Less`](Ordering::Less) go into left subtrees; values comparing
/// [`Equal`](Ordering::Equal) or [`Greater`](Ordering::Greater) go right, so duplicates are kept
/// and appear adjacent in an in-order traversal.
///
/// # Time Complexity
/// With `n` the number of values and `h` the height of the tree — `O(log n)` on random input but
/// `O(n)` after adversarial (for example, sorted) insertion, because nothing rebalances:
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `insert` | `O(h)` |
/// | `find` / `find_by` | `O(h)` |
/// | `remove` | `O(h)` |
/// | `pop_first/last` | `O(h)` |
/// | `clear` | `O(n + h)` |
///
/// Every operation is total: removing or looking up an absent value reports the absence through
/// its return value and leaves the tree unchanged.
pub struct Tree<T, C = fn(&T, &T) -> Ordering> {
    pub(crate) root: Link<T>,
    pub(crate) len: usize,
    pub(crate) cmp: C,
    pub(crate) last_cursor: u64,
}

impl<T: Ord> Tree<T> {
    /// Creates an empty Tree ordered by [`Ord`].
    pub fn new() -> Tree<T> {
        Tree::with_comparator(T::cmp)
    }
}

impl<T, C> Tree<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    /// Creates an empty Tree ordered by the provided comparator. The comparator is fixed for the
    /// tree's whole lifetime.
    pub const fn with_comparator(cmp: C) -> Tree<T, C> {
        Tree {
            root: None,
            len: 0,
            cmp,
            last_cursor: 0,
        }
    }

    /// Inserts the provided value as a new leaf, descending from the root by the comparator.
    /// Never rebalances.
    pub fn insert(&mut self, value: T) {
        let mut parent = None;
        let mut went_left = false;
        let mut curr = self.root;

        while let Some(node) = curr {
            went_left = (self.cmp)(&value, node.value()) == Ordering::Less;
            parent = Some(node);
            curr = if went_left { *node.left() } else { *node.right() };
        }

        let node = NodePtr::from_node(Node {
            value,
            left: None,
            right: None,
            parent,
            visitor: None,
        });

        match parent {
            None => self.root = Some(node),
            Some(parent) if went_left => *parent.left_mut() = Some(node),
            Some(parent) => *parent.right_mut() = Some(node),
        }

        self.len += 1;
    }

    /// Returns a reference to the first value the comparator reports as equal to `value`, if any.
    pub fn find(&self, value: &T) -> Option<&T> {
        Some(self.find_node(value)?.value())
    }

    /// Returns true if the comparator reports some stored value as equal to `value`.
    pub fn contains(&self, value: &T) -> bool {
        self.find_node(value).is_some()
    }

    /// Removes the first value the comparator reports as equal to `value` and returns it.
    /// Removing an absent value is a no-op returning [`None`].
    pub fn remove(&mut self, value: &T) -> Option<T> {
        let node = self.find_node(value)?;
        Some(self.detach(node))
    }

    fn find_node(&self, value: &T) -> Link<T> {
        let mut curr = self.root;
        while let Some(node) = curr {
            curr = match (self.cmp)(value, node.value()) {
                Ordering::Less => *node.left(),
                Ordering::Greater => *node.right(),
                Ordering::Equal => return Some(node),
            };
        }
        None
    }
}

impl<T, C> Tree<T, C> {
    /// Returns the number of values in the Tree.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the Tree contains no values.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Looks a value up by an arbitrary key type, without constructing a full `T`. The `search`
    /// predicate receives the key and a candidate value and must agree with the tree's own
    /// comparator about which subtree to descend into — if it doesn't, present values are
    /// silently missed.
    pub fn find_by<K>(&self, key: &K, search: impl Fn(&K, &T) -> Ordering) -> Option<&T> {
        let mut curr = self.root;
        while let Some(node) = curr {
            curr = match search(key, node.value()) {
                Ordering::Less => *node.left(),
                Ordering::Greater => *node.right(),
                Ordering::Equal => return Some(node.value()),
            };
        }
        None
    }

    /// Removes and returns the smallest value, if the Tree isn't empty.
    pub fn pop_first(&mut self) -> Option<T> {
        let first = self.root?.leftmost();
        Some(self.detach(first))
    }

    /// Removes and returns the largest value, if the Tree isn't empty.
    pub fn pop_last(&mut self) -> Option<T> {
        let last = self.root?.rightmost();
        Some(self.detach(last))
    }

    /// Removes every value by detaching the root until none remains.
    pub fn clear(&mut self) {
        while let Some(root) = self.root {
            self.detach(root);
        }
    }

    /// Returns an in-order iterator over the values.
    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    /// Returns a traversal cursor positioned on the smallest value, or already finished if the
    /// Tree is empty. Each cursor gets a fresh visitor identity, so marks left on the nodes by
    /// earlier cursors are ignored rather than cleaned up.
    pub fn cursor_mut(&mut self) -> CursorMut<'_, T, C> {
        self.last_cursor += 1;
        let id = VisitorId(self.last_cursor);
        CursorMut::new(self, id)
    }
}

impl<T, C> Tree<T, C> {
    /// The structural removal primitive: detaches `node` from the tree and returns its value.
    /// Every removal path funnels through here.
    ///
    /// Three cases, in the textbook shape:
    /// 1. a leaf is cut off its parent (or the root cleared);
    /// 2. a node with one child has that child spliced into its place;
    /// 3. a node with two children has its in-order successor — the leftmost node of the right
    ///    subtree, which necessarily falls into case 1 or 2 — spliced out instead, and the
    ///    successor's value moved into the node. The node's allocation survives holding the
    ///    successor value; the successor's allocation is freed.
    ///
    /// Exactly one node is freed and the length decremented exactly once per call.
    ///
    /// `node` must be an element of this tree.
    pub(crate) fn detach(&mut self, node: NodePtr<T>) -> T {
        match (*node.left(), *node.right()) {
            (Some(_), Some(right)) => {
                let succ = right.leftmost();
                // The successor has no left child, so its right child (if any) takes its slot.
                self.replace_in_parent(succ, *succ.parent(), *succ.right());
                let succ_node = succ.take_node();
                self.len -= 1;

                let mut node = node;
                mem::replace(node.value_mut(), succ_node.value)
            },
            (child, None) | (None, child) => {
                self.replace_in_parent(node, *node.parent(), child);
                let node = node.take_node();
                self.len -= 1;

                node.value
            },
        }
    }

    /// Redirects the link that points at `node` (its parent's child slot, or the root) to
    /// `replacement`, reparenting the replacement.
    fn replace_in_parent(&mut self, node: NodePtr<T>, parent: Link<T>, replacement: Link<T>) {
        match parent {
            None => self.root = replacement,
            Some(parent) if *parent.left() == Some(node) => *parent.left_mut() = replacement,
            Some(parent) => *parent.right_mut() = replacement,
        }

        if let Some(replacement) = replacement {
            *replacement.parent_mut() = parent;
        }
    }

    #[cfg(test)]
    pub(crate) fn assert_structure(&self) {
        fn check<T>(node: NodePtr<T>, parent: Link<T>, count: &mut usize) {
            assert!(
                *node.parent() == parent,
                "a node's parent link must point at the node that owns it"
            );
            *count += 1;
            if let Some(left) = *node.left() {
                check(left, Some(node), count);
            }
            if let Some(right) = *node.right() {
                check(right, Some(node), count);
            }
        }

        let mut count = 0;
        if let Some(root) = self.root {
            check(root, None, &mut count);
        }
        assert_eq!(self.len, count, "the stored length must match the node count");
    }
}

impl<T: Ord> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C> Drop for Tree<T, C> {
    fn drop(&mut self) {
        self.clear();
    }
}

// SAFETY: A Tree owns its values exactly as a Box does; the raw links never alias across threads
// because every access goes through the single Tree.
unsafe impl<T: Send, C: Send> Send for Tree<T, C> {}
// SAFETY: As above; shared access hands out only shared references.
unsafe impl<T: Sync, C: Sync> Sync for Tree<T, C> {}

impl<T: Ord> FromIterator<T> for Tree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Tree::new();
        tree.extend(iter);
        tree
    }
}

impl<T, C> Extend<T> for Tree<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.insert(item);
        }
    }
}

impl<T: Debug, C> Debug for Tree<T, C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree")
            .field("in_order", &crate::util::fmt::DebugEntries(|| self.iter()))
            .field("len", &self.len)
            .finish()
    }
}
