use std::ptr::NonNull;

pub(crate) type Link<T> = Option<NodePtr<T>>;

/// The identity of the cursor that most recently yielded a node. Tags are compared by value, so
/// marks left behind by a finished cursor read as "unvisited" to every later cursor and never
/// need to be scrubbed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct VisitorId(pub u64);

/// A heap-allocated tree node. Each node is exclusively owned by its parent, except the root,
/// which the [`Tree`](super::Tree) owns; `parent` is a non-owning back link. `visitor` is
/// transient traversal state and takes no part in the structural invariants.
pub(crate) struct Node<T> {
    pub value: T,
    pub left: Link<T>,
    pub right: Link<T>,
    pub parent: Link<T>,
    pub visitor: Option<VisitorId>,
}

/// A copyable pointer to a [`Node`]; the tree's analogue of the list's `NodePtr`, with the
/// in-order navigation helpers the iterators are built from.
#[derive(Debug)]
pub(crate) struct NodePtr<T>(NonNull<Node<T>>);

impl<T> NodePtr<T> {
    pub fn from_node(node: Node<T>) -> NodePtr<T> {
        NodePtr(NonNull::from(Box::leak(Box::new(node))))
    }

    /// Reclaims the allocation, returning the node by value. The pointer (and every copy of it)
    /// is dangling afterwards.
    pub fn take_node(self) -> Node<T> {
        // SAFETY: The allocation came from Box::new in from_node and is freed exactly once,
        // because the tree never hands out a node pointer after detaching it.
        unsafe { *Box::from_raw(self.0.as_ptr()) }
    }

    pub const fn value<'a>(&self) -> &'a T {
        // SAFETY: The pointer is valid until take_node and the tree serializes all access.
        unsafe { &self.0.as_ref().value }
    }

    pub const fn value_mut<'a>(&mut self) -> &'a mut T {
        // SAFETY: As for value.
        unsafe { &mut self.0.as_mut().value }
    }

    pub fn left<'a>(&self) -> &'a Link<T> {
        // SAFETY: As for value.
        unsafe { &(*self.0.as_ptr()).left }
    }

    #[allow(clippy::mut_from_ref)]
    pub fn left_mut<'a>(&self) -> &'a mut Link<T> {
        // SAFETY: As for value.
        unsafe { &mut (*self.0.as_ptr()).left }
    }

    pub fn right<'a>(&self) -> &'a Link<T> {
        // SAFETY: As for value.
        unsafe { &(*self.0.as_ptr()).right }
    }

    #[allow(clippy::mut_from_ref)]
    pub fn right_mut<'a>(&self) -> &'a mut Link<T> {
        // SAFETY: As for value.
        unsafe { &mut (*self.0.as_ptr()).right }
    }

    pub fn parent<'a>(&self) -> &'a Link<T> {
        // SAFETY: As for value.
        unsafe { &(*self.0.as_ptr()).parent }
    }

    #[allow(clippy::mut_from_ref)]
    pub fn parent_mut<'a>(&self) -> &'a mut Link<T> {
        // SAFETY: As for value.
        unsafe { &mut (*self.0.as_ptr()).parent }
    }

    pub fn visitor(&self) -> Option<VisitorId> {
        // SAFETY: As for value.
        unsafe { (*self.0.as_ptr()).visitor }
    }

    pub fn set_visitor(&self, visitor: Option<VisitorId>) {
        // SAFETY: As for value.
        unsafe { (*self.0.as_ptr()).visitor = visitor };
    }

    /// The smallest node of this subtree: follow left links to the end.
    pub fn leftmost(self) -> NodePtr<T> {
        let mut node = self;
        while let Some(left) = *node.left() {
            node = left;
        }
        node
    }

    /// The largest node of this subtree: follow right links to the end.
    pub fn rightmost(self) -> NodePtr<T> {
        let mut node = self;
        while let Some(right) = *node.right() {
            node = right;
        }
        node
    }

    /// The next node in ascending order, using only child and parent links: the leftmost node of
    /// the right subtree if there is one, otherwise the first ancestor reached from a left child.
    pub fn successor(self) -> Link<T> {
        if let Some(right) = *self.right() {
            return Some(right.leftmost());
        }
        let mut curr = self;
        while let Some(parent) = *curr.parent() {
            if *parent.left() == Some(curr) {
                return Some(parent);
            }
            curr = parent;
        }
        None
    }

    /// The previous node in ascending order; the mirror of [`successor`](NodePtr::successor).
    pub fn predecessor(self) -> Link<T> {
        if let Some(left) = *self.left() {
            return Some(left.rightmost());
        }
        let mut curr = self;
        while let Some(parent) = *curr.parent() {
            if *parent.right() == Some(curr) {
                return Some(parent);
            }
            curr = parent;
        }
        None
    }
}

impl<T> Clone for NodePtr<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NodePtr<T> {}

impl<T> PartialEq for NodePtr<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}
