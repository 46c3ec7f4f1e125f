use std::ptr::NonNull;

pub(crate) type Link<T> = Option<NodePtr<T>>;

/// A heap-allocated list node. The [`List`](super::List) that allocated a node is its sole owner;
/// `prev` and `next` are non-owning links between siblings.
pub(crate) struct Node<T> {
    pub value: T,
    pub prev: Link<T>,
    pub next: Link<T>,
}

// NOTE: Nodes are allocated through Box rather than raw alloc calls, because moving out of a
// dereferenced Box is the cheapest way to get the value back out of the heap on removal.

/// A copyable pointer to a [`Node`]. All accessors go through raw pointers so that several
/// `NodePtr`s to the same allocation can coexist; exclusivity is the list's responsibility.
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
        // because the list never hands out a node pointer after unlinking it.
        unsafe { *Box::from_raw(self.0.as_ptr()) }
    }

    pub const fn value<'a>(&self) -> &'a T {
        // SAFETY: The pointer is valid until take_node and the list serializes all access.
        unsafe { &self.0.as_ref().value }
    }

    pub const fn value_mut<'a>(&mut self) -> &'a mut T {
        // SAFETY: As for value.
        unsafe { &mut self.0.as_mut().value }
    }

    pub fn prev<'a>(&self) -> &'a Link<T> {
        // SAFETY: As for value.
        unsafe { &(*self.0.as_ptr()).prev }
    }

    #[allow(clippy::mut_from_ref)]
    pub fn prev_mut<'a>(&self) -> &'a mut Link<T> {
        // SAFETY: As for value.
        unsafe { &mut (*self.0.as_ptr()).prev }
    }

    pub fn next<'a>(&self) -> &'a Link<T> {
        // SAFETY: As for value.
        unsafe { &(*self.0.as_ptr()).next }
    }

    #[allow(clippy::mut_from_ref)]
    pub fn next_mut<'a>(&self) -> &'a mut Link<T> {
        // SAFETY: As for value.
        unsafe { &mut (*self.0.as_ptr()).next }
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
