use std::cmp::Ordering;

use super::{Link, NodePtr, Tree, VisitorId};

/// An in-order traversal cursor over a [`Tree`], holding a mutable borrow of it for its whole
/// lifetime.
///
/// # Stackless traversal
/// The cursor keeps no stack of ancestors. Instead, every node it yields is marked with the
/// cursor's [`VisitorId`], and each step is decided from the current node's own links: enter the
/// right subtree if its top is unmarked, otherwise climb until an unmarked ancestor appears.
/// The parent pointers and the per-node marks together carry exactly the state an explicit stack
/// would, which is what lets the cursor resume from an arbitrary node after a removal reshapes
/// the tree around it.
///
/// Marks are written into the nodes themselves, so a second simultaneous traversal would corrupt
/// the first's state; the mutable borrow makes that a compile error rather than a documented
/// misbehaviour. Marks left behind by earlier, finished cursors belong to a different
/// [`VisitorId`] and read as "unvisited".
///
/// # Removal mid-traversal
/// [`remove_current`](CursorMut::remove_current) removes the node the cursor is on and leaves
/// the cursor positioned on the removed value's in-order successor, so interleaved
/// read/remove/step loops see every remaining value exactly once.
pub struct CursorMut<'a, T, C = fn(&T, &T) -> Ordering> {
    pub(crate) tree: &'a mut Tree<T, C>,
    pub(crate) current: Link<T>,
    pub(crate) id: VisitorId,
}

impl<'a, T, C> CursorMut<'a, T, C> {
    /// Positions a fresh cursor on the tree's smallest node and marks it yielded.
    pub(crate) fn new(tree: &'a mut Tree<T, C>, id: VisitorId) -> CursorMut<'a, T, C> {
        let mut cursor = CursorMut {
            current: tree.root,
            tree,
            id,
        };
        if let Some(root) = cursor.current {
            cursor.current = Some(cursor.settle_into(root));
        }
        cursor
    }

    /// Returns a reference to the value the cursor is on, or [`None`] once finished.
    pub fn read(&self) -> Option<&T> {
        Some(self.current?.value())
    }

    /// Returns a mutable reference to the value the cursor is on, or [`None`] once finished.
    ///
    /// Mutating a value's position under the tree's comparator is not detected; the value stays
    /// where it is, exactly as if it had been inserted then mutated through other means.
    pub fn read_mut(&mut self) -> Option<&mut T> {
        Some(self.current?.value_mut())
    }

    /// Returns true once the traversal has stepped past the largest value.
    pub const fn is_finished(&self) -> bool {
        self.current.is_none()
    }

    /// Steps to the next value in comparator order, marking the node it settles on. No-op once
    /// finished.
    pub fn move_next(&mut self) -> &mut Self {
        let Some(node) = self.current else {
            return self;
        };

        // An unmarked current node is a resume point left by a removal: the node itself (or the
        // leftmost unvisited node below it) is the continuation, not whatever follows it.
        if !self.visited(node) {
            self.current = Some(self.settle_into(node));
            return self;
        }

        if let Some(right) = *node.right() {
            if !self.visited(right) {
                self.current = Some(self.settle_into(right));
                return self;
            }
        }

        let mut curr = node;
        loop {
            match *curr.parent() {
                Some(parent) if !self.visited(parent) => {
                    self.mark(parent);
                    self.current = Some(parent);
                    return self;
                },
                Some(parent) => curr = parent,
                None => {
                    self.current = None;
                    return self;
                },
            }
        }
    }

    /// Removes the value the cursor is on and returns it, or returns [`None`] (removing nothing)
    /// once finished.
    ///
    /// The node's visitor mark is cleared before the structural removal — unconditionally, so a
    /// node surviving a two-children splice can never be mistaken for already-visited state.
    /// Afterwards the cursor settles on the in-order continuation:
    /// - a node with two children survives the splice holding its successor's (unvisited) value,
    ///   so the cursor re-enters it;
    /// - removing the root otherwise resumes from whatever node the root slot now holds;
    /// - any other node resumes from its parent, stepping onwards if the parent was already
    ///   yielded.
    pub fn remove_current(&mut self) -> Option<T> {
        let node = self.current?;
        node.set_visitor(None);

        let parent = *node.parent();
        let had_two_children = node.left().is_some() && node.right().is_some();

        let value = self.tree.detach(node);

        let resume = if had_two_children {
            // The allocation at `node` survived the splice and now holds the successor value.
            Some(node)
        } else if parent.is_none() {
            self.tree.root
        } else {
            parent
        };

        self.current = resume;
        match resume {
            Some(node) if !self.visited(node) => self.current = Some(self.settle_into(node)),
            Some(_) => {
                self.move_next();
            },
            None => {},
        }

        Some(value)
    }

    /// The number of values currently in the underlying tree.
    pub const fn len(&self) -> usize {
        self.tree.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Descends from `from` to the leftmost node this cursor hasn't yielded yet, and marks it.
    fn settle_into(&mut self, from: NodePtr<T>) -> NodePtr<T> {
        let mut node = from;
        while let Some(left) = *node.left() {
            if self.visited(left) {
                break;
            }
            node = left;
        }
        self.mark(node);
        node
    }

    fn visited(&self, node: NodePtr<T>) -> bool {
        node.visitor() == Some(self.id)
    }

    fn mark(&self, node: NodePtr<T>) {
        node.set_visitor(Some(self.id));
    }
}
