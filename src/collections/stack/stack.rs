use std::fmt::{self, Debug, Formatter};
use std::iter::Rev;

use crate::collections::linked::List;
use crate::collections::linked::list::{IntoIter, Iter};

/// A last-in-first-out stack over a linked [`List`]. All operations are `O(1)` and total:
/// popping or peeking an empty stack returns [`None`].
pub struct Stack<T> {
    items: List<T>,
}

impl<T> Stack<T> {
    /// Creates a new Stack with no elements.
    pub const fn new() -> Stack<T> {
        Stack { items: List::new() }
    }

    /// Returns the number of elements on the Stack.
    pub const fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the Stack contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Places the provided element on top of the Stack.
    pub fn push(&mut self, value: T) {
        self.items.push_back(value);
    }

    /// Removes and returns the top element, if the Stack isn't empty.
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop_back()
    }

    /// Returns a reference to the top element, if the Stack isn't empty.
    pub const fn peek(&self) -> Option<&T> {
        self.items.back()
    }

    /// Returns a mutable reference to the top element, if the Stack isn't empty.
    pub const fn peek_mut(&mut self) -> Option<&mut T> {
        self.items.back_mut()
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Iterates from the top of the Stack downwards, matching pop order.
    pub fn iter(&self) -> Rev<Iter<'_, T>> {
        self.items.iter().rev()
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Stack {
            items: List::from_iter(iter),
        }
    }
}

impl<T> Extend<T> for Stack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<T> IntoIterator for Stack<T> {
    type Item = T;

    /// Consumes the Stack in pop order.
    type IntoIter = Rev<IntoIter<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter().rev()
    }
}

impl<T: Debug> Debug for Stack<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stack")
            .field("top_down", &crate::util::fmt::DebugEntries(|| self.iter()))
            .field("len", &self.len())
            .finish()
    }
}
