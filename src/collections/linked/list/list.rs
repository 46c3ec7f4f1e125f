use std::fmt::{self, Debug, Display, Formatter};
use std::marker::PhantomData;

use derive_more::IsVariant;

use super::{CursorMut, CursorPosition, Iter, IterMut, Length, Link, Node, NodePtr, ONE};
#[doc(inline)]
pub use crate::util::error::CapacityOverflow;
use crate::util::result::ResultExtension;

/// A doubly linked list. See also: [`CursorMut`] for bi-directional traversal with safe in-place
/// removal.
///
/// # Time Complexity
/// With `n` the number of items in the List:
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `front/back` | `O(1)` |
/// | `push_front/back` | `O(1)` |
/// | `pop_front/back` | `O(1)` |
/// | `remove_value` | `O(n)` |
/// | `clear` | `O(n)` |
///
/// Every operation is total: popping an empty list or removing an absent value reports the
/// absence through its return value and leaves the list unchanged.
pub struct List<T> {
    pub(crate) state: ListState<T>,
    pub(crate) _phantom: PhantomData<T>,
}

#[derive(Default, IsVariant)]
pub(crate) enum ListState<T> {
    #[default]
    Empty,
    Full(ListContents<T>),
}

use ListState::*;

pub(crate) struct ListContents<T> {
    pub len: Length,
    pub head: NodePtr<T>,
    pub tail: NodePtr<T>,
}

impl<T> List<T> {
    /// Creates a new List with no elements.
    pub const fn new() -> List<T> {
        List {
            state: Empty,
            _phantom: PhantomData,
        }
    }

    /// Returns the number of elements in the List.
    pub const fn len(&self) -> usize {
        match self.state {
            Empty => 0,
            Full(ListContents { len, .. }) => len.get(),
        }
    }

    /// Returns true if the List contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    /// Returns a reference to the first element in the List, if it exists.
    pub const fn front(&self) -> Option<&T> {
        match self.state {
            Empty => None,
            Full(ListContents { head, .. }) => Some(head.value()),
        }
    }

    /// Returns a mutable reference to the first element in the List, if it exists.
    pub const fn front_mut(&mut self) -> Option<&mut T> {
        match self.state {
            Empty => None,
            Full(ListContents { mut head, .. }) => Some(head.value_mut()),
        }
    }

    /// Returns a reference to the last element in the List, if it exists.
    pub const fn back(&self) -> Option<&T> {
        match self.state {
            Empty => None,
            Full(ListContents { tail, .. }) => Some(tail.value()),
        }
    }

    /// Returns a mutable reference to the last element in the List, if it exists.
    pub const fn back_mut(&mut self) -> Option<&mut T> {
        match self.state {
            Empty => None,
            Full(ListContents { mut tail, .. }) => Some(tail.value_mut()),
        }
    }

    /// Adds the provided element at the front of the List.
    pub fn push_front(&mut self, value: T) {
        match &mut self.state {
            Empty => self.state = ListState::single(value),
            Full(contents) => contents.push_front(value),
        }
    }

    /// Adds the provided element at the back of the List.
    pub fn push_back(&mut self, value: T) {
        match &mut self.state {
            Empty => self.state = ListState::single(value),
            Full(contents) => contents.push_back(value),
        }
    }

    /// Removes the first element from the List and returns it, if the List isn't empty.
    pub fn pop_front(&mut self) -> Option<T> {
        match &mut self.state {
            Empty => None,
            Full(ListContents { len, head, .. }) => {
                let node = head.take_node();

                match len.checked_sub(1) {
                    Some(new_len) => {
                        // SAFETY: The length was greater than 1, so the first node is followed by
                        // at least one more.
                        let new_head = unsafe { node.next.unwrap_unchecked() };
                        *head = new_head;
                        *new_head.prev_mut() = None;
                        *len = new_len;
                    },
                    None => self.state = Empty,
                }

                Some(node.value)
            },
        }
    }

    /// Removes the last element from the List and returns it, if the List isn't empty.
    pub fn pop_back(&mut self) -> Option<T> {
        match &mut self.state {
            Empty => None,
            Full(ListContents { len, tail, .. }) => {
                let node = tail.take_node();

                match len.checked_sub(1) {
                    Some(new_len) => {
                        // SAFETY: The length was greater than 1, so the last node is preceded by
                        // at least one more.
                        let new_tail = unsafe { node.prev.unwrap_unchecked() };
                        *tail = new_tail;
                        *new_tail.next_mut() = None;
                        *len = new_len;
                    },
                    None => self.state = Empty,
                }

                Some(node.value)
            },
        }
    }

    /// Removes the first element equal to `value`, scanning from the front. Returns whether a
    /// match was found and removed.
    pub fn remove_value(&mut self, value: &T) -> bool
    where
        T: PartialEq,
    {
        let mut curr = match &self.state {
            Empty => None,
            Full(contents) => Some(contents.head),
        };

        while let Some(ptr) = curr {
            if ptr.value() == value {
                self.unlink(ptr);
                return true;
            }
            curr = *ptr.next();
        }

        false
    }

    /// Removes every element, popping one at a time.
    pub fn clear(&mut self) {
        while self.pop_back().is_some() {}
    }

    /// Returns a cursor positioned on the first element, or already finished if the List is
    /// empty.
    pub fn cursor_front_mut(&mut self) -> CursorMut<'_, T> {
        let pos = match &self.state {
            Empty => CursorPosition::Back,
            Full(contents) => CursorPosition::Node(contents.head),
        };
        CursorMut { list: self, pos }
    }

    /// Returns a cursor positioned on the last element, or already rewound past the front if the
    /// List is empty.
    pub fn cursor_back_mut(&mut self) -> CursorMut<'_, T> {
        let pos = match &self.state {
            Empty => CursorPosition::Front,
            Full(contents) => CursorPosition::Node(contents.tail),
        };
        CursorMut { list: self, pos }
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.into_iter()
    }
}

impl<T> List<T> {
    /// The structural removal primitive: detaches `node` from its neighbours, fixing head, tail
    /// and length, and returns its value. Every removal path funnels through here.
    ///
    /// `node` must be an element of this list.
    pub(crate) fn unlink(&mut self, node: NodePtr<T>) -> T {
        let Full(contents) = &mut self.state else {
            // A node pointer can only be obtained from a non-empty list.
            unreachable!("unlink called on an empty list");
        };

        let node = node.take_node();
        match (node.prev, node.next) {
            (Some(prev), Some(next)) => {
                *prev.next_mut() = Some(next);
                *next.prev_mut() = Some(prev);
                // SAFETY: The node had two neighbours, so the length was at least 3.
                contents.len = unsafe { contents.len.checked_sub(1).unwrap_unchecked() };
            },
            (Some(prev), None) => {
                *prev.next_mut() = None;
                contents.tail = prev;
                // SAFETY: The node had a predecessor, so the length was at least 2.
                contents.len = unsafe { contents.len.checked_sub(1).unwrap_unchecked() };
            },
            (None, Some(next)) => {
                *next.prev_mut() = None;
                contents.head = next;
                // SAFETY: The node had a successor, so the length was at least 2.
                contents.len = unsafe { contents.len.checked_sub(1).unwrap_unchecked() };
            },
            (None, None) => self.state = Empty,
        }

        node.value
    }

    #[cfg(test)]
    pub(crate) fn assert_double_links(&self) {
        match &self.state {
            Empty => {},
            Full(ListContents { len, head, tail }) => {
                let mut count = 1;
                let mut curr = *head;
                assert!(curr.prev().is_none());
                while let Some(next) = *curr.next() {
                    assert!(*next.prev() == Some(curr));
                    curr = next;
                    count += 1;
                }
                assert!(*tail == curr);
                assert_eq!(len.get(), count);
            },
        }
    }
}

impl<T> ListState<T> {
    pub(crate) const fn first(&self) -> Link<T> {
        match self {
            Empty => None,
            Full(ListContents { head, .. }) => Some(*head),
        }
    }

    pub(crate) const fn last(&self) -> Link<T> {
        match self {
            Empty => None,
            Full(ListContents { tail, .. }) => Some(*tail),
        }
    }

    /// A state holding exactly one freshly allocated node.
    pub(crate) fn single(value: T) -> ListState<T> {
        let node = NodePtr::from_node(Node {
            value,
            prev: None,
            next: None,
        });

        Full(ListContents {
            len: ONE,
            head: node,
            tail: node,
        })
    }
}

impl<T> ListContents<T> {
    pub(crate) fn push_front(&mut self, value: T) {
        self.len = self.len.checked_add(1).ok_or(CapacityOverflow).throw();

        let node = NodePtr::from_node(Node {
            value,
            prev: None,
            next: Some(self.head),
        });

        *self.head.prev_mut() = Some(node);
        self.head = node;
    }

    pub(crate) fn push_back(&mut self, value: T) {
        self.len = self.len.checked_add(1).ok_or(CapacityOverflow).throw();

        let node = NodePtr::from_node(Node {
            value,
            prev: Some(self.tail),
            next: None,
        });

        *self.tail.next_mut() = Some(node);
        self.tail = node;
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for List<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

// SAFETY: A List owns its values exactly as a Box does; the raw links never alias across threads
// because every access goes through the single List.
unsafe impl<T: Send> Send for List<T> {}
// SAFETY: As above; shared access hands out only shared references.
unsafe impl<T: Sync> Sync for List<T> {}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = List::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for List<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<T: PartialEq> PartialEq for List<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for List<T> {}

impl<T: Debug> Debug for List<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("List")
            .field("contents", &crate::util::fmt::DebugEntries(|| self.iter()))
            .field("len", &self.len())
            .finish()
    }
}

impl<T: Debug> Display for List<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for item in self.iter() {
            if !first {
                write!(f, " -> ")?;
            }
            write!(f, "({item:?})")?;
            first = false;
        }
        Ok(())
    }
}
