use super::{List, NodePtr};

/// A cursor over a [`List`], holding a mutable borrow of it for its whole lifetime.
///
/// Unlike [`Iter`](super::Iter), a cursor can park on the gap before the first node or after the
/// last one, and it survives removal of the node it points at: [`remove_current`] rebinds it so
/// that the traversal continues with the element that followed the removed one. The front gap
/// plays the role a sentinel head node plays in textbook list implementations, which is what
/// keeps "removed the first element mid-loop" from terminating the loop early.
///
/// [`remove_current`]: CursorMut::remove_current
pub struct CursorMut<'a, T> {
    pub(crate) list: &'a mut List<T>,
    pub(crate) pos: CursorPosition<T>,
}

pub(crate) enum CursorPosition<T> {
    /// Before the first node; the sentinel position.
    Front,
    Node(NodePtr<T>),
    /// Past the last node; forward traversal is finished.
    Back,
}

use CursorPosition::*;

impl<T> CursorMut<'_, T> {
    /// Returns a reference to the element the cursor is on, or [`None`] when parked on either
    /// gap.
    pub const fn read(&self) -> Option<&T> {
        match &self.pos {
            Node(ptr) => Some(ptr.value()),
            _ => None,
        }
    }

    /// Returns a mutable reference to the element the cursor is on, or [`None`] when parked on
    /// either gap.
    pub const fn read_mut(&mut self) -> Option<&mut T> {
        match &mut self.pos {
            Node(ptr) => Some(ptr.value_mut()),
            _ => None,
        }
    }

    /// Returns true once the cursor has stepped past the last element. A forward traversal loops
    /// on this; a backward traversal should loop on [`read`](CursorMut::read) returning [`Some`]
    /// instead, because rewinding parks on the front gap rather than the back one.
    pub const fn is_finished(&self) -> bool {
        matches!(self.pos, Back)
    }

    /// Steps towards the back of the list. From the front gap this enters the first element;
    /// once past the last element it stays put.
    pub fn move_next(&mut self) -> &mut Self {
        match &self.pos {
            Front => {
                self.pos = match self.list.state.first() {
                    Some(head) => Node(head),
                    None => Back,
                }
            },
            Node(ptr) => {
                self.pos = match *ptr.next() {
                    Some(next) => Node(next),
                    None => Back,
                }
            },
            Back => {},
        }
        self
    }

    /// Steps towards the front of the list. From the back gap this enters the last element; once
    /// before the first element it stays put.
    pub fn move_prev(&mut self) -> &mut Self {
        match &self.pos {
            Front => {},
            Node(ptr) => {
                self.pos = match *ptr.prev() {
                    Some(prev) => Node(prev),
                    None => Front,
                }
            },
            Back => {
                self.pos = match self.list.state.last() {
                    Some(tail) => Node(tail),
                    None => Front,
                }
            },
        }
        self
    }

    /// Removes the element the cursor is on and returns it, or returns [`None`] (removing
    /// nothing) when parked on a gap.
    ///
    /// The cursor is rebound to the removed node's predecessor, or to the front gap if the first
    /// element was removed. Either way the next [`move_next`](CursorMut::move_next) lands on the
    /// element that followed the removed one, so a forward removal loop visits every remaining
    /// element exactly once.
    pub fn remove_current(&mut self) -> Option<T> {
        let Node(ptr) = self.pos else {
            return None;
        };

        // The predecessor has to be captured before the unlink tears the links down.
        self.pos = match *ptr.prev() {
            Some(prev) => Node(prev),
            None => Front,
        };

        Some(self.list.unlink(ptr))
    }

    /// The number of elements currently in the underlying list.
    pub const fn len(&self) -> usize {
        self.list.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.list.is_empty()
    }
}
