use std::cell::Cell;
use std::rc::Rc;

/// A test value whose clones all report their drops to one shared counter, for asserting that a
/// container frees each of its nodes exactly once.
#[derive(Debug, Clone)]
pub struct DropCounter(Rc<Cell<usize>>);

impl DropCounter {
    pub fn new() -> DropCounter {
        DropCounter(Rc::new(Cell::new(0)))
    }

    /// The number of clones (and originals) dropped so far.
    pub fn total(&self) -> usize {
        self.0.get()
    }
}

impl Default for DropCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for DropCounter {
    fn drop(&mut self) {
        self.0.set(self.0.get() + 1);
    }
}
