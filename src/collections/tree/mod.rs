//! An unbalanced binary search tree ordered by an injected comparator. Revolves around [`Tree`],
//! its in-order [`Iter`] and the tag-based [`CursorMut`] that supports removal mid-traversal.

mod cursor;
mod iter;
mod node;
mod tests;
mod tree;

pub use cursor::*;
pub use iter::*;
pub(crate) use node::*;
pub use tree::*;
