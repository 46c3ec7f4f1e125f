//! Linked collection types. Revolves around [`List`] and its accompanying [`CursorMut`] type.

pub mod list;

#[doc(inline)]
pub use list::{CursorMut, List};
