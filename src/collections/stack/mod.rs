//! A LIFO stack. A thin adapter over [`List`](crate::collections::linked::List); it exists so
//! the push/pop discipline has a name, not because it adds any structure of its own.

mod stack;

pub use stack::*;
