//! The container types themselves.
//!
//! # Purpose
//! Each submodule is one teaching unit: [`linked`] holds the doubly linked list and its cursor,
//! [`stack`] a thin LIFO adapter over the list, and [`tree`] an unbalanced binary search tree
//! with an injected comparator. The list and the tree both expose a mutating cursor whose
//! `remove_current` method is the point of the whole exercise.

#[cfg(feature = "linked")]
pub mod linked;
#[cfg(feature = "stack")]
pub mod stack;
#[cfg(feature = "tree")]
pub mod tree;
