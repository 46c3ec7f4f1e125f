//! A small teaching library of generic containers: a doubly linked [`List`], a [`Stack`] and a
//! binary search [`Tree`], each paired with traversal types that support safe in-place removal
//! mid-iteration.
//!
//! # Purpose
//! This crate exists to teach, not to outperform [`std`]. Every structure here is written from
//! scratch on top of per-node heap allocations, so the pointer wiring that `std` hides is visible
//! and testable: how a doubly linked node is unlinked without breaking its neighbours, how a BST
//! deletion splices in the in-order successor, and how an iterator survives the removal of the
//! very node it points at.
//!
//! # The interesting part
//! The hardest invariant in the crate is shared by the list and the tree: a caller may remove the
//! element a cursor currently references, and the cursor must remain valid, with the next step
//! landing on the element that followed the removed one. See
//! [`CursorMut::remove_current`](collections::linked::CursorMut::remove_current) on the list and
//! [`CursorMut::remove_current`](collections::tree::CursorMut::remove_current) on the tree for
//! the two shapes this takes.
//!
//! # Error Handling
//! Absence is not an error anywhere in this crate. Popping an empty container, removing a value
//! that isn't present, or reading a finished cursor all return [`None`] or `false` and leave the
//! container untouched. The only panic in library code is list-length overflow, which cannot
//! occur before the allocator gives out.
//!
//! # Non-goals
//! The tree does not rebalance (worst case `O(n)` depth), nothing is thread safe, and there is no
//! allocator strategy beyond one `Box` per node.
//!
//! [`List`]: collections::linked::List
//! [`Stack`]: collections::stack::Stack
//! [`Tree`]: collections::tree::Tree

#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod collections;

pub(crate) mod util;
