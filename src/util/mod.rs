//! Crate-private helpers shared between the container modules.

#[cfg(test)]
pub mod alloc;
pub mod error;
pub mod fmt;
pub mod result;
