use derive_more::{Display, Error};

/// A container's length would exceed `usize::MAX`. Unreachable in practice, because the
/// allocator fails long before that many nodes exist, but the length arithmetic refuses to wrap
/// silently.
#[derive(Debug, Display, Error)]
#[display("Capacity overflow!")]
pub struct CapacityOverflow;
