mod cursor;
mod iter;
mod length;
mod list;
mod node;

pub use cursor::*;
pub use iter::*;
pub(crate) use length::*;
pub use list::*;
pub(crate) use node::*;
