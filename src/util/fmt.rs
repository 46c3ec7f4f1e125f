use std::fmt::{self, Debug, Formatter};

/// Formats the elements produced by an iterator factory as a debug list. Lets container `Debug`
/// impls embed their contents as one field among others.
pub(crate) struct DebugEntries<F>(pub F);

impl<F, I> Debug for DebugEntries<F>
where
    F: Fn() -> I,
    I: IntoIterator,
    I::Item: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries((self.0)()).finish()
    }
}
