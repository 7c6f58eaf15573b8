//! Cause chain traversal.
//!
//! These helpers only follow [`Classify::inner`] links. They never look at
//! permanence, so classification policy stays with the caller.

use std::iter::FusedIterator;

use crate::classification::Classify;

/// Iterator over an error and every cause it wraps, outermost first.
#[derive(Clone, Copy)]
pub struct Chain<'a> {
    next: Option<&'a dyn Classify>,
}

impl<'a> Chain<'a> {
    /// Starts a chain at `err`. The first item yielded is `err` itself.
    pub fn new(err: &'a dyn Classify) -> Self {
        Self { next: Some(err) }
    }
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a dyn Classify;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.inner();
        Some(current)
    }
}

impl FusedIterator for Chain<'_> {}

impl std::fmt::Debug for Chain<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(*self).finish()
    }
}

/// Shorthand for [`Chain::new`].
pub fn chain(err: &dyn Classify) -> Chain<'_> {
    Chain::new(err)
}

/// Returns the innermost error of the chain starting at `err`.
///
/// An error with no cause is its own root.
pub fn root_cause(err: &dyn Classify) -> &dyn Classify {
    let mut current = err;
    while let Some(cause) = current.inner() {
        current = cause;
    }
    current
}
