use std::iter::FusedIterator;
use std::option;

/// Borrowing iterator over a [`Try`](crate::Try): one item for a success, none for a failure.
///
/// Created by [`Try::iter`](crate::Try::iter). Calling `iter` again restarts from the beginning.
#[derive(Debug, Clone)]
pub struct Iter<'a, T> {
    pub(crate) inner: option::IntoIter<&'a T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

/// Owning iterator over a [`Try`](crate::Try).
#[derive(Debug, Clone)]
pub struct IntoIter<T> {
    pub(crate) inner: option::IntoIter<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}
