//! Iterator implementations.

use std::iter::FusedIterator;

/// Iterator for owned values, in index order.
pub struct EntryIntoIterator<TEntry> {
    pub(crate) entries: std::vec::IntoIter<TEntry>,
}

/// Iterator over references to the live elements, in index order.
pub struct EntryIterator<'a, TEntry> {
    pub(crate) current: usize,
    pub(crate) entries: &'a [TEntry],
}

/// Iterator over mutable references to the live elements, in index order.
pub struct EntryMutIterator<'a, TEntry> {
    pub(crate) entries: std::slice::IterMut<'a, TEntry>,
}

impl<TEntry> Iterator for EntryIntoIterator<TEntry> {
    type Item = TEntry;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.entries.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.entries.size_hint()
    }
}

impl<'a, TEntry> Iterator for EntryIterator<'a, TEntry> {
    type Item = &'a TEntry;

    fn next(&mut self) -> Option<Self::Item> {
        let entry = self.entries.get(self.current)?;
        self.current += 1;
        Some(entry)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.entries.len() - self.current;
        (remaining, Some(remaining))
    }
}

impl<'a, TEntry> Iterator for EntryMutIterator<'a, TEntry> {
    type Item = &'a mut TEntry;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.entries.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.entries.size_hint()
    }
}

impl<TEntry> ExactSizeIterator for EntryIntoIterator<TEntry> {}
impl<TEntry> ExactSizeIterator for EntryIterator<'_, TEntry> {}
impl<TEntry> ExactSizeIterator for EntryMutIterator<'_, TEntry> {}

impl<TEntry> FusedIterator for EntryIntoIterator<TEntry> {}
impl<TEntry> FusedIterator for EntryIterator<'_, TEntry> {}
impl<TEntry> FusedIterator for EntryMutIterator<'_, TEntry> {}
