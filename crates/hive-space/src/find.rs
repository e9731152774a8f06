//! Lazy linear search over a hive's slots.

use crate::hive::Hive;
use crate::slot::Slot;
use std::iter::FusedIterator;
use std::ops::Range;

/// Iterator returned by [`Hive::find`] and, reversed, by [`Hive::rfind`].
///
/// Each call to `find` scans the whole slot array afresh, evaluating
/// `predicate(slot, index)` once per slot visited. Dropping the iterator
/// early skips the rest of the scan.
pub struct Find<'a, T, P> {
    hive: &'a Hive<T>,
    remaining: Range<usize>,
    predicate: P,
}

impl<'a, T, P> Find<'a, T, P>
where
    P: FnMut(&Slot<'_, T>, usize) -> bool,
{
    pub(crate) fn new(hive: &'a Hive<T>, predicate: P) -> Self {
        Self {
            hive,
            remaining: 0..hive.len(),
            predicate,
        }
    }

    fn test(&mut self, i: usize) -> Option<Slot<'a, T>> {
        let slot = self.hive.nodes(i)?;
        (self.predicate)(&slot, i).then_some(slot)
    }
}

impl<'a, T, P> Iterator for Find<'a, T, P>
where
    P: FnMut(&Slot<'_, T>, usize) -> bool,
{
    type Item = Slot<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(i) = self.remaining.next() {
            if let Some(slot) = self.test(i) {
                return Some(slot);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.remaining.len()))
    }
}

impl<T, P> DoubleEndedIterator for Find<'_, T, P>
where
    P: FnMut(&Slot<'_, T>, usize) -> bool,
{
    fn next_back(&mut self) -> Option<Self::Item> {
        while let Some(i) = self.remaining.next_back() {
            if let Some(slot) = self.test(i) {
                return Some(slot);
            }
        }
        None
    }
}

impl<T, P> FusedIterator for Find<'_, T, P> where P: FnMut(&Slot<'_, T>, usize) -> bool {}
