// ============================================================================
// observable-collections - SubList
// A mutable window over a contiguous index range of another list
// ============================================================================

use std::fmt;

use crate::core::error::{CollectionError, Result};
use crate::core::list::ListBase;

// =============================================================================
// SUB LIST
// =============================================================================

/// A window `[from, to)` over a backing list.
///
/// Indices are translated by the window's offset before reaching the
/// backing list. Insertions and removals made through the window grow and
/// shrink it; the backing list is borrowed mutably for the window's
/// lifetime, so nothing else can change it underneath.
///
/// Because `SubList` is itself a [`ListBase`], it can be re-sliced, walked
/// with a cursor, or bulk-filtered. When the backing list is an observable
/// wrapper, every change made through the window notifies with the index in
/// the backing list.
///
/// # Example
///
/// ```
/// use observable_collections::ListBase;
///
/// let mut list = vec![0, 1, 2, 3, 4, 5];
/// let mut middle = list.sub_list(1, 5).unwrap();
/// middle.remove_if(|v| v % 2 == 0);
/// middle.push(9);
/// assert_eq!(middle.len(), 3);
/// assert_eq!(list, vec![0, 1, 3, 9, 5]);
/// ```
pub struct SubList<'a, L: ListBase + ?Sized> {
    base: &'a mut L,
    offset: usize,
    len: usize,
}

impl<'a, L: ListBase + ?Sized> SubList<'a, L> {
    pub(crate) fn new(base: &'a mut L, from: usize, to: usize) -> Result<Self> {
        let base_len = base.len();
        if to > base_len {
            return Err(CollectionError::IndexOutOfBounds {
                index: to,
                len: base_len,
            });
        }
        if from > to {
            return Err(CollectionError::InvalidRange { from, to });
        }

        tracing::debug!(from, to, "sub-list created");
        Ok(Self {
            base,
            offset: from,
            len: to - from,
        })
    }
}

impl<L: ListBase + ?Sized> ListBase for SubList<'_, L> {
    type Item = L::Item;

    const RANDOM_ACCESS: bool = L::RANDOM_ACCESS;

    fn len(&self) -> usize {
        self.len
    }

    fn get(&self, index: usize) -> Option<&L::Item> {
        if index < self.len {
            self.base.get(self.offset + index)
        } else {
            None
        }
    }

    fn iter(&self) -> impl Iterator<Item = &L::Item> {
        self.base.iter().skip(self.offset).take(self.len)
    }

    fn push(&mut self, value: L::Item) {
        match self.base.insert(self.offset + self.len, value) {
            Ok(()) => self.len += 1,
            Err(error) => tracing::warn!(%error, "sub-list append rejected by backing list"),
        }
    }

    fn insert(&mut self, index: usize, value: L::Item) -> Result<()> {
        CollectionError::check_position(index, self.len)?;
        self.base.insert(self.offset + index, value)?;
        self.len += 1;
        Ok(())
    }

    fn remove_at(&mut self, index: usize) -> Result<L::Item> {
        CollectionError::check_index(index, self.len)?;
        let item = self.base.remove_at(self.offset + index)?;
        self.len -= 1;
        Ok(item)
    }

    fn replace(&mut self, index: usize, value: L::Item) -> Result<L::Item> {
        CollectionError::check_index(index, self.len)?;
        self.base.replace(self.offset + index, value)
    }

    /// Removes the window's elements front to back, one primitive call each.
    fn take_all(&mut self) -> Vec<L::Item> {
        let mut taken = Vec::with_capacity(self.len);
        while self.len > 0 {
            match self.remove_at(0) {
                Ok(item) => taken.push(item),
                Err(_) => break,
            }
        }
        taken
    }
}

impl<L> fmt::Debug for SubList<'_, L>
where
    L: ListBase + ?Sized,
    L::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::LinkedList;

    fn collect<L: ListBase<Item = i32>>(list: &L) -> Vec<i32> {
        list.iter().copied().collect()
    }

    #[test]
    fn construction_bounds() {
        let mut list = vec![1, 2, 3];
        assert_eq!(
            list.sub_list(0, 4).unwrap_err(),
            CollectionError::IndexOutOfBounds { index: 4, len: 3 }
        );
        assert_eq!(
            list.sub_list(2, 1).unwrap_err(),
            CollectionError::InvalidRange { from: 2, to: 1 }
        );
        assert!(list.sub_list(3, 3).unwrap().is_empty());
    }

    #[test]
    fn indices_are_window_relative() {
        let mut list = vec![10, 20, 30, 40];
        let mut window = list.sub_list(1, 3).unwrap();

        assert_eq!(window.get(0), Some(&20));
        assert_eq!(window.get(2), None);
        assert!(window.remove_at(2).is_err());
        assert!(window.insert(3, 0).is_err());
        assert_eq!(window.replace(1, 33), Ok(30));
        assert_eq!(format!("{window:?}"), "[20, 33]");
    }

    #[test]
    fn size_tracks_edits_through_the_window() {
        let mut list = vec![1, 2, 3, 4];
        let mut window = list.sub_list(1, 3).unwrap();

        window.insert(0, 7).unwrap();
        window.push(8);
        assert_eq!(collect(&window), vec![7, 2, 3, 8]);
        assert_eq!(window.remove_at(1), Ok(2));
        assert_eq!(window.len(), 3);
        assert_eq!(list, vec![1, 7, 3, 8, 4]);
    }

    #[test]
    fn nested_windows_translate_twice() {
        let mut list: Vec<i32> = (0..10).collect();
        let mut outer = list.sub_list(2, 8).unwrap();
        {
            let mut inner = outer.sub_list(1, 4).unwrap();
            assert_eq!(collect(&inner), vec![3, 4, 5]);
            inner.clear();
        }
        assert_eq!(outer.len(), 3);
        assert_eq!(collect(&outer), vec![2, 6, 7]);
        assert_eq!(list, vec![0, 1, 2, 6, 7, 8, 9]);
    }

    #[test]
    fn sequential_backing_list() {
        let mut list: LinkedList<i32> = (1..=6).collect();
        let mut window = list.sub_list(2, 5).unwrap();
        assert!(!<SubList<'_, LinkedList<i32>> as ListBase>::RANDOM_ACCESS);

        assert!(window.retain(|v| v % 2 == 0));
        assert_eq!(window.take_all(), vec![4]);
        assert_eq!(list.into_iter().collect::<Vec<_>>(), vec![1, 2, 6]);
    }
}
