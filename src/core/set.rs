// ============================================================================
// observable-collections - SetBase
// The mutable-set contract consumed (and re-implemented) by the wrappers
// ============================================================================

use std::collections::{BTreeSet, HashSet};
use std::hash::{BuildHasher, Hash};

use crate::collections::cursor::SetCursor;

// =============================================================================
// SET BASE
// =============================================================================

/// A mutable collection of unique elements.
///
/// As with [`ListBase`](crate::ListBase), bulk operations are provided in
/// terms of a few primitives. Filtered removal and cursors need to hold on
/// to an element after borrowing it from the set, so they require
/// `Item: Clone`.
pub trait SetBase {
    type Item;

    fn len(&self) -> usize;

    fn contains(&self, value: &Self::Item) -> bool;

    fn iter(&self) -> impl Iterator<Item = &Self::Item>;

    /// Adds `value`. Returns false if an equal element was already present.
    fn insert(&mut self, value: Self::Item) -> bool;

    /// Removes and returns the element equal to `value`.
    fn take(&mut self, value: &Self::Item) -> Option<Self::Item>;

    /// Removes every element, returning them in iteration order.
    fn take_all(&mut self) -> Vec<Self::Item>;

    // =========================================================================
    // PROVIDED
    // =========================================================================

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn remove(&mut self, value: &Self::Item) -> bool {
        self.take(value).is_some()
    }

    /// Adds every value in the order given. Returns whether any was accepted.
    fn extend_from<I>(&mut self, values: I) -> bool
    where
        I: IntoIterator<Item = Self::Item>,
    {
        let mut changed = false;
        for value in values {
            changed |= self.insert(value);
        }
        changed
    }

    /// Removes every element contained in `values`.
    fn remove_all(&mut self, values: &[Self::Item]) -> bool
    where
        Self::Item: PartialEq + Clone,
    {
        self.retain_with(|item| !values.contains(item), |_| {}) > 0
    }

    /// Removes every element not contained in `values`.
    fn retain_all(&mut self, values: &[Self::Item]) -> bool
    where
        Self::Item: PartialEq + Clone,
    {
        self.retain_with(|item| values.contains(item), |_| {}) > 0
    }

    fn remove_if<F>(&mut self, mut predicate: F) -> bool
    where
        Self::Item: Clone,
        F: FnMut(&Self::Item) -> bool,
    {
        self.retain_with(|item| !predicate(item), |_| {}) > 0
    }

    fn retain<F>(&mut self, keep: F) -> bool
    where
        Self::Item: Clone,
        F: FnMut(&Self::Item) -> bool,
    {
        self.retain_with(keep, |_| {}) > 0
    }

    /// Removes every element `keep` rejects, handing each to `on_removed`
    /// in the set's own iteration order. Returns the number removed.
    fn retain_with<F, R>(&mut self, mut keep: F, mut on_removed: R) -> usize
    where
        Self::Item: Clone,
        F: FnMut(&Self::Item) -> bool,
        R: FnMut(Self::Item),
    {
        let rejected: Vec<Self::Item> = self
            .iter()
            .filter(|item| !keep(*item))
            .cloned()
            .collect();

        let mut removed = 0;
        for item in rejected {
            if let Some(item) = self.take(&item) {
                removed += 1;
                on_removed(item);
            }
        }
        removed
    }

    fn clear(&mut self) {
        self.take_all();
    }

    /// A removal-capable cursor over the set.
    fn cursor(&mut self) -> SetCursor<'_, Self>
    where
        Self: Sized,
        Self::Item: Clone,
    {
        SetCursor::new(self)
    }
}

// =============================================================================
// STD IMPLEMENTATIONS
// =============================================================================

impl<T, S> SetBase for HashSet<T, S>
where
    T: Eq + Hash,
    S: BuildHasher,
{
    type Item = T;

    fn len(&self) -> usize {
        HashSet::len(self)
    }

    fn contains(&self, value: &T) -> bool {
        HashSet::contains(self, value)
    }

    fn iter(&self) -> impl Iterator<Item = &T> {
        HashSet::iter(self)
    }

    fn insert(&mut self, value: T) -> bool {
        HashSet::insert(self, value)
    }

    fn take(&mut self, value: &T) -> Option<T> {
        HashSet::take(self, value)
    }

    fn take_all(&mut self) -> Vec<T> {
        self.drain().collect()
    }
}

impl<T: Ord> SetBase for BTreeSet<T> {
    type Item = T;

    fn len(&self) -> usize {
        BTreeSet::len(self)
    }

    fn contains(&self, value: &T) -> bool {
        BTreeSet::contains(self, value)
    }

    fn iter(&self) -> impl Iterator<Item = &T> {
        BTreeSet::iter(self)
    }

    fn insert(&mut self, value: T) -> bool {
        BTreeSet::insert(self, value)
    }

    fn take(&mut self, value: &T) -> Option<T> {
        BTreeSet::take(self, value)
    }

    fn take_all(&mut self) -> Vec<T> {
        std::mem::take(self).into_iter().collect()
    }
}

impl<S> SetBase for &mut S
where
    S: SetBase + ?Sized,
{
    type Item = S::Item;

    fn len(&self) -> usize {
        (**self).len()
    }

    fn contains(&self, value: &S::Item) -> bool {
        (**self).contains(value)
    }

    fn iter(&self) -> impl Iterator<Item = &S::Item> {
        (**self).iter()
    }

    fn insert(&mut self, value: S::Item) -> bool {
        (**self).insert(value)
    }

    fn take(&mut self, value: &S::Item) -> Option<S::Item> {
        (**self).take(value)
    }

    fn take_all(&mut self) -> Vec<S::Item> {
        (**self).take_all()
    }

    fn retain_with<F, R>(&mut self, keep: F, on_removed: R) -> usize
    where
        S::Item: Clone,
        F: FnMut(&S::Item) -> bool,
        R: FnMut(S::Item),
    {
        (**self).retain_with(keep, on_removed)
    }
}

// =============================================================================
// TESTS
// =============================================================================
