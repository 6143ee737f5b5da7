// ============================================================================
// observable-collections - ListBase
// The mutable-list contract consumed (and re-implemented) by the wrappers
// ============================================================================

use std::collections::{LinkedList, VecDeque};

use crate::collections::cursor::ListCursor;
use crate::collections::sub_list::SubList;
use crate::core::error::{CollectionError, Result};

// =============================================================================
// LIST BASE
// =============================================================================

/// A mutable, ordered, index-addressable sequence.
///
/// Implementors provide a handful of primitives; everything else (bulk
/// insertion, filtered removal, cursors, sub-lists) is built on those
/// primitives. A type that notifies from its primitives therefore notifies
/// from every provided operation too.
///
/// # Example
///
/// ```
/// use observable_collections::ListBase;
///
/// let mut list = vec!["a", "b", "c"];
/// assert!(ListBase::remove_all(&mut list, &["b", "z"]));
/// assert_eq!(list, vec!["a", "c"]);
///
/// assert!(ListBase::insert(&mut list, 5, "x").is_err());
/// ```
pub trait ListBase {
    type Item;

    /// Whether indexed access is O(1). Picks the index-walk algorithm for
    /// bulk removal instead of the sequential one.
    const RANDOM_ACCESS: bool = false;

    fn len(&self) -> usize;

    fn get(&self, index: usize) -> Option<&Self::Item>;

    fn iter(&self) -> impl Iterator<Item = &Self::Item>;

    /// Appends to the end.
    fn push(&mut self, value: Self::Item);

    /// Inserts at `index`, shifting later elements right. `index == len` appends.
    fn insert(&mut self, index: usize, value: Self::Item) -> Result<()>;

    /// Removes and returns the element at `index`.
    fn remove_at(&mut self, index: usize) -> Result<Self::Item>;

    /// Overwrites the element at `index`, returning the displaced value.
    fn replace(&mut self, index: usize, value: Self::Item) -> Result<Self::Item>;

    /// Removes every element, returning them in order.
    fn take_all(&mut self) -> Vec<Self::Item>;

    // =========================================================================
    // PROVIDED - QUERIES
    // =========================================================================

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The final element. Sequential lists override this to avoid a walk.
    fn last(&self) -> Option<&Self::Item> {
        self.len().checked_sub(1).and_then(|index| self.get(index))
    }

    fn contains(&self, value: &Self::Item) -> bool
    where
        Self::Item: PartialEq,
    {
        self.iter().any(|item| item == value)
    }

    fn index_of(&self, value: &Self::Item) -> Option<usize>
    where
        Self::Item: PartialEq,
    {
        self.iter().position(|item| item == value)
    }

    fn last_index_of(&self, value: &Self::Item) -> Option<usize>
    where
        Self::Item: PartialEq,
    {
        self.iter()
            .enumerate()
            .filter(|(_, item)| *item == value)
            .last()
            .map(|(index, _)| index)
    }

    // =========================================================================
    // PROVIDED - INSERTION
    // =========================================================================

    /// Appends every value in order. Returns whether anything was added.
    fn extend_from<I>(&mut self, values: I) -> bool
    where
        I: IntoIterator<Item = Self::Item>,
    {
        let mut changed = false;
        for value in values {
            self.push(value);
            changed = true;
        }
        changed
    }

    /// Inserts every value starting at `index`, keeping their order.
    fn insert_all<I>(&mut self, index: usize, values: I) -> Result<bool>
    where
        I: IntoIterator<Item = Self::Item>,
    {
        CollectionError::check_position(index, self.len())?;

        let mut at = index;
        for value in values {
            self.insert(at, value)?;
            at += 1;
        }
        Ok(at != index)
    }

    // =========================================================================
    // PROVIDED - REMOVAL
    // =========================================================================

    /// Removes the first element equal to `value`.
    fn remove_item(&mut self, value: &Self::Item) -> bool
    where
        Self::Item: PartialEq,
    {
        match self.index_of(value) {
            Some(index) => self.remove_at(index).is_ok(),
            None => false,
        }
    }

    /// Removes every element contained in `values`.
    fn remove_all(&mut self, values: &[Self::Item]) -> bool
    where
        Self::Item: PartialEq,
    {
        self.retain_with(|item| !values.contains(item), |_, _| {}) > 0
    }

    /// Removes every element not contained in `values`.
    fn retain_all(&mut self, values: &[Self::Item]) -> bool
    where
        Self::Item: PartialEq,
    {
        self.retain_with(|item| values.contains(item), |_, _| {}) > 0
    }

    fn remove_if<F>(&mut self, mut predicate: F) -> bool
    where
        F: FnMut(&Self::Item) -> bool,
    {
        self.retain_with(|item| !predicate(item), |_, _| {}) > 0
    }

    fn retain<F>(&mut self, keep: F) -> bool
    where
        F: FnMut(&Self::Item) -> bool,
    {
        self.retain_with(keep, |_, _| {}) > 0
    }

    /// Single pass in list order removing every element `keep` rejects.
    ///
    /// `on_removed` receives each removed element with the index it held at
    /// the moment of removal. Returns the number removed.
    fn retain_with<F, R>(&mut self, keep: F, on_removed: R) -> usize
    where
        F: FnMut(&Self::Item) -> bool,
        R: FnMut(usize, Self::Item),
    {
        retain_by_index(self, keep, on_removed)
    }

    fn clear(&mut self) {
        self.take_all();
    }

    // =========================================================================
    // PROVIDED - VIEWS
    // =========================================================================

    /// A list cursor positioned before the first element.
    fn cursor(&mut self) -> ListCursor<'_, Self>
    where
        Self: Sized,
    {
        ListCursor::new(self, 0)
    }

    /// A list cursor positioned before `index`.
    fn cursor_at(&mut self, index: usize) -> Result<ListCursor<'_, Self>>
    where
        Self: Sized,
    {
        CollectionError::check_position(index, self.len())?;
        Ok(ListCursor::new(self, index))
    }

    /// A mutable window over `[from, to)`.
    fn sub_list(&mut self, from: usize, to: usize) -> Result<SubList<'_, Self>>
    where
        Self: Sized,
    {
        SubList::new(self, from, to)
    }
}

/// Index-walking filtered removal. O(1) per step on random-access lists.
pub(crate) fn retain_by_index<L, F, R>(list: &mut L, mut keep: F, mut on_removed: R) -> usize
where
    L: ListBase + ?Sized,
    F: FnMut(&L::Item) -> bool,
    R: FnMut(usize, L::Item),
{
    let mut index = 0;
    let mut removed = 0;

    while let Some(item) = list.get(index) {
        if keep(item) {
            index += 1;
            continue;
        }
        match list.remove_at(index) {
            Ok(item) => {
                removed += 1;
                on_removed(index, item);
            }
            Err(_) => break,
        }
    }

    removed
}

// =============================================================================
// STD IMPLEMENTATIONS
// =============================================================================

impl<T> ListBase for Vec<T> {
    type Item = T;

    const RANDOM_ACCESS: bool = true;

    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    fn last(&self) -> Option<&T> {
        self.as_slice().last()
    }

    fn iter(&self) -> impl Iterator<Item = &T> {
        self.as_slice().iter()
    }

    fn push(&mut self, value: T) {
        Vec::push(self, value)
    }

    fn insert(&mut self, index: usize, value: T) -> Result<()> {
        CollectionError::check_position(index, Vec::len(self))?;
        Vec::insert(self, index, value);
        Ok(())
    }

    fn remove_at(&mut self, index: usize) -> Result<T> {
        CollectionError::check_index(index, Vec::len(self))?;
        Ok(Vec::remove(self, index))
    }

    fn replace(&mut self, index: usize, value: T) -> Result<T> {
        let len = Vec::len(self);
        match self.as_mut_slice().get_mut(index) {
            Some(slot) => Ok(std::mem::replace(slot, value)),
            None => Err(CollectionError::IndexOutOfBounds { index, len }),
        }
    }

    fn take_all(&mut self) -> Vec<T> {
        std::mem::take(self)
    }
}

impl<T> ListBase for VecDeque<T> {
    type Item = T;

    const RANDOM_ACCESS: bool = true;

    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    fn get(&self, index: usize) -> Option<&T> {
        VecDeque::get(self, index)
    }

    fn last(&self) -> Option<&T> {
        self.back()
    }

    fn iter(&self) -> impl Iterator<Item = &T> {
        VecDeque::iter(self)
    }

    fn push(&mut self, value: T) {
        self.push_back(value)
    }

    fn insert(&mut self, index: usize, value: T) -> Result<()> {
        CollectionError::check_position(index, VecDeque::len(self))?;
        VecDeque::insert(self, index, value);
        Ok(())
    }

    fn remove_at(&mut self, index: usize) -> Result<T> {
        let len = VecDeque::len(self);
        VecDeque::remove(self, index).ok_or(CollectionError::IndexOutOfBounds { index, len })
    }

    fn replace(&mut self, index: usize, value: T) -> Result<T> {
        let len = VecDeque::len(self);
        match VecDeque::get_mut(self, index) {
            Some(slot) => Ok(std::mem::replace(slot, value)),
            None => Err(CollectionError::IndexOutOfBounds { index, len }),
        }
    }

    fn take_all(&mut self) -> Vec<T> {
        self.drain(..).collect()
    }
}

/// Sequential list: indexed access walks the chain.
impl<T> ListBase for LinkedList<T> {
    type Item = T;

    fn len(&self) -> usize {
        LinkedList::len(self)
    }

    fn get(&self, index: usize) -> Option<&T> {
        LinkedList::iter(self).nth(index)
    }

    fn last(&self) -> Option<&T> {
        self.back()
    }

    fn iter(&self) -> impl Iterator<Item = &T> {
        LinkedList::iter(self)
    }

    fn push(&mut self, value: T) {
        self.push_back(value)
    }

    fn insert(&mut self, index: usize, value: T) -> Result<()> {
        CollectionError::check_position(index, LinkedList::len(self))?;
        let mut tail = self.split_off(index);
        self.push_back(value);
        self.append(&mut tail);
        Ok(())
    }

    fn remove_at(&mut self, index: usize) -> Result<T> {
        let len = LinkedList::len(self);
        CollectionError::check_index(index, len)?;
        let mut tail = self.split_off(index);
        let removed = tail.pop_front();
        self.append(&mut tail);
        removed.ok_or(CollectionError::IndexOutOfBounds { index, len })
    }

    fn replace(&mut self, index: usize, value: T) -> Result<T> {
        let len = LinkedList::len(self);
        match self.iter_mut().nth(index) {
            Some(slot) => Ok(std::mem::replace(slot, value)),
            None => Err(CollectionError::IndexOutOfBounds { index, len }),
        }
    }

    fn take_all(&mut self) -> Vec<T> {
        std::mem::take(self).into_iter().collect()
    }

    /// One pass over the chain, relinking the survivors.
    fn retain_with<F, R>(&mut self, mut keep: F, mut on_removed: R) -> usize
    where
        F: FnMut(&T) -> bool,
        R: FnMut(usize, T),
    {
        let mut kept = LinkedList::new();
        let mut removed = 0;

        while let Some(item) = self.pop_front() {
            if keep(&item) {
                kept.push_back(item);
            } else {
                removed += 1;
                on_removed(kept.len(), item);
            }
        }

        *self = kept;
        removed
    }
}

impl<L> ListBase for &mut L
where
    L: ListBase + ?Sized,
{
    type Item = L::Item;

    const RANDOM_ACCESS: bool = L::RANDOM_ACCESS;

    fn len(&self) -> usize {
        (**self).len()
    }

    fn get(&self, index: usize) -> Option<&L::Item> {
        (**self).get(index)
    }

    fn last(&self) -> Option<&L::Item> {
        (**self).last()
    }

    fn iter(&self) -> impl Iterator<Item = &L::Item> {
        (**self).iter()
    }

    fn push(&mut self, value: L::Item) {
        (**self).push(value)
    }

    fn insert(&mut self, index: usize, value: L::Item) -> Result<()> {
        (**self).insert(index, value)
    }

    fn remove_at(&mut self, index: usize) -> Result<L::Item> {
        (**self).remove_at(index)
    }

    fn replace(&mut self, index: usize, value: L::Item) -> Result<L::Item> {
        (**self).replace(index, value)
    }

    fn take_all(&mut self) -> Vec<L::Item> {
        (**self).take_all()
    }

    fn retain_with<F, R>(&mut self, keep: F, on_removed: R) -> usize
    where
        F: FnMut(&L::Item) -> bool,
        R: FnMut(usize, L::Item),
    {
        (**self).retain_with(keep, on_removed)
    }
}

// =============================================================================
// TESTS
// =============================================================================
