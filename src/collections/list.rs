// ============================================================================
// observable-collections - ObservableList
// A list decorator that notifies after every successful mutation
// ============================================================================

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::core::error::Result;
use crate::core::list::{retain_by_index, ListBase};
use crate::observer::adapters::{signal, Signal};
use crate::observer::equality::{equals, EqualsFn};
use crate::observer::events::CollectionEvent;
use crate::observer::CollectionObserver;

// =============================================================================
// OBSERVABLE LIST
// =============================================================================

/// Wraps a [`ListBase`] and reports every change to an observer.
///
/// Reads go straight to the base list. Writes mutate the base list first
/// and then, only if something changed, call the observer:
///
/// - `push` / `insert` / `insert_all` / `extend_from`: one add per element,
///   carrying the index it landed at
/// - `remove_at` / `remove_item` / bulk removal: one remove per element,
///   carrying the index it held when removed, in list order
/// - `replace`: one replace, unless the new value equals the old one
/// - `clear` / `take_all`: a pre-clear with the former contents, then a
///   post-clear; nothing at all when the list was already empty
///
/// `ObservableList` is itself a `ListBase`, so cursors and sub-lists taken
/// from it notify too.
///
/// # Example
///
/// ```
/// use observable_collections::prelude::*;
///
/// let mut changes = 0;
/// let mut list = observable_list_simple(vec!["a", "b"], || changes += 1);
///
/// list.sub_list(0, 2).unwrap().insert(1, "m").unwrap();
/// list.replace(0, "a").unwrap();
/// assert_eq!(list, vec!["a", "m", "b"]);
/// drop(list);
/// assert_eq!(changes, 1);
/// ```
pub struct ObservableList<L: ListBase, O> {
    base: L,
    observer: O,
    equals: EqualsFn<L::Item>,
}

impl<L, O> ObservableList<L, O>
where
    L: ListBase,
    L::Item: PartialEq,
{
    /// Wrap `base`, using `PartialEq` to decide whether a replace changed anything.
    pub fn new(base: L, observer: O) -> Self {
        Self::with_equals(base, observer, equals)
    }
}

impl<L: ListBase, O> ObservableList<L, O> {
    /// Wrap `base` with a custom change-detection function.
    pub fn with_equals(base: L, observer: O, equals: EqualsFn<L::Item>) -> Self {
        Self {
            base,
            observer,
            equals,
        }
    }

    /// The wrapped list. Mutating it directly would bypass notification,
    /// so only shared access is offered.
    pub fn base(&self) -> &L {
        &self.base
    }

    pub fn into_inner(self) -> L {
        self.base
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    /// Whether the base list has O(1) indexed access.
    pub fn is_random_access(&self) -> bool {
        L::RANDOM_ACCESS
    }
}

// =============================================================================
// LIST CONTRACT
// =============================================================================

impl<L, O> ListBase for ObservableList<L, O>
where
    L: ListBase,
    O: CollectionObserver<L::Item>,
{
    type Item = L::Item;

    const RANDOM_ACCESS: bool = L::RANDOM_ACCESS;

    fn len(&self) -> usize {
        self.base.len()
    }

    fn get(&self, index: usize) -> Option<&L::Item> {
        self.base.get(index)
    }

    fn last(&self) -> Option<&L::Item> {
        self.base.last()
    }

    fn iter(&self) -> impl Iterator<Item = &L::Item> {
        self.base.iter()
    }

    fn push(&mut self, value: L::Item) {
        self.base.push(value);
        let index = self.base.len().saturating_sub(1);
        if let Some(value) = self.base.last() {
            CollectionEvent::Added {
                index: Some(index),
                value,
            }
            .dispatch(&mut self.observer);
        }
    }

    fn insert(&mut self, index: usize, value: L::Item) -> Result<()> {
        self.base.insert(index, value)?;
        if let Some(value) = self.base.get(index) {
            CollectionEvent::Added {
                index: Some(index),
                value,
            }
            .dispatch(&mut self.observer);
        }
        Ok(())
    }

    fn remove_at(&mut self, index: usize) -> Result<L::Item> {
        let item = self.base.remove_at(index)?;
        CollectionEvent::Removed {
            index: Some(index),
            value: &item,
        }
        .dispatch(&mut self.observer);
        Ok(item)
    }

    fn replace(&mut self, index: usize, value: L::Item) -> Result<L::Item> {
        let old = self.base.replace(index, value)?;
        if let Some(new) = self.base.get(index) {
            if !(self.equals)(&old, new) {
                CollectionEvent::Replaced {
                    index,
                    old: &old,
                    new,
                }
                .dispatch(&mut self.observer);
            }
        }
        Ok(old)
    }

    fn take_all(&mut self) -> Vec<L::Item> {
        let items = self.base.take_all();
        if !items.is_empty() {
            tracing::debug!(len = items.len(), "list cleared");
            CollectionEvent::PreClear { snapshot: &items }.dispatch(&mut self.observer);
            CollectionEvent::PostClear.dispatch(&mut self.observer);
        }
        items
    }

    /// Random-access bases are walked by index through this wrapper's own
    /// `remove_at`; sequential bases run their single-pass removal with a
    /// notifying callback.
    fn retain_with<F, R>(&mut self, keep: F, mut on_removed: R) -> usize
    where
        F: FnMut(&L::Item) -> bool,
        R: FnMut(usize, L::Item),
    {
        if L::RANDOM_ACCESS {
            return retain_by_index(self, keep, on_removed);
        }

        let observer = &mut self.observer;
        self.base.retain_with(keep, |index, item| {
            CollectionEvent::Removed {
                index: Some(index),
                value: &item,
            }
            .dispatch(observer);
            on_removed(index, item);
        })
    }
}

// =============================================================================
// DELEGATED TRAITS
// =============================================================================

impl<L, O, R> PartialEq<R> for ObservableList<L, O>
where
    L: ListBase + PartialEq<R>,
{
    fn eq(&self, other: &R) -> bool {
        self.base == *other
    }
}

impl<L: ListBase + Hash, O> Hash for ObservableList<L, O> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.base.hash(state)
    }
}

impl<L: ListBase + fmt::Debug, O> fmt::Debug for ObservableList<L, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.base.fmt(f)
    }
}

// =============================================================================
// FACTORIES
// =============================================================================

/// Wrap a list with a structured observer.
pub fn observable_list<L, O>(base: L, observer: O) -> ObservableList<L, O>
where
    L: ListBase,
    L::Item: PartialEq,
    O: CollectionObserver<L::Item>,
{
    ObservableList::new(base, observer)
}

/// Wrap a list with a zero-argument "something changed" callback.
pub fn observable_list_simple<L, F>(base: L, on_change: F) -> ObservableList<L, Signal<F>>
where
    L: ListBase,
    L::Item: PartialEq,
    F: FnMut(),
{
    ObservableList::new(base, signal(on_change))
}

// =============================================================================
// TESTS
// =============================================================================
