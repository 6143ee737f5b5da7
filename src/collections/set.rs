// ============================================================================
// observable-collections - ObservableSet
// A set decorator that notifies when membership actually changes
// ============================================================================

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::core::set::SetBase;
use crate::observer::adapters::{signal, Signal};
use crate::observer::events::CollectionEvent;
use crate::observer::CollectionObserver;

// =============================================================================
// OBSERVABLE SET
// =============================================================================

/// Wraps a [`SetBase`] and reports membership changes to an observer.
///
/// Adding a duplicate or removing a non-member fires nothing. Set events
/// carry no index. Like the base sets' filtered removal, the wrapper needs
/// `T: Clone` so an element can be reported after it has moved into the set.
///
/// # Example
///
/// ```
/// use std::collections::BTreeSet;
/// use observable_collections::prelude::*;
///
/// let mut removed = Vec::new();
/// let mut set = observable_set(
///     BTreeSet::from([3, 1, 2]),
///     Handlers::new().remove(|_, value: &i32| removed.push(*value)),
/// );
///
/// set.remove_all(&[2, 3, 9]);
/// drop(set);
/// assert_eq!(removed, vec![2, 3]);
/// ```
pub struct ObservableSet<S, O> {
    base: S,
    observer: O,
}

impl<S: SetBase, O> ObservableSet<S, O> {
    pub fn new(base: S, observer: O) -> Self {
        Self { base, observer }
    }

    /// The wrapped set, read-only.
    pub fn base(&self) -> &S {
        &self.base
    }

    pub fn into_inner(self) -> S {
        self.base
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }
}

// =============================================================================
// SET CONTRACT
// =============================================================================

impl<S, O> SetBase for ObservableSet<S, O>
where
    S: SetBase,
    S::Item: Clone,
    O: CollectionObserver<S::Item>,
{
    type Item = S::Item;

    fn len(&self) -> usize {
        self.base.len()
    }

    fn contains(&self, value: &S::Item) -> bool {
        self.base.contains(value)
    }

    fn iter(&self) -> impl Iterator<Item = &S::Item> {
        self.base.iter()
    }

    fn insert(&mut self, value: S::Item) -> bool {
        let added = value.clone();
        if !self.base.insert(value) {
            return false;
        }
        CollectionEvent::Added {
            index: None,
            value: &added,
        }
        .dispatch(&mut self.observer);
        true
    }

    fn take(&mut self, value: &S::Item) -> Option<S::Item> {
        let item = self.base.take(value)?;
        CollectionEvent::Removed {
            index: None,
            value: &item,
        }
        .dispatch(&mut self.observer);
        Some(item)
    }

    fn take_all(&mut self) -> Vec<S::Item> {
        let items = self.base.take_all();
        if !items.is_empty() {
            tracing::debug!(len = items.len(), "set cleared");
            CollectionEvent::PreClear { snapshot: &items }.dispatch(&mut self.observer);
            CollectionEvent::PostClear.dispatch(&mut self.observer);
        }
        items
    }
}

// =============================================================================
// DELEGATED TRAITS
// =============================================================================

impl<S, O, R> PartialEq<R> for ObservableSet<S, O>
where
    S: PartialEq<R>,
{
    fn eq(&self, other: &R) -> bool {
        self.base == *other
    }
}

impl<S: Hash, O> Hash for ObservableSet<S, O> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.base.hash(state)
    }
}

impl<S: fmt::Debug, O> fmt::Debug for ObservableSet<S, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.base.fmt(f)
    }
}

// =============================================================================
// FACTORIES
// =============================================================================

/// Wrap a set with a structured observer.
pub fn observable_set<S, O>(base: S, observer: O) -> ObservableSet<S, O>
where
    S: SetBase,
    S::Item: Clone,
    O: CollectionObserver<S::Item>,
{
    ObservableSet::new(base, observer)
}

/// Wrap a set with a zero-argument "something changed" callback.
pub fn observable_set_simple<S, F>(base: S, on_change: F) -> ObservableSet<S, Signal<F>>
where
    S: SetBase,
    S::Item: Clone,
    F: FnMut(),
{
    ObservableSet::new(base, signal(on_change))
}

// =============================================================================
// TESTS
// =============================================================================
