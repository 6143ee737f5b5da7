// ============================================================================
// observable-collections - ObservableMap
// A map decorator that notifies on puts that change a value and on removals
// ============================================================================

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::core::map::MapBase;
use crate::observer::adapters::{signal, Signal};
use crate::observer::equality::{equals, EqualsFn};
use crate::observer::events::MapEvent;
use crate::observer::MapObserver;

// =============================================================================
// OBSERVABLE MAP
// =============================================================================

/// Wraps a [`MapBase`] and reports changes to an observer.
///
/// - `insert` fires a put when the key was absent, or when the new value is
///   unequal to the one it displaced
/// - `remove` / `remove_entry` fire a remove only if the key was present
/// - `clear` fires a pre-clear with every former entry, then a post-clear
///
/// The entry, key and value views borrowed from an `ObservableMap` remove
/// through the wrapper and therefore notify the same way.
///
/// # Example
///
/// ```
/// use std::collections::HashMap;
/// use observable_collections::prelude::*;
///
/// let mut puts = Vec::new();
/// let mut map = observable_map(
///     HashMap::from([("x", 1)]),
///     map_handlers().put(|_key, old: Option<&i32>, new: &i32| puts.push((old.copied(), *new))),
/// );
///
/// map.insert("x", 2);
/// map.insert("x", 2);
/// drop(map);
/// assert_eq!(puts, vec![(Some(1), 2)]);
/// ```
pub struct ObservableMap<M: MapBase, O> {
    base: M,
    observer: O,
    equals: EqualsFn<M::Value>,
}

impl<M, O> ObservableMap<M, O>
where
    M: MapBase,
    M::Value: PartialEq,
{
    /// Wrap `base`, using `PartialEq` to decide whether a put changed anything.
    pub fn new(base: M, observer: O) -> Self {
        Self::with_equals(base, observer, equals)
    }
}

impl<M: MapBase, O> ObservableMap<M, O> {
    /// Wrap `base` with a custom value-change detection function.
    pub fn with_equals(base: M, observer: O, equals: EqualsFn<M::Value>) -> Self {
        Self {
            base,
            observer,
            equals,
        }
    }

    /// The wrapped map, read-only.
    pub fn base(&self) -> &M {
        &self.base
    }

    pub fn into_inner(self) -> M {
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
// MAP CONTRACT
// =============================================================================

impl<M, O> MapBase for ObservableMap<M, O>
where
    M: MapBase,
    M::Key: Clone,
    O: MapObserver<M::Key, M::Value>,
{
    type Key = M::Key;
    type Value = M::Value;

    fn len(&self) -> usize {
        self.base.len()
    }

    fn get(&self, key: &M::Key) -> Option<&M::Value> {
        self.base.get(key)
    }

    fn iter(&self) -> impl Iterator<Item = (&M::Key, &M::Value)> {
        self.base.iter()
    }

    fn insert(&mut self, key: M::Key, value: M::Value) -> Option<M::Value> {
        let old = self.base.insert(key.clone(), value);
        if let Some(new) = self.base.get(&key) {
            let changed = match &old {
                Some(old) => !(self.equals)(old, new),
                None => true,
            };
            if changed {
                MapEvent::Put {
                    key: &key,
                    old: old.as_ref(),
                    new,
                }
                .dispatch(&mut self.observer);
            }
        }
        old
    }

    fn remove_entry(&mut self, key: &M::Key) -> Option<(M::Key, M::Value)> {
        let (key, value) = self.base.remove_entry(key)?;
        MapEvent::Removed {
            key: &key,
            value: &value,
        }
        .dispatch(&mut self.observer);
        Some((key, value))
    }

    fn take_all(&mut self) -> Vec<(M::Key, M::Value)> {
        let entries = self.base.take_all();
        if !entries.is_empty() {
            tracing::debug!(len = entries.len(), "map cleared");
            MapEvent::PreClear { snapshot: &entries }.dispatch(&mut self.observer);
            MapEvent::PostClear.dispatch(&mut self.observer);
        }
        entries
    }
}

// =============================================================================
// DELEGATED TRAITS
// =============================================================================

impl<M, O, R> PartialEq<R> for ObservableMap<M, O>
where
    M: MapBase + PartialEq<R>,
{
    fn eq(&self, other: &R) -> bool {
        self.base == *other
    }
}

impl<M: MapBase + Hash, O> Hash for ObservableMap<M, O> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.base.hash(state)
    }
}

impl<M: MapBase + fmt::Debug, O> fmt::Debug for ObservableMap<M, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.base.fmt(f)
    }
}

// =============================================================================
// FACTORIES
// =============================================================================

/// Wrap a map with a structured observer.
pub fn observable_map<M, O>(base: M, observer: O) -> ObservableMap<M, O>
where
    M: MapBase,
    M::Key: Clone,
    M::Value: PartialEq,
    O: MapObserver<M::Key, M::Value>,
{
    ObservableMap::new(base, observer)
}

/// Wrap a map with a zero-argument "something changed" callback.
pub fn observable_map_simple<M, F>(base: M, on_change: F) -> ObservableMap<M, Signal<F>>
where
    M: MapBase,
    M::Key: Clone,
    M::Value: PartialEq,
    F: FnMut(),
{
    ObservableMap::new(base, signal(on_change))
}

// =============================================================================
// TESTS
// =============================================================================
