// ============================================================================
// observable-collections - MapBase
// The mutable-map contract consumed (and re-implemented) by the wrappers
// ============================================================================

use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

use crate::collections::views::{Entries, Keys, MapView, Values};

// =============================================================================
// MAP BASE
// =============================================================================

/// A mutable key/value map.
///
/// The live views returned by [`entries_view`](MapBase::entries_view),
/// [`keys_view`](MapBase::keys_view) and [`values_view`](MapBase::values_view)
/// remove through [`remove_entry`](MapBase::remove_entry) and clear through
/// [`take_all`](MapBase::take_all), so whatever those primitives do (notify,
/// for the observable map) views do as well.
///
/// # Example
///
/// ```
/// use std::collections::BTreeMap;
/// use observable_collections::MapBase;
///
/// let mut scores = BTreeMap::from([("ann", 3), ("bob", 5), ("cid", 3)]);
/// assert!(scores.values_view().remove_all(&[3]));
/// assert_eq!(scores.into_iter().collect::<Vec<_>>(), vec![("bob", 5)]);
/// ```
pub trait MapBase {
    type Key;
    type Value;

    fn len(&self) -> usize;

    fn get(&self, key: &Self::Key) -> Option<&Self::Value>;

    fn iter(&self) -> impl Iterator<Item = (&Self::Key, &Self::Value)>;

    /// Maps `key` to `value`, returning the value it displaced.
    fn insert(&mut self, key: Self::Key, value: Self::Value) -> Option<Self::Value>;

    fn remove_entry(&mut self, key: &Self::Key) -> Option<(Self::Key, Self::Value)>;

    /// Removes every entry, returning them in iteration order.
    fn take_all(&mut self) -> Vec<(Self::Key, Self::Value)>;

    // =========================================================================
    // PROVIDED
    // =========================================================================

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn contains_key(&self, key: &Self::Key) -> bool {
        self.get(key).is_some()
    }

    fn remove(&mut self, key: &Self::Key) -> Option<Self::Value> {
        self.remove_entry(key).map(|(_, value)| value)
    }

    /// Inserts every entry in the order given.
    fn insert_all<I>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (Self::Key, Self::Value)>,
    {
        for (key, value) in entries {
            self.insert(key, value);
        }
    }

    fn keys(&self) -> impl Iterator<Item = &Self::Key> {
        self.iter().map(|(key, _)| key)
    }

    fn values(&self) -> impl Iterator<Item = &Self::Value> {
        self.iter().map(|(_, value)| value)
    }

    /// Removes every entry `keep` rejects, handing each to `on_removed` in
    /// the map's own iteration order. Returns the number removed.
    fn retain_with<F, R>(&mut self, mut keep: F, mut on_removed: R) -> usize
    where
        Self::Key: Clone,
        F: FnMut(&Self::Key, &Self::Value) -> bool,
        R: FnMut(Self::Key, Self::Value),
    {
        let rejected: Vec<Self::Key> = self
            .iter()
            .filter(|(key, value)| !keep(*key, *value))
            .map(|(key, _)| key.clone())
            .collect();

        let mut removed = 0;
        for key in rejected {
            if let Some((key, value)) = self.remove_entry(&key) {
                removed += 1;
                on_removed(key, value);
            }
        }
        removed
    }

    fn clear(&mut self) {
        self.take_all();
    }

    // =========================================================================
    // PROVIDED - LIVE VIEWS
    // =========================================================================

    fn entries_view(&mut self) -> MapView<'_, Self, Entries>
    where
        Self: Sized,
        Self::Key: Clone + PartialEq,
        Self::Value: PartialEq,
    {
        MapView::new(self)
    }

    fn keys_view(&mut self) -> MapView<'_, Self, Keys>
    where
        Self: Sized,
        Self::Key: Clone + PartialEq,
    {
        MapView::new(self)
    }

    fn values_view(&mut self) -> MapView<'_, Self, Values>
    where
        Self: Sized,
        Self::Key: Clone,
        Self::Value: PartialEq,
    {
        MapView::new(self)
    }
}

// =============================================================================
// STD IMPLEMENTATIONS
// =============================================================================

impl<K, V, S> MapBase for HashMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    type Key = K;
    type Value = V;

    fn len(&self) -> usize {
        HashMap::len(self)
    }

    fn get(&self, key: &K) -> Option<&V> {
        HashMap::get(self, key)
    }

    fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        HashMap::iter(self)
    }

    fn insert(&mut self, key: K, value: V) -> Option<V> {
        HashMap::insert(self, key, value)
    }

    fn remove_entry(&mut self, key: &K) -> Option<(K, V)> {
        HashMap::remove_entry(self, key)
    }

    fn take_all(&mut self) -> Vec<(K, V)> {
        self.drain().collect()
    }
}

impl<K: Ord, V> MapBase for BTreeMap<K, V> {
    type Key = K;
    type Value = V;

    fn len(&self) -> usize {
        BTreeMap::len(self)
    }

    fn get(&self, key: &K) -> Option<&V> {
        BTreeMap::get(self, key)
    }

    fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        BTreeMap::iter(self)
    }

    fn insert(&mut self, key: K, value: V) -> Option<V> {
        BTreeMap::insert(self, key, value)
    }

    fn remove_entry(&mut self, key: &K) -> Option<(K, V)> {
        BTreeMap::remove_entry(self, key)
    }

    fn take_all(&mut self) -> Vec<(K, V)> {
        std::mem::take(self).into_iter().collect()
    }
}

impl<M> MapBase for &mut M
where
    M: MapBase + ?Sized,
{
    type Key = M::Key;
    type Value = M::Value;

    fn len(&self) -> usize {
        (**self).len()
    }

    fn get(&self, key: &M::Key) -> Option<&M::Value> {
        (**self).get(key)
    }

    fn iter(&self) -> impl Iterator<Item = (&M::Key, &M::Value)> {
        (**self).iter()
    }

    fn insert(&mut self, key: M::Key, value: M::Value) -> Option<M::Value> {
        (**self).insert(key, value)
    }

    fn remove_entry(&mut self, key: &M::Key) -> Option<(M::Key, M::Value)> {
        (**self).remove_entry(key)
    }

    fn take_all(&mut self) -> Vec<(M::Key, M::Value)> {
        (**self).take_all()
    }
}

// =============================================================================
// TESTS
// =============================================================================
