// ============================================================================
// observable-collections - Map Views
// Live, removal-only projections of a map's entries, keys and values
// ============================================================================
//
// One view type serves all three projections. A projection decides what
// the public element of an entry looks like and whether a probe element
// matches an entry; every removal then goes back through the map's own
// `remove_entry`, and `clear` through the map's own `clear`.
// ============================================================================

use std::marker::PhantomData;

use crate::core::error::{CollectionError, Result};
use crate::core::map::MapBase;

// =============================================================================
// PROJECTIONS
// =============================================================================

/// Extracts the public element of a map view from a key/value pair.
pub trait Projection<K, V> {
    /// What iteration yields.
    type Item<'a>
    where
        K: 'a,
        V: 'a;

    /// What `contains` / `remove` / `remove_all` / `retain_all` accept.
    type Element;

    const NAME: &'static str;

    fn project<'a>(key: &'a K, value: &'a V) -> Self::Item<'a>;

    fn matches(element: &Self::Element, key: &K, value: &V) -> bool;
}

/// Key/value pairs. A probe matches only if both halves are equal.
#[derive(Debug, Clone, Copy, Default)]
pub struct Entries;

#[derive(Debug, Clone, Copy, Default)]
pub struct Keys;

/// Values. Removal by value takes the first matching entry in map order.
#[derive(Debug, Clone, Copy, Default)]
pub struct Values;

impl<K: PartialEq, V: PartialEq> Projection<K, V> for Entries {
    type Item<'a>
        = (&'a K, &'a V)
    where
        K: 'a,
        V: 'a;

    type Element = (K, V);

    const NAME: &'static str = "entries";

    fn project<'a>(key: &'a K, value: &'a V) -> (&'a K, &'a V) {
        (key, value)
    }

    fn matches(element: &(K, V), key: &K, value: &V) -> bool {
        element.0 == *key && element.1 == *value
    }
}

impl<K: PartialEq, V> Projection<K, V> for Keys {
    type Item<'a>
        = &'a K
    where
        K: 'a,
        V: 'a;

    type Element = K;

    const NAME: &'static str = "keys";

    fn project<'a>(key: &'a K, _value: &'a V) -> &'a K {
        key
    }

    fn matches(element: &K, key: &K, _value: &V) -> bool {
        element == key
    }
}

impl<K, V: PartialEq> Projection<K, V> for Values {
    type Item<'a>
        = &'a V
    where
        K: 'a,
        V: 'a;

    type Element = V;

    const NAME: &'static str = "values";

    fn project<'a>(_key: &'a K, value: &'a V) -> &'a V {
        value
    }

    fn matches(element: &V, _key: &K, value: &V) -> bool {
        element == value
    }
}

// =============================================================================
// MAP VIEW
// =============================================================================

/// A live projection of a map.
///
/// Reads see the map's current state. Removals go through the map, so on an
/// observable map they notify. Insertion is rejected with
/// [`CollectionError::Unsupported`].
pub struct MapView<'m, M: ?Sized, P> {
    map: &'m mut M,
    projection: PhantomData<P>,
}

impl<'m, M, P> MapView<'m, M, P>
where
    M: MapBase + ?Sized,
    M::Key: Clone,
    P: Projection<M::Key, M::Value>,
{
    pub(crate) fn new(map: &'m mut M) -> Self {
        tracing::debug!(view = P::NAME, len = map.len(), "map view created");
        Self {
            map,
            projection: PhantomData,
        }
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = P::Item<'_>> {
        self.map.iter().map(|(key, value)| P::project(key, value))
    }

    pub fn contains(&self, element: &P::Element) -> bool {
        self.map
            .iter()
            .any(|(key, value)| P::matches(element, key, value))
    }

    /// Removes the first entry matching `element`.
    pub fn remove(&mut self, element: &P::Element) -> bool {
        let key = self
            .map
            .iter()
            .find(|(key, value)| P::matches(element, key, value))
            .map(|(key, _)| key.clone());

        match key {
            Some(key) => self.map.remove_entry(&key).is_some(),
            None => false,
        }
    }

    /// Removes every entry matching any of `elements`.
    pub fn remove_all(&mut self, elements: &[P::Element]) -> bool {
        self.map.retain_with(
            |key, value| !elements.iter().any(|element| P::matches(element, key, value)),
            |_, _| {},
        ) > 0
    }

    /// Removes every entry matching none of `elements`.
    pub fn retain_all(&mut self, elements: &[P::Element]) -> bool {
        self.map.retain_with(
            |key, value| elements.iter().any(|element| P::matches(element, key, value)),
            |_, _| {},
        ) > 0
    }

    /// Clears the underlying map.
    pub fn clear(&mut self) {
        self.map.clear()
    }

    pub fn insert(&mut self, _element: P::Element) -> Result<bool> {
        Err(CollectionError::Unsupported("insert into a map view"))
    }

    pub fn insert_all<I>(&mut self, _elements: I) -> Result<bool>
    where
        I: IntoIterator<Item = P::Element>,
    {
        Err(CollectionError::Unsupported("insert into a map view"))
    }

    pub fn cursor(&mut self) -> MapCursor<'_, M, P> {
        MapCursor::new(&mut *self.map)
    }
}

// =============================================================================
// MAP CURSOR
// =============================================================================

/// Forward cursor over a map view that can remove the current entry.
///
/// Like [`SetCursor`](crate::collections::cursor::SetCursor), it walks by
/// position and remembers the current key.
pub struct MapCursor<'c, M: MapBase + ?Sized, P> {
    map: &'c mut M,
    position: usize,
    current: Option<M::Key>,
    projection: PhantomData<P>,
}

impl<'c, M, P> MapCursor<'c, M, P>
where
    M: MapBase + ?Sized,
    M::Key: Clone,
    P: Projection<M::Key, M::Value>,
{
    fn new(map: &'c mut M) -> Self {
        Self {
            map,
            position: 0,
            current: None,
            projection: PhantomData,
        }
    }

    pub fn has_next(&self) -> bool {
        self.position < self.map.len()
    }

    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Option<P::Item<'_>> {
        let (key, value) = self.map.iter().nth(self.position)?;
        self.position += 1;
        self.current = Some(key.clone());
        Some(P::project(key, value))
    }

    /// Removes the entry last returned by `next`.
    pub fn remove(&mut self) -> Result<(M::Key, M::Value)> {
        let key = self.current.take().ok_or(CollectionError::IllegalState(
            "remove called without a current entry",
        ))?;
        let entry = self.map.remove_entry(&key).ok_or(CollectionError::IllegalState(
            "current entry is no longer in the map",
        ))?;
        self.position = self.position.saturating_sub(1);
        Ok(entry)
    }
}

impl<M> MapCursor<'_, M, Entries>
where
    M: MapBase + ?Sized,
    M::Key: Clone,
{
    /// Overwrites the value of the entry last returned by `next`, returning
    /// the previous value.
    pub fn set_value(&mut self, value: M::Value) -> Result<M::Value> {
        let key = self.current.clone().ok_or(CollectionError::IllegalState(
            "set_value called without a current entry",
        ))?;
        self.map.insert(key, value).ok_or(CollectionError::IllegalState(
            "current entry is no longer in the map",
        ))
    }
}

// =============================================================================
// TESTS
// =============================================================================
