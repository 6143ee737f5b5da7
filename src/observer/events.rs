// ============================================================================
// observable-collections - Events
// Tagged payloads describing exactly what a mutation changed
// ============================================================================

use std::fmt;

use super::{CollectionObserver, MapObserver};

// =============================================================================
// EVENT KIND
// =============================================================================

/// The kind of a dispatched event, without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Added,
    Removed,
    Replaced,
    Put,
    PreClear,
    PostClear,
}

impl EventKind {
    pub fn as_str(self) -> &'static str {
        match self {
            EventKind::Added => "added",
            EventKind::Removed => "removed",
            EventKind::Replaced => "replaced",
            EventKind::Put => "put",
            EventKind::PreClear => "pre_clear",
            EventKind::PostClear => "post_clear",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// COLLECTION EVENT (lists and sets)
// =============================================================================

/// A structured list/set mutation.
///
/// `index` is `Some` for lists and `None` for sets. Payloads borrow from
/// the container (or from the removed/snapshotted values), so observing
/// never requires the element type to be `Clone`.
#[derive(Debug, PartialEq, Eq)]
pub enum CollectionEvent<'a, T> {
    /// An element was inserted.
    Added { index: Option<usize>, value: &'a T },
    /// An element was removed.
    Removed { index: Option<usize>, value: &'a T },
    /// A list slot now holds a value unequal to the one it displaced.
    Replaced { index: usize, old: &'a T, new: &'a T },
    /// The container is being cleared; `snapshot` holds its former contents.
    PreClear { snapshot: &'a [T] },
    /// The container has been cleared.
    PostClear,
}

impl<T> Clone for CollectionEvent<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for CollectionEvent<'_, T> {}

impl<'a, T> CollectionEvent<'a, T> {
    pub fn kind(&self) -> EventKind {
        match self {
            CollectionEvent::Added { .. } => EventKind::Added,
            CollectionEvent::Removed { .. } => EventKind::Removed,
            CollectionEvent::Replaced { .. } => EventKind::Replaced,
            CollectionEvent::PreClear { .. } => EventKind::PreClear,
            CollectionEvent::PostClear => EventKind::PostClear,
        }
    }

    /// The list index carried by the event, if any.
    pub fn index(&self) -> Option<usize> {
        match *self {
            CollectionEvent::Added { index, .. } | CollectionEvent::Removed { index, .. } => index,
            CollectionEvent::Replaced { index, .. } => Some(index),
            CollectionEvent::PreClear { .. } | CollectionEvent::PostClear => None,
        }
    }

    /// Deliver this event to the matching observer method.
    pub fn dispatch<O>(self, observer: &mut O)
    where
        O: CollectionObserver<T> + ?Sized,
    {
        tracing::trace!(kind = self.kind().as_str(), index = ?self.index(), "collection event");

        match self {
            CollectionEvent::Added { index, value } => observer.on_add(index, value),
            CollectionEvent::Removed { index, value } => observer.on_remove(index, value),
            CollectionEvent::Replaced { index, old, new } => observer.on_replace(index, old, new),
            CollectionEvent::PreClear { snapshot } => observer.on_pre_clear(snapshot),
            CollectionEvent::PostClear => observer.on_post_clear(),
        }
    }
}

// =============================================================================
// MAP EVENT
// =============================================================================

/// A structured map mutation.
#[derive(Debug, PartialEq, Eq)]
pub enum MapEvent<'a, K, V> {
    /// `key` now maps to `new`; `old` is `None` if the key was absent.
    Put {
        key: &'a K,
        old: Option<&'a V>,
        new: &'a V,
    },
    /// The entry was removed.
    Removed { key: &'a K, value: &'a V },
    /// The map is being cleared; `snapshot` holds its former entries.
    PreClear { snapshot: &'a [(K, V)] },
    /// The map has been cleared.
    PostClear,
}

impl<K, V> Clone for MapEvent<'_, K, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K, V> Copy for MapEvent<'_, K, V> {}

impl<'a, K, V> MapEvent<'a, K, V> {
    pub fn kind(&self) -> EventKind {
        match self {
            MapEvent::Put { .. } => EventKind::Put,
            MapEvent::Removed { .. } => EventKind::Removed,
            MapEvent::PreClear { .. } => EventKind::PreClear,
            MapEvent::PostClear => EventKind::PostClear,
        }
    }

    /// Deliver this event to the matching observer method.
    pub fn dispatch<O>(self, observer: &mut O)
    where
        O: MapObserver<K, V> + ?Sized,
    {
        tracing::trace!(kind = self.kind().as_str(), "map event");

        match self {
            MapEvent::Put { key, old, new } => observer.on_put(key, old, new),
            MapEvent::Removed { key, value } => observer.on_remove(key, value),
            MapEvent::PreClear { snapshot } => observer.on_pre_clear(snapshot),
            MapEvent::PostClear => observer.on_post_clear(),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
