// ============================================================================
// observable-collections - Notification Channel
// The callbacks a wrapper invokes after a successful mutation
// ============================================================================
//
// One capability per container family:
//
// - CollectionObserver<T>: lists and sets (add / remove / replace / clear)
// - MapObserver<K, V>:     maps (put / remove / clear)
//
// Every method defaults to a no-op, so an observer implements only the
// kinds it cares about. Adapters in `adapters` turn a single closure (or a
// zero-argument signal) into either shape.
// ============================================================================

pub mod adapters;
pub mod equality;
pub mod events;

pub use adapters::{
    map_handlers, on_event, on_map_event, signal, EventFn, Handlers, MapEventFn, MapHandlers,
    Signal,
};
pub use equality::EqualsFn;
pub use events::{CollectionEvent, EventKind, MapEvent};

// =============================================================================
// COLLECTION OBSERVER
// =============================================================================

/// Receives list and set mutations.
///
/// Methods run synchronously, after the base container has changed and
/// before the mutating call returns. They cannot reach back into the
/// wrapper that is notifying them.
pub trait CollectionObserver<T> {
    /// An element was added; `index` is `Some` for lists.
    fn on_add(&mut self, index: Option<usize>, value: &T) {
        let _ = (index, value);
    }

    /// An element was removed; `index` is `Some` for lists.
    fn on_remove(&mut self, index: Option<usize>, value: &T) {
        let _ = (index, value);
    }

    /// A list slot was overwritten with an unequal value.
    fn on_replace(&mut self, index: usize, old: &T, new: &T) {
        let _ = (index, old, new);
    }

    /// A non-empty container is being cleared.
    fn on_pre_clear(&mut self, snapshot: &[T]) {
        let _ = snapshot;
    }

    /// A non-empty container has been cleared.
    fn on_post_clear(&mut self) {}
}

impl<T, O> CollectionObserver<T> for &mut O
where
    O: CollectionObserver<T> + ?Sized,
{
    fn on_add(&mut self, index: Option<usize>, value: &T) {
        (**self).on_add(index, value)
    }

    fn on_remove(&mut self, index: Option<usize>, value: &T) {
        (**self).on_remove(index, value)
    }

    fn on_replace(&mut self, index: usize, old: &T, new: &T) {
        (**self).on_replace(index, old, new)
    }

    fn on_pre_clear(&mut self, snapshot: &[T]) {
        (**self).on_pre_clear(snapshot)
    }

    fn on_post_clear(&mut self) {
        (**self).on_post_clear()
    }
}

impl<T, O> CollectionObserver<T> for Box<O>
where
    O: CollectionObserver<T> + ?Sized,
{
    fn on_add(&mut self, index: Option<usize>, value: &T) {
        (**self).on_add(index, value)
    }

    fn on_remove(&mut self, index: Option<usize>, value: &T) {
        (**self).on_remove(index, value)
    }

    fn on_replace(&mut self, index: usize, old: &T, new: &T) {
        (**self).on_replace(index, old, new)
    }

    fn on_pre_clear(&mut self, snapshot: &[T]) {
        (**self).on_pre_clear(snapshot)
    }

    fn on_post_clear(&mut self) {
        (**self).on_post_clear()
    }
}

/// Observer that ignores everything.
impl<T> CollectionObserver<T> for () {}

// =============================================================================
// MAP OBSERVER
// =============================================================================

/// Receives map mutations.
pub trait MapObserver<K, V> {
    /// `key` now maps to `new`. `old` is `None` when the key was absent.
    fn on_put(&mut self, key: &K, old: Option<&V>, new: &V) {
        let _ = (key, old, new);
    }

    /// The entry for `key` was removed.
    fn on_remove(&mut self, key: &K, value: &V) {
        let _ = (key, value);
    }

    /// A non-empty map is being cleared.
    fn on_pre_clear(&mut self, snapshot: &[(K, V)]) {
        let _ = snapshot;
    }

    /// A non-empty map has been cleared.
    fn on_post_clear(&mut self) {}
}

impl<K, V, O> MapObserver<K, V> for &mut O
where
    O: MapObserver<K, V> + ?Sized,
{
    fn on_put(&mut self, key: &K, old: Option<&V>, new: &V) {
        (**self).on_put(key, old, new)
    }

    fn on_remove(&mut self, key: &K, value: &V) {
        (**self).on_remove(key, value)
    }

    fn on_pre_clear(&mut self, snapshot: &[(K, V)]) {
        (**self).on_pre_clear(snapshot)
    }

    fn on_post_clear(&mut self) {
        (**self).on_post_clear()
    }
}

impl<K, V, O> MapObserver<K, V> for Box<O>
where
    O: MapObserver<K, V> + ?Sized,
{
    fn on_put(&mut self, key: &K, old: Option<&V>, new: &V) {
        (**self).on_put(key, old, new)
    }

    fn on_remove(&mut self, key: &K, value: &V) {
        (**self).on_remove(key, value)
    }

    fn on_pre_clear(&mut self, snapshot: &[(K, V)]) {
        (**self).on_pre_clear(snapshot)
    }

    fn on_post_clear(&mut self) {
        (**self).on_post_clear()
    }
}

impl<K, V> MapObserver<K, V> for () {}

// =============================================================================
// TESTS
// =============================================================================
