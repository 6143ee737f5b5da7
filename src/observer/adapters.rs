// ============================================================================
// observable-collections - Observer Adapters
// Closures, simple signals and per-kind handler builders
// ============================================================================

use super::events::{CollectionEvent, MapEvent};
use super::{CollectionObserver, MapObserver};

// =============================================================================
// SINGLE CLOSURE OVER THE TAGGED EVENT
// =============================================================================

/// Adapts one closure receiving [`CollectionEvent`] into a [`CollectionObserver`].
pub struct EventFn<F>(F);

/// Observe a list or set with a single closure.
///
/// # Example
///
/// ```
/// use observable_collections::prelude::*;
///
/// let mut log = Vec::new();
/// let mut list = observable_list(vec![1, 2], on_event(|event: CollectionEvent<'_, i32>| {
///     log.push(event.index());
/// }));
/// list.push(3);
/// drop(list);
/// assert_eq!(log, vec![Some(2)]);
/// ```
pub fn on_event<T, F>(f: F) -> EventFn<F>
where
    F: FnMut(CollectionEvent<'_, T>),
{
    EventFn(f)
}

impl<T, F> CollectionObserver<T> for EventFn<F>
where
    F: FnMut(CollectionEvent<'_, T>),
{
    fn on_add(&mut self, index: Option<usize>, value: &T) {
        (self.0)(CollectionEvent::Added { index, value })
    }

    fn on_remove(&mut self, index: Option<usize>, value: &T) {
        (self.0)(CollectionEvent::Removed { index, value })
    }

    fn on_replace(&mut self, index: usize, old: &T, new: &T) {
        (self.0)(CollectionEvent::Replaced { index, old, new })
    }

    fn on_pre_clear(&mut self, snapshot: &[T]) {
        (self.0)(CollectionEvent::PreClear { snapshot })
    }

    fn on_post_clear(&mut self) {
        (self.0)(CollectionEvent::PostClear)
    }
}

/// Adapts one closure receiving [`MapEvent`] into a [`MapObserver`].
pub struct MapEventFn<F>(F);

/// Observe a map with a single closure.
pub fn on_map_event<K, V, F>(f: F) -> MapEventFn<F>
where
    F: FnMut(MapEvent<'_, K, V>),
{
    MapEventFn(f)
}

impl<K, V, F> MapObserver<K, V> for MapEventFn<F>
where
    F: FnMut(MapEvent<'_, K, V>),
{
    fn on_put(&mut self, key: &K, old: Option<&V>, new: &V) {
        (self.0)(MapEvent::Put { key, old, new })
    }

    fn on_remove(&mut self, key: &K, value: &V) {
        (self.0)(MapEvent::Removed { key, value })
    }

    fn on_pre_clear(&mut self, snapshot: &[(K, V)]) {
        (self.0)(MapEvent::PreClear { snapshot })
    }

    fn on_post_clear(&mut self) {
        (self.0)(MapEvent::PostClear)
    }
}

// =============================================================================
// SIMPLE SIGNAL
// =============================================================================

/// A zero-information "something changed" callback.
///
/// Fires once per element-level change and once per clear (on the
/// post-clear half of the pair).
pub struct Signal<F>(F);

/// Wrap a zero-argument closure as an observer for any container.
pub fn signal<F: FnMut()>(f: F) -> Signal<F> {
    Signal(f)
}

impl<T, F: FnMut()> CollectionObserver<T> for Signal<F> {
    fn on_add(&mut self, _index: Option<usize>, _value: &T) {
        (self.0)()
    }

    fn on_remove(&mut self, _index: Option<usize>, _value: &T) {
        (self.0)()
    }

    fn on_replace(&mut self, _index: usize, _old: &T, _new: &T) {
        (self.0)()
    }

    fn on_post_clear(&mut self) {
        (self.0)()
    }
}

impl<K, V, F: FnMut()> MapObserver<K, V> for Signal<F> {
    fn on_put(&mut self, _key: &K, _old: Option<&V>, _new: &V) {
        (self.0)()
    }

    fn on_remove(&mut self, _key: &K, _value: &V) {
        (self.0)()
    }

    fn on_post_clear(&mut self) {
        (self.0)()
    }
}

// =============================================================================
// PER-KIND HANDLERS (lists and sets)
// =============================================================================

type ElementHandler<'f, T> = Box<dyn FnMut(Option<usize>, &T) + 'f>;
type ReplaceHandler<'f, T> = Box<dyn FnMut(usize, &T, &T) + 'f>;
type ClearHandler<'f, T> = Box<dyn FnMut(&[T]) + 'f>;

/// Builder registering one closure per event kind.
///
/// Kinds without a handler are ignored.
///
/// # Example
///
/// ```
/// use std::cell::Cell;
/// use observable_collections::prelude::*;
///
/// let added = Cell::new(0);
/// let handlers = Handlers::new().add(|_index, _value| added.set(added.get() + 1));
///
/// let mut tags = observable_set(std::collections::BTreeSet::from(["a"]), handlers);
/// tags.insert("a");
/// tags.insert("b");
/// assert_eq!(added.get(), 1);
/// ```
pub struct Handlers<'f, T> {
    add: Option<ElementHandler<'f, T>>,
    remove: Option<ElementHandler<'f, T>>,
    replace: Option<ReplaceHandler<'f, T>>,
    clear: Option<ClearHandler<'f, T>>,
}

impl<'f, T> Handlers<'f, T> {
    pub fn new() -> Self {
        Self {
            add: None,
            remove: None,
            replace: None,
            clear: None,
        }
    }

    pub fn add(mut self, f: impl FnMut(Option<usize>, &T) + 'f) -> Self {
        self.add = Some(Box::new(f));
        self
    }

    pub fn remove(mut self, f: impl FnMut(Option<usize>, &T) + 'f) -> Self {
        self.remove = Some(Box::new(f));
        self
    }

    pub fn replace(mut self, f: impl FnMut(usize, &T, &T) + 'f) -> Self {
        self.replace = Some(Box::new(f));
        self
    }

    /// Called with the former contents when a non-empty container is cleared.
    pub fn clear(mut self, f: impl FnMut(&[T]) + 'f) -> Self {
        self.clear = Some(Box::new(f));
        self
    }
}

impl<T> Default for Handlers<'_, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> CollectionObserver<T> for Handlers<'_, T> {
    fn on_add(&mut self, index: Option<usize>, value: &T) {
        if let Some(f) = self.add.as_mut() {
            f(index, value);
        }
    }

    fn on_remove(&mut self, index: Option<usize>, value: &T) {
        if let Some(f) = self.remove.as_mut() {
            f(index, value);
        }
    }

    fn on_replace(&mut self, index: usize, old: &T, new: &T) {
        if let Some(f) = self.replace.as_mut() {
            f(index, old, new);
        }
    }

    fn on_pre_clear(&mut self, snapshot: &[T]) {
        if let Some(f) = self.clear.as_mut() {
            f(snapshot);
        }
    }
}

// =============================================================================
// PER-KIND HANDLERS (maps)
// =============================================================================

type PutHandler<'f, K, V> = Box<dyn FnMut(&K, Option<&V>, &V) + 'f>;
type EntryHandler<'f, K, V> = Box<dyn FnMut(&K, &V) + 'f>;
type EntriesHandler<'f, K, V> = Box<dyn FnMut(&[(K, V)]) + 'f>;
type PostClearHandler<'f> = Box<dyn FnMut() + 'f>;

/// Builder registering one closure per map event kind.
pub struct MapHandlers<'f, K, V> {
    put: Option<PutHandler<'f, K, V>>,
    remove: Option<EntryHandler<'f, K, V>>,
    pre_clear: Option<EntriesHandler<'f, K, V>>,
    post_clear: Option<PostClearHandler<'f>>,
}

/// Start an empty [`MapHandlers`] builder.
pub fn map_handlers<'f, K, V>() -> MapHandlers<'f, K, V> {
    MapHandlers::new()
}

impl<'f, K, V> MapHandlers<'f, K, V> {
    pub fn new() -> Self {
        Self {
            put: None,
            remove: None,
            pre_clear: None,
            post_clear: None,
        }
    }

    pub fn put(mut self, f: impl FnMut(&K, Option<&V>, &V) + 'f) -> Self {
        self.put = Some(Box::new(f));
        self
    }

    pub fn remove(mut self, f: impl FnMut(&K, &V) + 'f) -> Self {
        self.remove = Some(Box::new(f));
        self
    }

    pub fn pre_clear(mut self, f: impl FnMut(&[(K, V)]) + 'f) -> Self {
        self.pre_clear = Some(Box::new(f));
        self
    }

    pub fn post_clear(mut self, f: impl FnMut() + 'f) -> Self {
        self.post_clear = Some(Box::new(f));
        self
    }
}

impl<K, V> Default for MapHandlers<'_, K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> MapObserver<K, V> for MapHandlers<'_, K, V> {
    fn on_put(&mut self, key: &K, old: Option<&V>, new: &V) {
        if let Some(f) = self.put.as_mut() {
            f(key, old, new);
        }
    }

    fn on_remove(&mut self, key: &K, value: &V) {
        if let Some(f) = self.remove.as_mut() {
            f(key, value);
        }
    }

    fn on_pre_clear(&mut self, snapshot: &[(K, V)]) {
        if let Some(f) = self.pre_clear.as_mut() {
            f(snapshot);
        }
    }

    fn on_post_clear(&mut self) {
        if let Some(f) = self.post_clear.as_mut() {
            f();
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observer::EventKind;

    #[test]
    fn event_fn_builds_tagged_events() {
        let mut kinds = Vec::new();
        {
            let mut observer = on_event(|event: CollectionEvent<'_, i32>| kinds.push(event.kind()));
            observer.on_add(Some(0), &1);
            observer.on_replace(0, &1, &2);
            observer.on_pre_clear(&[2]);
            observer.on_post_clear();
        }
        assert_eq!(
            kinds,
            vec![
                EventKind::Added,
                EventKind::Replaced,
                EventKind::PreClear,
                EventKind::PostClear
            ]
        );
    }

    #[test]
    fn signal_fires_once_per_clear() {
        let mut count = 0;
        {
            let mut observer = signal(|| count += 1);
            CollectionObserver::<i32>::on_pre_clear(&mut observer, &[1, 2, 3]);
            CollectionObserver::<i32>::on_post_clear(&mut observer);
            MapObserver::<i32, i32>::on_put(&mut observer, &1, None, &2);
        }
        assert_eq!(count, 2);
    }

    #[test]
    fn handlers_ignore_unregistered_kinds() {
        let mut removed = Vec::new();
        {
            let mut handlers = Handlers::new().remove(|index, value: &i32| {
                removed.push((index, *value));
            });
            handlers.on_add(Some(0), &10);
            handlers.on_remove(Some(1), &20);
            handlers.on_pre_clear(&[1]);
        }
        assert_eq!(removed, vec![(Some(1), 20)]);
    }

    #[test]
    fn concrete_handlers_answer_observer_calls() {
        let log = std::cell::RefCell::new(Vec::new());
        {
            let mut handlers = Handlers::new()
                .add(|_, value: &char| log.borrow_mut().push(format!("add {value}")))
                .replace(|index, old, new| {
                    log.borrow_mut().push(format!("replace {index} {old}->{new}"))
                })
                .clear(|former| log.borrow_mut().push(format!("clear {}", former.len())));
            handlers.on_add(Some(0), &'a');
            handlers.on_replace(0, &'a', &'b');
            handlers.on_remove(Some(0), &'b');
            handlers.on_pre_clear(&['x', 'y']);
            handlers.on_post_clear();
        }
        assert_eq!(log.into_inner(), vec!["add a", "replace 0 a->b", "clear 2"]);
    }

    #[test]
    fn map_handlers_route_pre_and_post_clear() {
        let mut seen = Vec::new();
        let mut posts = 0;
        {
            let mut handlers = map_handlers()
                .pre_clear(|snapshot: &[(u8, i32)]| seen.extend_from_slice(snapshot))
                .post_clear(|| posts += 1);
            handlers.on_pre_clear(&[(1, 1)]);
            handlers.on_post_clear();
            handlers.on_put(&2, None, &2);
        }
        assert_eq!(seen, vec![(1, 1)]);
        assert_eq!(posts, 1);
    }
}
