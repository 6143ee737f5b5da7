// ============================================================================
// observable-collections - Observable List, Set and Map Decorators
// ============================================================================
//
// Wrap an existing list, set or map together with an observer. Every read
// passes straight through; every write mutates the wrapped container first
// and then, only if its state actually changed, reports what happened.
//
// - core:        base contracts (ListBase / SetBase / MapBase) and errors
// - observer:    observer traits, event payloads, closure adapters, equality
// - collections: the wrappers, cursors, sub-lists and map views
// ============================================================================

pub mod collections;
pub mod core;
pub mod observer;

// Re-export the contracts and errors at crate root
pub use crate::core::error::{CollectionError, Result};
pub use crate::core::list::ListBase;
pub use crate::core::map::MapBase;
pub use crate::core::set::SetBase;

// Re-export the notification channel
pub use observer::adapters::{
    map_handlers, on_event, on_map_event, signal, EventFn, Handlers, MapEventFn, MapHandlers,
    Signal,
};
pub use observer::equality::{equals, never_equals, safe_equals_f32, safe_equals_f64, EqualsFn};
pub use observer::events::{CollectionEvent, EventKind, MapEvent};
pub use observer::{CollectionObserver, MapObserver};

// Re-export the wrappers
pub use collections::{
    observable_list, observable_list_simple, observable_map, observable_map_simple,
    observable_set, observable_set_simple, Entries, Keys, ListCursor, MapCursor, MapView,
    ObservableList, ObservableMap, ObservableSet, SetCursor, SubList, Values,
};

/// Everything needed to wrap containers and observe them.
///
/// ```
/// use observable_collections::prelude::*;
///
/// let mut list = observable_list_simple(vec![1], || {});
/// list.push(2);
/// assert_eq!(list.len(), 2);
/// ```
pub mod prelude {
    pub use crate::core::{CollectionError, ListBase, MapBase, SetBase};
    pub use crate::collections::{
        observable_list, observable_list_simple, observable_map, observable_map_simple,
        observable_set, observable_set_simple, ObservableList, ObservableMap, ObservableSet,
    };
    pub use crate::observer::{
        map_handlers, on_event, on_map_event, signal, CollectionEvent, CollectionObserver,
        Handlers, MapEvent, MapHandlers, MapObserver,
    };
}

// =============================================================================
// TESTS
// =============================================================================
