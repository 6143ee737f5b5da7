// Shared observers for the integration tests: they record owned copies of
// every event so tests can assert on the exact sequence after the fact.
#![allow(dead_code)]

use observable_collections::{CollectionObserver, MapObserver};

// =============================================================================
// LIST / SET RECORDER
// =============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum Change<T> {
    Added(Option<usize>, T),
    Removed(Option<usize>, T),
    Replaced(usize, T, T),
    PreClear(Vec<T>),
    PostClear,
}

#[derive(Debug)]
pub struct Recorder<T> {
    pub changes: Vec<Change<T>>,
}

impl<T> Recorder<T> {
    pub fn new() -> Self {
        Self {
            changes: Vec::new(),
        }
    }
}

impl<T: Clone> CollectionObserver<T> for Recorder<T> {
    fn on_add(&mut self, index: Option<usize>, value: &T) {
        self.changes.push(Change::Added(index, value.clone()));
    }

    fn on_remove(&mut self, index: Option<usize>, value: &T) {
        self.changes.push(Change::Removed(index, value.clone()));
    }

    fn on_replace(&mut self, index: usize, old: &T, new: &T) {
        self.changes
            .push(Change::Replaced(index, old.clone(), new.clone()));
    }

    fn on_pre_clear(&mut self, snapshot: &[T]) {
        self.changes.push(Change::PreClear(snapshot.to_vec()));
    }

    fn on_post_clear(&mut self) {
        self.changes.push(Change::PostClear);
    }
}

/// Re-applies recorded list changes to `list`, in order.
pub fn replay_list<T: Clone>(list: &mut Vec<T>, changes: &[Change<T>]) {
    for change in changes {
        match change {
            Change::Added(Some(index), value) => list.insert(*index, value.clone()),
            Change::Removed(Some(index), _) => {
                list.remove(*index);
            }
            Change::Replaced(index, _, new) => list[*index] = new.clone(),
            Change::PreClear(_) => list.clear(),
            Change::Added(None, _) | Change::Removed(None, _) | Change::PostClear => {}
        }
    }
}

// =============================================================================
// MAP RECORDER
// =============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum MapChange<K, V> {
    Put(K, Option<V>, V),
    Removed(K, V),
    PreClear(Vec<(K, V)>),
    PostClear,
}

#[derive(Debug)]
pub struct MapRecorder<K, V> {
    pub changes: Vec<MapChange<K, V>>,
}

impl<K, V> MapRecorder<K, V> {
    pub fn new() -> Self {
        Self {
            changes: Vec::new(),
        }
    }
}

impl<K: Clone, V: Clone> MapObserver<K, V> for MapRecorder<K, V> {
    fn on_put(&mut self, key: &K, old: Option<&V>, new: &V) {
        self.changes
            .push(MapChange::Put(key.clone(), old.cloned(), new.clone()));
    }

    fn on_remove(&mut self, key: &K, value: &V) {
        self.changes
            .push(MapChange::Removed(key.clone(), value.clone()));
    }

    fn on_pre_clear(&mut self, snapshot: &[(K, V)]) {
        self.changes.push(MapChange::PreClear(snapshot.to_vec()));
    }

    fn on_post_clear(&mut self) {
        self.changes.push(MapChange::PostClear);
    }
}
