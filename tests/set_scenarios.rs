mod common;

use std::cell::Cell;
use std::collections::{BTreeSet, HashSet};

use common::{Change, Recorder};
use observable_collections::prelude::*;
use observable_collections::CollectionError;

fn recorded<S: SetBase>(base: S) -> ObservableSet<S, Recorder<S::Item>>
where
    S::Item: Clone,
{
    observable_set(base, Recorder::new())
}

// =============================================================================
// Uniqueness
// =============================================================================

#[test]
fn duplicate_add_is_silent_and_new_add_fires_once() {
    let count = Cell::new(0);
    let mut set = observable_set_simple(
        HashSet::from(["a".to_string(), "b".to_string()]),
        || count.set(count.get() + 1),
    );

    assert!(!set.insert("a".to_string()));
    assert_eq!(count.get(), 0);
    assert_eq!(set.len(), 2);

    assert!(set.insert("c".to_string()));
    assert_eq!(count.get(), 1);
    assert_eq!(set.len(), 3);
}

#[test]
fn structured_add_and_remove_carry_no_index() {
    let mut set = recorded(BTreeSet::from([1, 2]));

    set.insert(2);
    set.insert(3);
    set.remove(&9);
    set.remove(&1);

    assert_eq!(
        set.observer().changes,
        vec![Change::Added(None, 3), Change::Removed(None, 1)]
    );
}

#[test]
fn extend_from_fires_per_accepted_element_in_argument_order() {
    let mut set = recorded(BTreeSet::from([5]));

    assert!(set.extend_from([9, 5, 1]));
    assert!(!set.extend_from([9, 1]));

    assert_eq!(
        set.observer().changes,
        vec![Change::Added(None, 9), Change::Added(None, 1)]
    );
}

// =============================================================================
// Bulk removal
// =============================================================================

#[test]
fn remove_all_follows_set_order() {
    let mut set = recorded(BTreeSet::from(["d", "b", "a", "c"]));

    assert!(set.remove_all(&["c", "a", "zz"]));
    assert!(!set.remove_all(&["zz"]));

    assert_eq!(
        set.observer().changes,
        vec![Change::Removed(None, "a"), Change::Removed(None, "c")]
    );
}

#[test]
fn hash_set_bulk_removal_matches_its_own_iteration_order() {
    let base: HashSet<u32> = (0..40).collect();
    let expected: Vec<Change<u32>> = base
        .iter()
        .filter(|v| *v % 4 == 0)
        .map(|v| Change::Removed(None, *v))
        .collect();

    let mut set = recorded(base);
    assert!(set.remove_if(|v| v % 4 == 0));

    assert_eq!(set.observer().changes, expected);
    assert_eq!(set.len(), 30);
}

#[test]
fn retain_all_removes_non_members() {
    let mut set = recorded(BTreeSet::from([1, 2, 3, 4]));

    assert!(set.retain_all(&[2, 4, 6]));

    assert!(set == BTreeSet::from([2, 4]));
    assert_eq!(
        set.observer().changes,
        vec![Change::Removed(None, 1), Change::Removed(None, 3)]
    );
}

// =============================================================================
// Clear
// =============================================================================

#[test]
fn clear_sends_pair_once() {
    let mut set = recorded(BTreeSet::from(['x', 'y']));

    set.clear();
    set.clear();

    assert_eq!(
        set.observer().changes,
        vec![Change::PreClear(vec!['x', 'y']), Change::PostClear]
    );
}

// =============================================================================
// Cursor
// =============================================================================

#[test]
fn cursor_remove_notifies_and_rejects_repeat() {
    let mut set = recorded(BTreeSet::from([10, 20, 30]));
    {
        let mut cursor = set.cursor();
        assert_eq!(cursor.next(), Some(&10));
        assert_eq!(cursor.next(), Some(&20));
        assert_eq!(cursor.remove(), Ok(20));
        assert!(matches!(cursor.remove(), Err(CollectionError::IllegalState(_))));
        assert_eq!(cursor.next(), Some(&30));
        assert!(!cursor.has_next());
    }
    assert_eq!(set.observer().changes, vec![Change::Removed(None, 20)]);
}

// =============================================================================
// Handlers builder
// =============================================================================

#[test]
fn handlers_see_clear_snapshot() {
    let cleared = Cell::new(0usize);
    let removed = Cell::new(0usize);
    {
        let mut set = observable_set(
            BTreeSet::from([1, 2, 3]),
            Handlers::new()
                .remove(|_, _| removed.set(removed.get() + 1))
                .clear(|former: &[i32]| cleared.set(former.iter().sum::<i32>() as usize)),
        );
        set.remove(&1);
        set.clear();
    }
    assert_eq!(removed.get(), 1);
    assert_eq!(cleared.get(), 5);
}
