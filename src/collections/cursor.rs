// ============================================================================
// observable-collections - Cursors
// Position-tracking traversal that can edit the container it walks
// ============================================================================
//
// std iterators cannot remove the element they just yielded, so traversal
// with structural edits goes through a cursor that borrows the container
// mutably and remembers the last element it returned. Edits are routed
// through the container's own primitives: a cursor over an observable
// wrapper therefore notifies exactly like a direct call.
// ============================================================================

use crate::core::error::{CollectionError, Result};
use crate::core::list::ListBase;
use crate::core::set::SetBase;

// =============================================================================
// LIST CURSOR
// =============================================================================

/// Bidirectional cursor over a [`ListBase`].
///
/// The cursor sits *between* elements: `next` yields the element after it
/// and moves right, `previous` yields the element before it and moves left.
/// `remove` and `set` act on whichever element was yielded last.
///
/// # Example
///
/// ```
/// use observable_collections::ListBase;
///
/// let mut list = vec![1, 2, 3, 4];
/// let mut cursor = list.cursor();
/// while let Some(value) = cursor.next() {
///     if value % 2 == 0 {
///         cursor.remove().unwrap();
///     }
/// }
/// assert_eq!(list, vec![1, 3]);
/// ```
pub struct ListCursor<'a, L: ListBase + ?Sized> {
    list: &'a mut L,
    next: usize,
    last: Option<usize>,
}

impl<'a, L: ListBase + ?Sized> ListCursor<'a, L> {
    pub(crate) fn new(list: &'a mut L, index: usize) -> Self {
        Self {
            list,
            next: index,
            last: None,
        }
    }

    pub fn has_next(&self) -> bool {
        self.next < self.list.len()
    }

    pub fn has_previous(&self) -> bool {
        self.next > 0
    }

    /// Index of the element `next` would return.
    pub fn next_index(&self) -> usize {
        self.next
    }

    /// Index of the element `previous` would return.
    pub fn previous_index(&self) -> Option<usize> {
        self.next.checked_sub(1)
    }

    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Option<&L::Item> {
        let index = self.next;
        let item = self.list.get(index)?;
        self.next = index + 1;
        self.last = Some(index);
        Some(item)
    }

    pub fn previous(&mut self) -> Option<&L::Item> {
        let index = self.next.checked_sub(1)?;
        let item = self.list.get(index)?;
        self.next = index;
        self.last = Some(index);
        Some(item)
    }

    /// Removes the element last returned by `next` or `previous`.
    pub fn remove(&mut self) -> Result<L::Item> {
        let index = self.last.ok_or(CollectionError::IllegalState(
            "remove called without a current element",
        ))?;
        let item = self.list.remove_at(index)?;
        if index < self.next {
            self.next -= 1;
        }
        self.last = None;
        Ok(item)
    }

    /// Replaces the element last returned by `next` or `previous`.
    pub fn set(&mut self, value: L::Item) -> Result<L::Item> {
        let index = self.last.ok_or(CollectionError::IllegalState(
            "set called without a current element",
        ))?;
        self.list.replace(index, value)
    }

    /// Inserts before the element `next` would return, leaving the cursor
    /// after the new element. A following `previous` yields it.
    pub fn add(&mut self, value: L::Item) -> Result<()> {
        self.list.insert(self.next, value)?;
        self.next += 1;
        self.last = None;
        Ok(())
    }
}

// =============================================================================
// SET CURSOR
// =============================================================================

/// Forward cursor over a [`SetBase`] that can remove the current element.
///
/// The cursor walks the set by position and keeps a clone of the element
/// it last returned, which `remove` uses to take it out. Removing an
/// element must not reorder the remaining ones; this holds for the std
/// hash and tree sets.
pub struct SetCursor<'a, S: SetBase + ?Sized> {
    set: &'a mut S,
    position: usize,
    current: Option<S::Item>,
}

impl<'a, S> SetCursor<'a, S>
where
    S: SetBase + ?Sized,
    S::Item: Clone,
{
    pub(crate) fn new(set: &'a mut S) -> Self {
        Self {
            set,
            position: 0,
            current: None,
        }
    }

    pub fn has_next(&self) -> bool {
        self.position < self.set.len()
    }

    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Option<&S::Item> {
        let item = self.set.iter().nth(self.position)?;
        self.position += 1;
        self.current = Some(item.clone());
        Some(item)
    }

    /// Removes the element last returned by `next`.
    pub fn remove(&mut self) -> Result<S::Item> {
        let current = self.current.take().ok_or(CollectionError::IllegalState(
            "remove called without a current element",
        ))?;
        let item = self.set.take(&current).ok_or(CollectionError::IllegalState(
            "current element is no longer in the set",
        ))?;
        self.position = self.position.saturating_sub(1);
        Ok(item)
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{BTreeSet, HashSet, LinkedList};

    #[test]
    fn remove_twice_is_illegal_state() {
        let mut list = vec!["x", "y"];
        let mut cursor = list.cursor();

        assert_eq!(cursor.next(), Some(&"x"));
        assert_eq!(cursor.remove(), Ok("x"));
        assert!(matches!(cursor.remove(), Err(CollectionError::IllegalState(_))));
        assert_eq!(cursor.next_index(), 0);
        assert_eq!(cursor.next(), Some(&"y"));
    }

    #[test]
    fn remove_after_previous_keeps_position() {
        let mut list = vec![1, 2, 3];
        let mut cursor = list.cursor_at(2).unwrap();

        assert_eq!(cursor.previous(), Some(&2));
        assert_eq!(cursor.remove(), Ok(2));
        assert_eq!(cursor.next_index(), 1);
        assert_eq!(cursor.next(), Some(&3));
        assert_eq!(list, vec![1, 3]);
    }

    #[test]
    fn set_requires_current_element() {
        let mut list = vec![1, 2];
        let mut cursor = list.cursor();

        assert!(cursor.set(9).is_err());
        cursor.next();
        assert_eq!(cursor.set(9), Ok(1));
        assert_eq!(cursor.set(8), Ok(9));
        cursor.add(5).unwrap();
        assert!(cursor.set(7).is_err());
        assert_eq!(list, vec![8, 5, 2]);
    }

    #[test]
    fn add_lands_before_next_element() {
        let mut list: LinkedList<char> = LinkedList::from(['a', 'c']);
        let mut cursor = list.cursor();

        cursor.add('_').unwrap();
        cursor.next();
        cursor.add('b').unwrap();
        assert_eq!(cursor.previous(), Some(&'b'));
        assert_eq!(cursor.previous_index(), Some(1));
        assert_eq!(list.into_iter().collect::<String>(), "_abc");
    }

    #[test]
    fn cursor_walks_both_ways() {
        let mut list = vec![1, 2];
        let mut cursor = list.cursor();

        assert!(!cursor.has_previous());
        assert_eq!(cursor.previous_index(), None);
        cursor.next();
        cursor.next();
        assert!(!cursor.has_next());
        assert_eq!(cursor.next(), None);
        assert_eq!(cursor.previous(), Some(&2));
        assert_eq!(cursor.previous(), Some(&1));
        assert_eq!(cursor.previous(), None);
    }

    #[test]
    fn set_cursor_removes_while_walking() {
        let mut set: BTreeSet<i32> = (1..=5).collect();
        let mut cursor = set.cursor();
        let mut seen = Vec::new();

        while let Some(value) = cursor.next() {
            let value = *value;
            seen.push(value);
            if value % 2 == 1 {
                cursor.remove().unwrap();
            }
        }

        assert_eq!(seen, vec![1, 2, 3, 4, 5]);
        assert_eq!(set.into_iter().collect::<Vec<_>>(), vec![2, 4]);
    }

    #[test]
    fn set_cursor_visits_every_hash_element_once() {
        let mut set: HashSet<u32> = (0..64).collect();
        let mut cursor = set.cursor();
        let mut seen = Vec::new();

        while let Some(value) = cursor.next() {
            let value = *value;
            seen.push(value);
            if value % 3 == 0 {
                cursor.remove().unwrap();
            }
        }
        seen.sort_unstable();
        assert_eq!(seen, (0..64).collect::<Vec<_>>());
        assert_eq!(set.len(), 42);
        assert!(set.iter().all(|v| v % 3 != 0));
    }
}
