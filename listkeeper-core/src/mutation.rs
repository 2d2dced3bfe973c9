//! Entry-level operations shared by lists and items
//!
//! Every operation takes the current entries by reference and returns the new
//! entries. Batch operations that act on the selection clear the selection of
//! every entry afterwards.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::model::{Entry, Item};
use crate::position::Position;
use crate::sequence::{insert_at, update_collection};

/// Closed set of predicates usable from actions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Selector {
    Complete,
    Incomplete,
    Locked,
    Unlocked,
}

impl Selector {
    pub fn matches<T: Entry>(self, entry: &T) -> bool {
        match self {
            Selector::Complete => entry.is_complete(),
            Selector::Incomplete => !entry.is_complete(),
            Selector::Locked => entry.is_locked(),
            Selector::Unlocked => !entry.is_locked(),
        }
    }
}

pub(crate) fn check_index(what: &str, index: usize, len: usize) {
    assert!(index < len, "{what} index {index} out of range (len {len})");
}

/// Insert a new entry at a symbolic position.
///
/// # Errors
///
/// Fails if `position` cannot be resolved (`Position::Other`).
pub fn add<T: Entry>(entries: &[T], entry: T, position: Position) -> Result<Vec<T>> {
    let index = position.resolve(None, entries.len())?;
    Ok(insert_at(index, entry, entries))
}

/// Replace the entry at `index` and relocate it. `Position::Current` keeps
/// the ordering.
///
/// # Errors
///
/// Fails if `position` cannot be resolved.
///
/// # Panics
///
/// Panics if `index` is out of range.
pub fn update<T: Entry>(entries: &[T], index: usize, entry: T, position: Position) -> Result<Vec<T>> {
    check_index("entry", index, entries.len());
    update_collection(entry, entries, index, position)
}

/// Drop every selected entry, keeping the rest in order.
pub fn delete_selected<T: Entry>(entries: &[T]) -> Vec<T> {
    entries
        .iter()
        .filter(|entry| !entry.is_selected())
        .cloned()
        .collect()
}

/// Set the selection of one entry, leaving the others alone.
///
/// # Panics
///
/// Panics if `index` is out of range.
pub fn select<T: Entry>(entries: &[T], index: usize, selected: bool) -> Vec<T> {
    check_index("entry", index, entries.len());
    entries
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            if i == index {
                entry.clone().with_selected(selected)
            } else {
                entry.clone()
            }
        })
        .collect()
}

/// Select exactly the entries at `indices`.
///
/// # Panics
///
/// Panics if any index is out of range.
pub fn select_multiple<T: Entry>(entries: &[T], indices: &[usize]) -> Vec<T> {
    for &index in indices {
        check_index("entry", index, entries.len());
    }
    entries
        .iter()
        .enumerate()
        .map(|(i, entry)| entry.clone().with_selected(indices.contains(&i)))
        .collect()
}

pub fn select_all<T: Entry>(entries: &[T], selected: bool) -> Vec<T> {
    entries
        .iter()
        .map(|entry| entry.clone().with_selected(selected))
        .collect()
}

/// Select exactly the entries for which `predicate` holds.
pub fn select_where<T, F>(entries: &[T], predicate: F) -> Vec<T>
where
    T: Entry,
    F: Fn(&T) -> bool,
{
    entries
        .iter()
        .map(|entry| {
            let selected = predicate(entry);
            entry.clone().with_selected(selected)
        })
        .collect()
}

/// Lock or unlock the selected entries, then clear all selection.
pub fn set_locked_selected<T: Entry>(entries: &[T], locked: bool) -> Vec<T> {
    entries
        .iter()
        .map(|entry| {
            let entry = if entry.is_selected() {
                entry.clone().with_locked(locked)
            } else {
                entry.clone()
            };
            entry.with_selected(false)
        })
        .collect()
}

/// Mark the selected items complete or incomplete, then clear all selection.
pub fn set_complete_selected(items: &[Item], complete: bool) -> Vec<Item> {
    items
        .iter()
        .map(|item| {
            let item = if item.is_selected {
                item.clone().with_complete(complete)
            } else {
                item.clone()
            };
            item.with_selected(false)
        })
        .collect()
}

/// Flip the completion of one item. Selection is untouched.
///
/// # Panics
///
/// Panics if `index` is out of range.
pub fn toggle_complete(items: &[Item], index: usize) -> Vec<Item> {
    check_index("item", index, items.len());
    let mut out = items.to_vec();
    out[index] = out[index].clone().toggled();
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{List, ListType};

    fn items(names: &[&str]) -> Vec<Item> {
        names.iter().map(|name| Item::new(*name)).collect()
    }

    fn names(items: &[Item]) -> Vec<&str> {
        items.iter().map(|item| item.name.as_str()).collect()
    }

    fn selected(items: &[Item]) -> Vec<bool> {
        items.iter().map(|item| item.is_selected).collect()
    }

    #[test]
    fn test_add_positions() {
        let base = items(&["A", "B"]);
        assert_eq!(
            names(&add(&base, Item::new("X"), Position::Top).unwrap()),
            ["X", "A", "B"]
        );
        assert_eq!(
            names(&add(&base, Item::new("X"), Position::Bottom).unwrap()),
            ["A", "B", "X"]
        );
        assert!(add(&base, Item::new("X"), Position::Other).is_err());
    }

    #[test]
    fn test_update_current_keeps_order() {
        let base = items(&["A", "B", "C"]);
        let out = update(&base, 1, Item::new("B2").with_quantity(4), Position::Current).unwrap();
        assert_eq!(names(&out), ["A", "B2", "C"]);
        assert_eq!(out[1].quantity, 4);
    }

    #[test]
    #[should_panic(expected = "entry index 3 out of range")]
    fn test_update_out_of_range_panics() {
        let _ = update(&items(&["A", "B", "C"]), 3, Item::new("X"), Position::Top);
    }

    #[test]
    fn test_delete_selected_preserves_order() {
        let base = select_multiple(&items(&["A", "B", "C", "D", "E"]), &[0, 2, 3]);
        assert_eq!(names(&delete_selected(&base)), ["B", "E"]);
    }

    #[test]
    fn test_select_single_leaves_others() {
        let base = select(&items(&["A", "B", "C"]), 0, true);
        let out = select(&base, 2, true);
        assert_eq!(selected(&out), [true, false, true]);
    }

    #[test]
    fn test_select_multiple_is_exact() {
        let base = select_all(&items(&["A", "B", "C"]), true);
        let out = select_multiple(&base, &[1]);
        assert_eq!(selected(&out), [false, true, false]);
    }

    #[test]
    fn test_select_where_is_exact() {
        let mut base = select_all(&items(&["A", "B", "C"]), true);
        base[1] = base[1].clone().with_complete(true);
        let out = select_where(&base, |item| Selector::Complete.matches(item));
        assert_eq!(selected(&out), [false, true, false]);
    }

    #[test]
    fn test_set_locked_selected_clears_selection() {
        let base = select(&items(&["A", "B"]), 1, true);
        let out = set_locked_selected(&base, true);
        assert!(!out[0].is_locked);
        assert!(out[1].is_locked);
        assert_eq!(selected(&out), [false, false]);
    }

    #[test]
    fn test_unlock_selected_clears_selection() {
        let base = vec![
            Item::new("A").with_locked(true).with_selected(true),
            Item::new("B").with_locked(true),
        ];
        let out = set_locked_selected(&base, false);
        assert!(!out[0].is_locked);
        assert!(out[1].is_locked);
        assert_eq!(selected(&out), [false, false]);
    }

    #[test]
    fn test_set_complete_without_selection_changes_nothing() {
        let base = vec![Item::new("A"), Item::new("B").with_complete(true)];
        assert_eq!(set_complete_selected(&base, true), base);
    }

    #[test]
    fn test_toggle_complete_keeps_selection() {
        let base = select_all(&items(&["A", "B"]), true);
        let out = toggle_complete(&base, 0);
        assert!(out[0].is_complete);
        assert!(!out[1].is_complete);
        assert_eq!(selected(&out), [true, true]);
    }

    #[test]
    fn test_operations_apply_to_lists() {
        let lists = vec![
            List::new("One", ListType::List),
            List::new("Two", ListType::Shopping),
        ];
        let lists = set_locked_selected(&select(&lists, 0, true), true);
        assert!(lists[0].is_locked);
        assert!(!lists[0].is_selected);
        assert!(!lists[1].is_locked);
    }
}
