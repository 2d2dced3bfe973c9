//! Reducer - pure function: (snapshot, action) -> snapshot
//!
//! - `reduce` never mutates its input and returns the next snapshot
//! - `lists_reducer` adapts it to the store's `fn(&mut S, A) -> Result<bool>`
//! - Out-of-range indices panic, unresolvable positions are errors

use crate::action::{Action, CollectionAction, ListAction};
use crate::error::Result;
use crate::model::{Entry, Item, List};
use crate::mutation::{
    self, check_index, delete_selected, select, select_all, select_multiple, select_where,
    set_complete_selected, set_locked_selected, toggle_complete,
};
use crate::transfer::transfer;

/// Apply a collection action. Used for both the lists and the items of a list.
pub fn reduce_collection<T: Entry>(entries: &[T], action: &CollectionAction<T>) -> Result<Vec<T>> {
    match action {
        CollectionAction::Add { entry, position } => {
            mutation::add(entries, entry.clone(), *position)
        }
        CollectionAction::Update {
            index,
            entry,
            position,
        } => mutation::update(entries, *index, entry.clone(), *position),
        CollectionAction::DeleteSelected => Ok(delete_selected(entries)),
        CollectionAction::Select { index, selected } => Ok(select(entries, *index, *selected)),
        CollectionAction::SelectMultiple { indices } => Ok(select_multiple(entries, indices)),
        CollectionAction::SelectAll { selected } => Ok(select_all(entries, *selected)),
        CollectionAction::SelectWhere(selector) => {
            Ok(select_where(entries, |entry| selector.matches(entry)))
        }
        CollectionAction::SetLocked { locked } => Ok(set_locked_selected(entries, *locked)),
    }
}

/// Compute the snapshot that follows `action`.
pub fn reduce(lists: &[List], action: &ListAction) -> Result<Vec<List>> {
    match action {
        ListAction::Lists(action) => reduce_collection(lists, action),
        ListAction::Items { list, action } => {
            map_items(lists, *list, |items| reduce_collection(items, action))
        }
        ListAction::ItemsSetComplete { list, complete } => {
            map_items(lists, *list, |items| Ok(set_complete_selected(items, *complete)))
        }
        ListAction::ItemToggleComplete { list, index } => {
            map_items(lists, *list, |items| Ok(toggle_complete(items, *index)))
        }
        ListAction::ItemsTransfer {
            mode,
            source,
            destination,
        } => Ok(transfer(lists, *mode, *source, *destination)),
        ListAction::ListsReplace(next) => Ok(next.clone()),
    }
}

fn map_items<F>(lists: &[List], index: usize, f: F) -> Result<Vec<List>>
where
    F: FnOnce(&[Item]) -> Result<Vec<Item>>,
{
    check_index("list", index, lists.len());
    let items = f(&lists[index].items)?;
    let mut out = lists.to_vec();
    out[index].items = items;
    Ok(out)
}

/// Store reducer over a bare list snapshot.
///
/// # Returns
/// `true` if the snapshot changed
pub fn lists_reducer(state: &mut Vec<List>, action: ListAction) -> Result<bool> {
    let next = reduce(state, &action)?;
    if next == *state {
        return Ok(false);
    }
    tracing::trace!(action = action.name(), lists = next.len(), "snapshot replaced");
    *state = next;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ListError;
    use crate::model::ListType;
    use crate::mutation::Selector;
    use crate::position::Position;
    use crate::transfer::TransferMode;

    fn snapshot() -> Vec<List> {
        vec![
            List::new("Groceries", ListType::Shopping)
                .with_items(vec![Item::new("Apples"), Item::new("Bread")]),
            List::new("Chores", ListType::ToDo).with_items(vec![Item::new("Dishes")]),
        ]
    }

    fn item_names(list: &List) -> Vec<&str> {
        list.items.iter().map(|item| item.name.as_str()).collect()
    }

    #[test]
    fn test_reduce_does_not_touch_input() {
        let before = snapshot();
        let action = ListAction::Items {
            list: 0,
            action: CollectionAction::SelectAll { selected: true },
        };
        let after = reduce(&before, &action).unwrap();
        assert_eq!(before, snapshot());
        assert!(after[0].items.iter().all(|item| item.is_selected));
    }

    #[test]
    fn test_add_list_at_top() {
        let action = ListAction::Lists(CollectionAction::Add {
            entry: List::new("Packing", ListType::List),
            position: Position::Top,
        });
        let after = reduce(&snapshot(), &action).unwrap();
        assert_eq!(after[0].name, "Packing");
        assert_eq!(after.len(), 3);
    }

    #[test]
    fn test_update_item_to_bottom() {
        let action = ListAction::Items {
            list: 0,
            action: CollectionAction::Update {
                index: 0,
                entry: Item::new("Green apples"),
                position: Position::Bottom,
            },
        };
        let after = reduce(&snapshot(), &action).unwrap();
        assert_eq!(item_names(&after[0]), ["Bread", "Green apples"]);
        assert_eq!(item_names(&after[1]), ["Dishes"]);
    }

    #[test]
    fn test_select_where_on_items() {
        let mut lists = snapshot();
        lists[0].items[1].is_complete = true;
        let action = ListAction::Items {
            list: 0,
            action: CollectionAction::SelectWhere(Selector::Incomplete),
        };
        let after = reduce(&lists, &action).unwrap();
        let flags: Vec<bool> = after[0].items.iter().map(|i| i.is_selected).collect();
        assert_eq!(flags, [true, false]);
    }

    #[test]
    fn test_unlock_items_through_reduce() {
        let mut lists = snapshot();
        lists[0].items[0] = lists[0].items[0].clone().with_locked(true).with_selected(true);
        lists[0].items[1] = lists[0].items[1].clone().with_locked(true);

        let after = reduce(
            &lists,
            &ListAction::Items {
                list: 0,
                action: CollectionAction::SetLocked { locked: false },
            },
        )
        .unwrap();

        let items = &after[0].items;
        assert!(!items[0].is_locked);
        assert!(items[1].is_locked);
        assert!(items.iter().all(|item| !item.is_selected));
        assert_eq!(after[1], lists[1]);
    }

    #[test]
    fn test_unresolvable_position_is_error() {
        let action = ListAction::Items {
            list: 1,
            action: CollectionAction::Add {
                entry: Item::new("Laundry"),
                position: Position::Other,
            },
        };
        assert_eq!(
            reduce(&snapshot(), &action),
            Err(ListError::InvalidPosition("other".into()))
        );
    }

    #[test]
    #[should_panic(expected = "list index 2 out of range")]
    fn test_missing_list_panics() {
        let _ = reduce(
            &snapshot(),
            &ListAction::ItemToggleComplete { list: 2, index: 0 },
        );
    }

    #[test]
    #[should_panic(expected = "item index 5 out of range")]
    fn test_missing_item_panics() {
        let _ = reduce(
            &snapshot(),
            &ListAction::ItemToggleComplete { list: 0, index: 5 },
        );
    }

    #[test]
    fn test_lists_reducer_reports_change() {
        let mut state = snapshot();
        let changed = lists_reducer(
            &mut state,
            ListAction::ItemsTransfer {
                mode: TransferMode::Move,
                source: 0,
                destination: 1,
            },
        )
        .unwrap();
        assert!(!changed);

        let changed =
            lists_reducer(&mut state, ListAction::ItemToggleComplete { list: 1, index: 0 })
                .unwrap();
        assert!(changed);
        assert!(state[1].items[0].is_complete);
    }

    #[test]
    fn test_lists_reducer_keeps_state_on_error() {
        let mut state = snapshot();
        let result = lists_reducer(
            &mut state,
            ListAction::Lists(CollectionAction::Update {
                index: 0,
                entry: List::new("Renamed", ListType::Shopping),
                position: Position::Other,
            }),
        );
        assert!(result.is_err());
        assert_eq!(state, snapshot());
    }
}
