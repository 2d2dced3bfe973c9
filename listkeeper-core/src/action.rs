//! Action traits and the list action vocabulary

use std::fmt::Debug;

use crate::model::{Item, List};
use crate::mutation::Selector;
use crate::position::Position;
use crate::transfer::TransferMode;

/// Marker trait for actions that can be dispatched to a store
///
/// Actions are:
/// - Clone: they may be logged or replayed
/// - Debug: for logging
/// - Send + 'static: async tasks send them back over channels
pub trait Action: Clone + Debug + Send + 'static {
    /// Get the action name for logging and filtering
    fn name(&self) -> &'static str;
}

/// Coarse grouping of actions, used for log filtering and tests.
pub trait ActionCategory: Action {
    fn category(&self) -> Option<&'static str>;
}

/// Short, human-readable form of an action for logs.
///
/// The default is the `Debug` output. Override it for actions that carry a
/// whole snapshot.
pub trait ActionSummary: Action {
    fn summary(&self) -> String {
        format!("{:?}", self)
    }
}

/// Operations shared by the top-level lists and the items of one list.
#[derive(Clone, Debug, PartialEq)]
pub enum CollectionAction<T> {
    /// Insert a new entry at a symbolic position
    Add { entry: T, position: Position },
    /// Replace the entry at `index` and relocate it
    Update {
        index: usize,
        entry: T,
        position: Position,
    },
    DeleteSelected,
    Select { index: usize, selected: bool },
    /// Select exactly these indices
    SelectMultiple { indices: Vec<usize> },
    SelectAll { selected: bool },
    /// Select exactly the entries matching the selector
    SelectWhere(Selector),
    /// Lock or unlock the selected entries
    SetLocked { locked: bool },
}

/// Every state transition of the list snapshot.
#[derive(Clone, Debug, PartialEq)]
pub enum ListAction {
    /// Operate on the top-level lists
    Lists(CollectionAction<List>),
    /// Operate on the items of the list at `list`
    Items {
        list: usize,
        action: CollectionAction<Item>,
    },
    /// Mark the selected items complete/incomplete, then clear selection
    ItemsSetComplete { list: usize, complete: bool },
    /// Flip one item's completion
    ItemToggleComplete { list: usize, index: usize },
    /// Move or copy the selected items of `source` to `destination`
    ItemsTransfer {
        mode: TransferMode,
        source: usize,
        destination: usize,
    },
    /// Replace the whole snapshot (load, cloud fetch)
    ListsReplace(Vec<List>),
}

impl Action for ListAction {
    fn name(&self) -> &'static str {
        match self {
            ListAction::Lists(action) => match action {
                CollectionAction::Add { .. } => "ListsAdd",
                CollectionAction::Update { .. } => "ListsUpdate",
                CollectionAction::DeleteSelected => "ListsDeleteSelected",
                CollectionAction::Select { .. } => "ListsSelect",
                CollectionAction::SelectMultiple { .. } => "ListsSelectMultiple",
                CollectionAction::SelectAll { .. } => "ListsSelectAll",
                CollectionAction::SelectWhere(_) => "ListsSelectWhere",
                CollectionAction::SetLocked { .. } => "ListsSetLocked",
            },
            ListAction::Items { action, .. } => match action {
                CollectionAction::Add { .. } => "ItemsAdd",
                CollectionAction::Update { .. } => "ItemsUpdate",
                CollectionAction::DeleteSelected => "ItemsDeleteSelected",
                CollectionAction::Select { .. } => "ItemsSelect",
                CollectionAction::SelectMultiple { .. } => "ItemsSelectMultiple",
                CollectionAction::SelectAll { .. } => "ItemsSelectAll",
                CollectionAction::SelectWhere(_) => "ItemsSelectWhere",
                CollectionAction::SetLocked { .. } => "ItemsSetLocked",
            },
            ListAction::ItemsSetComplete { .. } => "ItemsSetComplete",
            ListAction::ItemToggleComplete { .. } => "ItemToggleComplete",
            ListAction::ItemsTransfer { .. } => "ItemsTransfer",
            ListAction::ListsReplace(_) => "ListsReplace",
        }
    }
}

impl ActionCategory for ListAction {
    fn category(&self) -> Option<&'static str> {
        match self {
            ListAction::Lists(_) | ListAction::ListsReplace(_) => Some("lists"),
            ListAction::Items { .. }
            | ListAction::ItemsSetComplete { .. }
            | ListAction::ItemToggleComplete { .. }
            | ListAction::ItemsTransfer { .. } => Some("items"),
        }
    }
}

impl ActionSummary for ListAction {
    fn summary(&self) -> String {
        match self {
            ListAction::ListsReplace(lists) => format!("ListsReplace({} lists)", lists.len()),
            ListAction::Lists(CollectionAction::Add { entry, position }) => {
                format!("ListsAdd {{ name: {:?}, position: {} }}", entry.name, position)
            }
            ListAction::Items {
                list,
                action: CollectionAction::Add { entry, position },
            } => format!(
                "ItemsAdd {{ list: {}, name: {:?}, position: {} }}",
                list, entry.name, position
            ),
            _ => format!("{:?}", self),
        }
    }
}
