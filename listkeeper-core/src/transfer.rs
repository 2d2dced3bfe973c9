//! Moving and copying selected items between lists
//!
//! Selection is the only way to pick what travels. A source list without
//! selected items leaves the whole snapshot untouched.

use serde::{Deserialize, Serialize};

use crate::error::{ListError, Result};
use crate::model::{Entry, Item, List};
use crate::mutation::{check_index, delete_selected, select_all};
use crate::position::Position;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TransferMode {
    /// Selected items are duplicated into the destination.
    Copy,
    /// Selected items leave the source.
    Move,
}

/// The "current list / other list" choice made in the move/copy dialog.
///
/// `source` says which side the items come from: `Position::Current` moves
/// from `current` into `other`, `Position::Other` the reverse.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TransferSides {
    pub current: usize,
    pub other: usize,
    pub source: Position,
}

impl TransferSides {
    /// Resolve to `(source, destination)` list indices.
    ///
    /// # Errors
    ///
    /// Only `Current` and `Other` designate a side.
    pub fn resolve(self) -> Result<(usize, usize)> {
        match self.source {
            Position::Current => Ok((self.current, self.other)),
            Position::Other => Ok((self.other, self.current)),
            position => Err(ListError::InvalidPosition(position.to_string())),
        }
    }
}

/// Transfer the selected items of `source` to the end of `destination`.
///
/// Arriving items are de-selected. The source's remaining items are
/// de-selected too. Items already in the destination keep their selection,
/// and lists other than these two are not touched.
///
/// # Panics
///
/// Panics if either index is out of range.
pub fn transfer(lists: &[List], mode: TransferMode, source: usize, destination: usize) -> Vec<List> {
    check_index("list", source, lists.len());
    check_index("list", destination, lists.len());

    if lists[source].selected_count() == 0 {
        return lists.to_vec();
    }

    let source_items = &lists[source].items;
    let arrivals: Vec<Item> = source_items
        .iter()
        .filter(|item| item.is_selected)
        .map(|item| item.clone().with_selected(false))
        .collect();

    let remaining = match mode {
        TransferMode::Copy => select_all(source_items, false),
        TransferMode::Move => select_all(&delete_selected(source_items), false),
    };

    let mut out = lists.to_vec();
    out[source].items = remaining;
    out[destination].items.extend(arrivals);
    out
}
