//! Lists, items and the shared `Entry` behaviour
//!
//! Both types are plain values. Changes go through the `with_*` helpers, which
//! consume the old value and hand back the changed copy.

use serde::{Deserialize, Deserializer, Serialize};

use crate::position::{deserialize_placement, Position};

/// Behaviour shared by everything that can be selected and locked.
///
/// The mutation engine is generic over this trait so the same operations work
/// on the top-level lists and on the items of a single list.
pub trait Entry: Clone {
    fn is_selected(&self) -> bool;
    fn is_locked(&self) -> bool;
    /// Whether the entry counts as done for `Selector::Complete`.
    fn is_complete(&self) -> bool;
    fn with_selected(self, selected: bool) -> Self;
    fn with_locked(self, locked: bool) -> Self;
}

/// The kind of a list. Only affects how the list is displayed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ListType {
    #[default]
    List,
    Shopping,
    #[serde(rename = "To-Do")]
    ToDo,
    #[serde(rename = "Ordered To-Do")]
    OrderedToDo,
}

impl ListType {
    pub const ALL: [ListType; 4] = [
        ListType::List,
        ListType::Shopping,
        ListType::ToDo,
        ListType::OrderedToDo,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ListType::List => "List",
            ListType::Shopping => "Shopping",
            ListType::ToDo => "To-Do",
            ListType::OrderedToDo => "Ordered To-Do",
        }
    }

    /// Quantities are only shown (and counted) for shopping lists.
    pub fn shows_quantity(self) -> bool {
        matches!(self, ListType::Shopping)
    }

    /// Ordered lists prefix each item with its rank.
    pub fn is_ordered(self) -> bool {
        matches!(self, ListType::OrderedToDo)
    }
}

fn default_quantity() -> u32 {
    1
}

/// Stored quantities below 1 are raised to 1.
fn deserialize_quantity<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(u32::deserialize(deserializer)?.max(1))
}

/// A single entry of a list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub name: String,
    #[serde(default = "default_quantity", deserialize_with = "deserialize_quantity")]
    pub quantity: u32,
    #[serde(default)]
    pub is_complete: bool,
    #[serde(default)]
    pub is_selected: bool,
    #[serde(default)]
    pub is_locked: bool,
}

impl Item {
    /// Create an incomplete, unselected, unlocked item with quantity 1.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            quantity: 1,
            is_complete: false,
            is_selected: false,
            is_locked: false,
        }
    }

    /// Quantities below 1 are raised to 1.
    pub fn with_quantity(self, quantity: u32) -> Self {
        Self {
            quantity: quantity.max(1),
            ..self
        }
    }

    pub fn with_complete(self, is_complete: bool) -> Self {
        Self {
            is_complete,
            ..self
        }
    }

    pub fn toggled(self) -> Self {
        let is_complete = !self.is_complete;
        self.with_complete(is_complete)
    }
}

impl Entry for Item {
    fn is_selected(&self) -> bool {
        self.is_selected
    }

    fn is_locked(&self) -> bool {
        self.is_locked
    }

    fn is_complete(&self) -> bool {
        self.is_complete
    }

    fn with_selected(self, is_selected: bool) -> Self {
        Self {
            is_selected,
            ..self
        }
    }

    fn with_locked(self, is_locked: bool) -> Self {
        Self { is_locked, ..self }
    }
}

/// A named, typed collection of items.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct List {
    pub name: String,
    #[serde(default)]
    pub list_type: ListType,
    #[serde(default, deserialize_with = "deserialize_placement")]
    pub default_new_item_position: Position,
    #[serde(default)]
    pub items: Vec<Item>,
    #[serde(default)]
    pub is_selected: bool,
    #[serde(default)]
    pub is_locked: bool,
}

impl List {
    pub fn new(name: impl Into<String>, list_type: ListType) -> Self {
        Self {
            name: name.into(),
            list_type,
            default_new_item_position: Position::Bottom,
            items: Vec::new(),
            is_selected: false,
            is_locked: false,
        }
    }

    pub fn with_items(self, items: Vec<Item>) -> Self {
        Self { items, ..self }
    }

    pub fn with_default_position(self, default_new_item_position: Position) -> Self {
        Self {
            default_new_item_position,
            ..self
        }
    }

    /// Number shown next to the list name: summed quantities for shopping
    /// lists, entry count otherwise.
    pub fn item_count(&self) -> u32 {
        if self.list_type.shows_quantity() {
            self.items
                .iter()
                .fold(0u32, |total, item| total.saturating_add(item.quantity))
        } else {
            self.items.len() as u32
        }
    }

    pub fn selected_count(&self) -> usize {
        self.items.iter().filter(|item| item.is_selected).count()
    }
}

impl Entry for List {
    fn is_selected(&self) -> bool {
        self.is_selected
    }

    fn is_locked(&self) -> bool {
        self.is_locked
    }

    /// A list is complete once it has items and all of them are complete.
    fn is_complete(&self) -> bool {
        !self.items.is_empty() && self.items.iter().all(|item| item.is_complete)
    }

    fn with_selected(self, is_selected: bool) -> Self {
        Self {
            is_selected,
            ..self
        }
    }

    fn with_locked(self, is_locked: bool) -> Self {
        Self { is_locked, ..self }
    }
}
