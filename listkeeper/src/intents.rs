//! Form input to engine actions
//!
//! The engine accepts any name and any index. These helpers sit between a form
//! and the store: they reject empty names and missing destinations with a
//! user-facing [`ListError::Validation`], fill in the configured default
//! positions, and return the action to dispatch.

use listkeeper_core::{
    CollectionAction, Item, List, ListAction, ListError, ListType, Position, Result, TransferMode,
    TransferSides,
};

use crate::state::Settings;

/// Trimmed `name`, or an error if nothing is left.
pub fn validate_name(name: &str) -> Result<String> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ListError::Validation("Name must be provided".to_string()));
    }
    Ok(name.to_string())
}

pub fn validate_destination(destination: Option<usize>) -> Result<usize> {
    destination
        .ok_or_else(|| ListError::Validation("A destination list must be selected".to_string()))
}

/// Create a list at the configured list position. The new list inherits the
/// configured item position.
pub fn add_list(settings: &Settings, name: &str, list_type: ListType) -> Result<ListAction> {
    let list = List::new(validate_name(name)?, list_type)
        .with_default_position(settings.default_new_item_position);
    Ok(ListAction::Lists(CollectionAction::Add {
        entry: list,
        position: settings.default_list_position,
    }))
}

/// Rename or retype the list at `index`, keeping its items and flags.
///
/// # Panics
///
/// Panics if `index` is out of range.
pub fn update_list(
    lists: &[List],
    index: usize,
    name: &str,
    list_type: ListType,
    default_new_item_position: Position,
    position: Position,
) -> Result<ListAction> {
    let list = List {
        name: validate_name(name)?,
        list_type,
        default_new_item_position: default_new_item_position.placement()?,
        ..lists[index].clone()
    };
    Ok(ListAction::Lists(CollectionAction::Update {
        index,
        entry: list,
        position,
    }))
}

/// Add an item at the list's own default position.
///
/// # Panics
///
/// Panics if `list` is out of range.
pub fn add_item(lists: &[List], list: usize, name: &str, quantity: u32) -> Result<ListAction> {
    let item = Item::new(validate_name(name)?).with_quantity(quantity);
    Ok(ListAction::Items {
        list,
        action: CollectionAction::Add {
            entry: item,
            position: lists[list].default_new_item_position,
        },
    })
}

/// Rename the item at `index` and change its quantity, keeping its flags.
///
/// # Panics
///
/// Panics if either index is out of range.
pub fn update_item(
    lists: &[List],
    list: usize,
    index: usize,
    name: &str,
    quantity: u32,
    position: Position,
) -> Result<ListAction> {
    let item = Item {
        name: validate_name(name)?,
        ..lists[list].items[index].clone()
    }
    .with_quantity(quantity);
    Ok(ListAction::Items {
        list,
        action: CollectionAction::Update {
            index,
            entry: item,
            position,
        },
    })
}

/// Move or copy the selected items between the current list and the one
/// picked in the dialog. `source` names the side the items leave from.
pub fn transfer_items(
    current: usize,
    other: Option<usize>,
    source: Position,
    mode: TransferMode,
) -> Result<ListAction> {
    let other = validate_destination(other)?;
    let (source, destination) = TransferSides {
        current,
        other,
        source,
    }
    .resolve()?;
    Ok(ListAction::ItemsTransfer {
        mode,
        source,
        destination,
    })
}
