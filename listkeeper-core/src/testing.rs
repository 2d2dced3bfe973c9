//! Test utilities for code built on the list engine
//!
//! - [`item`], [`selected`], [`list`]: terse fixture builders
//! - [`item_names`], [`selection`]: flatten a list for assertions
//! - Assertion macros for emitted actions and effects
//!
//! # Example
//!
//! ```
//! use listkeeper_core::testing::{item, item_names, list, selected};
//! use listkeeper_core::{reduce, ListAction, ListType, TransferMode};
//!
//! let lists = vec![
//!     list("Source", ListType::ToDo, vec![selected("A"), item("B")]),
//!     list("Destination", ListType::ToDo, vec![item("D")]),
//! ];
//! let after = reduce(
//!     &lists,
//!     &ListAction::ItemsTransfer { mode: TransferMode::Move, source: 0, destination: 1 },
//! )
//! .unwrap();
//! assert_eq!(item_names(&after[1]), ["D", "A"]);
//! ```

use crate::model::{Entry, Item, List, ListType};

/// An unselected, incomplete item.
pub fn item(name: &str) -> Item {
    Item::new(name)
}

/// A selected, incomplete item.
pub fn selected(name: &str) -> Item {
    Item::new(name).with_selected(true)
}

pub fn list(name: &str, list_type: ListType, items: Vec<Item>) -> List {
    List::new(name, list_type).with_items(items)
}

/// Item names in order.
pub fn item_names(list: &List) -> Vec<&str> {
    list.items.iter().map(|item| item.name.as_str()).collect()
}

/// `is_selected` of every item in order.
pub fn selection(list: &List) -> Vec<bool> {
    list.items.iter().map(|item| item.is_selected).collect()
}

/// Assert that an action/effect matching the pattern is in the collection.
///
/// ```
/// use listkeeper_core::assert_emitted;
///
/// let effects = vec![Some(1), None];
/// assert_emitted!(effects, Some(1));
/// assert_emitted!(effects, Some(n) if *n > 0);
/// ```
#[macro_export]
macro_rules! assert_emitted {
    ($actions:expr, $pattern:pat $(if $guard:expr)?) => {
        assert!(
            $actions.iter().any(|a| matches!(a, $pattern $(if $guard)?)),
            "Expected `{}` to be emitted, but got: {:?}",
            stringify!($pattern),
            $actions
        );
    };
}

/// Assert that no action/effect matching the pattern is in the collection.
#[macro_export]
macro_rules! assert_not_emitted {
    ($actions:expr, $pattern:pat $(if $guard:expr)?) => {
        assert!(
            !$actions.iter().any(|a| matches!(a, $pattern $(if $guard)?)),
            "Expected `{}` NOT to be emitted, but it was: {:?}",
            stringify!($pattern),
            $actions
        );
    };
}

/// Count actions/effects matching the pattern.
#[macro_export]
macro_rules! count_emitted {
    ($actions:expr, $pattern:pat $(if $guard:expr)?) => {
        $actions.iter().filter(|a| matches!(a, $pattern $(if $guard)?)).count()
    };
}
