//! Core engine for listkeeper
//!
//! Pure, synchronous logic behind shopping lists, to-do lists and ordered
//! to-do lists: symbolic positioning, selection-driven batch edits and moving
//! or copying items between lists.
//!
//! # Core Concepts
//!
//! - **Position**: `top`, `current` or `bottom`, resolved to an index against
//!   the collection with the relocated entry removed
//! - **Selection**: the only way batch operations pick their targets; cleared
//!   once a batch operation applies
//! - **ListAction**: one variant per operation, reduced by [`reduce`] into a
//!   new snapshot
//! - **Store**: owns the snapshot and routes actions through middleware
//!
//! # Basic Example
//!
//! ```
//! use listkeeper_core::prelude::*;
//!
//! let mut store = Store::new(Vec::new(), lists_reducer);
//! store
//!     .dispatch(ListAction::Lists(CollectionAction::Add {
//!         entry: List::new("Groceries", ListType::Shopping),
//!         position: Position::Top,
//!     }))
//!     .unwrap();
//! store
//!     .dispatch(ListAction::Items {
//!         list: 0,
//!         action: CollectionAction::Add {
//!             entry: Item::new("Apples").with_quantity(2),
//!             position: Position::Bottom,
//!         },
//!     })
//!     .unwrap();
//!
//! assert_eq!(store.state()[0].item_count(), 2);
//! ```

pub mod action;
pub mod effect;
pub mod error;
pub mod model;
pub mod mutation;
pub mod position;
pub mod reducer;
pub mod sequence;
pub mod store;
pub mod testing;
pub mod transfer;

pub use action::{Action, ActionCategory, ActionSummary, CollectionAction, ListAction};
pub use error::{ListError, Result};
pub use model::{Entry, Item, List, ListType};
pub use mutation::Selector;
pub use position::Position;
pub use reducer::{lists_reducer, reduce, reduce_collection};
pub use sequence::{insert_at, remove_at, update_at, update_collection};
pub use transfer::{transfer, TransferMode, TransferSides};

pub use store::{
    ComposedMiddleware, LoggingMiddleware, Middleware, NoopMiddleware, Reducer, Store,
    StoreWithMiddleware,
};

pub use effect::{DispatchResult, EffectReducer, EffectStore, EffectStoreWithMiddleware};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::action::{Action, ActionCategory, ActionSummary, CollectionAction, ListAction};
    pub use crate::effect::{
        DispatchResult, EffectReducer, EffectStore, EffectStoreWithMiddleware,
    };
    pub use crate::error::ListError;
    pub use crate::model::{Entry, Item, List, ListType};
    pub use crate::mutation::Selector;
    pub use crate::position::Position;
    pub use crate::reducer::{lists_reducer, reduce};
    pub use crate::store::{
        ComposedMiddleware, LoggingMiddleware, Middleware, NoopMiddleware, Reducer, Store,
        StoreWithMiddleware,
    };
    pub use crate::transfer::{TransferMode, TransferSides};
}
