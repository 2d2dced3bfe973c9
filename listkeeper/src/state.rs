//! Application state - single source of truth
//!
//! - The reducer is the only writer
//! - `lists` is the engine snapshot; everything else is shell bookkeeping

use listkeeper_core::position::deserialize_placement;
use listkeeper_core::{List, ListType, Position, Result};
use serde::{Deserialize, Serialize};

use crate::storage::Document;

/// User preferences stored next to the lists.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    /// Type preselected when creating a list
    pub default_list_type: ListType,
    /// Where new lists are inserted
    #[serde(deserialize_with = "deserialize_placement")]
    pub default_list_position: Position,
    /// Item position preselected for new lists
    #[serde(deserialize_with = "deserialize_placement")]
    pub default_new_item_position: Position,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_list_type: ListType::Shopping,
            default_list_position: Position::Bottom,
            default_new_item_position: Position::Bottom,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AppState {
    pub lists: Vec<List>,
    pub settings: Settings,

    /// Waiting for the first load from storage
    pub is_loading: bool,

    /// A cloud request is in flight
    pub is_syncing: bool,

    /// Last failure, shown until dismissed
    pub last_error: Option<String>,

    /// Informational reply from the cloud endpoint
    pub message: Option<String>,
}

impl Settings {
    /// Both positions must place an entry within one collection.
    ///
    /// # Errors
    ///
    /// Returns `InvalidPosition` when either position is `Other`.
    pub fn validate(&self) -> Result<()> {
        self.default_list_position.placement()?;
        self.default_new_item_position.placement()?;
        Ok(())
    }
}

impl AppState {
    pub fn new(lists: Vec<List>, settings: Settings) -> Self {
        Self {
            lists,
            settings,
            ..Self::default()
        }
    }

    /// Persisted form of the current lists and settings.
    pub fn document(&self) -> Document {
        Document::new(self.lists.clone(), self.settings.clone())
    }

    pub fn replace(&mut self, document: Document) {
        self.lists = document.lists;
        self.settings = document.settings;
    }
}
