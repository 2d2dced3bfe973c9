//! Mapping between the snapshot and its JSON representation.
//!
//! The same functions serve the local storage file and the cloud endpoint,
//! which exchanges lists and settings as JSON *strings*.

use listkeeper_core::List;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::state::Settings;

/// Current version of the storage file layout.
pub const DOCUMENT_VERSION: u32 = 1;

/// Everything that gets persisted: the lists and the user's settings.
///
/// # File Format
///
/// ```json
/// {
///   "version": 1,
///   "lists": [
///     {
///       "name": "Groceries",
///       "listType": "Shopping",
///       "defaultNewItemPosition": "bottom",
///       "isSelected": false,
///       "isLocked": false,
///       "items": [
///         { "name": "Apples", "quantity": 2, "isComplete": false, "isSelected": false, "isLocked": false }
///       ]
///     }
///   ],
///   "settings": { "defaultListType": "Shopping", "defaultListPosition": "bottom", "defaultNewItemPosition": "bottom" }
/// }
/// ```
///
/// A bare array of lists is accepted on load and gets default settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub version: u32,
    #[serde(default)]
    pub lists: Vec<List>,
    #[serde(default)]
    pub settings: Settings,
}

impl Default for Document {
    fn default() -> Self {
        Self::new(Vec::new(), Settings::default())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StoredDocument {
    Versioned(Document),
    Bare(Vec<List>),
}

impl Document {
    pub fn new(lists: Vec<List>, settings: Settings) -> Self {
        Self {
            version: DOCUMENT_VERSION,
            lists,
            settings,
        }
    }

    /// Parse a storage file.
    ///
    /// # Errors
    ///
    /// Fails on invalid JSON, unknown list types or invalid positions.
    pub fn from_json(json: &str) -> Result<Self> {
        let stored: StoredDocument = serde_json::from_str(json)?;
        Ok(match stored {
            StoredDocument::Versioned(document) => document,
            StoredDocument::Bare(lists) => Self::new(lists, Settings::default()),
        })
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Serialize lists as the JSON array used by storage and the cloud.
pub fn lists_to_json(lists: &[List]) -> Result<String> {
    Ok(serde_json::to_string(lists)?)
}

pub fn lists_from_json(json: &str) -> Result<Vec<List>> {
    Ok(serde_json::from_str(json)?)
}

pub fn settings_to_json(settings: &Settings) -> Result<String> {
    Ok(serde_json::to_string(settings)?)
}

pub fn settings_from_json(json: &str) -> Result<Settings> {
    Ok(serde_json::from_str(json)?)
}
