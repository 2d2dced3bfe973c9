//! Application actions
//!
//! Naming follows a prefix convention:
//! - `Storage*`, `Cloud*`: category comes from the prefix
//! - `*Did*`: result of an async task, sent back over the action channel
//! - `Edit` wraps an engine action and keeps its category

use listkeeper_core::{Action, ActionCategory, ActionSummary, ListAction};

use crate::state::Settings;
use crate::storage::Document;

#[derive(Clone, Debug, PartialEq)]
pub enum AppAction {
    /// Apply an engine action to the lists
    Edit(ListAction),

    // ===== Storage =====
    /// Intent: read the persisted document
    StorageLoad,
    /// Result: document read from storage
    StorageDidLoad(Document),
    /// Result: snapshot written
    StorageDidSave,
    StorageDidError(String),

    /// Replace the user's settings
    SettingsUpdate(Settings),

    // ===== Cloud =====
    /// Intent: replace local data with the cloud copy
    CloudFetch,
    /// Intent: upload the local lists and settings
    CloudPush,
    /// Intent: delete the cloud copy
    CloudDelete,
    CloudDidFetch(Document),
    /// Result: the endpoint answered with a message instead of data
    CloudDidMessage(String),
    CloudDidError(String),

    /// Clear the error and message banners
    ErrorDismiss,
}

impl Action for AppAction {
    fn name(&self) -> &'static str {
        match self {
            AppAction::Edit(action) => action.name(),
            AppAction::StorageLoad => "StorageLoad",
            AppAction::StorageDidLoad(_) => "StorageDidLoad",
            AppAction::StorageDidSave => "StorageDidSave",
            AppAction::StorageDidError(_) => "StorageDidError",
            AppAction::SettingsUpdate(_) => "SettingsUpdate",
            AppAction::CloudFetch => "CloudFetch",
            AppAction::CloudPush => "CloudPush",
            AppAction::CloudDelete => "CloudDelete",
            AppAction::CloudDidFetch(_) => "CloudDidFetch",
            AppAction::CloudDidMessage(_) => "CloudDidMessage",
            AppAction::CloudDidError(_) => "CloudDidError",
            AppAction::ErrorDismiss => "ErrorDismiss",
        }
    }
}

impl ActionCategory for AppAction {
    fn category(&self) -> Option<&'static str> {
        match self {
            AppAction::Edit(action) => action.category(),
            AppAction::StorageLoad
            | AppAction::StorageDidLoad(_)
            | AppAction::StorageDidSave
            | AppAction::StorageDidError(_) => Some("storage"),
            AppAction::SettingsUpdate(_) => Some("settings"),
            AppAction::CloudFetch
            | AppAction::CloudPush
            | AppAction::CloudDelete
            | AppAction::CloudDidFetch(_)
            | AppAction::CloudDidMessage(_)
            | AppAction::CloudDidError(_) => Some("cloud"),
            AppAction::ErrorDismiss => None,
        }
    }
}

impl ActionSummary for AppAction {
    fn summary(&self) -> String {
        match self {
            AppAction::Edit(action) => action.summary(),
            AppAction::StorageDidLoad(document) => {
                format!("StorageDidLoad({} lists)", document.lists.len())
            }
            AppAction::CloudDidFetch(document) => {
                format!("CloudDidFetch({} lists)", document.lists.len())
            }
            _ => format!("{:?}", self),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use listkeeper_core::{CollectionAction, TransferMode};

    #[test]
    fn test_edit_keeps_engine_name_and_category() {
        let action = AppAction::Edit(ListAction::ItemsTransfer {
            mode: TransferMode::Move,
            source: 0,
            destination: 1,
        });
        assert_eq!(action.name(), "ItemsTransfer");
        assert_eq!(action.category(), Some("items"));

        let action = AppAction::Edit(ListAction::Lists(CollectionAction::DeleteSelected));
        assert_eq!(action.category(), Some("lists"));
    }

    #[test]
    fn test_prefix_categories() {
        assert_eq!(AppAction::StorageDidSave.category(), Some("storage"));
        assert_eq!(AppAction::CloudPush.category(), Some("cloud"));
        assert_eq!(AppAction::ErrorDismiss.category(), None);
    }

    #[test]
    fn test_summary_hides_documents() {
        let action = AppAction::CloudDidFetch(Document::default());
        assert_eq!(action.summary(), "CloudDidFetch(0 lists)");
    }
}
