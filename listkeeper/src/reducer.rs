//! Application reducer
//!
//! - Every change to lists or settings declares a `SaveDocument` effect
//! - Loads replace the snapshot without writing it back
//! - Async results clear the matching in-flight flag

use listkeeper_core::{lists_reducer, DispatchResult, Result};

use crate::action::AppAction;
use crate::effect::Effect;
use crate::state::AppState;

pub fn reducer(state: &mut AppState, action: AppAction) -> Result<DispatchResult<Effect>> {
    match action {
        AppAction::Edit(action) => {
            if lists_reducer(&mut state.lists, action)? {
                Ok(DispatchResult::changed_with(Effect::SaveDocument(
                    state.document(),
                )))
            } else {
                Ok(DispatchResult::unchanged())
            }
        }

        // ===== Storage =====
        AppAction::StorageLoad => {
            state.is_loading = true;
            Ok(DispatchResult::changed_with(Effect::LoadDocument))
        }

        AppAction::StorageDidLoad(document) => {
            state.replace(document);
            state.is_loading = false;
            Ok(DispatchResult::changed())
        }

        AppAction::StorageDidSave => Ok(DispatchResult::unchanged()),

        AppAction::StorageDidError(message) => {
            state.is_loading = false;
            state.last_error = Some(message);
            Ok(DispatchResult::changed())
        }

        AppAction::SettingsUpdate(settings) => {
            settings.validate()?;
            if state.settings == settings {
                return Ok(DispatchResult::unchanged());
            }
            state.settings = settings;
            Ok(DispatchResult::changed_with(Effect::SaveDocument(
                state.document(),
            )))
        }

        // ===== Cloud =====
        AppAction::CloudFetch => {
            state.is_syncing = true;
            Ok(DispatchResult::changed_with(Effect::CloudFetch))
        }

        AppAction::CloudPush => {
            state.is_syncing = true;
            Ok(DispatchResult::changed_with(Effect::CloudPush(
                state.document(),
            )))
        }

        AppAction::CloudDelete => {
            state.is_syncing = true;
            Ok(DispatchResult::changed_with(Effect::CloudDelete))
        }

        AppAction::CloudDidFetch(document) => {
            state.is_syncing = false;
            state.last_error = None;
            if state.document() == document {
                return Ok(DispatchResult::changed());
            }
            // The fetched copy becomes the local copy.
            state.replace(document);
            Ok(DispatchResult::changed_with(Effect::SaveDocument(
                state.document(),
            )))
        }

        AppAction::CloudDidMessage(message) => {
            state.is_syncing = false;
            state.message = Some(message);
            Ok(DispatchResult::changed())
        }

        AppAction::CloudDidError(message) => {
            state.is_syncing = false;
            state.last_error = Some(message);
            Ok(DispatchResult::changed())
        }

        AppAction::ErrorDismiss => {
            if state.last_error.is_none() && state.message.is_none() {
                return Ok(DispatchResult::unchanged());
            }
            state.last_error = None;
            state.message = None;
            Ok(DispatchResult::changed())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use listkeeper_core::testing::{item, list, selected};
    use listkeeper_core::{assert_emitted, assert_not_emitted, count_emitted};
    use listkeeper_core::{CollectionAction, ListAction, ListError, ListType, Position};

    use crate::state::Settings;
    use crate::storage::Document;

    fn state() -> AppState {
        AppState::new(
            vec![list(
                "Groceries",
                ListType::Shopping,
                vec![selected("Apples"), item("Bread")],
            )],
            Settings::default(),
        )
    }

    #[test]
    fn test_edit_saves_new_snapshot() {
        let mut state = state();
        let result = reducer(
            &mut state,
            AppAction::Edit(ListAction::ItemsSetComplete {
                list: 0,
                complete: true,
            }),
        )
        .unwrap();

        assert!(result.changed);
        assert!(state.lists[0].items[0].is_complete);
        assert_eq!(result.effects, vec![Effect::SaveDocument(state.document())]);
    }

    #[test]
    fn test_noop_edit_does_not_save() {
        let mut state = AppState::new(
            vec![list("Empty", ListType::List, vec![])],
            Settings::default(),
        );
        let result = reducer(
            &mut state,
            AppAction::Edit(ListAction::Items {
                list: 0,
                action: CollectionAction::DeleteSelected,
            }),
        )
        .unwrap();

        assert!(!result.changed);
        assert!(!result.has_effects());
    }

    #[test]
    fn test_invalid_position_is_an_error() {
        let mut state = state();
        let before = state.clone();
        let result = reducer(
            &mut state,
            AppAction::Edit(ListAction::Items {
                list: 0,
                action: CollectionAction::Add {
                    entry: item("Milk"),
                    position: Position::Other,
                },
            }),
        );

        assert!(result.is_err());
        assert_eq!(state, before);
    }

    #[test]
    fn test_load_round_trip() {
        let mut state = AppState::default();
        let result = reducer(&mut state, AppAction::StorageLoad).unwrap();
        assert!(state.is_loading);
        assert_eq!(result.effects, vec![Effect::LoadDocument]);

        let document = Document::new(
            vec![list("Chores", ListType::ToDo, vec![item("Dishes")])],
            Settings::default(),
        );
        let result = reducer(&mut state, AppAction::StorageDidLoad(document.clone())).unwrap();
        assert!(!state.is_loading);
        assert_eq!(state.document(), document);
        assert!(!result.has_effects());
    }

    #[test]
    fn test_settings_update_saves_only_on_change() {
        let mut state = state();
        let result = reducer(&mut state, AppAction::SettingsUpdate(Settings::default())).unwrap();
        assert!(!result.changed);

        let settings = Settings {
            default_list_position: Position::Top,
            ..Settings::default()
        };
        let result = reducer(&mut state, AppAction::SettingsUpdate(settings.clone())).unwrap();
        assert!(result.changed);
        assert_eq!(state.settings, settings);
        assert_emitted!(result.effects, Effect::SaveDocument(doc) if doc.settings == settings);
        assert_eq!(count_emitted!(result.effects, Effect::SaveDocument(_)), 1);
    }

    #[test]
    fn test_settings_update_rejects_other() {
        let mut state = state();
        for settings in [
            Settings {
                default_list_position: Position::Other,
                ..Settings::default()
            },
            Settings {
                default_new_item_position: Position::Other,
                ..Settings::default()
            },
        ] {
            let result = reducer(&mut state, AppAction::SettingsUpdate(settings));
            assert_eq!(
                result.unwrap_err(),
                ListError::InvalidPosition("other".into())
            );
        }
        assert_eq!(state.settings, Settings::default());
    }

    #[test]
    fn test_cloud_push_carries_snapshot() {
        let mut state = state();
        let result = reducer(&mut state, AppAction::CloudPush).unwrap();
        assert!(state.is_syncing);
        assert_eq!(result.effects, vec![Effect::CloudPush(state.document())]);

        reducer(&mut state, AppAction::CloudDidMessage("Saved".into())).unwrap();
        assert!(!state.is_syncing);
        assert_eq!(state.message.as_deref(), Some("Saved"));
    }

    #[test]
    fn test_cloud_fetch_replaces_and_saves() {
        let mut state = state();
        reducer(&mut state, AppAction::CloudFetch).unwrap();

        let fetched = Document::new(vec![], Settings::default());
        let result = reducer(&mut state, AppAction::CloudDidFetch(fetched.clone())).unwrap();

        assert!(state.lists.is_empty());
        assert!(!state.is_syncing);
        assert_eq!(result.effects, vec![Effect::SaveDocument(fetched)]);
    }

    #[test]
    fn test_cloud_fetch_of_local_copy_does_not_save() {
        let mut state = state();
        reducer(&mut state, AppAction::CloudFetch).unwrap();

        let local = state.document();
        let result = reducer(&mut state, AppAction::CloudDidFetch(local)).unwrap();

        assert!(!state.is_syncing);
        assert_not_emitted!(result.effects, Effect::SaveDocument(_));
    }

    #[test]
    fn test_error_dismiss() {
        let mut state = state();
        reducer(&mut state, AppAction::CloudDidError("offline".into())).unwrap();
        assert_eq!(state.last_error.as_deref(), Some("offline"));

        assert!(reducer(&mut state, AppAction::ErrorDismiss).unwrap().changed);
        assert!(state.last_error.is_none());
        assert!(!reducer(&mut state, AppAction::ErrorDismiss).unwrap().changed);
    }
}
