//! Runtime: store, effects and background tasks in one place
//!
//! The runtime is the single owner of the store. Actions from callers go
//! through [`Runtime::dispatch`]; results of background work come back over
//! the action channel and are applied by [`Runtime::next`]. Effects declared
//! by the reducer become keyed tasks:
//!
//! - `LoadDocument`: spawned under [`TaskKey::Load`]
//! - `SaveDocument`: debounced under [`TaskKey::Save`], so a burst of edits
//!   writes only the last snapshot
//! - cloud effects: spawned under [`TaskKey::Cloud`]

use std::sync::Arc;
use std::time::Duration;

use listkeeper_core::{EffectStoreWithMiddleware, LoggingMiddleware};
use tokio::sync::mpsc;

use crate::action::AppAction;
use crate::cloud::{CloudClient, CloudReply};
use crate::config::Config;
use crate::effect::Effect;
use crate::error::Result;
use crate::reducer::reducer;
use crate::state::AppState;
use crate::storage::{JsonFileStorage, Storage};
use crate::tasks::{TaskKey, TaskManager};

pub struct Runtime<St: Storage> {
    store: EffectStoreWithMiddleware<AppState, AppAction, Effect, LoggingMiddleware>,
    storage: Arc<St>,
    cloud: Option<Arc<CloudClient>>,
    tasks: TaskManager<AppAction>,
    action_tx: mpsc::UnboundedSender<AppAction>,
    action_rx: mpsc::UnboundedReceiver<AppAction>,
    save_debounce: Duration,
}

impl Runtime<JsonFileStorage> {
    /// File storage and cloud client as configured.
    ///
    /// # Errors
    ///
    /// Fails if the cloud HTTP client cannot be built.
    pub fn from_config(config: &Config) -> Result<Self> {
        let storage = JsonFileStorage::new(config.storage_path());
        let cloud = config.cloud.as_ref().map(CloudClient::new).transpose()?;
        tracing::info!(
            path = ?storage.path(),
            cloud = cloud.is_some(),
            "runtime configured"
        );
        Ok(Self::new(storage, cloud, config.save_debounce()))
    }
}

impl<St: Storage> Runtime<St> {
    pub fn new(storage: St, cloud: Option<CloudClient>, save_debounce: Duration) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        Self {
            store: EffectStoreWithMiddleware::new(
                AppState::default(),
                reducer,
                LoggingMiddleware::new(),
            ),
            storage: Arc::new(storage),
            cloud: cloud.map(Arc::new),
            tasks: TaskManager::new(action_tx.clone()),
            action_tx,
            action_rx,
            save_debounce,
        }
    }

    pub fn state(&self) -> &AppState {
        self.store.state()
    }

    /// Queue an action for [`Runtime::next`].
    pub fn enqueue(&self, action: AppAction) {
        let _ = self.action_tx.send(action);
    }

    pub fn action_tx(&self) -> mpsc::UnboundedSender<AppAction> {
        self.action_tx.clone()
    }

    /// Apply `action` and start the effects it declares.
    ///
    /// Returns whether the state changed. Must be called inside a tokio
    /// runtime.
    ///
    /// # Errors
    ///
    /// Returns the engine's error when it rejects the action. The state is
    /// left untouched in that case.
    pub fn dispatch(&mut self, action: AppAction) -> listkeeper_core::Result<bool> {
        let result = self.store.dispatch(action)?;
        for effect in result.effects {
            self.run_effect(effect);
        }
        Ok(result.changed)
    }

    /// Wait for the next queued action and dispatch it.
    pub async fn next(&mut self) -> listkeeper_core::Result<bool> {
        // The runtime holds a sender, so the channel never closes.
        match self.action_rx.recv().await {
            Some(action) => self.dispatch(action),
            None => Ok(false),
        }
    }

    /// Whether a debounced save is still pending.
    pub fn has_pending_save(&self) -> bool {
        self.tasks.is_running(TaskKey::Save)
    }

    /// Write a pending save now instead of waiting for the debounce.
    ///
    /// Returns whether anything was written.
    ///
    /// # Errors
    ///
    /// Returns the storage error if the write fails.
    pub async fn flush(&mut self) -> Result<bool> {
        if !self.has_pending_save() {
            return Ok(false);
        }
        self.tasks.cancel(TaskKey::Save);

        let document = self.state().document();
        tracing::debug!(lists = document.lists.len(), "flushing pending save");
        self.storage.save(&document).await?;
        Ok(true)
    }

    fn run_effect(&mut self, effect: Effect) {
        match effect {
            Effect::LoadDocument => {
                let storage = Arc::clone(&self.storage);
                self.tasks.spawn(TaskKey::Load, async move {
                    match storage.load().await {
                        Ok(document) => AppAction::StorageDidLoad(document),
                        Err(e) => AppAction::StorageDidError(e.to_string()),
                    }
                });
            }

            Effect::SaveDocument(document) => {
                let storage = Arc::clone(&self.storage);
                self.tasks
                    .debounce(TaskKey::Save, self.save_debounce, async move {
                        match storage.save(&document).await {
                            Ok(()) => AppAction::StorageDidSave,
                            Err(e) => AppAction::StorageDidError(e.to_string()),
                        }
                    });
            }

            Effect::CloudFetch => {
                if let Some(client) = self.cloud_client() {
                    self.tasks.spawn(TaskKey::Cloud, async move {
                        cloud_action(client.fetch().await)
                    });
                }
            }

            Effect::CloudPush(document) => {
                if let Some(client) = self.cloud_client() {
                    self.tasks.spawn(TaskKey::Cloud, async move {
                        cloud_action(client.push(&document).await)
                    });
                }
            }

            Effect::CloudDelete => {
                if let Some(client) = self.cloud_client() {
                    self.tasks.spawn(TaskKey::Cloud, async move {
                        cloud_action(client.delete().await)
                    });
                }
            }
        }
    }

    /// The configured client, or `None` after reporting its absence.
    fn cloud_client(&self) -> Option<Arc<CloudClient>> {
        if self.cloud.is_none() {
            tracing::warn!("cloud effect without a configured endpoint");
            self.enqueue(AppAction::CloudDidError(
                "Cloud sync is not configured".to_string(),
            ));
        }
        self.cloud.clone()
    }
}

fn cloud_action(result: Result<CloudReply>) -> AppAction {
    match result {
        Ok(CloudReply::Document(document)) => AppAction::CloudDidFetch(document),
        Ok(CloudReply::Message(message)) => AppAction::CloudDidMessage(message),
        Err(e) => AppAction::CloudDidError(e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::storage::{Document, MemoryStorage};

    #[test]
    fn test_cloud_action_mapping() {
        assert_eq!(
            cloud_action(Ok(CloudReply::Message("Deleted".into()))),
            AppAction::CloudDidMessage("Deleted".into())
        );
        assert_eq!(
            cloud_action(Ok(CloudReply::Document(Document::default()))),
            AppAction::CloudDidFetch(Document::default())
        );
        assert_eq!(
            cloud_action(Err(Error::Cloud("500 Internal Server Error".into()))),
            AppAction::CloudDidError("Cloud error: 500 Internal Server Error".into())
        );
    }

    #[tokio::test]
    async fn test_cloud_without_client_reports_error() {
        let mut runtime = Runtime::new(MemoryStorage::new(), None, Duration::from_millis(10));

        runtime.dispatch(AppAction::CloudPush).unwrap();
        assert!(runtime.state().is_syncing);

        runtime.next().await.unwrap();
        assert!(!runtime.state().is_syncing);
        assert_eq!(
            runtime.state().last_error.as_deref(),
            Some("Cloud sync is not configured")
        );
    }
}
