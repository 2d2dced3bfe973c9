//! Keyed background tasks
//!
//! Each effect kind runs under a [`TaskKey`]. Starting a task cancels the one
//! already running under the same key, so a newer save replaces a pending one
//! and a second cloud request supersedes the first. Results come back as
//! actions over the runtime's channel; a cancelled task sends nothing.
//!
//! ```ignore
//! let (action_tx, mut action_rx) = tokio::sync::mpsc::unbounded_channel();
//! let mut tasks = TaskManager::new(action_tx);
//!
//! tasks.debounce(TaskKey::Save, Duration::from_millis(250), async move {
//!     match storage.save(&document).await {
//!         Ok(()) => AppAction::StorageDidSave,
//!         Err(e) => AppAction::StorageDidError(e.to_string()),
//!     }
//! });
//! ```

use std::collections::HashMap;
use std::fmt;
use std::future::Future;
use std::time::Duration;

use listkeeper_core::Action;
use tokio::sync::mpsc;
use tokio::task::AbortHandle;

/// Slot a background task occupies. At most one task runs per key.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum TaskKey {
    /// Reading the document from storage
    Load,
    /// Writing the document to storage
    Save,
    /// Any request to the cloud endpoint
    Cloud,
}

impl TaskKey {
    pub fn name(self) -> &'static str {
        match self {
            TaskKey::Load => "load",
            TaskKey::Save => "save",
            TaskKey::Cloud => "cloud",
        }
    }
}

impl fmt::Display for TaskKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Registry of running tasks, one per [`TaskKey`].
///
/// Dropping the manager aborts everything still running.
pub struct TaskManager<A> {
    tasks: HashMap<TaskKey, AbortHandle>,
    action_tx: mpsc::UnboundedSender<A>,
}

impl<A> TaskManager<A>
where
    A: Action,
{
    /// `action_tx` receives the action each finished task produces.
    pub fn new(action_tx: mpsc::UnboundedSender<A>) -> Self {
        Self {
            tasks: HashMap::new(),
            action_tx,
        }
    }

    /// Run `future` now, cancelling whatever runs under `key`.
    pub fn spawn<F>(&mut self, key: TaskKey, future: F) -> &mut Self
    where
        F: Future<Output = A> + Send + 'static,
    {
        self.start(key, None, future)
    }

    /// Run `future` once `duration` passes without another call for `key`.
    pub fn debounce<F>(&mut self, key: TaskKey, duration: Duration, future: F) -> &mut Self
    where
        F: Future<Output = A> + Send + 'static,
    {
        self.start(key, Some(duration), future)
    }

    fn start<F>(&mut self, key: TaskKey, delay: Option<Duration>, future: F) -> &mut Self
    where
        F: Future<Output = A> + Send + 'static,
    {
        self.cancel(key);
        self.prune();

        let tx = self.action_tx.clone();
        let handle = tokio::spawn(async move {
            if let Some(delay) = delay {
                tokio::time::sleep(delay).await;
            }
            let action = future.await;
            tracing::trace!(task = %key, action = action.name(), "task finished");
            let _ = tx.send(action);
        });

        self.tasks.insert(key, handle.abort_handle());
        self
    }

    /// Cancel the task under `key`, if any.
    pub fn cancel(&mut self, key: TaskKey) {
        if let Some(handle) = self.tasks.remove(&key) {
            if !handle.is_finished() {
                tracing::trace!(task = %key, "task cancelled");
            }
            handle.abort();
        }
    }

    pub fn cancel_all(&mut self) {
        for (_, handle) in self.tasks.drain() {
            handle.abort();
        }
    }

    /// Whether a task under `key` has started and not yet finished.
    pub fn is_running(&self, key: TaskKey) -> bool {
        self.tasks
            .get(&key)
            .is_some_and(|handle| !handle.is_finished())
    }

    /// Number of unfinished tasks.
    pub fn len(&self) -> usize {
        self.tasks.values().filter(|h| !h.is_finished()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn prune(&mut self) {
        self.tasks.retain(|_, handle| !handle.is_finished());
    }
}

impl<A> Drop for TaskManager<A> {
    fn drop(&mut self) {
        for (_, handle) in self.tasks.drain() {
            handle.abort();
        }
    }
}
