//! In-memory storage. Clones share one document, which suits tests and
//! sessions that never touch disk.

use std::sync::{Arc, Mutex, PoisonError};

use crate::error::Result;
use crate::storage::{Document, Storage};

/// Keeps the document in memory. Clones share the same document.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Debug, Default)]
struct Inner {
    document: Option<Document>,
    saves: usize,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage that already holds `document`.
    pub fn with_document(document: Document) -> Self {
        let storage = Self::default();
        storage.lock().document = Some(document);
        storage
    }

    /// Last saved (or preloaded) document.
    pub fn saved(&self) -> Option<Document> {
        self.lock().document.clone()
    }

    /// Number of completed saves.
    pub fn save_count(&self) -> usize {
        self.lock().saves
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Storage for MemoryStorage {
    async fn load(&self) -> Result<Document> {
        Ok(self.saved().unwrap_or_default())
    }

    async fn save(&self, document: &Document) -> Result<()> {
        let mut inner = self.lock();
        inner.document = Some(document.clone());
        inner.saves += 1;
        Ok(())
    }
}
