//! JSON file storage.
//!
//! Writes go to a temporary file that is then renamed over the target, so a
//! crash mid-write leaves the previous document intact.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::storage::{Document, Storage};

/// Stores the document as pretty-printed JSON at `path`.
///
/// Parent directories are created on the first save.
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn tmp_path(&self) -> PathBuf {
        self.path.with_extension("tmp")
    }
}

impl Storage for JsonFileStorage {
    async fn load(&self) -> Result<Document> {
        let contents = match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = ?self.path, "no storage file, starting empty");
                return Ok(Document::default());
            }
            Err(e) => return Err(e.into()),
        };

        let document = Document::from_json(&contents).map_err(|e| {
            Error::Storage(format!("failed to parse {}: {e}", self.path.display()))
        })?;

        tracing::debug!(
            path = ?self.path,
            version = document.version,
            lists = document.lists.len(),
            "loaded document"
        );
        Ok(document)
    }

    async fn save(&self, document: &Document) -> Result<()> {
        tracing::debug!(path = ?self.path, lists = document.lists.len(), "saving document");

        let json = document.to_json()?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        let tmp_path = self.tmp_path();
        tracing::trace!(tmp_path = ?tmp_path, "writing to temporary file");
        tokio::fs::write(&tmp_path, json).await?;

        tracing::trace!("renaming temporary file to final location");
        tokio::fs::rename(&tmp_path, &self.path).await?;

        tracing::debug!("document saved");
        Ok(())
    }
}
