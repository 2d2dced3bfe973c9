//! Storage backend abstraction.

use std::future::Future;

use crate::error::Result;
use crate::storage::Document;

/// Somewhere to keep the whole document.
///
/// The snapshot is small and always written as a whole, so the trait only
/// knows two operations. Both are async so the runtime can run them as
/// background tasks.
///
/// # Implementations
///
/// - [`JsonFileStorage`](crate::storage::JsonFileStorage): a JSON file on disk
/// - [`MemoryStorage`](crate::storage::MemoryStorage): process memory
pub trait Storage: Send + Sync + 'static {
    /// Read the stored document. Nothing stored yet is an empty document,
    /// not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the data exists but cannot be read or parsed.
    fn load(&self) -> impl Future<Output = Result<Document>> + Send;

    /// Replace the stored document.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails. The previous document must
    /// survive a failed write.
    fn save(&self, document: &Document) -> impl Future<Output = Result<()>> + Send;
}
