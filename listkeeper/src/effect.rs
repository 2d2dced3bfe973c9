//! Side effects declared by the reducer and run by the runtime.

use crate::storage::Document;

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Read the document from storage
    LoadDocument,
    /// Persist this snapshot (debounced)
    SaveDocument(Document),
    CloudFetch,
    /// Upload this snapshot
    CloudPush(Document),
    CloudDelete,
}
