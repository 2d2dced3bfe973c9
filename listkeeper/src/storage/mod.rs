//! Persistence for the lists and settings.
//!
//! - `backend`: the [`Storage`] trait
//! - `document`: the persisted [`Document`] and its JSON mapping
//! - `json`: file storage with atomic writes
//! - `memory`: in-memory storage for tests and ephemeral sessions

pub mod backend;
pub mod document;
pub mod json;
pub mod memory;

pub use backend::Storage;
pub use document::{
    lists_from_json, lists_to_json, settings_from_json, settings_to_json, Document,
    DOCUMENT_VERSION,
};
pub use json::JsonFileStorage;
pub use memory::MemoryStorage;
