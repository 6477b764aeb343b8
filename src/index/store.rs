use std::collections::HashMap;

use parking_lot::RwLock;

use crate::models::{Document, DocumentId};

/// Documents of one index, keyed by id
pub type DocumentMap = HashMap<DocumentId, Document>;

/// Per-index document store guarded by its own read-write lock.
///
/// Writers (put, reset) take the exclusive lock; scans and inspection take
/// the shared lock and hold it for as long as they look at the documents,
/// so a scan never observes a write that started after it.
#[derive(Default)]
pub struct IndexStore {
    docs: RwLock<DocumentMap>,
}

impl IndexStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or fully replace a document. Returns true if a document with
    /// the same id was replaced.
    ///
    /// The replacement keeps the creation time of the document it replaces.
    pub fn put(&self, mut doc: Document) -> bool {
        let mut docs = self.docs.write();
        if let Some(previous) = docs.get(&doc.id) {
            doc.created_at = previous.created_at;
        }
        docs.insert(doc.id.clone(), doc).is_some()
    }

    /// Run `f` over every current document while holding the shared lock
    pub fn scan<R>(&self, f: impl FnOnce(&DocumentMap) -> R) -> R {
        let docs = self.docs.read();
        f(&docs)
    }

    pub fn get(&self, id: &str) -> Option<Document> {
        self.docs.read().get(id).cloned()
    }

    /// Replace the contents with an empty map, returning how many documents were dropped
    pub fn reset(&self) -> usize {
        let previous = std::mem::take(&mut *self.docs.write());
        previous.len()
    }

    pub fn len(&self) -> usize {
        self.docs.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
