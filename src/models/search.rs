use serde::{Deserialize, Serialize};

use super::document::Document;

/// One page of query results
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SearchHits {
    /// Effective offset after clamping
    pub from: usize,
    /// Effective page size after clamping
    pub size: usize,
    /// Number of recalls before pagination
    pub total: usize,
    pub hits: Vec<Document>,
}

/// Query response with timing information
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SearchResponse {
    pub took_ms: u64,
    pub hits: SearchHits,
}

impl SearchResponse {
    /// Ids of the returned hits, in rank order
    pub fn hit_ids(&self) -> Vec<&str> {
        self.hits.hits.iter().map(|doc| doc.id.as_str()).collect()
    }
}

/// Outcome of resetting an index
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResetStatus {
    Ok,
    NotFound,
}

/// Administrative view of one index
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexStatus {
    pub index: String,
    pub exists: bool,
    pub initialized: bool,
    pub document_count: usize,
}

impl IndexStatus {
    /// Status reported for a name with no allocated slot
    pub fn missing(index: impl Into<String>) -> Self {
        Self {
            index: index.into(),
            exists: false,
            initialized: false,
            document_count: 0,
        }
    }
}
