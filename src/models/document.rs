use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;

/// Caller-supplied document identifier, unique within an index
pub type DocumentId = String;

/// Keyword fields used for matching, filtering and sorting
pub type Keywords = HashMap<String, String>;

/// Opaque caller-defined payload returned verbatim with hits
pub type Source = Map<String, Value>;

/// Stored document
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Document {
    #[serde(rename = "_id")]
    pub id: DocumentId,
    /// Final tie-break when every sort field is equal
    #[serde(rename = "_sortable_id")]
    pub sortable_id: i64,
    #[serde(rename = "_keywords")]
    pub keywords: Keywords,
    #[serde(rename = "_source")]
    pub source: Source,
    #[serde(rename = "_index")]
    pub index: String,
    #[serde(rename = "_modified_at")]
    pub modified_at: i64,
    #[serde(rename = "_created_at")]
    pub created_at: i64,
}

impl Document {
    /// Build a document for `index`, merging the keywords into the source payload.
    ///
    /// Both timestamps are set to now; the store carries `created_at` over
    /// when it replaces an existing document.
    pub fn new(
        index: impl Into<String>,
        id: impl Into<DocumentId>,
        keywords: Keywords,
        source: Option<Source>,
    ) -> Self {
        let id = id.into();
        let mut source = source.unwrap_or_default();
        for (field, value) in &keywords {
            source.insert(field.clone(), Value::String(value.clone()));
        }

        let now = current_timestamp();
        Self {
            sortable_id: sortable_id_for(&id),
            id,
            keywords,
            source,
            index: index.into(),
            modified_at: now,
            created_at: now,
        }
    }

    /// Keyword value for `field`, empty when absent
    pub fn keyword(&self, field: &str) -> &str {
        self.keywords.get(field).map(String::as_str).unwrap_or("")
    }
}

/// Derive the tie-break surrogate: the id itself when it is a non-zero
/// integer, otherwise a nanosecond creation timestamp.
pub fn sortable_id_for(id: &str) -> i64 {
    match id.parse::<i64>() {
        Ok(n) if n != 0 => n,
        _ => current_timestamp_nanos(),
    }
}

/// Get current Unix timestamp in seconds
pub fn current_timestamp() -> i64 {
    chrono::Utc::now().timestamp()
}

/// Get current Unix timestamp in nanoseconds
pub fn current_timestamp_nanos() -> i64 {
    let now = chrono::Utc::now();
    now.timestamp_nanos_opt()
        .unwrap_or_else(|| now.timestamp_micros().saturating_mul(1_000))
}
