use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::document::{DocumentId, Keywords, Source};

/// Raw query conditions as supplied by callers, before patterns are compiled
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct QuerySpec {
    /// field -> pattern; every one must match
    pub ands: HashMap<String, String>,
    /// field -> pattern; at least one must match
    pub ors: HashMap<String, String>,
    /// field -> comma-separated allowed values
    pub filters: HashMap<String, String>,
    /// `"asc"`; anything else sorts descending
    pub sort_mode: String,
    /// Comma-separated sort fields in priority order
    pub sort_bys: String,
}

impl QuerySpec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Require `field` to match `pattern`
    pub fn and(mut self, field: impl Into<String>, pattern: impl Into<String>) -> Self {
        self.ands.insert(field.into(), pattern.into());
        self
    }

    /// Accept documents where `field` matches `pattern`
    pub fn or(mut self, field: impl Into<String>, pattern: impl Into<String>) -> Self {
        self.ors.insert(field.into(), pattern.into());
        self
    }

    /// Restrict `field` to a comma-separated list of values
    pub fn filter(mut self, field: impl Into<String>, allowed: impl Into<String>) -> Self {
        self.filters.insert(field.into(), allowed.into());
        self
    }

    /// Sort by comma-separated fields in the given mode
    pub fn sort(mut self, sort_bys: impl Into<String>, sort_mode: impl Into<String>) -> Self {
        self.sort_bys = sort_bys.into();
        self.sort_mode = sort_mode.into();
        self
    }
}

/// Query request against one index
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct QueryRequest {
    #[serde(default)]
    pub query: QuerySpec,
    #[serde(default)]
    pub from: i64,
    #[serde(default)]
    pub size: i64,
}

impl QueryRequest {
    pub fn new(query: QuerySpec) -> Self {
        Self {
            query,
            from: 0,
            size: 0,
        }
    }

    /// Set the pagination bounds
    pub fn with_page(mut self, from: i64, size: i64) -> Self {
        self.from = from;
        self.size = size;
        self
    }
}

/// Request to store a document
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PutRequest {
    pub id: DocumentId,
    #[serde(default)]
    pub keywords: Keywords,
    #[serde(default)]
    pub source: Option<Source>,
}
