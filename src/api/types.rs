use serde::{Deserialize, Serialize};

use crate::models::DocumentId;

/// Response after creating an index
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateIndexResponse {
    pub index: String,
    pub acknowledged: bool,
}

/// Response after storing a document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PutResponse {
    pub index: String,
    pub id: DocumentId,
}

/// Response after resetting an index
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResetResponse {
    pub index: String,
    pub status: String,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub indices: usize,
}

/// API Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
        }
    }
}
