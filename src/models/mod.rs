pub mod document;
pub mod request;
pub mod search;

pub use document::{
    current_timestamp, current_timestamp_nanos, sortable_id_for, Document, DocumentId, Keywords,
    Source,
};
pub use request::{PutRequest, QueryRequest, QuerySpec};
pub use search::{IndexStatus, ResetStatus, SearchHits, SearchResponse};
