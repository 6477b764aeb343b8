pub mod api;
pub mod config;
pub mod error;
pub mod index;
pub mod metrics;
pub mod models;
pub mod query;
pub mod service;

pub use api::{create_router, AppState};
pub use config::{ServerConfig, ServiceConfig};
pub use error::{Result, RummageError};
pub use metrics::ServiceMetrics;
pub use models::*;
pub use query::{CollationKind, CompiledQuery};
pub use service::SearchService;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
