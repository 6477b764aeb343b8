//! Query compilation, evaluation, ranking and pagination
//!
//! A query runs in four steps against one index:
//! - **Compile**: patterns in the [`QuerySpec`](crate::models::QuerySpec) are
//!   compiled once into a [`CompiledQuery`]
//! - **Evaluate**: every document is tested against the AND, OR and filter groups
//! - **Rank**: recalls are stably sorted by the requested keyword fields using a
//!   [`Collation`], then by sortable id
//! - **Paginate**: the requested page is clamped and sliced
//!
//! # Example
//!
//! ```json
//! {
//!   "query": {
//!     "ands": { "title": "rust" },
//!     "ors": { "tag": "^sys", "lang": "en" },
//!     "filters": { "year": "2023,2024" },
//!     "sort_bys": "title,year",
//!     "sort_mode": "asc"
//!   },
//!   "from": 0,
//!   "size": 20
//! }
//! ```

pub mod collation;
pub mod compiled;
pub mod evaluator;
pub mod pagination;
pub mod ranker;

pub use collation::{BinaryCollation, Collation, CollationKind, LocaleCollation};
pub use compiled::{AllowedValues, CompiledQuery, SortOrder, SortSpec};
pub use evaluator::{evaluate, recall};
pub use pagination::{Page, PageLimits};
pub use ranker::{compare_documents, rank};
