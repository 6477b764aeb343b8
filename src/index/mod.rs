//! Index slots and their document stores.

pub mod registry;
pub mod store;

pub use registry::{Allocation, IndexRegistry};
pub use store::{DocumentMap, IndexStore};
