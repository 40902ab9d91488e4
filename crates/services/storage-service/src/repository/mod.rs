//! Repository layer for data access.

mod mem_storage;
mod storage;
pub(crate) mod table;

pub use mem_storage::MemStorage;
pub use storage::{CollectionCounts, Storage};

#[cfg(any(test, feature = "test-utils"))]
pub use storage::MockStorage;
