//! Storage Service Library
//!
//! The in-process storage engine: the sole owner of every entity collection.
//! Callers reach it through the [`Storage`] trait so the route layer and the
//! auth use cases can be tested against a mock.

pub mod fixtures;
pub mod repository;

pub use repository::{CollectionCounts, MemStorage, Storage};

#[cfg(any(test, feature = "test-utils"))]
pub use repository::MockStorage;
