//! Clients for collaborators outside the storage engine.

mod assistant;

pub use assistant::{Assistant, CannedAssistant, FALLBACK_REPLY};

#[cfg(test)]
pub use assistant::MockAssistant;
