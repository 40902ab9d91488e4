//! Custom request extractors.

mod id;
mod validated_json;

pub use id::parse_id;
pub use validated_json::ValidatedJson;
