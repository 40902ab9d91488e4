//! Traits shared by every stored entity family.

use chrono::{DateTime, Utc};

use crate::Id;

/// A stored entity with a server-assigned id.
pub trait Record: Clone + Send + Sync + 'static {
    fn id(&self) -> Id;
}

/// The caller-supplied subset of a [`Record`].
///
/// Storage assigns the id and creation timestamp when it materializes the
/// record.
pub trait Insertable: Send + 'static {
    type Record: Record;

    fn into_record(self, id: Id, created_at: DateTime<Utc>) -> Self::Record;
}
