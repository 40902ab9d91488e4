//! Path and query id parsing.

use common::{AppError, AppResult};
use domain::Id;

/// Parse a raw id segment. `entity` names the id in the error message,
/// e.g. `"user"` gives `Invalid user ID`.
pub fn parse_id(raw: &str, entity: &str) -> AppResult<Id> {
    raw.trim()
        .parse::<Id>()
        .map_err(|_| AppError::bad_request(format!("Invalid {} ID", entity)))
}
