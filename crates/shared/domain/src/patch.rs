//! Helpers for partial updates.
//!
//! Serde collapses a missing key and an explicit `null` into `None`. Nullable
//! attributes need to tell the two apart: an absent key leaves the stored
//! value alone, `null` clears it.

use serde::{Deserialize, Deserializer};

/// Deserialize a present key into `Some(..)`, including `null` as `Some(None)`.
///
/// Pair with `#[serde(default)]` so a missing key stays `None`.
pub fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Overwrite `target` when a new value was supplied.
pub fn merge<T>(target: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *target = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Patch {
        #[serde(default, deserialize_with = "double_option")]
        image: Option<Option<String>>,
    }

    #[test]
    fn test_absent_null_and_value_are_distinct() {
        let absent: Patch = serde_json::from_str("{}").unwrap();
        let null: Patch = serde_json::from_str(r#"{"image":null}"#).unwrap();
        let value: Patch = serde_json::from_str(r#"{"image":"a.png"}"#).unwrap();

        assert_eq!(absent.image, None);
        assert_eq!(null.image, Some(None));
        assert_eq!(value.image, Some(Some("a.png".to_string())));
    }

    #[test]
    fn test_merge_keeps_value_when_absent() {
        let mut price = 100;
        merge(&mut price, None);
        assert_eq!(price, 100);

        merge(&mut price, Some(250));
        assert_eq!(price, 250);
    }
}
