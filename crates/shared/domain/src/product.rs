//! Marketplace products listed by a user.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::patch::{double_option, merge};
use crate::record::{Insertable, Record};
use crate::Id;

/// Product entity. `price` is in minor currency units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[cfg_attr(feature = "openapi", schema(value_type = i64))]
    pub id: Id,
    #[cfg_attr(feature = "openapi", schema(value_type = i64))]
    pub user_id: Id,
    pub name: String,
    pub description: Option<String>,
    pub price: i64,
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Product {
    /// Shallow-merge a partial update into this product.
    pub fn apply(&mut self, changes: ProductChanges) {
        merge(&mut self.user_id, changes.user_id);
        merge(&mut self.name, changes.name);
        merge(&mut self.description, changes.description);
        merge(&mut self.price, changes.price);
        merge(&mut self.image, changes.image);
    }
}

impl Record for Product {
    fn id(&self) -> Id {
        self.id
    }
}

/// Product creation payload.
#[derive(Debug, Clone, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    /// Owning user
    #[cfg_attr(feature = "openapi", schema(value_type = i64))]
    pub user_id: Id,
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    pub description: Option<String>,
    /// Price in minor currency units
    #[validate(range(min = 0, message = "Price must not be negative"))]
    pub price: i64,
    pub image: Option<String>,
}

impl Insertable for NewProduct {
    type Record = Product;

    fn into_record(self, id: Id, created_at: DateTime<Utc>) -> Product {
        Product {
            id,
            user_id: self.user_id,
            name: self.name,
            description: self.description,
            price: self.price,
            image: self.image,
            created_at,
        }
    }
}

/// Partial product update. Absent keys are left untouched; `null` clears
/// `description` and `image`.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct ProductChanges {
    #[cfg_attr(feature = "openapi", schema(value_type = Option<i64>))]
    pub user_id: Option<Id>,
    #[validate(length(min = 1, message = "Name must not be empty"))]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    #[cfg_attr(feature = "openapi", schema(value_type = Option<String>))]
    pub description: Option<Option<String>>,
    #[validate(range(min = 0, message = "Price must not be negative"))]
    pub price: Option<i64>,
    #[serde(default, deserialize_with = "double_option")]
    #[cfg_attr(feature = "openapi", schema(value_type = Option<String>))]
    pub image: Option<Option<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product() -> Product {
        NewProduct {
            user_id: 1,
            name: "Handwoven Basket".to_string(),
            description: Some("Seagrass".to_string()),
            price: 12000,
            image: Some("basket.png".to_string()),
        }
        .into_record(4, Utc::now())
    }

    #[test]
    fn test_negative_price_rejected() {
        let payload: NewProduct =
            serde_json::from_str(r#"{"userId":1,"name":"Mat","price":-1}"#).unwrap();

        let errors = payload.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("price"));
    }

    #[test]
    fn test_apply_changes_only_supplied_fields() {
        let mut item = product();
        let before = item.clone();

        let changes: ProductChanges = serde_json::from_str(r#"{"price":15000}"#).unwrap();
        item.apply(changes);

        assert_eq!(item.price, 15000);
        assert_eq!(item.name, before.name);
        assert_eq!(item.description, before.description);
        assert_eq!(item.image, before.image);
        assert_eq!(item.created_at, before.created_at);
    }

    #[test]
    fn test_apply_null_clears_nullable_fields() {
        let mut item = product();

        let changes: ProductChanges =
            serde_json::from_str(r#"{"description":null,"image":null}"#).unwrap();
        item.apply(changes);

        assert_eq!(item.description, None);
        assert_eq!(item.image, None);
        assert_eq!(item.price, 12000);
    }

    #[test]
    fn test_wire_names_are_camel_case() {
        let json = serde_json::to_value(product()).unwrap();

        assert_eq!(json["userId"], 1);
        assert!(json.get("createdAt").is_some());
    }
}
