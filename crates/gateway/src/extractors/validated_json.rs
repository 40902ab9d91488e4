//! Validated JSON extractor.

use axum::{
    async_trait,
    extract::{FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use utoipa::openapi::{RefOr, Schema};
use utoipa::ToSchema;
use validator::Validate;

use common::{AppError, FieldError};

/// JSON extractor that automatically validates the payload.
///
/// Malformed JSON, missing required fields and rule violations all become a
/// 400 `Validation error` listing the offending fields; the handler never
/// runs. Required fields are the ones the payload's schema marks required.
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate + ToSchema<'static>,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        // Extract JSON
        let Json(body) = Json::<Value>::from_request(req, state)
            .await
            .map_err(|e| validation_error(vec![body_error(e.body_text())]))?;

        let missing = missing_fields(&body, &required_fields::<T>());
        if !missing.is_empty() {
            return Err(validation_error(missing));
        }

        let value: T = serde_json::from_value(body)
            .map_err(|e| validation_error(vec![body_error(e.to_string())]))?;

        // Validate
        value.validate()?;

        Ok(ValidatedJson(value))
    }
}

fn validation_error(errors: Vec<FieldError>) -> AppError {
    AppError::Validation {
        message: "Validation error".to_string(),
        errors,
    }
}

fn body_error(message: String) -> FieldError {
    FieldError {
        field: "body".to_string(),
        message,
    }
}

/// Wire names of the properties `T`'s schema marks required.
fn required_fields<T: ToSchema<'static>>() -> Vec<String> {
    match T::schema().1 {
        RefOr::T(Schema::Object(object)) => object.required,
        _ => Vec::new(),
    }
}

/// One error per required key that is absent or `null`.
fn missing_fields(body: &Value, required: &[String]) -> Vec<FieldError> {
    let Some(object) = body.as_object() else {
        return Vec::new();
    };

    required
        .iter()
        .filter(|field| object.get(field.as_str()).map_or(true, Value::is_null))
        .map(|field| FieldError {
            field: field.clone(),
            message: "Required".to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::{NewForumPost, NewProduct, ProductChanges, RegisterUser};
    use serde_json::json;

    fn names(errors: &[FieldError]) -> Vec<&str> {
        errors.iter().map(|e| e.field.as_str()).collect()
    }

    #[test]
    fn test_required_fields_follow_wire_names() {
        assert_eq!(required_fields::<NewProduct>(), ["userId", "name", "price"]);
        assert_eq!(
            required_fields::<RegisterUser>(),
            ["username", "password", "name", "businessName", "email"]
        );
    }

    #[test]
    fn test_defaulted_and_optional_fields_not_required() {
        assert!(!required_fields::<NewForumPost>().contains(&"tags".to_string()));
        assert!(required_fields::<ProductChanges>().is_empty());
    }

    #[test]
    fn test_every_missing_field_reported() {
        let required = required_fields::<RegisterUser>();
        let body = json!({ "username": "amara", "password": "x", "name": null });

        let errors = missing_fields(&body, &required);

        assert_eq!(names(&errors), ["name", "businessName", "email"]);
        assert!(errors.iter().all(|e| e.message == "Required"));
    }

    #[test]
    fn test_complete_or_non_object_body_has_no_missing_fields() {
        let required = required_fields::<NewProduct>();

        let complete = json!({ "userId": 1, "name": "Scarf", "price": 10 });
        assert!(missing_fields(&complete, &required).is_empty());
        assert!(missing_fields(&json!([1, 2]), &required).is_empty());
    }
}
