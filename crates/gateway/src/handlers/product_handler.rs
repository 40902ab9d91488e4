//! Marketplace product handlers.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use serde::Deserialize;
use utoipa::IntoParams;

use common::{AppError, AppResult, OptionExt};
use domain::{NewProduct, Product, ProductChanges};

use crate::extractors::{parse_id, ValidatedJson};
use crate::state::AppState;

/// Product list filter
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
#[serde(rename_all = "camelCase")]
pub struct ProductQuery {
    /// Owning user (required)
    pub user_id: Option<String>,
}

/// Create product routes
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_products).post(create_product))
        .route(
            "/:id",
            get(get_product).put(update_product).delete(delete_product),
        )
}

/// List a user's products
#[utoipa::path(
    get,
    path = "/api/products",
    tag = "Products",
    params(ProductQuery),
    responses(
        (status = 200, description = "Products owned by the user", body = Vec<Product>),
        (status = 400, description = "Invalid user ID")
    )
)]
pub async fn list_products(
    State(state): State<AppState>,
    Query(query): Query<ProductQuery>,
) -> AppResult<Json<Vec<Product>>> {
    let raw = query
        .user_id
        .ok_or_else(|| AppError::bad_request("Invalid user ID"))?;
    let user_id = parse_id(&raw, "user")?;

    Ok(Json(state.storage.list_products(user_id).await?))
}

/// Get product by ID
#[utoipa::path(
    get,
    path = "/api/products/{id}",
    tag = "Products",
    params(
        ("id" = i64, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product", body = Product),
        (status = 400, description = "Invalid product ID"),
        (status = 404, description = "Product not found")
    )
)]
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Product>> {
    let id = parse_id(&id, "product")?;
    let product = state
        .storage
        .get_product(id)
        .await?
        .ok_or_not_found("Product")?;

    Ok(Json(product))
}

/// Create a product
#[utoipa::path(
    post,
    path = "/api/products",
    tag = "Products",
    request_body = NewProduct,
    responses(
        (status = 201, description = "Product created", body = Product),
        (status = 400, description = "Validation error")
    )
)]
pub async fn create_product(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<NewProduct>,
) -> AppResult<(StatusCode, Json<Product>)> {
    let product = state.storage.create_product(payload).await?;

    Ok((StatusCode::CREATED, Json(product)))
}

/// Partially update a product
#[utoipa::path(
    put,
    path = "/api/products/{id}",
    tag = "Products",
    params(
        ("id" = i64, Path, description = "Product ID")
    ),
    request_body = ProductChanges,
    responses(
        (status = 200, description = "Product updated", body = Product),
        (status = 400, description = "Invalid product ID or validation error"),
        (status = 404, description = "Product not found")
    )
)]
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(changes): ValidatedJson<ProductChanges>,
) -> AppResult<Json<Product>> {
    let id = parse_id(&id, "product")?;

    Ok(Json(state.storage.update_product(id, changes).await?))
}

/// Delete a product
#[utoipa::path(
    delete,
    path = "/api/products/{id}",
    tag = "Products",
    params(
        ("id" = i64, Path, description = "Product ID")
    ),
    responses(
        (status = 204, description = "Product deleted"),
        (status = 400, description = "Invalid product ID"),
        (status = 404, description = "Product not found")
    )
)]
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    let id = parse_id(&id, "product")?;

    if !state.storage.delete_product(id).await? {
        return Err(AppError::not_found("Product"));
    }

    Ok(StatusCode::NO_CONTENT)
}
