//! Catalog handlers: suppliers, procurement opportunities, financial offers
//! and learning resources.
//!
//! "Recommended" endpoints are unranked and return the whole collection.

use axum::{
    extract::{Path, State},
    response::Json,
    routing::get,
    Router,
};

use common::{AppResult, OptionExt};
use domain::{FinancialOffer, LearningResource, Procurement, Supplier};

use crate::extractors::parse_id;
use crate::state::AppState;

/// Create supplier routes
pub fn supplier_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_suppliers))
        .route("/recommended", get(recommended_suppliers))
        .route("/:id", get(get_supplier))
}

/// Create procurement routes
pub fn procurement_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_procurements))
        .route("/recommended", get(recommended_procurements))
        .route("/:id", get(get_procurement))
}

/// Create financial offer routes
pub fn financial_offer_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_financial_offers))
        .route("/recommended", get(recommended_financial_offers))
        .route("/:id", get(get_financial_offer))
}

/// Create learning resource routes
pub fn learning_resource_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_learning_resources))
        .route("/recommended", get(recommended_learning_resources))
        .route("/:id", get(get_learning_resource))
}

// =============================================================================
// Suppliers
// =============================================================================

/// List suppliers
#[utoipa::path(
    get,
    path = "/api/suppliers",
    tag = "Catalog",
    responses((status = 200, description = "All suppliers", body = Vec<Supplier>))
)]
pub async fn list_suppliers(State(state): State<AppState>) -> AppResult<Json<Vec<Supplier>>> {
    Ok(Json(state.storage.list_suppliers().await?))
}

/// Recommended suppliers
#[utoipa::path(
    get,
    path = "/api/suppliers/recommended",
    tag = "Catalog",
    responses((status = 200, description = "Recommended suppliers", body = Vec<Supplier>))
)]
pub async fn recommended_suppliers(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<Supplier>>> {
    Ok(Json(state.storage.recommended_suppliers().await?))
}

/// Get supplier by ID
#[utoipa::path(
    get,
    path = "/api/suppliers/{id}",
    tag = "Catalog",
    params(("id" = i64, Path, description = "Supplier ID")),
    responses(
        (status = 200, description = "Supplier", body = Supplier),
        (status = 400, description = "Invalid supplier ID"),
        (status = 404, description = "Supplier not found")
    )
)]
pub async fn get_supplier(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Supplier>> {
    let id = parse_id(&id, "supplier")?;
    let supplier = state
        .storage
        .get_supplier(id)
        .await?
        .ok_or_not_found("Supplier")?;

    Ok(Json(supplier))
}

// =============================================================================
// Procurement opportunities
// =============================================================================

/// List procurement opportunities
#[utoipa::path(
    get,
    path = "/api/procurements",
    tag = "Catalog",
    responses((status = 200, description = "All procurement opportunities", body = Vec<Procurement>))
)]
pub async fn list_procurements(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<Procurement>>> {
    Ok(Json(state.storage.list_procurements().await?))
}

/// Recommended procurement opportunities
#[utoipa::path(
    get,
    path = "/api/procurements/recommended",
    tag = "Catalog",
    responses((status = 200, description = "Recommended procurement opportunities", body = Vec<Procurement>))
)]
pub async fn recommended_procurements(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<Procurement>>> {
    Ok(Json(state.storage.recommended_procurements().await?))
}

/// Get procurement opportunity by ID
#[utoipa::path(
    get,
    path = "/api/procurements/{id}",
    tag = "Catalog",
    params(("id" = i64, Path, description = "Procurement ID")),
    responses(
        (status = 200, description = "Procurement opportunity", body = Procurement),
        (status = 400, description = "Invalid procurement ID"),
        (status = 404, description = "Procurement not found")
    )
)]
pub async fn get_procurement(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Procurement>> {
    let id = parse_id(&id, "procurement")?;
    let procurement = state
        .storage
        .get_procurement(id)
        .await?
        .ok_or_not_found("Procurement")?;

    Ok(Json(procurement))
}

// =============================================================================
// Financial offers
// =============================================================================

/// List financial offers
#[utoipa::path(
    get,
    path = "/api/financial-offers",
    tag = "Catalog",
    responses((status = 200, description = "All financial offers", body = Vec<FinancialOffer>))
)]
pub async fn list_financial_offers(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<FinancialOffer>>> {
    Ok(Json(state.storage.list_financial_offers().await?))
}

/// Recommended financial offers
#[utoipa::path(
    get,
    path = "/api/financial-offers/recommended",
    tag = "Catalog",
    responses((status = 200, description = "Recommended financial offers", body = Vec<FinancialOffer>))
)]
pub async fn recommended_financial_offers(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<FinancialOffer>>> {
    Ok(Json(state.storage.recommended_financial_offers().await?))
}

/// Get financial offer by ID
#[utoipa::path(
    get,
    path = "/api/financial-offers/{id}",
    tag = "Catalog",
    params(("id" = i64, Path, description = "Financial offer ID")),
    responses(
        (status = 200, description = "Financial offer", body = FinancialOffer),
        (status = 400, description = "Invalid financial offer ID"),
        (status = 404, description = "Financial offer not found")
    )
)]
pub async fn get_financial_offer(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<FinancialOffer>> {
    let id = parse_id(&id, "financial offer")?;
    let offer = state
        .storage
        .get_financial_offer(id)
        .await?
        .ok_or_not_found("Financial offer")?;

    Ok(Json(offer))
}

// =============================================================================
// Learning resources
// =============================================================================

/// List learning resources
#[utoipa::path(
    get,
    path = "/api/learning-resources",
    tag = "Catalog",
    responses((status = 200, description = "All learning resources", body = Vec<LearningResource>))
)]
pub async fn list_learning_resources(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<LearningResource>>> {
    Ok(Json(state.storage.list_learning_resources().await?))
}

/// Recommended learning resources
#[utoipa::path(
    get,
    path = "/api/learning-resources/recommended",
    tag = "Catalog",
    responses((status = 200, description = "Recommended learning resources", body = Vec<LearningResource>))
)]
pub async fn recommended_learning_resources(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<LearningResource>>> {
    Ok(Json(state.storage.recommended_learning_resources().await?))
}

/// Get learning resource by ID
#[utoipa::path(
    get,
    path = "/api/learning-resources/{id}",
    tag = "Catalog",
    params(("id" = i64, Path, description = "Learning resource ID")),
    responses(
        (status = 200, description = "Learning resource", body = LearningResource),
        (status = 400, description = "Invalid learning resource ID"),
        (status = 404, description = "Learning resource not found")
    )
)]
pub async fn get_learning_resource(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<LearningResource>> {
    let id = parse_id(&id, "learning resource")?;
    let resource = state
        .storage
        .get_learning_resource(id)
        .await?
        .ok_or_not_found("Learning resource")?;

    Ok(Json(resource))
}
