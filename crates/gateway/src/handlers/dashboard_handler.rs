//! Dashboard handlers: per-user metrics, storefront setup and the
//! recommendations overview.

use axum::{
    extract::{Path, State},
    response::Json,
    routing::get,
    Router,
};
use serde::Serialize;
use utoipa::ToSchema;

use common::{AppResult, OptionExt};
use domain::{
    FinancialOffer, Metric, MetricChanges, Procurement, Storefront, StorefrontChanges,
    StorefrontProgress, Supplier, RECOMMENDATION_LIMIT,
};

use crate::extractors::{parse_id, ValidatedJson};
use crate::state::AppState;

/// Dashboard recommendations, at most three of each
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Recommendations {
    pub suppliers: Vec<Supplier>,
    pub procurements: Vec<Procurement>,
    pub financial_offers: Vec<FinancialOffer>,
}

/// Create metric routes
pub fn metric_routes() -> Router<AppState> {
    Router::new().route("/:user_id", get(get_metrics).put(update_metrics))
}

/// Create storefront routes
pub fn storefront_routes() -> Router<AppState> {
    Router::new()
        .route("/:user_id", get(get_storefront).put(update_storefront))
        .route("/:user_id/progress", get(storefront_progress))
}

/// Create recommendation routes
pub fn recommendation_routes() -> Router<AppState> {
    Router::new().route("/", get(recommendations))
}

/// Get a user's metrics
#[utoipa::path(
    get,
    path = "/api/metrics/{userId}",
    tag = "Dashboard",
    params(("userId" = i64, Path, description = "User ID")),
    responses(
        (status = 200, description = "Business metrics", body = Metric),
        (status = 400, description = "Invalid user ID"),
        (status = 404, description = "Metrics not found")
    )
)]
pub async fn get_metrics(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> AppResult<Json<Metric>> {
    let user_id = parse_id(&user_id, "user")?;
    let metric = state
        .storage
        .get_metrics(user_id)
        .await?
        .ok_or_not_found("Metrics")?;

    Ok(Json(metric))
}

/// Create or update a user's metrics
#[utoipa::path(
    put,
    path = "/api/metrics/{userId}",
    tag = "Dashboard",
    params(("userId" = i64, Path, description = "User ID")),
    request_body = MetricChanges,
    responses(
        (status = 200, description = "Metrics after the update", body = Metric),
        (status = 400, description = "Invalid user ID or validation error")
    )
)]
pub async fn update_metrics(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    ValidatedJson(changes): ValidatedJson<MetricChanges>,
) -> AppResult<Json<Metric>> {
    let user_id = parse_id(&user_id, "user")?;

    Ok(Json(state.storage.update_metrics(user_id, changes).await?))
}

/// Get a user's storefront
#[utoipa::path(
    get,
    path = "/api/storefronts/{userId}",
    tag = "Dashboard",
    params(("userId" = i64, Path, description = "User ID")),
    responses(
        (status = 200, description = "Storefront", body = Storefront),
        (status = 400, description = "Invalid user ID"),
        (status = 404, description = "Storefront not found")
    )
)]
pub async fn get_storefront(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> AppResult<Json<Storefront>> {
    let user_id = parse_id(&user_id, "user")?;
    let storefront = state
        .storage
        .get_storefront(user_id)
        .await?
        .ok_or_not_found("Storefront")?;

    Ok(Json(storefront))
}

/// Create or update a user's storefront
///
/// `completionPercentage` is stored as sent; it is not derived from
/// `setupSteps`.
#[utoipa::path(
    put,
    path = "/api/storefronts/{userId}",
    tag = "Dashboard",
    params(("userId" = i64, Path, description = "User ID")),
    request_body = StorefrontChanges,
    responses(
        (status = 200, description = "Storefront after the update", body = Storefront),
        (status = 400, description = "Invalid user ID or validation error")
    )
)]
pub async fn update_storefront(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    ValidatedJson(changes): ValidatedJson<StorefrontChanges>,
) -> AppResult<Json<Storefront>> {
    let user_id = parse_id(&user_id, "user")?;

    Ok(Json(state.storage.update_storefront(user_id, changes).await?))
}

/// Storefront setup progress
#[utoipa::path(
    get,
    path = "/api/storefronts/{userId}/progress",
    tag = "Dashboard",
    params(("userId" = i64, Path, description = "User ID")),
    responses(
        (status = 200, description = "Stored and step-derived completion", body = StorefrontProgress),
        (status = 400, description = "Invalid user ID")
    )
)]
pub async fn storefront_progress(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> AppResult<Json<StorefrontProgress>> {
    let user_id = parse_id(&user_id, "user")?;

    Ok(Json(state.storage.storefront_progress(user_id).await?))
}

/// Dashboard recommendations
#[utoipa::path(
    get,
    path = "/api/recommendations",
    tag = "Dashboard",
    responses((status = 200, description = "First three recommended items per catalog", body = Recommendations))
)]
pub async fn recommendations(State(state): State<AppState>) -> AppResult<Json<Recommendations>> {
    let mut suppliers = state.storage.recommended_suppliers().await?;
    let mut procurements = state.storage.recommended_procurements().await?;
    let mut financial_offers = state.storage.recommended_financial_offers().await?;

    suppliers.truncate(RECOMMENDATION_LIMIT);
    procurements.truncate(RECOMMENDATION_LIMIT);
    financial_offers.truncate(RECOMMENDATION_LIMIT);

    Ok(Json(Recommendations {
        suppliers,
        procurements,
        financial_offers,
    }))
}
