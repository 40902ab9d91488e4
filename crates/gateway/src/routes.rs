//! Route configuration.

use axum::{
    http::{header, HeaderValue, Method},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::warn;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::handlers::{
    assistant_routes, auth_routes, financial_offer_routes, forum_routes, health_routes,
    learning_resource_routes, metric_routes, procurement_routes, product_routes,
    recommendation_routes, storefront_routes, supplier_routes, user_routes,
};
use crate::openapi::ApiDoc;
use crate::state::AppState;

/// Every route served under `/api`, as `(method, path)`.
pub const ROUTE_TABLE: &[(&str, &str)] = &[
    ("POST", "/api/auth/register"),
    ("POST", "/api/auth/login"),
    ("GET", "/api/users/:id"),
    ("GET", "/api/products?userId="),
    ("POST", "/api/products"),
    ("GET", "/api/products/:id"),
    ("PUT", "/api/products/:id"),
    ("DELETE", "/api/products/:id"),
    ("GET", "/api/suppliers"),
    ("GET", "/api/suppliers/recommended"),
    ("GET", "/api/suppliers/:id"),
    ("GET", "/api/procurements"),
    ("GET", "/api/procurements/recommended"),
    ("GET", "/api/procurements/:id"),
    ("GET", "/api/financial-offers"),
    ("GET", "/api/financial-offers/recommended"),
    ("GET", "/api/financial-offers/:id"),
    ("GET", "/api/forum-posts"),
    ("POST", "/api/forum-posts"),
    ("GET", "/api/forum-posts/:id"),
    ("GET", "/api/learning-resources"),
    ("GET", "/api/learning-resources/recommended"),
    ("GET", "/api/learning-resources/:id"),
    ("GET", "/api/metrics/:userId"),
    ("PUT", "/api/metrics/:userId"),
    ("GET", "/api/storefronts/:userId"),
    ("PUT", "/api/storefronts/:userId"),
    ("GET", "/api/storefronts/:userId/progress"),
    ("POST", "/api/ai-assistant"),
    ("GET", "/api/recommendations"),
];

/// Create the main router with all routes.
pub fn create_router(state: AppState) -> Router {
    let cors = state.config.cors_allowed_origin.as_deref().and_then(cors_layer);

    let router = Router::new()
        // Health check
        .nest("/health", health_routes())
        // Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .nest("/api", api_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    match cors {
        Some(cors) => router.layer(cors),
        None => router,
    }
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth_routes())
        .nest("/users", user_routes())
        .nest("/products", product_routes())
        .nest("/suppliers", supplier_routes())
        .nest("/procurements", procurement_routes())
        .nest("/financial-offers", financial_offer_routes())
        .nest("/forum-posts", forum_routes())
        .nest("/learning-resources", learning_resource_routes())
        .nest("/metrics", metric_routes())
        .nest("/storefronts", storefront_routes())
        .nest("/ai-assistant", assistant_routes())
        .nest("/recommendations", recommendation_routes())
}

/// CORS for the single-page front end. `None` if the origin is not a valid
/// header value.
fn cors_layer(origin: &str) -> Option<CorsLayer> {
    match HeaderValue::from_str(origin) {
        Ok(origin) => Some(
            CorsLayer::new()
                .allow_origin(origin)
                .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
                .allow_headers([header::CONTENT_TYPE]),
        ),
        Err(_) => {
            warn!(origin, "Ignoring invalid CORS_ALLOWED_ORIGIN");
            None
        }
    }
}
