//! OpenAPI documentation.

use utoipa::OpenApi;

use crate::handlers::assistant_handler::{AssistantRequest, AssistantResponse};
use crate::handlers::auth_handler::LoginRequest;
use crate::handlers::dashboard_handler::Recommendations;
use crate::handlers::health_handler::HealthResponse;
use domain::{
    FinancialOffer, ForumPost, LearningResource, Level, Metric, MetricChanges, NewForumPost,
    NewProduct, OfferType, Procurement, Product, ProductChanges, RegisterUser, ResourceType,
    SetupSteps, Storefront, StorefrontChanges, StorefrontProgress, Supplier, UserResponse,
};
use storage_service_lib::CollectionCounts;

/// API documentation struct.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::auth_handler::register,
        crate::handlers::auth_handler::login,
        crate::handlers::user_handler::get_user,
        crate::handlers::product_handler::list_products,
        crate::handlers::product_handler::get_product,
        crate::handlers::product_handler::create_product,
        crate::handlers::product_handler::update_product,
        crate::handlers::product_handler::delete_product,
        crate::handlers::catalog_handler::list_suppliers,
        crate::handlers::catalog_handler::recommended_suppliers,
        crate::handlers::catalog_handler::get_supplier,
        crate::handlers::catalog_handler::list_procurements,
        crate::handlers::catalog_handler::recommended_procurements,
        crate::handlers::catalog_handler::get_procurement,
        crate::handlers::catalog_handler::list_financial_offers,
        crate::handlers::catalog_handler::recommended_financial_offers,
        crate::handlers::catalog_handler::get_financial_offer,
        crate::handlers::catalog_handler::list_learning_resources,
        crate::handlers::catalog_handler::recommended_learning_resources,
        crate::handlers::catalog_handler::get_learning_resource,
        crate::handlers::forum_handler::list_posts,
        crate::handlers::forum_handler::get_post,
        crate::handlers::forum_handler::create_post,
        crate::handlers::dashboard_handler::get_metrics,
        crate::handlers::dashboard_handler::update_metrics,
        crate::handlers::dashboard_handler::get_storefront,
        crate::handlers::dashboard_handler::update_storefront,
        crate::handlers::dashboard_handler::storefront_progress,
        crate::handlers::dashboard_handler::recommendations,
        crate::handlers::assistant_handler::ask,
        crate::handlers::health_handler::health_check,
    ),
    components(
        schemas(
            RegisterUser,
            LoginRequest,
            UserResponse,
            Product,
            NewProduct,
            ProductChanges,
            Supplier,
            Procurement,
            FinancialOffer,
            OfferType,
            LearningResource,
            ResourceType,
            Level,
            ForumPost,
            NewForumPost,
            Metric,
            MetricChanges,
            Storefront,
            StorefrontChanges,
            StorefrontProgress,
            SetupSteps,
            Recommendations,
            AssistantRequest,
            AssistantResponse,
            HealthResponse,
            CollectionCounts,
        )
    ),
    tags(
        (name = "Authentication", description = "Registration and login"),
        (name = "Users", description = "User profiles"),
        (name = "Products", description = "Marketplace products"),
        (name = "Catalog", description = "Suppliers, procurement, financing and learning"),
        (name = "Forum", description = "Community forum"),
        (name = "Dashboard", description = "Metrics, storefront setup and recommendations"),
        (name = "Assistant", description = "Business assistant"),
        (name = "Health", description = "Service health"),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_api_paths() {
        let doc = ApiDoc::openapi();

        assert!(doc.paths.paths.contains_key("/api/products/{id}"));
        assert!(doc.paths.paths.contains_key("/api/storefronts/{userId}/progress"));
        assert!(doc.paths.paths.contains_key("/health"));
    }
}
