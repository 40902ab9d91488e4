//! HTTP request handlers.

pub mod assistant_handler;
pub mod auth_handler;
pub mod catalog_handler;
pub mod dashboard_handler;
pub mod forum_handler;
pub mod health_handler;
pub mod product_handler;
pub mod user_handler;

pub use assistant_handler::assistant_routes;
pub use auth_handler::auth_routes;
pub use catalog_handler::{
    financial_offer_routes, learning_resource_routes, procurement_routes, supplier_routes,
};
pub use dashboard_handler::{metric_routes, recommendation_routes, storefront_routes};
pub use forum_handler::forum_routes;
pub use health_handler::health_routes;
pub use product_handler::product_routes;
pub use user_handler::user_routes;
