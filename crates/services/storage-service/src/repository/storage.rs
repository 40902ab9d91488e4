//! The storage contract shared by the route layer and the auth use cases.

use async_trait::async_trait;
use serde::Serialize;

use common::AppResult;
use domain::{
    FinancialOffer, ForumPost, Id, LearningResource, Metric, MetricChanges, NewFinancialOffer,
    NewForumPost, NewLearningResource, NewProcurement, NewProduct, NewSupplier, NewUser,
    Procurement, Product, ProductChanges, Storefront, StorefrontChanges, StorefrontProgress,
    Supplier, User,
};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Storage trait for dependency injection.
///
/// A missing record is `Ok(None)`, not an error. Only updates that require
/// an existing record fail with `NotFound`. Input is trusted: validation
/// happens before these methods are called.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait Storage: Send + Sync {
    // Users

    async fn get_user(&self, id: Id) -> AppResult<Option<User>>;

    async fn get_user_by_username(&self, username: &str) -> AppResult<Option<User>>;

    async fn get_user_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// Insert a user. Fails with `Conflict` if the username or email is taken.
    async fn create_user(&self, user: NewUser) -> AppResult<User>;

    // Products

    /// Products owned by `user_id`, in insertion order
    async fn list_products(&self, user_id: Id) -> AppResult<Vec<Product>>;

    async fn get_product(&self, id: Id) -> AppResult<Option<Product>>;

    async fn create_product(&self, product: NewProduct) -> AppResult<Product>;

    /// Shallow-merge `changes`. Fails with `NotFound` if the product is absent.
    async fn update_product(&self, id: Id, changes: ProductChanges) -> AppResult<Product>;

    /// Returns whether a product was removed.
    async fn delete_product(&self, id: Id) -> AppResult<bool>;

    // Suppliers

    async fn list_suppliers(&self) -> AppResult<Vec<Supplier>>;

    async fn get_supplier(&self, id: Id) -> AppResult<Option<Supplier>>;

    async fn create_supplier(&self, supplier: NewSupplier) -> AppResult<Supplier>;

    /// Unranked: the whole collection
    async fn recommended_suppliers(&self) -> AppResult<Vec<Supplier>>;

    // Procurement opportunities

    async fn list_procurements(&self) -> AppResult<Vec<Procurement>>;

    async fn get_procurement(&self, id: Id) -> AppResult<Option<Procurement>>;

    async fn create_procurement(&self, procurement: NewProcurement) -> AppResult<Procurement>;

    /// Unranked: the whole collection
    async fn recommended_procurements(&self) -> AppResult<Vec<Procurement>>;

    // Financial offers

    async fn list_financial_offers(&self) -> AppResult<Vec<FinancialOffer>>;

    async fn get_financial_offer(&self, id: Id) -> AppResult<Option<FinancialOffer>>;

    async fn create_financial_offer(&self, offer: NewFinancialOffer) -> AppResult<FinancialOffer>;

    /// Unranked: the whole collection
    async fn recommended_financial_offers(&self) -> AppResult<Vec<FinancialOffer>>;

    // Forum

    async fn list_forum_posts(&self) -> AppResult<Vec<ForumPost>>;

    async fn get_forum_post(&self, id: Id) -> AppResult<Option<ForumPost>>;

    /// New posts always start with `response_count == 0`.
    async fn create_forum_post(&self, post: NewForumPost) -> AppResult<ForumPost>;

    // Learning resources

    async fn list_learning_resources(&self) -> AppResult<Vec<LearningResource>>;

    async fn get_learning_resource(&self, id: Id) -> AppResult<Option<LearningResource>>;

    async fn create_learning_resource(
        &self,
        resource: NewLearningResource,
    ) -> AppResult<LearningResource>;

    /// Unranked: the whole collection
    async fn recommended_learning_resources(&self) -> AppResult<Vec<LearningResource>>;

    // Metrics (keyed by user)

    async fn get_metrics(&self, user_id: Id) -> AppResult<Option<Metric>>;

    /// Upsert: zero-filled counters on first write, `last_updated` refreshed
    /// on every write.
    async fn update_metrics(&self, user_id: Id, changes: MetricChanges) -> AppResult<Metric>;

    // Storefronts (keyed by user)

    async fn get_storefront(&self, user_id: Id) -> AppResult<Option<Storefront>>;

    /// Upsert. A new storefront starts at 0% with only `basic_info` done,
    /// then `changes` is merged. The percentage is stored as given.
    async fn update_storefront(
        &self,
        user_id: Id,
        changes: StorefrontChanges,
    ) -> AppResult<Storefront>;

    async fn storefront_progress(&self, user_id: Id) -> AppResult<StorefrontProgress>;

    // Introspection

    async fn counts(&self) -> AppResult<CollectionCounts>;
}

/// Snapshot of every collection's size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct CollectionCounts {
    pub users: usize,
    pub products: usize,
    pub suppliers: usize,
    pub procurements: usize,
    pub financial_offers: usize,
    pub forum_posts: usize,
    pub learning_resources: usize,
    pub metrics: usize,
    pub storefronts: usize,
}
