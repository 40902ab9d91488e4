//! In-memory storage engine.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use tracing::debug;

use common::{AppError, AppResult};
use domain::{
    FinancialOffer, ForumPost, Id, LearningResource, Metric, MetricChanges, NewFinancialOffer,
    NewForumPost, NewLearningResource, NewProcurement, NewProduct, NewSupplier, NewUser, Password,
    Procurement, Product, ProductChanges, Storefront, StorefrontChanges, StorefrontProgress,
    Supplier, User,
};

use super::storage::{CollectionCounts, Storage};
use super::table::{Table, UserKeyed};
use crate::fixtures;

/// Process-local storage: one lock per entity family.
///
/// No method holds a lock across an await point, so each operation is atomic
/// with respect to other requests. There is no multi-operation transaction.
#[derive(Debug)]
pub struct MemStorage {
    pub(crate) users: RwLock<Table<User>>,
    pub(crate) products: RwLock<Table<Product>>,
    pub(crate) suppliers: RwLock<Table<Supplier>>,
    pub(crate) procurements: RwLock<Table<Procurement>>,
    pub(crate) financial_offers: RwLock<Table<FinancialOffer>>,
    pub(crate) forum_posts: RwLock<Table<ForumPost>>,
    pub(crate) learning_resources: RwLock<Table<LearningResource>>,
    pub(crate) metrics: RwLock<UserKeyed<Metric>>,
    pub(crate) storefronts: RwLock<UserKeyed<Storefront>>,
}

impl MemStorage {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            users: RwLock::new(Table::new()),
            products: RwLock::new(Table::new()),
            suppliers: RwLock::new(Table::new()),
            procurements: RwLock::new(Table::new()),
            financial_offers: RwLock::new(Table::new()),
            forum_posts: RwLock::new(Table::new()),
            learning_resources: RwLock::new(Table::new()),
            metrics: RwLock::new(UserKeyed::new()),
            storefronts: RwLock::new(UserKeyed::new()),
        }
    }

    /// Create a store loaded with the demo fixtures.
    ///
    /// `owner_password` is the already encoded credential of the demo user.
    pub async fn seeded(owner_password: Password) -> AppResult<Self> {
        let storage = Self::new();
        fixtures::seed(&storage, owner_password, Utc::now()).await?;
        Ok(storage)
    }
}

impl Default for MemStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Storage for MemStorage {
    async fn get_user(&self, id: Id) -> AppResult<Option<User>> {
        Ok(self.users.read().await.get(id))
    }

    async fn get_user_by_username(&self, username: &str) -> AppResult<Option<User>> {
        Ok(self.users.read().await.find(|u| u.username == username))
    }

    async fn get_user_by_email(&self, email: &str) -> AppResult<Option<User>> {
        Ok(self.users.read().await.find(|u| u.email == email))
    }

    async fn create_user(&self, user: NewUser) -> AppResult<User> {
        let mut users = self.users.write().await;

        if users.find(|u| u.username == user.username).is_some() {
            return Err(AppError::conflict("Username"));
        }
        if users.find(|u| u.email == user.email).is_some() {
            return Err(AppError::conflict("Email"));
        }

        let user = users.insert(user, Utc::now());
        debug!(user_id = user.id, "User created");
        Ok(user)
    }

    async fn list_products(&self, user_id: Id) -> AppResult<Vec<Product>> {
        Ok(self.products.read().await.filter(|p| p.user_id == user_id))
    }

    async fn get_product(&self, id: Id) -> AppResult<Option<Product>> {
        Ok(self.products.read().await.get(id))
    }

    async fn create_product(&self, product: NewProduct) -> AppResult<Product> {
        let product = self.products.write().await.insert(product, Utc::now());
        debug!(product_id = product.id, user_id = product.user_id, "Product created");
        Ok(product)
    }

    async fn update_product(&self, id: Id, changes: ProductChanges) -> AppResult<Product> {
        let mut products = self.products.write().await;
        let product = products
            .get_mut(id)
            .ok_or_else(|| AppError::not_found("Product"))?;

        product.apply(changes);
        debug!(product_id = id, "Product updated");
        Ok(product.clone())
    }

    async fn delete_product(&self, id: Id) -> AppResult<bool> {
        let removed = self.products.write().await.remove(id);
        debug!(product_id = id, removed, "Product delete");
        Ok(removed)
    }

    async fn list_suppliers(&self) -> AppResult<Vec<Supplier>> {
        Ok(self.suppliers.read().await.list())
    }

    async fn get_supplier(&self, id: Id) -> AppResult<Option<Supplier>> {
        Ok(self.suppliers.read().await.get(id))
    }

    async fn create_supplier(&self, supplier: NewSupplier) -> AppResult<Supplier> {
        Ok(self.suppliers.write().await.insert(supplier, Utc::now()))
    }

    async fn recommended_suppliers(&self) -> AppResult<Vec<Supplier>> {
        self.list_suppliers().await
    }

    async fn list_procurements(&self) -> AppResult<Vec<Procurement>> {
        Ok(self.procurements.read().await.list())
    }

    async fn get_procurement(&self, id: Id) -> AppResult<Option<Procurement>> {
        Ok(self.procurements.read().await.get(id))
    }

    async fn create_procurement(&self, procurement: NewProcurement) -> AppResult<Procurement> {
        Ok(self.procurements.write().await.insert(procurement, Utc::now()))
    }

    async fn recommended_procurements(&self) -> AppResult<Vec<Procurement>> {
        self.list_procurements().await
    }

    async fn list_financial_offers(&self) -> AppResult<Vec<FinancialOffer>> {
        Ok(self.financial_offers.read().await.list())
    }

    async fn get_financial_offer(&self, id: Id) -> AppResult<Option<FinancialOffer>> {
        Ok(self.financial_offers.read().await.get(id))
    }

    async fn create_financial_offer(&self, offer: NewFinancialOffer) -> AppResult<FinancialOffer> {
        Ok(self.financial_offers.write().await.insert(offer, Utc::now()))
    }

    async fn recommended_financial_offers(&self) -> AppResult<Vec<FinancialOffer>> {
        self.list_financial_offers().await
    }

    async fn list_forum_posts(&self) -> AppResult<Vec<ForumPost>> {
        Ok(self.forum_posts.read().await.list())
    }

    async fn get_forum_post(&self, id: Id) -> AppResult<Option<ForumPost>> {
        Ok(self.forum_posts.read().await.get(id))
    }

    async fn create_forum_post(&self, post: NewForumPost) -> AppResult<ForumPost> {
        let post = self.forum_posts.write().await.insert(post, Utc::now());
        debug!(post_id = post.id, user_id = post.user_id, "Forum post created");
        Ok(post)
    }

    async fn list_learning_resources(&self) -> AppResult<Vec<LearningResource>> {
        Ok(self.learning_resources.read().await.list())
    }

    async fn get_learning_resource(&self, id: Id) -> AppResult<Option<LearningResource>> {
        Ok(self.learning_resources.read().await.get(id))
    }

    async fn create_learning_resource(
        &self,
        resource: NewLearningResource,
    ) -> AppResult<LearningResource> {
        Ok(self.learning_resources.write().await.insert(resource, Utc::now()))
    }

    async fn recommended_learning_resources(&self) -> AppResult<Vec<LearningResource>> {
        self.list_learning_resources().await
    }

    async fn get_metrics(&self, user_id: Id) -> AppResult<Option<Metric>> {
        Ok(self.metrics.read().await.get(user_id))
    }

    async fn update_metrics(&self, user_id: Id, changes: MetricChanges) -> AppResult<Metric> {
        let now = Utc::now();
        let mut metrics = self.metrics.write().await;
        let metric = metrics.upsert(user_id, |id| Metric::empty(id, user_id, now));

        metric.apply(changes, now);
        debug!(user_id, metric_id = metric.id, "Metrics updated");
        Ok(metric.clone())
    }

    async fn get_storefront(&self, user_id: Id) -> AppResult<Option<Storefront>> {
        Ok(self.storefronts.read().await.get(user_id))
    }

    async fn update_storefront(
        &self,
        user_id: Id,
        changes: StorefrontChanges,
    ) -> AppResult<Storefront> {
        let now = Utc::now();
        let mut storefronts = self.storefronts.write().await;
        let storefront = storefronts.upsert(user_id, |id| Storefront::empty(id, user_id, now));

        storefront.apply(changes);
        debug!(
            user_id,
            storefront_id = storefront.id,
            completion = storefront.completion_percentage,
            "Storefront updated"
        );
        Ok(storefront.clone())
    }

    async fn storefront_progress(&self, user_id: Id) -> AppResult<StorefrontProgress> {
        Ok(self
            .storefronts
            .read()
            .await
            .get(user_id)
            .map(|s| s.progress())
            .unwrap_or_else(|| StorefrontProgress::none(user_id)))
    }

    async fn counts(&self) -> AppResult<CollectionCounts> {
        Ok(CollectionCounts {
            users: self.users.read().await.len(),
            products: self.products.read().await.len(),
            suppliers: self.suppliers.read().await.len(),
            procurements: self.procurements.read().await.len(),
            financial_offers: self.financial_offers.read().await.len(),
            forum_posts: self.forum_posts.read().await.len(),
            learning_resources: self.learning_resources.read().await.len(),
            metrics: self.metrics.read().await.len(),
            storefronts: self.storefronts.read().await.len(),
        })
    }
}
