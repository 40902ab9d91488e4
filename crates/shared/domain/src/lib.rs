//! Domain layer - Core business entities and value objects.
//!
//! This crate contains pure domain logic with no infrastructure dependencies.
//! Entity shapes, their insertable subsets and partial updates are shared by
//! the storage engine and the gateway.

pub mod catalog;
pub mod constants;
pub mod dashboard;
pub mod error;
pub mod forum;
pub mod password;
pub mod patch;
pub mod product;
pub mod record;
pub mod user;

/// Process-local, per-family auto-incrementing identifier.
pub type Id = i64;

pub use catalog::{
    FinancialOffer, LearningResource, Level, NewFinancialOffer, NewLearningResource,
    NewProcurement, NewSupplier, OfferType, Procurement, ResourceType, Supplier,
};
pub use constants::*;
pub use dashboard::{Metric, MetricChanges, SetupSteps, Storefront, StorefrontChanges, StorefrontProgress};
pub use error::{DomainError, DomainResult};
pub use forum::{ForumPost, NewForumPost};
pub use password::{Password, PasswordScheme};
pub use product::{NewProduct, Product, ProductChanges};
pub use record::{Insertable, Record};
pub use user::{NewUser, RegisterUser, User, UserResponse};
