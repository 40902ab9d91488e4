//! Read-mostly catalogs: suppliers, procurement opportunities, financial
//! offers and learning resources.
//!
//! These families are created at seed time and never updated.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::record::{Insertable, Record};
use crate::Id;

// =============================================================================
// Suppliers
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct Supplier {
    #[cfg_attr(feature = "openapi", schema(value_type = i64))]
    pub id: Id,
    pub name: String,
    pub category: String,
    pub description: Option<String>,
    /// Expected cost saving in percent (0-100)
    pub cost_savings: Option<i32>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct NewSupplier {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "Category is required"))]
    pub category: String,
    pub description: Option<String>,
    #[validate(range(min = 0, max = 100, message = "Cost savings must be between 0 and 100"))]
    pub cost_savings: Option<i32>,
}

impl Record for Supplier {
    fn id(&self) -> Id {
        self.id
    }
}

impl Insertable for NewSupplier {
    type Record = Supplier;

    fn into_record(self, id: Id, created_at: DateTime<Utc>) -> Supplier {
        Supplier {
            id,
            name: self.name,
            category: self.category,
            description: self.description,
            cost_savings: self.cost_savings,
            created_at,
        }
    }
}

// =============================================================================
// Procurement opportunities
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct Procurement {
    #[cfg_attr(feature = "openapi", schema(value_type = i64))]
    pub id: Id,
    pub title: String,
    pub organization: String,
    pub description: String,
    pub category: String,
    /// May already be in the past; nothing expires
    pub due_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct NewProcurement {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "Organization is required"))]
    pub organization: String,
    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,
    #[validate(length(min = 1, message = "Category is required"))]
    pub category: String,
    pub due_date: DateTime<Utc>,
}

impl Record for Procurement {
    fn id(&self) -> Id {
        self.id
    }
}

impl Insertable for NewProcurement {
    type Record = Procurement;

    fn into_record(self, id: Id, created_at: DateTime<Utc>) -> Procurement {
        Procurement {
            id,
            title: self.title,
            organization: self.organization,
            description: self.description,
            category: self.category,
            due_date: self.due_date,
            created_at,
        }
    }
}

// =============================================================================
// Financial offers
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum OfferType {
    Loan,
    InvoiceFinancing,
    EquipmentLoan,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct FinancialOffer {
    #[cfg_attr(feature = "openapi", schema(value_type = i64))]
    pub id: Id,
    #[serde(rename = "type")]
    pub kind: OfferType,
    /// Maximum amount in minor currency units
    pub amount: i64,
    /// Annual rate in basis points (100 = 1%)
    pub interest_rate: i32,
    pub term_months: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct NewFinancialOffer {
    #[serde(rename = "type")]
    pub kind: OfferType,
    #[validate(range(min = 0, message = "Amount must not be negative"))]
    pub amount: i64,
    #[validate(range(min = 0, message = "Interest rate must not be negative"))]
    pub interest_rate: i32,
    #[validate(range(min = 1, message = "Term must be at least one month"))]
    pub term_months: i32,
}

impl Record for FinancialOffer {
    fn id(&self) -> Id {
        self.id
    }
}

impl Insertable for NewFinancialOffer {
    type Record = FinancialOffer;

    fn into_record(self, id: Id, created_at: DateTime<Utc>) -> FinancialOffer {
        FinancialOffer {
            id,
            kind: self.kind,
            amount: self.amount,
            interest_rate: self.interest_rate,
            term_months: self.term_months,
            created_at,
        }
    }
}

// =============================================================================
// Learning resources
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum ResourceType {
    Video,
    Article,
    Guide,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum Level {
    Beginner,
    Intermediate,
    Advanced,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct LearningResource {
    #[cfg_attr(feature = "openapi", schema(value_type = i64))]
    pub id: Id,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: ResourceType,
    pub description: String,
    /// Length in minutes
    pub duration: i32,
    pub level: Level,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct NewLearningResource {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    #[serde(rename = "type")]
    pub kind: ResourceType,
    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,
    #[validate(range(min = 1, message = "Duration must be at least one minute"))]
    pub duration: i32,
    pub level: Level,
}

impl Record for LearningResource {
    fn id(&self) -> Id {
        self.id
    }
}

impl Insertable for NewLearningResource {
    type Record = LearningResource;

    fn into_record(self, id: Id, created_at: DateTime<Utc>) -> LearningResource {
        LearningResource {
            id,
            title: self.title,
            kind: self.kind,
            description: self.description,
            duration: self.duration,
            level: self.level,
            created_at,
        }
    }
}
