//! Per-user dashboard records: business metrics and storefront setup.
//!
//! Both are keyed by the owning user rather than their own id and are
//! written with upsert semantics.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::constants::{MAX_PERCENTAGE, SETUP_STEP_COUNT};
use crate::patch::merge;
use crate::Id;

// =============================================================================
// Metrics
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct Metric {
    #[cfg_attr(feature = "openapi", schema(value_type = i64))]
    pub id: Id,
    #[cfg_attr(feature = "openapi", schema(value_type = i64))]
    pub user_id: Id,
    pub store_visits: i64,
    pub orders: i64,
    pub connections: i64,
    /// Minor currency units
    pub revenue: i64,
    pub last_updated: DateTime<Utc>,
}

impl Metric {
    /// Zero-filled counters for a user seen for the first time.
    pub fn empty(id: Id, user_id: Id, now: DateTime<Utc>) -> Self {
        Self {
            id,
            user_id,
            store_visits: 0,
            orders: 0,
            connections: 0,
            revenue: 0,
            last_updated: now,
        }
    }

    /// Merge supplied counters and stamp `last_updated`.
    pub fn apply(&mut self, changes: MetricChanges, now: DateTime<Utc>) {
        merge(&mut self.store_visits, changes.store_visits);
        merge(&mut self.orders, changes.orders);
        merge(&mut self.connections, changes.connections);
        merge(&mut self.revenue, changes.revenue);
        self.last_updated = now;
    }
}

/// Partial metric update; the owning user comes from the path.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct MetricChanges {
    #[validate(range(min = 0, message = "Store visits must not be negative"))]
    pub store_visits: Option<i64>,
    #[validate(range(min = 0, message = "Orders must not be negative"))]
    pub orders: Option<i64>,
    #[validate(range(min = 0, message = "Connections must not be negative"))]
    pub connections: Option<i64>,
    #[validate(range(min = 0, message = "Revenue must not be negative"))]
    pub revenue: Option<i64>,
}

// =============================================================================
// Storefronts
// =============================================================================

/// The five named storefront setup steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct SetupSteps {
    pub basic_info: bool,
    pub products: bool,
    pub logo: bool,
    pub payment: bool,
    pub shipping: bool,
}

impl SetupSteps {
    /// Steps of a freshly created storefront: only the basic info is done.
    pub fn initial() -> Self {
        Self {
            basic_info: true,
            products: false,
            logo: false,
            payment: false,
            shipping: false,
        }
    }

    pub fn completed(&self) -> u32 {
        [
            self.basic_info,
            self.products,
            self.logo,
            self.payment,
            self.shipping,
        ]
        .iter()
        .filter(|done| **done)
        .count() as u32
    }

    /// `round(100 * completed / 5)`
    pub fn completion_percentage(&self) -> i32 {
        let ratio = self.completed() as f64 / SETUP_STEP_COUNT as f64;
        (ratio * MAX_PERCENTAGE as f64).round() as i32
    }
}

impl Default for SetupSteps {
    fn default() -> Self {
        Self::initial()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct Storefront {
    #[cfg_attr(feature = "openapi", schema(value_type = i64))]
    pub id: Id,
    #[cfg_attr(feature = "openapi", schema(value_type = i64))]
    pub user_id: Id,
    /// Caller-owned; never derived from `setup_steps` on write
    pub completion_percentage: i32,
    pub setup_steps: SetupSteps,
    pub created_at: DateTime<Utc>,
}

impl Storefront {
    /// A storefront created by its first update.
    pub fn empty(id: Id, user_id: Id, now: DateTime<Utc>) -> Self {
        Self {
            id,
            user_id,
            completion_percentage: 0,
            setup_steps: SetupSteps::initial(),
            created_at: now,
        }
    }

    pub fn apply(&mut self, changes: StorefrontChanges) {
        merge(&mut self.completion_percentage, changes.completion_percentage);
        merge(&mut self.setup_steps, changes.setup_steps);
    }

    pub fn progress(&self) -> StorefrontProgress {
        StorefrontProgress {
            user_id: self.user_id,
            completion_percentage: self.completion_percentage,
            steps_percentage: self.setup_steps.completion_percentage(),
        }
    }
}

/// Partial storefront update. `setupSteps`, when given, must carry all five
/// steps.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct StorefrontChanges {
    #[validate(range(min = 0, max = 100, message = "Completion percentage must be between 0 and 100"))]
    pub completion_percentage: Option<i32>,
    pub setup_steps: Option<SetupSteps>,
}

/// Stored completion next to the value the setup steps imply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct StorefrontProgress {
    #[cfg_attr(feature = "openapi", schema(value_type = i64))]
    pub user_id: Id,
    pub completion_percentage: i32,
    pub steps_percentage: i32,
}

impl StorefrontProgress {
    /// Progress of a user without a storefront.
    pub fn none(user_id: Id) -> Self {
        Self {
            user_id,
            completion_percentage: 0,
            steps_percentage: 0,
        }
    }
}
