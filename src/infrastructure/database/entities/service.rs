//! Service entity - one row per tracked recurring service

use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Subscription status stored on the row
#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(10))")]
pub enum ServiceStatus {
    #[sea_orm(string_value = "active")]
    Active,
    #[sea_orm(string_value = "inactive")]
    Inactive,
}

/// Service model - a recurring external service with renewal tracking.
///
/// Date-only fields are persisted as midnight UTC timestamps; the storage
/// layer converts them back to calendar dates on read.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "services")]
pub struct Model {
    /// Opaque UUID identifier, assigned by the application at creation
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,

    /// Display name (e.g., "example.com", "Acme hosting")
    pub name: String,

    /// Open label set: "Domain", "Hosting", "Domain+Hosting", "Website",
    /// "Consulting" or any caller-supplied string
    pub service_type: String,

    /// Vendor providing the service
    pub provider: String,

    /// When the service was originally taken out (midnight UTC)
    pub creation_date: DateTime<Utc>,

    /// Most recent renewal (midnight UTC)
    pub last_renewal_date: Option<DateTime<Utc>>,

    /// Upcoming renewal (midnight UTC)
    pub next_renewal_date: Option<DateTime<Utc>>,

    /// Yearly cost in `currency`
    pub annual_fee: f64,

    /// Currency code (default "TRY")
    pub currency: String,

    /// Subscription status
    pub status: ServiceStatus,

    /// Free-form notes
    pub notes: Option<String>,

    /// Soft-delete marker; rows are never physically removed
    pub is_deleted: bool,

    /// When the row was created
    pub created_at: DateTime<Utc>,

    /// When the row was last updated
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
