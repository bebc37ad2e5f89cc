//! Service DTOs

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::domain::{DashboardStats, Service, ServicePatch, ServiceStatus};

/// Wire representation of a service record
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ServiceDto {
    /// Opaque unique identifier (UUID), assigned at creation
    pub id: String,
    /// Display name
    pub name: String,
    /// Label such as `Domain`, `Hosting`, `Domain+Hosting`, `Website`,
    /// `Consulting` or any other string
    pub service_type: String,
    /// Vendor providing the service
    pub provider: String,
    /// Calendar date the service was taken out (yyyy-mm-dd)
    pub creation_date: NaiveDate,
    /// Most recent renewal, if any
    pub last_renewal_date: Option<NaiveDate>,
    /// Upcoming renewal, if known
    pub next_renewal_date: Option<NaiveDate>,
    /// Yearly cost in `currency`
    pub annual_fee: f64,
    /// Currency code (default `TRY`)
    pub currency: String,
    /// `active` or `inactive`
    pub status: String,
    /// Free-form notes
    pub notes: Option<String>,
    /// Soft-delete marker; always `false` on records returned by the API
    pub is_deleted: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Service> for ServiceDto {
    fn from(s: Service) -> Self {
        Self {
            id: s.id,
            name: s.name,
            service_type: s.service_type,
            provider: s.provider,
            creation_date: s.creation_date,
            last_renewal_date: s.last_renewal_date,
            next_renewal_date: s.next_renewal_date,
            annual_fee: s.annual_fee,
            currency: s.currency,
            status: s.status.to_string(),
            notes: s.notes,
            is_deleted: s.is_deleted,
            created_at: s.created_at,
            updated_at: s.updated_at,
        }
    }
}

fn default_currency() -> String {
    "TRY".to_string()
}

fn default_status() -> String {
    "active".to_string()
}

fn validate_status(status: &str) -> Result<(), ValidationError> {
    if status == "active" || status == "inactive" {
        return Ok(());
    }
    let mut error = ValidationError::new("status");
    error.message = Some("status must be active or inactive".into());
    Err(error)
}

fn parse_status(s: &str) -> ServiceStatus {
    match s {
        "inactive" => ServiceStatus::Inactive,
        _ => ServiceStatus::Active,
    }
}

/// Creation request.
///
/// Required fields are declared `Option` and checked with
/// `#[validate(required)]` so that an omitted field surfaces as a
/// structured 422 entry instead of a body parse error.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateServiceRequest {
    #[validate(required, length(min = 1, message = "name must not be empty"))]
    pub name: Option<String>,
    #[validate(required, length(min = 1, message = "service_type must not be empty"))]
    pub service_type: Option<String>,
    #[validate(required, length(min = 1, message = "provider must not be empty"))]
    pub provider: Option<String>,
    #[validate(required)]
    pub creation_date: Option<NaiveDate>,
    pub last_renewal_date: Option<NaiveDate>,
    pub next_renewal_date: Option<NaiveDate>,
    #[validate(required, range(min = 0.0, message = "annual_fee must be non-negative"))]
    pub annual_fee: Option<f64>,
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default = "default_status")]
    #[validate(custom(function = "validate_status"))]
    pub status: String,
    pub notes: Option<String>,
}

impl CreateServiceRequest {
    /// Build the domain record with a fresh identifier and timestamps.
    /// The extractor has already enforced the required fields.
    pub fn into_service(self) -> Service {
        let now = Utc::now();
        Service {
            id: Uuid::new_v4().to_string(),
            name: self.name.unwrap_or_default(),
            service_type: self.service_type.unwrap_or_default(),
            provider: self.provider.unwrap_or_default(),
            creation_date: self.creation_date.unwrap_or_default(),
            last_renewal_date: self.last_renewal_date,
            next_renewal_date: self.next_renewal_date,
            annual_fee: self.annual_fee.unwrap_or_default(),
            currency: self.currency,
            status: parse_status(&self.status),
            notes: self.notes,
            is_deleted: false,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Partial update request - pass only the fields to change.
///
/// Absent and `null` fields leave the stored value untouched.
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateServiceRequest {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: Option<String>,
    #[validate(length(min = 1, message = "service_type must not be empty"))]
    pub service_type: Option<String>,
    #[validate(length(min = 1, message = "provider must not be empty"))]
    pub provider: Option<String>,
    pub creation_date: Option<NaiveDate>,
    pub last_renewal_date: Option<NaiveDate>,
    pub next_renewal_date: Option<NaiveDate>,
    #[validate(range(min = 0.0, message = "annual_fee must be non-negative"))]
    pub annual_fee: Option<f64>,
    pub currency: Option<String>,
    #[validate(custom(function = "validate_status"))]
    pub status: Option<String>,
    pub notes: Option<String>,
}

impl UpdateServiceRequest {
    pub fn into_patch(self) -> ServicePatch {
        ServicePatch {
            name: self.name,
            service_type: self.service_type,
            provider: self.provider,
            creation_date: self.creation_date,
            last_renewal_date: self.last_renewal_date,
            next_renewal_date: self.next_renewal_date,
            annual_fee: self.annual_fee,
            currency: self.currency,
            status: self.status.as_deref().map(parse_status),
            notes: self.notes,
        }
    }
}

/// One bucket of the per-type histogram
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ServiceTypeCountDto {
    pub service_type: String,
    pub count: u64,
}

/// Aggregate dashboard counters
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DashboardStatsDto {
    /// All non-deleted records, regardless of status
    pub total_services: u64,
    /// Non-deleted records with status = active
    pub active_services: u64,
    /// Sum of annual fees over active records only
    pub total_annual_fees: f64,
    /// Active records grouped by type; unordered
    pub services_by_type: Vec<ServiceTypeCountDto>,
}

impl From<DashboardStats> for DashboardStatsDto {
    fn from(stats: DashboardStats) -> Self {
        Self {
            total_services: stats.total_services,
            active_services: stats.active_services,
            total_annual_fees: stats.total_annual_fees,
            services_by_type: stats
                .services_by_type
                .into_iter()
                .map(|bucket| ServiceTypeCountDto {
                    service_type: bucket.service_type,
                    count: bucket.count,
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_request_fills_defaults() {
        let request: CreateServiceRequest = serde_json::from_value(serde_json::json!({
            "name": "example.com",
            "service_type": "Domain",
            "provider": "GoDaddy",
            "creation_date": "2024-01-01",
            "annual_fee": 100.0
        }))
        .unwrap();

        assert!(request.validate().is_ok());
        let service = request.into_service();
        assert!(!service.id.is_empty());
        assert_eq!(service.currency, "TRY");
        assert_eq!(service.status, ServiceStatus::Active);
        assert!(!service.is_deleted);
    }

    #[test]
    fn unknown_status_fails_validation() {
        let request: CreateServiceRequest = serde_json::from_value(serde_json::json!({
            "name": "x",
            "service_type": "Domain",
            "provider": "P",
            "creation_date": "2024-01-01",
            "annual_fee": 1.0,
            "status": "paused"
        }))
        .unwrap();

        assert!(request.validate().is_err());
    }

    #[test]
    fn update_request_maps_to_patch() {
        let request: UpdateServiceRequest = serde_json::from_value(serde_json::json!({
            "annual_fee": 150.0,
            "status": "inactive"
        }))
        .unwrap();

        assert!(request.validate().is_ok());
        let patch = request.into_patch();
        assert_eq!(patch.annual_fee, Some(150.0));
        assert_eq!(patch.status, Some(ServiceStatus::Inactive));
        assert!(patch.name.is_none());
        assert!(patch.notes.is_none());
    }
}
