//! Service domain entity

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Subscription status of a tracked service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceStatus {
    Active,
    Inactive,
}

impl Default for ServiceStatus {
    fn default() -> Self {
        Self::Active
    }
}

impl std::fmt::Display for ServiceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Active => write!(f, "active"),
            Self::Inactive => write!(f, "inactive"),
        }
    }
}

impl ServiceStatus {
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active)
    }
}

/// A recurring external service tracked by the system
/// (domain registration, hosting plan, website contract, consulting).
///
/// Date-only fields (`creation_date`, renewal dates) are calendar dates in
/// the domain; the persistence layer stores them as midnight timestamps.
#[derive(Debug, Clone, PartialEq)]
pub struct Service {
    /// Opaque unique identifier, assigned once at creation
    pub id: String,
    /// Display name of the service
    pub name: String,
    /// Label such as "Domain", "Hosting", "Domain+Hosting", "Website",
    /// "Consulting"; open set, callers may supply their own
    pub service_type: String,
    /// Vendor providing the service
    pub provider: String,
    /// When the service was originally taken out
    pub creation_date: NaiveDate,
    /// Most recent renewal, if any
    pub last_renewal_date: Option<NaiveDate>,
    /// Upcoming renewal, if known
    pub next_renewal_date: Option<NaiveDate>,
    /// Yearly cost in `currency`
    pub annual_fee: f64,
    /// Currency code, "TRY" unless stated otherwise
    pub currency: String,
    pub status: ServiceStatus,
    pub notes: Option<String>,
    /// Soft-delete marker; flips false→true exactly once
    pub is_deleted: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Partial update for a [`Service`].
///
/// Each `Some` field is applied; `None` fields leave the stored value
/// untouched. `id`, `is_deleted` and the timestamps are never patchable.
#[derive(Debug, Clone, Default)]
pub struct ServicePatch {
    pub name: Option<String>,
    pub service_type: Option<String>,
    pub provider: Option<String>,
    pub creation_date: Option<NaiveDate>,
    pub last_renewal_date: Option<NaiveDate>,
    pub next_renewal_date: Option<NaiveDate>,
    pub annual_fee: Option<f64>,
    pub currency: Option<String>,
    pub status: Option<ServiceStatus>,
    pub notes: Option<String>,
}

impl ServicePatch {
    /// Merge the patch into an existing record. Does not touch `updated_at`;
    /// stamping is the storage implementation's job.
    pub fn apply_to(&self, service: &mut Service) {
        if let Some(name) = &self.name {
            service.name = name.clone();
        }
        if let Some(service_type) = &self.service_type {
            service.service_type = service_type.clone();
        }
        if let Some(provider) = &self.provider {
            service.provider = provider.clone();
        }
        if let Some(creation_date) = self.creation_date {
            service.creation_date = creation_date;
        }
        if let Some(last_renewal_date) = self.last_renewal_date {
            service.last_renewal_date = Some(last_renewal_date);
        }
        if let Some(next_renewal_date) = self.next_renewal_date {
            service.next_renewal_date = Some(next_renewal_date);
        }
        if let Some(annual_fee) = self.annual_fee {
            service.annual_fee = annual_fee;
        }
        if let Some(currency) = &self.currency {
            service.currency = currency.clone();
        }
        if let Some(status) = self.status {
            service.status = status;
        }
        if let Some(notes) = &self.notes {
            service.notes = Some(notes.clone());
        }
    }
}

/// Aggregate dashboard counters over non-deleted records
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardStats {
    /// All non-deleted records, regardless of status
    pub total_services: u64,
    /// Non-deleted records with status = active
    pub active_services: u64,
    /// Sum of `annual_fee` over active, non-deleted records only
    pub total_annual_fees: f64,
    /// Histogram of active, non-deleted records by `service_type`; unordered
    pub services_by_type: Vec<TypeCount>,
}

/// One bucket of the per-type histogram
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeCount {
    pub service_type: String,
    pub count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Service {
        Service {
            id: "svc-1".to_string(),
            name: "example.com".to_string(),
            service_type: "Domain".to_string(),
            provider: "GoDaddy".to_string(),
            creation_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            last_renewal_date: None,
            next_renewal_date: None,
            annual_fee: 100.0,
            currency: "TRY".to_string(),
            status: ServiceStatus::Active,
            notes: None,
            is_deleted: false,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn empty_patch_changes_nothing() {
        let mut service = sample();
        let before = service.clone();
        ServicePatch::default().apply_to(&mut service);
        assert_eq!(service, before);
    }

    #[test]
    fn patch_applies_only_present_fields() {
        let mut service = sample();
        let patch = ServicePatch {
            annual_fee: Some(150.0),
            notes: Some("renewed early".to_string()),
            ..Default::default()
        };
        patch.apply_to(&mut service);
        assert_eq!(service.annual_fee, 150.0);
        assert_eq!(service.notes.as_deref(), Some("renewed early"));
        assert_eq!(service.name, "example.com");
        assert_eq!(service.status, ServiceStatus::Active);
    }

    #[test]
    fn status_serde_uses_lowercase() {
        assert_eq!(
            serde_json::to_string(&ServiceStatus::Active).unwrap(),
            "\"active\""
        );
        let status: ServiceStatus = serde_json::from_str("\"inactive\"").unwrap();
        assert_eq!(status, ServiceStatus::Inactive);
    }
}
