//! Storage trait definitions

use async_trait::async_trait;

use crate::domain::{DashboardStats, DomainResult, Service, ServicePatch};

/// Server-side cap on full record-set reads (list, exports).
pub const MAX_LIST_SERVICES: u64 = 1000;

/// Storage trait for persistence operations.
///
/// Every read path filters out soft-deleted records; a soft-deleted record
/// is indistinguishable from an absent one through this interface.
#[async_trait]
pub trait Storage: Send + Sync {
    /// All non-deleted services, capped at [`MAX_LIST_SERVICES`].
    /// Order is whatever the store returns; callers must not rely on it.
    async fn list_services(&self) -> DomainResult<Vec<Service>>;

    /// Persist a freshly created record.
    async fn insert_service(&self, service: Service) -> DomainResult<()>;

    /// Fetch one record by identifier. `None` if absent or soft-deleted.
    async fn get_service(&self, id: &str) -> DomainResult<Option<Service>>;

    /// Apply a partial update and stamp `updated_at`. Returns the full
    /// post-update record; fails with `ServiceNotFound` if the record is
    /// absent or soft-deleted.
    async fn update_service(&self, id: &str, patch: ServicePatch) -> DomainResult<Service>;

    /// Flip `is_deleted` and stamp `updated_at`. Fails with
    /// `ServiceNotFound` if the record is absent or already deleted.
    async fn soft_delete_service(&self, id: &str) -> DomainResult<()>;

    /// Aggregate counters over non-deleted records.
    async fn dashboard_stats(&self) -> DomainResult<DashboardStats>;
}
