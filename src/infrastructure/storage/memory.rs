//! In-memory storage implementation

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;

use super::{Storage, MAX_LIST_SERVICES};
use crate::domain::{
    DashboardStats, DomainError, DomainResult, Service, ServicePatch, TypeCount,
};

/// In-memory storage for development and testing
#[derive(Default)]
pub struct InMemoryStorage {
    services: DashMap<String, Service>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Storage for InMemoryStorage {
    async fn list_services(&self) -> DomainResult<Vec<Service>> {
        Ok(self
            .services
            .iter()
            .filter(|entry| !entry.is_deleted)
            .take(MAX_LIST_SERVICES as usize)
            .map(|entry| entry.clone())
            .collect())
    }

    async fn insert_service(&self, service: Service) -> DomainResult<()> {
        self.services.insert(service.id.clone(), service);
        Ok(())
    }

    async fn get_service(&self, id: &str) -> DomainResult<Option<Service>> {
        Ok(self
            .services
            .get(id)
            .filter(|service| !service.is_deleted)
            .map(|service| service.clone()))
    }

    async fn update_service(&self, id: &str, patch: ServicePatch) -> DomainResult<Service> {
        let Some(mut entry) = self.services.get_mut(id) else {
            return Err(DomainError::ServiceNotFound(id.to_string()));
        };
        if entry.is_deleted {
            return Err(DomainError::ServiceNotFound(id.to_string()));
        }
        patch.apply_to(&mut entry);
        entry.updated_at = Utc::now();
        Ok(entry.clone())
    }

    async fn soft_delete_service(&self, id: &str) -> DomainResult<()> {
        let Some(mut entry) = self.services.get_mut(id) else {
            return Err(DomainError::ServiceNotFound(id.to_string()));
        };
        if entry.is_deleted {
            return Err(DomainError::ServiceNotFound(id.to_string()));
        }
        entry.is_deleted = true;
        entry.updated_at = Utc::now();
        Ok(())
    }

    async fn dashboard_stats(&self) -> DomainResult<DashboardStats> {
        let mut stats = DashboardStats::default();
        let mut by_type: HashMap<String, u64> = HashMap::new();

        for entry in self.services.iter().filter(|entry| !entry.is_deleted) {
            stats.total_services += 1;
            if entry.status.is_active() {
                stats.active_services += 1;
                stats.total_annual_fees += entry.annual_fee;
                *by_type.entry(entry.service_type.clone()).or_default() += 1;
            }
        }

        stats.services_by_type = by_type
            .into_iter()
            .map(|(service_type, count)| TypeCount {
                service_type,
                count,
            })
            .collect();

        Ok(stats)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::domain::ServiceStatus;

    fn service(id: &str, service_type: &str, fee: f64, status: ServiceStatus) -> Service {
        Service {
            id: id.to_string(),
            name: format!("{} service", id),
            service_type: service_type.to_string(),
            provider: "Provider".to_string(),
            creation_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            last_renewal_date: None,
            next_renewal_date: None,
            annual_fee: fee,
            currency: "TRY".to_string(),
            status,
            notes: None,
            is_deleted: false,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn soft_deleted_records_are_invisible() {
        let storage = InMemoryStorage::new();
        storage
            .insert_service(service("a", "Domain", 100.0, ServiceStatus::Active))
            .await
            .unwrap();

        storage.soft_delete_service("a").await.unwrap();
        assert!(storage.get_service("a").await.unwrap().is_none());
        assert!(storage.list_services().await.unwrap().is_empty());

        // second delete reports not-found
        assert!(matches!(
            storage.soft_delete_service("a").await,
            Err(DomainError::ServiceNotFound(_))
        ));
        // updates on a deleted record report not-found too
        assert!(matches!(
            storage.update_service("a", ServicePatch::default()).await,
            Err(DomainError::ServiceNotFound(_))
        ));
    }

    #[tokio::test]
    async fn update_applies_patch_and_stamps_updated_at() {
        let storage = InMemoryStorage::new();
        storage
            .insert_service(service("a", "Domain", 100.0, ServiceStatus::Active))
            .await
            .unwrap();
        let before = storage.get_service("a").await.unwrap().unwrap();

        let patch = ServicePatch {
            annual_fee: Some(150.0),
            ..Default::default()
        };
        let after = storage.update_service("a", patch).await.unwrap();

        assert_eq!(after.annual_fee, 150.0);
        assert_eq!(after.name, before.name);
        assert!(after.updated_at >= before.updated_at);
        assert_eq!(after.created_at, before.created_at);
    }

    #[tokio::test]
    async fn dashboard_stats_counts_only_what_it_should() {
        let storage = InMemoryStorage::new();
        storage
            .insert_service(service("a", "Domain", 100.0, ServiceStatus::Active))
            .await
            .unwrap();
        storage
            .insert_service(service("b", "Domain", 250.0, ServiceStatus::Active))
            .await
            .unwrap();
        storage
            .insert_service(service("c", "Hosting", 400.0, ServiceStatus::Inactive))
            .await
            .unwrap();
        storage
            .insert_service(service("d", "Hosting", 999.0, ServiceStatus::Active))
            .await
            .unwrap();
        storage.soft_delete_service("d").await.unwrap();

        let stats = storage.dashboard_stats().await.unwrap();
        // deleted records are excluded everywhere; inactive ones only from
        // the fee sum and the histogram
        assert_eq!(stats.total_services, 3);
        assert_eq!(stats.active_services, 2);
        assert_eq!(stats.total_annual_fees, 350.0);

        let mut by_type = stats.services_by_type;
        by_type.sort_by(|a, b| a.service_type.cmp(&b.service_type));
        assert_eq!(by_type.len(), 1);
        assert_eq!(by_type[0].service_type, "Domain");
        assert_eq!(by_type[0].count, 2);
    }

    #[tokio::test]
    async fn list_is_capped() {
        let storage = InMemoryStorage::new();
        for i in 0..(MAX_LIST_SERVICES + 5) {
            storage
                .insert_service(service(
                    &format!("svc-{}", i),
                    "Domain",
                    1.0,
                    ServiceStatus::Active,
                ))
                .await
                .unwrap();
        }
        let listed = storage.list_services().await.unwrap();
        assert_eq!(listed.len(), MAX_LIST_SERVICES as usize);
    }
}
