//! Database storage implementation using SeaORM

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use log::debug;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QuerySelect, Set,
};

use super::entities::service;
use crate::domain::{
    DashboardStats, DomainError, DomainResult, Service, ServicePatch, ServiceStatus, TypeCount,
};
use crate::infrastructure::storage::{Storage, MAX_LIST_SERVICES};

/// Database storage implementation
pub struct DatabaseStorage {
    db: DatabaseConnection,
}

impl DatabaseStorage {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Get database connection reference
    pub fn connection(&self) -> &DatabaseConnection {
        &self.db
    }
}

// Helper functions for domain <-> entity conversion

fn db_err(e: sea_orm::DbErr) -> DomainError {
    DomainError::StorageError(e.to_string())
}

/// Calendar date -> on-disk midnight timestamp
fn date_to_midnight(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

fn domain_status_to_entity(status: ServiceStatus) -> service::ServiceStatus {
    match status {
        ServiceStatus::Active => service::ServiceStatus::Active,
        ServiceStatus::Inactive => service::ServiceStatus::Inactive,
    }
}

fn entity_status_to_domain(status: service::ServiceStatus) -> ServiceStatus {
    match status {
        service::ServiceStatus::Active => ServiceStatus::Active,
        service::ServiceStatus::Inactive => ServiceStatus::Inactive,
    }
}

fn model_to_domain(model: service::Model) -> Service {
    Service {
        id: model.id,
        name: model.name,
        service_type: model.service_type,
        provider: model.provider,
        creation_date: model.creation_date.date_naive(),
        last_renewal_date: model.last_renewal_date.map(|dt| dt.date_naive()),
        next_renewal_date: model.next_renewal_date.map(|dt| dt.date_naive()),
        annual_fee: model.annual_fee,
        currency: model.currency,
        status: entity_status_to_domain(model.status),
        notes: model.notes,
        is_deleted: model.is_deleted,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

fn domain_to_active_model(svc: Service) -> service::ActiveModel {
    service::ActiveModel {
        id: Set(svc.id),
        name: Set(svc.name),
        service_type: Set(svc.service_type),
        provider: Set(svc.provider),
        creation_date: Set(date_to_midnight(svc.creation_date)),
        last_renewal_date: Set(svc.last_renewal_date.map(date_to_midnight)),
        next_renewal_date: Set(svc.next_renewal_date.map(date_to_midnight)),
        annual_fee: Set(svc.annual_fee),
        currency: Set(svc.currency),
        status: Set(domain_status_to_entity(svc.status)),
        notes: Set(svc.notes),
        is_deleted: Set(svc.is_deleted),
        created_at: Set(svc.created_at),
        updated_at: Set(svc.updated_at),
    }
}

#[async_trait]
impl Storage for DatabaseStorage {
    async fn list_services(&self) -> DomainResult<Vec<Service>> {
        let models = service::Entity::find()
            .filter(service::Column::IsDeleted.eq(false))
            .limit(MAX_LIST_SERVICES)
            .all(&self.db)
            .await
            .map_err(db_err)?;

        Ok(models.into_iter().map(model_to_domain).collect())
    }

    async fn insert_service(&self, svc: Service) -> DomainResult<()> {
        debug!("Inserting service {}", svc.id);
        domain_to_active_model(svc)
            .insert(&self.db)
            .await
            .map_err(db_err)?;
        Ok(())
    }

    async fn get_service(&self, id: &str) -> DomainResult<Option<Service>> {
        let model = service::Entity::find_by_id(id)
            .filter(service::Column::IsDeleted.eq(false))
            .one(&self.db)
            .await
            .map_err(db_err)?;

        Ok(model.map(model_to_domain))
    }

    async fn update_service(&self, id: &str, patch: ServicePatch) -> DomainResult<Service> {
        let mut query = service::Entity::update_many()
            .filter(service::Column::Id.eq(id))
            .filter(service::Column::IsDeleted.eq(false));

        if let Some(name) = patch.name {
            query = query.col_expr(service::Column::Name, Expr::value(name));
        }
        if let Some(service_type) = patch.service_type {
            query = query.col_expr(service::Column::ServiceType, Expr::value(service_type));
        }
        if let Some(provider) = patch.provider {
            query = query.col_expr(service::Column::Provider, Expr::value(provider));
        }
        if let Some(creation_date) = patch.creation_date {
            query = query.col_expr(
                service::Column::CreationDate,
                Expr::value(date_to_midnight(creation_date)),
            );
        }
        if let Some(last_renewal_date) = patch.last_renewal_date {
            query = query.col_expr(
                service::Column::LastRenewalDate,
                Expr::value(date_to_midnight(last_renewal_date)),
            );
        }
        if let Some(next_renewal_date) = patch.next_renewal_date {
            query = query.col_expr(
                service::Column::NextRenewalDate,
                Expr::value(date_to_midnight(next_renewal_date)),
            );
        }
        if let Some(annual_fee) = patch.annual_fee {
            query = query.col_expr(service::Column::AnnualFee, Expr::value(annual_fee));
        }
        if let Some(currency) = patch.currency {
            query = query.col_expr(service::Column::Currency, Expr::value(currency));
        }
        if let Some(status) = patch.status {
            query = query.col_expr(
                service::Column::Status,
                Expr::value(domain_status_to_entity(status)),
            );
        }
        if let Some(notes) = patch.notes {
            query = query.col_expr(service::Column::Notes, Expr::value(notes));
        }

        // every successful mutation refreshes updated_at
        query = query.col_expr(service::Column::UpdatedAt, Expr::value(Utc::now()));

        let result = query.exec(&self.db).await.map_err(db_err)?;
        if result.rows_affected == 0 {
            return Err(DomainError::ServiceNotFound(id.to_string()));
        }

        // second read to return the record as persisted
        self.get_service(id)
            .await?
            .ok_or_else(|| DomainError::ServiceNotFound(id.to_string()))
    }

    async fn soft_delete_service(&self, id: &str) -> DomainResult<()> {
        let result = service::Entity::update_many()
            .filter(service::Column::Id.eq(id))
            .filter(service::Column::IsDeleted.eq(false))
            .col_expr(service::Column::IsDeleted, Expr::value(true))
            .col_expr(service::Column::UpdatedAt, Expr::value(Utc::now()))
            .exec(&self.db)
            .await
            .map_err(db_err)?;

        if result.rows_affected == 0 {
            return Err(DomainError::ServiceNotFound(id.to_string()));
        }

        Ok(())
    }

    async fn dashboard_stats(&self) -> DomainResult<DashboardStats> {
        let total_services = service::Entity::find()
            .filter(service::Column::IsDeleted.eq(false))
            .count(&self.db)
            .await
            .map_err(db_err)?;

        let active_services = service::Entity::find()
            .filter(service::Column::IsDeleted.eq(false))
            .filter(service::Column::Status.eq(service::ServiceStatus::Active))
            .count(&self.db)
            .await
            .map_err(db_err)?;

        // SUM over zero rows is NULL, not 0
        let total_annual_fees = service::Entity::find()
            .select_only()
            .column_as(service::Column::AnnualFee.sum(), "total_fees")
            .filter(service::Column::IsDeleted.eq(false))
            .filter(service::Column::Status.eq(service::ServiceStatus::Active))
            .into_tuple::<Option<f64>>()
            .one(&self.db)
            .await
            .map_err(db_err)?
            .flatten()
            .unwrap_or(0.0);

        let by_type: Vec<(String, i64)> = service::Entity::find()
            .select_only()
            .column(service::Column::ServiceType)
            .column_as(service::Column::Id.count(), "count")
            .filter(service::Column::IsDeleted.eq(false))
            .filter(service::Column::Status.eq(service::ServiceStatus::Active))
            .group_by(service::Column::ServiceType)
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(db_err)?;

        Ok(DashboardStats {
            total_services,
            active_services,
            total_annual_fees,
            services_by_type: by_type
                .into_iter()
                .map(|(service_type, count)| TypeCount {
                    service_type,
                    count: count as u64,
                })
                .collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use sea_orm::Database;
    use sea_orm_migration::MigratorTrait;

    use super::*;
    use crate::infrastructure::database::migrator::Migrator;

    async fn storage() -> DatabaseStorage {
        let db = Database::connect("sqlite::memory:").await.unwrap();
        Migrator::up(&db, None).await.unwrap();
        DatabaseStorage::new(db)
    }

    fn sample(id: &str, status: ServiceStatus, fee: f64) -> Service {
        Service {
            id: id.to_string(),
            name: "example.com".to_string(),
            service_type: "Domain".to_string(),
            provider: "GoDaddy".to_string(),
            creation_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            last_renewal_date: Some(NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()),
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
    async fn roundtrip_preserves_calendar_dates() {
        let storage = storage().await;
        storage
            .insert_service(sample("a", ServiceStatus::Active, 100.0))
            .await
            .unwrap();

        let fetched = storage.get_service("a").await.unwrap().unwrap();
        assert_eq!(
            fetched.creation_date,
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
        );
        assert_eq!(
            fetched.last_renewal_date,
            Some(NaiveDate::from_ymd_opt(2024, 6, 15).unwrap())
        );
        assert_eq!(fetched.next_renewal_date, None);
    }

    #[tokio::test]
    async fn soft_delete_hides_record_from_reads() {
        let storage = storage().await;
        storage
            .insert_service(sample("a", ServiceStatus::Active, 100.0))
            .await
            .unwrap();

        storage.soft_delete_service("a").await.unwrap();
        assert!(storage.get_service("a").await.unwrap().is_none());
        assert!(storage.list_services().await.unwrap().is_empty());
        assert!(matches!(
            storage.soft_delete_service("a").await,
            Err(DomainError::ServiceNotFound(_))
        ));
    }

    #[tokio::test]
    async fn update_of_missing_record_is_not_found() {
        let storage = storage().await;
        let patch = ServicePatch {
            annual_fee: Some(1.0),
            ..Default::default()
        };
        assert!(matches!(
            storage.update_service("missing", patch).await,
            Err(DomainError::ServiceNotFound(_))
        ));
    }

    #[tokio::test]
    async fn update_returns_persisted_record() {
        let storage = storage().await;
        storage
            .insert_service(sample("a", ServiceStatus::Active, 100.0))
            .await
            .unwrap();

        let patch = ServicePatch {
            annual_fee: Some(150.0),
            status: Some(ServiceStatus::Inactive),
            ..Default::default()
        };
        let updated = storage.update_service("a", patch).await.unwrap();
        assert_eq!(updated.annual_fee, 150.0);
        assert_eq!(updated.status, ServiceStatus::Inactive);
        assert_eq!(updated.name, "example.com");
    }

    #[tokio::test]
    async fn stats_aggregate_active_non_deleted_records() {
        let storage = storage().await;
        storage
            .insert_service(sample("a", ServiceStatus::Active, 100.0))
            .await
            .unwrap();
        storage
            .insert_service(sample("b", ServiceStatus::Inactive, 400.0))
            .await
            .unwrap();
        storage
            .insert_service(sample("c", ServiceStatus::Active, 250.0))
            .await
            .unwrap();
        storage.soft_delete_service("c").await.unwrap();

        let stats = storage.dashboard_stats().await.unwrap();
        assert_eq!(stats.total_services, 2);
        assert_eq!(stats.active_services, 1);
        assert_eq!(stats.total_annual_fees, 100.0);
        assert_eq!(stats.services_by_type.len(), 1);
        assert_eq!(stats.services_by_type[0].service_type, "Domain");
        assert_eq!(stats.services_by_type[0].count, 1);
    }

    #[tokio::test]
    async fn stats_on_empty_store_are_zero() {
        let storage = storage().await;
        let stats = storage.dashboard_stats().await.unwrap();
        assert_eq!(stats.total_services, 0);
        assert_eq!(stats.active_services, 0);
        assert_eq!(stats.total_annual_fees, 0.0);
        assert!(stats.services_by_type.is_empty());
    }
}
