//! Create services table

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Services::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Services::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Services::Name)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Services::ServiceType)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Services::Provider)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Services::CreationDate)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Services::LastRenewalDate).timestamp_with_time_zone())
                    .col(ColumnDef::new(Services::NextRenewalDate).timestamp_with_time_zone())
                    .col(
                        ColumnDef::new(Services::AnnualFee)
                            .double()
                            .not_null()
                            .default(0.0),
                    )
                    .col(
                        ColumnDef::new(Services::Currency)
                            .string()
                            .not_null()
                            .default("TRY"),
                    )
                    .col(
                        ColumnDef::new(Services::Status)
                            .string()
                            .not_null()
                            .default("active"),
                    )
                    .col(ColumnDef::new(Services::Notes).string())
                    .col(
                        ColumnDef::new(Services::IsDeleted)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Services::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Services::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // Every read path filters on the soft-delete marker
        manager
            .create_index(
                Index::create()
                    .name("idx_services_is_deleted")
                    .table(Services::Table)
                    .col(Services::IsDeleted)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Services::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Services {
    Table,
    Id,
    Name,
    ServiceType,
    Provider,
    CreationDate,
    LastRenewalDate,
    NextRenewalDate,
    AnnualFee,
    Currency,
    Status,
    Notes,
    IsDeleted,
    CreatedAt,
    UpdatedAt,
}
