use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Airplane::Table)
                    .if_not_exists()
                    // Caller-supplied identifier, never auto-incremented
                    .col(integer(Airplane::Id).primary_key())
                    .col(integer(Airplane::NoOfPassengers))
                    .col(double(Airplane::FuelTankCapacityInLiters))
                    .col(double(Airplane::FuelConsumptionPerMinute))
                    .col(double(Airplane::MaximumMinutesToFly))
                    .col(
                        timestamp_with_time_zone(Airplane::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(Airplane::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_airplane_updated_at_created_at")
                    .table(Airplane::Table)
                    .col(Airplane::UpdatedAt)
                    .col(Airplane::CreatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Airplane::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Airplane {
    Table,
    Id,
    NoOfPassengers,
    FuelTankCapacityInLiters,
    FuelConsumptionPerMinute,
    MaximumMinutesToFly,
    CreatedAt,
    UpdatedAt,
}
