//! Database migrations for restaurant settings

use sea_orm_migration::prelude::*;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20250301_000001_create_restaurant_settings::Migration)]
    }
}

mod m20250301_000001_create_restaurant_settings {
    use super::*;

    #[derive(DeriveMigrationName)]
    pub struct Migration;

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(RestaurantSettings::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(RestaurantSettings::Restaurant)
                                .string()
                                .not_null(),
                        )
                        .col(ColumnDef::new(RestaurantSettings::FieldId).string().not_null())
                        .col(ColumnDef::new(RestaurantSettings::Value).json().not_null())
                        .col(
                            ColumnDef::new(RestaurantSettings::Position)
                                .integer()
                                .not_null()
                                .default(0),
                        )
                        .col(
                            ColumnDef::new(RestaurantSettings::UpdatedAt)
                                .timestamp_with_time_zone()
                                .not_null()
                                .default(Expr::current_timestamp()),
                        )
                        .primary_key(
                            Index::create()
                                .col(RestaurantSettings::Restaurant)
                                .col(RestaurantSettings::FieldId),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .name("idx_restaurant_settings_restaurant")
                        .table(RestaurantSettings::Table)
                        .col(RestaurantSettings::Restaurant)
                        .to_owned(),
                )
                .await?;

            Ok(())
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(RestaurantSettings::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum RestaurantSettings {
        Table,
        Restaurant,
        FieldId,
        Value,
        Position,
        UpdatedAt,
    }
}
