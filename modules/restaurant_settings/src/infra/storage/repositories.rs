//! SeaORM repository implementation

use crate::contract::SettingsRecord;
use crate::domain::repository::SettingsRepository;
use anyhow::Result;
use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
    TransactionTrait,
};
use std::sync::Arc;

use super::{entity, mapper};

pub struct SeaOrmSettingsRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmSettingsRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SettingsRepository for SeaOrmSettingsRepository {
    async fn find_record(&self, restaurant: &str) -> Result<Option<SettingsRecord>> {
        let rows = entity::Entity::find()
            .filter(entity::Column::Restaurant.eq(restaurant))
            .order_by_asc(entity::Column::Position)
            .all(&*self.db)
            .await?;

        if rows.is_empty() {
            return Ok(None);
        }
        Ok(Some(mapper::record_from_rows(rows)?))
    }

    async fn save_record(&self, restaurant: &str, record: &SettingsRecord) -> Result<()> {
        let rows = mapper::rows_from_record(restaurant, record);

        // Replace all rows of the restaurant in one transaction
        let txn = self.db.begin().await?;

        entity::Entity::delete_many()
            .filter(entity::Column::Restaurant.eq(restaurant))
            .exec(&txn)
            .await?;

        if !rows.is_empty() {
            entity::Entity::insert_many(rows).exec(&txn).await?;
        }

        txn.commit().await?;
        Ok(())
    }

    async fn list_restaurants(&self) -> Result<Vec<String>> {
        let restaurants = entity::Entity::find()
            .select_only()
            .column(entity::Column::Restaurant)
            .distinct()
            .order_by_asc(entity::Column::Restaurant)
            .into_tuple::<String>()
            .all(&*self.db)
            .await?;

        Ok(restaurants)
    }
}
