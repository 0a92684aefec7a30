//! SeaORM entities for database tables

use sea_orm::entity::prelude::*;

/// One row per (restaurant, field)
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "restaurant_settings")]
pub struct Model {
    /// Restaurant slug (part of composite primary key)
    #[sea_orm(primary_key, auto_increment = false)]
    pub restaurant: String,

    /// Field id (part of composite primary key)
    #[sea_orm(primary_key, auto_increment = false)]
    pub field_id: String,

    /// Field value as JSON (string, number or boolean)
    pub value: Json,

    /// Position of the field in the record
    pub position: i32,

    /// Last update timestamp
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
