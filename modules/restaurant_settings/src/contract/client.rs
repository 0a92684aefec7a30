//! Native client trait for inter-module communication
//!
//! Storefront apps and admin panels in the same process call settings through
//! this trait instead of going over HTTP.

use super::{
    error::SettingsError,
    model::{DayHours, FieldDefinition, SettingValue, SettingsRecord},
};
use async_trait::async_trait;

/// Restaurant settings API for inter-module communication
#[async_trait]
pub trait SettingsApi: Send + Sync {
    // ===== Catalog =====

    /// Editable field definitions, optionally restricted to one category
    async fn editable_fields(&self, category: Option<&str>) -> Vec<FieldDefinition>;

    /// Definition of any field, including read-only ones
    async fn field_config(&self, field_id: &str) -> Option<FieldDefinition>;

    /// Preview a value without writing it
    async fn validate_field(&self, field_id: &str, value: &SettingValue) -> Option<String>;

    // ===== Settings =====

    /// Full settings record of a restaurant
    async fn get_settings(&self, restaurant: &str) -> Result<SettingsRecord, SettingsError>;

    /// Editable fields of one category present in the record
    async fn get_settings_by_category(
        &self,
        restaurant: &str,
        category: &str,
    ) -> Result<SettingsRecord, SettingsError>;

    /// All-or-nothing batch update
    async fn update_settings(
        &self,
        restaurant: &str,
        changes: SettingsRecord,
    ) -> Result<SettingsRecord, SettingsError>;

    /// Batch update restricted to one category; foreign fields are ignored
    async fn update_settings_by_category(
        &self,
        restaurant: &str,
        category: &str,
        changes: SettingsRecord,
    ) -> Result<SettingsRecord, SettingsError>;

    /// Opening hours, Monday through Sunday, ready for display
    async fn hours_for_display(&self, restaurant: &str) -> Result<Vec<DayHours>, SettingsError>;
}
