//! Native client implementation - wraps domain service for in-process calls

use crate::contract::{
    DayHours, FieldDefinition, SettingValue, SettingsApi, SettingsError, SettingsRecord,
};
use crate::domain::Service;
use async_trait::async_trait;
use std::sync::Arc;

/// Native client implementation that directly calls the domain service
///
/// This client is used for in-process communication without HTTP overhead.
#[derive(Clone)]
pub struct NativeClient {
    service: Arc<Service>,
}

impl NativeClient {
    /// Create a new native client
    pub fn new(service: Arc<Service>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl SettingsApi for NativeClient {
    async fn editable_fields(&self, category: Option<&str>) -> Vec<FieldDefinition> {
        self.service
            .registry()
            .get_editable_fields(category)
            .into_iter()
            .cloned()
            .collect()
    }

    async fn field_config(&self, field_id: &str) -> Option<FieldDefinition> {
        self.service.registry().get_field_config(field_id).cloned()
    }

    async fn validate_field(&self, field_id: &str, value: &SettingValue) -> Option<String> {
        self.service.validate_field(field_id, value)
    }

    async fn get_settings(&self, restaurant: &str) -> Result<SettingsRecord, SettingsError> {
        self.service.get_settings(restaurant).await
    }

    async fn get_settings_by_category(
        &self,
        restaurant: &str,
        category: &str,
    ) -> Result<SettingsRecord, SettingsError> {
        self.service
            .get_settings_by_category(restaurant, category)
            .await
    }

    async fn update_settings(
        &self,
        restaurant: &str,
        changes: SettingsRecord,
    ) -> Result<SettingsRecord, SettingsError> {
        self.service.update_settings(restaurant, changes).await
    }

    async fn update_settings_by_category(
        &self,
        restaurant: &str,
        category: &str,
        changes: SettingsRecord,
    ) -> Result<SettingsRecord, SettingsError> {
        self.service
            .update_settings_by_category(restaurant, category, changes)
            .await
    }

    async fn hours_for_display(&self, restaurant: &str) -> Result<Vec<DayHours>, SettingsError> {
        self.service.hours_for_display(restaurant).await
    }
}
