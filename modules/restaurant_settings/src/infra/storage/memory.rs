//! In-memory repository, used when no database is configured

use crate::contract::SettingsRecord;
use crate::domain::repository::SettingsRepository;
use anyhow::Result;
use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;

#[derive(Default)]
pub struct InMemorySettingsRepository {
    records: RwLock<HashMap<String, SettingsRecord>>,
}

impl InMemorySettingsRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Repository pre-loaded with records, e.g. from a fixtures file
    pub fn with_records(records: impl IntoIterator<Item = (String, SettingsRecord)>) -> Self {
        Self {
            records: RwLock::new(records.into_iter().collect()),
        }
    }

    pub fn count(&self) -> usize {
        self.records.read().len()
    }
}

#[async_trait]
impl SettingsRepository for InMemorySettingsRepository {
    async fn find_record(&self, restaurant: &str) -> Result<Option<SettingsRecord>> {
        Ok(self.records.read().get(restaurant).cloned())
    }

    async fn save_record(&self, restaurant: &str, record: &SettingsRecord) -> Result<()> {
        self.records
            .write()
            .insert(restaurant.to_string(), record.clone());
        Ok(())
    }

    async fn list_restaurants(&self) -> Result<Vec<String>> {
        let mut restaurants: Vec<String> = self.records.read().keys().cloned().collect();
        restaurants.sort();
        Ok(restaurants)
    }
}
