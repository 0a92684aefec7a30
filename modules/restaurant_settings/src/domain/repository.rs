//! Repository trait for settings records
//!
//! Implementations are in infra/storage.

use crate::contract::SettingsRecord;
use anyhow::Result;
use async_trait::async_trait;

/// Storage for one settings record per restaurant
#[async_trait]
pub trait SettingsRepository: Send + Sync {
    /// Load a restaurant's record, `None` if it was never saved
    async fn find_record(&self, restaurant: &str) -> Result<Option<SettingsRecord>>;

    /// Replace a restaurant's record.
    ///
    /// Readers must observe either the previous or the new record, never a
    /// mix of both.
    async fn save_record(&self, restaurant: &str, record: &SettingsRecord) -> Result<()>;

    /// Restaurants that have a stored record
    async fn list_restaurants(&self) -> Result<Vec<String>>;
}
