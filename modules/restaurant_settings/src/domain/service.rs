//! Domain service - business logic orchestration

use super::events::{EventPublisher, SettingsEvent};
use super::hours;
use super::registry::SettingsRegistry;
use super::repository::SettingsRepository;
use super::validation::{is_missing, validate_value};
use crate::contract::{DayHours, SettingValue, SettingsError, SettingsRecord};
use dashmap::DashMap;
use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Field that always carries the restaurant's own identifier
const SLUG_FIELD: &str = "restaurant_slug";

/// Domain service for restaurant settings
pub struct Service {
    registry: Arc<SettingsRegistry>,
    settings_repo: Arc<dyn SettingsRepository>,
    event_publisher: Arc<dyn EventPublisher>,
    /// Restaurants served by this instance; `None` serves any slug
    restaurants: Option<HashSet<String>>,
    /// Per-restaurant writer lock held across validate + merge + save.
    /// Entries only live while an update is in flight.
    write_locks: DashMap<String, Arc<Mutex<()>>>,
}

impl Service {
    /// Create a new service instance
    pub fn new(
        registry: Arc<SettingsRegistry>,
        settings_repo: Arc<dyn SettingsRepository>,
        event_publisher: Arc<dyn EventPublisher>,
    ) -> Self {
        Self {
            registry,
            settings_repo,
            event_publisher,
            restaurants: None,
            write_locks: DashMap::new(),
        }
    }

    /// Restrict the service to a fixed set of restaurants.
    ///
    /// An empty set keeps the service open to any restaurant.
    pub fn with_restaurants<I, S>(mut self, restaurants: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let set: HashSet<String> = restaurants.into_iter().map(Into::into).collect();
        self.restaurants = (!set.is_empty()).then_some(set);
        self
    }

    pub fn registry(&self) -> &SettingsRegistry {
        &self.registry
    }

    // ===== Read Operations =====

    /// Full settings record of a restaurant
    pub async fn get_settings(&self, restaurant: &str) -> Result<SettingsRecord, SettingsError> {
        self.ensure_restaurant(restaurant)?;
        self.load_record(restaurant).await
    }

    /// Editable fields of `category` that are present in the record.
    ///
    /// Read-only fields are not part of category views, even when stored.
    pub async fn get_settings_by_category(
        &self,
        restaurant: &str,
        category: &str,
    ) -> Result<SettingsRecord, SettingsError> {
        self.ensure_restaurant(restaurant)?;
        let record = self.load_record(restaurant).await?;
        Ok(self.category_view(&record, category))
    }

    /// Opening hours of a restaurant, ready for display
    pub async fn hours_for_display(&self, restaurant: &str) -> Result<Vec<DayHours>, SettingsError> {
        let record = self.get_settings(restaurant).await?;
        Ok(Self::format_hours_for_display(&record))
    }

    // ===== Validation =====

    /// Validate one value without writing it.
    ///
    /// Unknown fields are not validated here; they are rejected by the
    /// update operations instead.
    pub fn validate_field(&self, field_id: &str, value: &SettingValue) -> Option<String> {
        let field = self.registry.get_field_config(field_id)?;
        validate_value(field, self.registry.pattern(field_id), value)
    }

    // ===== Write Operations =====

    /// All-or-nothing batch update.
    ///
    /// Every key must name a known, editable field and every value must
    /// validate; otherwise nothing is written. Returns the full record.
    pub async fn update_settings(
        &self,
        restaurant: &str,
        changes: SettingsRecord,
    ) -> Result<SettingsRecord, SettingsError> {
        self.ensure_restaurant(restaurant)?;
        self.apply_update(restaurant, None, &changes).await
    }

    /// Batch update scoped to one category.
    ///
    /// Keys outside `category` (unknown ones included) are dropped without
    /// error. Returns the category view after the merge.
    pub async fn update_settings_by_category(
        &self,
        restaurant: &str,
        category: &str,
        changes: SettingsRecord,
    ) -> Result<SettingsRecord, SettingsError> {
        self.ensure_restaurant(restaurant)?;

        let scoped = changes.filtered(|field_id| self.registry.is_in_category(field_id, category));
        if scoped.len() < changes.len() {
            tracing::debug!(
                restaurant,
                category,
                dropped = changes.len() - scoped.len(),
                "ignoring fields outside of category"
            );
        }

        let record = if scoped.is_empty() {
            self.load_record(restaurant).await?
        } else {
            self.apply_update(restaurant, Some(category), &scoped).await?
        };
        Ok(self.category_view(&record, category))
    }

    /// Format hours fields into display lines, Monday to Sunday
    pub fn format_hours_for_display(settings: &SettingsRecord) -> Vec<DayHours> {
        hours::format_hours_for_display(settings)
    }

    // ===== Helper Methods =====

    async fn apply_update(
        &self,
        restaurant: &str,
        category: Option<&str>,
        changes: &SettingsRecord,
    ) -> Result<SettingsRecord, SettingsError> {
        let lock = self
            .write_locks
            .entry(restaurant.to_string())
            .or_default()
            .clone();
        let result = {
            let _guard = lock.lock().await;
            self.write_locked(restaurant, category, changes).await
        };
        drop(lock);
        // Evict once no other update holds the lock
        self.write_locks
            .remove_if(restaurant, |_, lock| Arc::strong_count(lock) == 1);
        result
    }

    async fn write_locked(
        &self,
        restaurant: &str,
        category: Option<&str>,
        changes: &SettingsRecord,
    ) -> Result<SettingsRecord, SettingsError> {
        self.check_changes(changes).inspect_err(|e| {
            tracing::info!(restaurant, error = %e, "settings update rejected");
        })?;

        let mut record = self.load_record(restaurant).await?;
        record.merge(changes);
        self.check_required(&record).inspect_err(|e| {
            tracing::info!(restaurant, error = %e, "settings update rejected");
        })?;

        self.settings_repo
            .save_record(restaurant, &record)
            .await
            .inspect_err(|e| tracing::error!(restaurant, error = %e, "failed to save settings"))?;

        let changed: Vec<String> = changes.keys().map(str::to_string).collect();
        tracing::info!(restaurant, category, fields = ?changed, "settings updated");

        let event = SettingsEvent::updated(restaurant, category, changed);
        if let Err(e) = self.event_publisher.publish(event).await {
            // Log error but don't fail the operation
            tracing::warn!(restaurant, error = %e, "failed to publish settings event");
        }

        Ok(record)
    }

    /// Editable check runs over the whole batch before any value is validated.
    fn check_changes(&self, changes: &SettingsRecord) -> Result<(), SettingsError> {
        if let Some(field_id) = changes
            .keys()
            .find(|id| !self.registry.is_field_editable(id))
        {
            return Err(SettingsError::not_editable(field_id));
        }

        for (field_id, value) in changes.iter() {
            if let Some(message) = self.validate_field(field_id, value) {
                return Err(SettingsError::validation(message));
            }
        }
        Ok(())
    }

    /// Every required field of the merged record must hold a value.
    fn check_required(&self, record: &SettingsRecord) -> Result<(), SettingsError> {
        let missing = self
            .registry
            .fields()
            .iter()
            .filter(|f| f.required)
            .find(|f| match record.get(&f.id) {
                Some(value) => is_missing(f.field_type, value),
                None => true,
            });
        match missing {
            Some(field) => Err(SettingsError::validation(format!(
                "{} is required",
                field.label
            ))),
            None => Ok(()),
        }
    }

    fn category_view(&self, record: &SettingsRecord, category: &str) -> SettingsRecord {
        let editable: HashSet<&str> = self
            .registry
            .get_editable_fields(Some(category))
            .into_iter()
            .map(|f| f.id.as_str())
            .collect();
        record.filtered(|field_id| editable.contains(field_id))
    }

    async fn load_record(&self, restaurant: &str) -> Result<SettingsRecord, SettingsError> {
        match self.settings_repo.find_record(restaurant).await? {
            Some(record) => Ok(record),
            None => {
                tracing::debug!(restaurant, "no stored settings, using catalog defaults");
                Ok(self.seed_record(restaurant))
            }
        }
    }

    /// First record of a restaurant: catalog defaults plus its own slug
    fn seed_record(&self, restaurant: &str) -> SettingsRecord {
        let mut record = SettingsRecord::new();
        for field in self.registry.fields() {
            if field.id == SLUG_FIELD {
                record.insert(SLUG_FIELD, restaurant);
            } else if let Some(default) = &field.default_value {
                record.insert(field.id.clone(), default.clone());
            }
        }
        record
    }

    fn ensure_restaurant(&self, restaurant: &str) -> Result<(), SettingsError> {
        match &self.restaurants {
            Some(known) if !known.contains(restaurant) => Err(SettingsError::UnknownRestaurant {
                restaurant: restaurant.to_string(),
            }),
            _ => Ok(()),
        }
    }
}
