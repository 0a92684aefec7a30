//! Domain events for restaurant settings
//!
//! One event is published per accepted batch update. Storefront caches
//! subscribe to it to refresh rendered contact blocks and opening hours.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Domain event types for settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event_type", rename_all = "snake_case")]
pub enum SettingsEvent {
    /// A batch update was merged into a restaurant's record
    SettingsUpdated(SettingsUpdatedEvent),
}

/// Event data for an accepted update
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingsUpdatedEvent {
    /// Unique event id
    pub event_id: Uuid,
    /// Restaurant slug
    pub restaurant: String,
    /// Category the update was scoped to, if any
    pub category: Option<String>,
    /// Field ids written by the update, in submission order
    pub changed_fields: Vec<String>,
    /// Timestamp of the event
    pub timestamp: DateTime<Utc>,
}

impl SettingsEvent {
    /// Create a new SettingsUpdated event
    pub fn updated(
        restaurant: &str,
        category: Option<&str>,
        changed_fields: Vec<String>,
    ) -> Self {
        SettingsEvent::SettingsUpdated(SettingsUpdatedEvent {
            event_id: Uuid::new_v4(),
            restaurant: restaurant.to_string(),
            category: category.map(str::to_string),
            changed_fields,
            timestamp: Utc::now(),
        })
    }

    pub fn restaurant(&self) -> &str {
        match self {
            SettingsEvent::SettingsUpdated(e) => &e.restaurant,
        }
    }
}

/// Event publisher trait for publishing domain events
///
/// Failures are reported back to the service, which logs them without
/// failing the update that produced the event.
#[async_trait::async_trait]
pub trait EventPublisher: Send + Sync {
    async fn publish(&self, event: SettingsEvent) -> anyhow::Result<()>;
}

/// No-op event publisher for testing or when events are disabled
pub struct NoOpEventPublisher;

#[async_trait::async_trait]
impl EventPublisher for NoOpEventPublisher {
    async fn publish(&self, _event: SettingsEvent) -> anyhow::Result<()> {
        Ok(())
    }
}

/// Publisher that writes each event as a structured log line
pub struct TracingEventPublisher;

#[async_trait::async_trait]
impl EventPublisher for TracingEventPublisher {
    async fn publish(&self, event: SettingsEvent) -> anyhow::Result<()> {
        let payload = serde_json::to_string(&event)?;
        tracing::info!(
            target: "restaurant_settings::events",
            restaurant = event.restaurant(),
            %payload,
            "settings event"
        );
        Ok(())
    }
}
