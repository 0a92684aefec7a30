//! Common test utilities and shared restaurant fixtures
#![allow(dead_code, clippy::unwrap_used, clippy::expect_used)]

use anyhow::Result;
use async_trait::async_trait;
use parking_lot::Mutex;
use restaurant_settings::contract::{SettingValue, SettingsRecord};
use restaurant_settings::domain::{
    EventPublisher, NoOpEventPublisher, Service, SettingsEvent, SettingsRegistry,
    SettingsRepository,
};
use restaurant_settings::infra::storage::InMemorySettingsRepository;
use std::sync::Arc;

pub const HULIHULI: &str = "hulihuli";
pub const NOREETUH: &str = "noreetuh";
pub const PAVE46: &str = "pave46";

/// Catalog defaults plus the restaurant's slug
pub fn base_record(slug: &str) -> SettingsRecord {
    let registry = SettingsRegistry::restaurant_defaults().unwrap();
    let mut record: SettingsRecord = registry
        .fields()
        .iter()
        .filter_map(|f| f.default_value.clone().map(|v| (f.id.clone(), v)))
        .collect();
    record.insert("restaurant_slug", slug);
    record
}

/// Hawaiian rotisserie in the East Village
pub fn hulihuli_record() -> SettingsRecord {
    let mut record = base_record(HULIHULI)
        .with("name", "Huli Huli")
        .with("tagline", "Hawaiian rotisserie chicken")
        .with("cuisine_type", "hawaiian")
        .with("seating_capacity", 36.0)
        .with("phone", "(212) 555-0142")
        .with("email", "aloha@hulihuli.nyc")
        .with("address", "120 1st Avenue");
    record.insert("monday_closed", true);
    record.insert("instagram", "https://instagram.com/hulihuli.nyc");
    record
}

/// Hawaiian tasting menu on 2nd Avenue
pub fn noreetuh_record() -> SettingsRecord {
    base_record(NOREETUH)
        .with("name", "Noreetuh")
        .with("cuisine_type", "hawaiian")
        .with("price_range", "$$$")
        .with("phone", "(646) 892-3050")
        .with("email", "info@noreetuh.com")
        .with("address", "128 1st Avenue")
        .with("website", "https://www.noreetuh.com")
}

/// French brasserie on Lafayette
pub fn pave46_record() -> SettingsRecord {
    base_record(PAVE46)
        .with("name", "Pave 46")
        .with("cuisine_type", "french")
        .with("phone", "(212) 555-0046")
        .with("email", "bonjour@pave46.com")
        .with("address", "46 Lafayette Street")
        .with("friday_close", "02:00")
        .with("thursday_close", "00:00")
}

/// Repository holding all three restaurants
pub fn seeded_repo() -> Arc<InMemorySettingsRepository> {
    Arc::new(InMemorySettingsRepository::with_records([
        (HULIHULI.to_string(), hulihuli_record()),
        (NOREETUH.to_string(), noreetuh_record()),
        (PAVE46.to_string(), pave46_record()),
    ]))
}

pub fn build_service_with(
    repo: Arc<dyn SettingsRepository>,
    publisher: Arc<dyn EventPublisher>,
) -> Service {
    Service::new(
        Arc::new(SettingsRegistry::restaurant_defaults().unwrap()),
        repo,
        publisher,
    )
    .with_restaurants([HULIHULI, NOREETUH, PAVE46])
}

pub fn build_service(repo: Arc<dyn SettingsRepository>) -> Service {
    build_service_with(repo, Arc::new(NoOpEventPublisher))
}

/// Captures published events
#[derive(Default)]
pub struct RecordingPublisher {
    events: Mutex<Vec<SettingsEvent>>,
}

impl RecordingPublisher {
    pub fn events(&self) -> Vec<SettingsEvent> {
        self.events.lock().clone()
    }
}

#[async_trait]
impl EventPublisher for RecordingPublisher {
    async fn publish(&self, event: SettingsEvent) -> Result<()> {
        self.events.lock().push(event);
        Ok(())
    }
}

/// Publisher whose sink is always down
pub struct FailingPublisher;

#[async_trait]
impl EventPublisher for FailingPublisher {
    async fn publish(&self, _event: SettingsEvent) -> Result<()> {
        anyhow::bail!("event bus unavailable")
    }
}

/// Repository that reads fine but cannot write
pub struct ReadOnlyRepo {
    inner: Arc<InMemorySettingsRepository>,
}

impl ReadOnlyRepo {
    pub fn new(inner: Arc<InMemorySettingsRepository>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl SettingsRepository for ReadOnlyRepo {
    async fn find_record(&self, restaurant: &str) -> Result<Option<SettingsRecord>> {
        self.inner.find_record(restaurant).await
    }

    async fn save_record(&self, _restaurant: &str, _record: &SettingsRecord) -> Result<()> {
        anyhow::bail!("database is read-only")
    }

    async fn list_restaurants(&self) -> Result<Vec<String>> {
        self.inner.list_restaurants().await
    }
}

pub fn text(value: &str) -> SettingValue {
    SettingValue::from(value)
}

pub fn print_test_header(test_name: &str, purpose: &[&str]) {
    println!("\n🧪 TEST: {}", test_name);
    if let Some(first) = purpose.first() {
        println!("📋 PURPOSE: {}", first);
    }
    for line in purpose.iter().skip(1) {
        println!("   {}", line);
    }
}
