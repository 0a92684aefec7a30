//! Module declaration and lifecycle implementation

use crate::config::{Config, StorageConfig};
use crate::contract::SettingsApi;
use crate::domain::{
    EventPublisher, NoOpEventPublisher, Service, SettingsRegistry, SettingsRepository,
    TracingEventPublisher,
};
use crate::infra::storage::{InMemorySettingsRepository, SeaOrmSettingsRepository};
use anyhow::{Context, Result};
use parking_lot::RwLock;
use std::sync::Arc;

/// Restaurant settings module
pub struct RestaurantSettingsModule {
    config: RwLock<Config>,
    service: RwLock<Option<Arc<Service>>>,
}

impl Default for RestaurantSettingsModule {
    fn default() -> Self {
        Self {
            config: RwLock::new(Config::default()),
            service: RwLock::new(None),
        }
    }
}

impl RestaurantSettingsModule {
    /// Build the registry, storage, and domain service from `cfg`
    pub async fn init(&self, cfg: Config) -> Result<()> {
        let registry = match &cfg.catalog_path {
            Some(path) => SettingsRegistry::new(crate::infra::catalog_file::load_catalog(path)?)?,
            None => SettingsRegistry::restaurant_defaults()?,
        };

        let settings_repo = build_repository(&cfg.storage).await?;
        let stored = settings_repo.list_restaurants().await?;

        let event_publisher: Arc<dyn EventPublisher> = if cfg.publish_events {
            Arc::new(TracingEventPublisher)
        } else {
            Arc::new(NoOpEventPublisher)
        };

        let service = Arc::new(
            Service::new(Arc::new(registry), settings_repo, event_publisher)
                .with_restaurants(cfg.restaurants.iter().cloned()),
        );
        *self.service.write() = Some(service);

        tracing::info!(
            fields = self.service()?.registry().fields().len(),
            restaurants = cfg.restaurants.len(),
            stored = ?stored,
            "Restaurant settings initialized"
        );
        *self.config.write() = cfg;
        Ok(())
    }

    pub fn config(&self) -> Config {
        self.config.read().clone()
    }

    /// Domain service; fails before `init`
    pub fn service(&self) -> Result<Arc<Service>> {
        self.service
            .read()
            .as_ref()
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("Service not initialized"))
    }

    /// In-process client
    pub fn client(&self) -> Result<Arc<dyn SettingsApi>> {
        Ok(Arc::new(crate::api::native::NativeClient::new(
            self.service()?,
        )))
    }

    /// Mount the REST routes on `router`
    pub fn register_rest(&self, router: axum::Router) -> Result<axum::Router> {
        let service = self.service()?;
        tracing::info!("Registering restaurant settings REST routes");
        Ok(crate::api::rest::routes::register_routes(router, service))
    }
}

async fn build_repository(storage: &StorageConfig) -> Result<Arc<dyn SettingsRepository>> {
    match storage {
        StorageConfig::Memory => {
            tracing::warn!("Using in-memory settings storage; records are lost on restart");
            Ok(Arc::new(InMemorySettingsRepository::new()))
        }
        StorageConfig::Database {
            dsn,
            run_migrations,
        } => {
            let conn = sea_orm::Database::connect(dsn.as_str())
                .await
                .context("failed to connect to settings database")?;

            if *run_migrations {
                use crate::infra::storage::migrations::Migrator;
                use sea_orm_migration::MigratorTrait;

                Migrator::up(&conn, None).await?;
                tracing::info!("Restaurant settings migrations completed");
            }
            Ok(Arc::new(SeaOrmSettingsRepository::new(Arc::new(conn))))
        }
    }
}
