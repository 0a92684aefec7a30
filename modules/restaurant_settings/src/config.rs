//! Configuration for restaurant settings module

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Restaurant settings configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Restaurant slugs served by this instance; empty serves any slug
    #[serde(default)]
    pub restaurants: Vec<String>,

    /// YAML field catalog replacing the built-in one
    #[serde(default)]
    pub catalog_path: Option<PathBuf>,

    /// Where settings records are kept
    #[serde(default)]
    pub storage: StorageConfig,

    /// Log a structured event for every applied update
    #[serde(default = "default_true")]
    pub publish_events: bool,
}

/// Settings storage backend
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case", deny_unknown_fields)]
pub enum StorageConfig {
    /// Process-local records, lost on restart
    #[default]
    Memory,
    /// SQL database reached through SeaORM (`sqlite://...`, `postgres://...`)
    Database {
        dsn: String,
        #[serde(default = "default_true")]
        run_migrations: bool,
    },
}

impl Default for Config {
    fn default() -> Self {
        Self {
            restaurants: Vec::new(),
            catalog_path: None,
            storage: StorageConfig::default(),
            publish_events: true,
        }
    }
}

fn default_true() -> bool {
    true
}
