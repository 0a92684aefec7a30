//! Restaurant Settings Module
//!
//! Typed, validated, category-grouped settings for restaurant storefronts:
//! a field catalog, per-field validation, all-or-nothing batch updates and
//! an opening-hours formatter.

// Public exports
pub mod contract;
pub use contract::{
    client::SettingsApi, error::SettingsError, DayHours, FieldCategory, FieldDefinition,
    FieldType, FieldValidation, SelectOption, SettingValue, SettingsRecord,
};

pub mod config;
pub use config::{Config, StorageConfig};

pub mod module;
pub use module::RestaurantSettingsModule;

// Internal modules (hidden from public API)
#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;
