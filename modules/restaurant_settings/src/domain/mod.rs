//! Domain layer - business logic and services

pub mod catalog;
pub mod events;
pub mod hours;
pub mod registry;
pub mod repository;
pub mod service;
pub mod validation;

pub use events::{EventPublisher, NoOpEventPublisher, SettingsEvent, TracingEventPublisher};
pub use registry::SettingsRegistry;
pub use repository::SettingsRepository;
pub use service::Service;
