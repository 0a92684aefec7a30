//! Storage layer - database entities and repositories

pub mod entity;
pub mod mapper;
pub mod memory;
pub mod migrations;
pub mod repositories;

pub use memory::InMemorySettingsRepository;
pub use repositories::SeaOrmSettingsRepository;
