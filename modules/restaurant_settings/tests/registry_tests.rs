#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Field catalog and validation tests

use restaurant_settings::contract::*;
use restaurant_settings::domain::{NoOpEventPublisher, Service, SettingsRegistry};
use restaurant_settings::infra::storage::InMemorySettingsRepository;
use std::sync::Arc;

mod common;
use common::print_test_header;

fn service_with(fields: Vec<FieldDefinition>) -> Service {
    Service::new(
        Arc::new(SettingsRegistry::new(fields).unwrap()),
        Arc::new(InMemorySettingsRepository::new()),
        Arc::new(NoOpEventPublisher),
    )
}

fn default_service() -> Service {
    service_with(restaurant_settings::domain::catalog::restaurant_fields())
}

#[test]
fn test_editable_fields_by_category() {
    print_test_header(
        "test_editable_fields_by_category",
        &["Category filter returns editable fields in catalog order"],
    );

    let registry = SettingsRegistry::restaurant_defaults().unwrap();

    let all = registry.get_editable_fields(None);
    assert!(all.iter().all(|f| f.editable));
    assert!(!all.iter().any(|f| f.id == "restaurant_slug" || f.id == "timezone"));

    let contact: Vec<&str> = registry
        .get_editable_fields(Some("contact"))
        .into_iter()
        .map(|f| f.id.as_str())
        .collect();
    assert_eq!(&contact[..3], &["phone", "email", "address"]);

    let hours = registry.get_editable_fields(Some("hours"));
    assert_eq!(hours.len(), 21);
    assert_eq!(hours[0].id, "monday_open");
    assert_eq!(hours[20].id, "sunday_closed");

    assert!(registry.get_editable_fields(Some("menu")).is_empty());
}

#[test]
fn test_field_config_lookup() {
    let registry = SettingsRegistry::restaurant_defaults().unwrap();

    let phone = registry.get_field_config("phone").unwrap();
    assert_eq!(phone.label, "Phone Number");
    assert_eq!(phone.category, FieldCategory::Contact);
    assert!(phone.required);

    // Read-only fields are still described
    let timezone = registry.get_field_config("timezone").unwrap();
    assert!(!timezone.editable);
    assert_eq!(timezone.default_value, Some(SettingValue::from("America/New_York")));

    assert!(registry.get_field_config("menu_url").is_none());
    assert!(!registry.is_field_editable("menu_url"));
    assert!(!registry.is_field_editable("restaurant_slug"));
    assert!(registry.is_field_editable("friday_closed"));
}

#[test]
fn test_duplicate_field_ids_rejected() {
    let fields = vec![
        FieldDefinition::new("name", "Name", FieldType::Text, FieldCategory::General),
        FieldDefinition::new("name", "Display Name", FieldType::Text, FieldCategory::General),
    ];
    let err = SettingsRegistry::new(fields).unwrap_err();
    assert!(err.to_string().contains("name"));
}

#[test]
fn test_invalid_pattern_rejected() {
    let fields = vec![FieldDefinition::new("code", "Code", FieldType::Text, FieldCategory::General)
        .pattern("^[A-Z{2}$")];
    assert!(SettingsRegistry::new(fields).is_err());
}

#[test]
fn test_validate_field_without_writing() {
    let service = default_service();

    assert_eq!(service.validate_field("phone", &"(808) 555-0100".into()), None);
    assert_eq!(
        service.validate_field("phone", &"808-555-0100".into()),
        Some("Phone Number format is invalid".to_string())
    );
    assert_eq!(
        service.validate_field("name", &SettingValue::Null),
        Some("Restaurant Name is required".to_string())
    );
    // Optional and empty skips every other check
    assert_eq!(service.validate_field("website", &"".into()), None);
    // Unknown fields are left to the update operations
    assert_eq!(service.validate_field("menu_url", &"x".into()), None);
}

#[test]
fn test_validation_order() {
    let fields = vec![FieldDefinition::new("code", "Code", FieldType::Text, FieldCategory::General)
        .required()
        .pattern("^[a-z]+$")
        .length(Some(3), Some(5))];
    let service = service_with(fields);

    let check = |v: &str| service.validate_field("code", &v.into());
    assert_eq!(check(""), Some("Code is required".to_string()));
    assert_eq!(check("AB"), Some("Code format is invalid".to_string()));
    assert_eq!(check("ab"), Some("Code must be at least 3 characters".to_string()));
    assert_eq!(check("abcdef"), Some("Code must be no more than 5 characters".to_string()));
    assert_eq!(check("abcd"), None);
}

#[test]
fn test_length_counts_characters() {
    let service = default_service();

    // Two characters, four bytes
    assert_eq!(service.validate_field("state", &"Hé".into()), None);
    assert_eq!(
        service.validate_field("name", &"ʻ".into()),
        Some("Restaurant Name must be at least 2 characters".to_string())
    );
}

#[test]
fn test_pattern_skipped_for_non_text_values() {
    let fields = vec![
        FieldDefinition::new("table_count", "Tables", FieldType::Number, FieldCategory::General)
            .pattern(r"^\d+$"),
        FieldDefinition::new("patio", "Patio", FieldType::Boolean, FieldCategory::General)
            .pattern("^yes$"),
    ];
    let service = service_with(fields);

    assert_eq!(service.validate_field("table_count", &SettingValue::Number(12.5)), None);
    assert_eq!(service.validate_field("patio", &SettingValue::Bool(true)), None);
}

#[test]
fn test_numeric_range() {
    let service = default_service();

    assert_eq!(service.validate_field("seating_capacity", &SettingValue::Number(80.0)), None);
    assert_eq!(
        service.validate_field("seating_capacity", &SettingValue::Number(1200.0)),
        Some("Seating Capacity must be no more than 1000".to_string())
    );
}

#[test]
fn test_false_is_present_for_boolean_fields() {
    let fields = vec![
        FieldDefinition::new("terms", "Terms Accepted", FieldType::Boolean, FieldCategory::General)
            .required(),
        FieldDefinition::new("tables", "Tables", FieldType::Number, FieldCategory::General)
            .required(),
    ];
    let service = service_with(fields);

    assert_eq!(service.validate_field("terms", &SettingValue::Bool(false)), None);
    assert_eq!(service.validate_field("tables", &SettingValue::Number(0.0)), None);
    assert_eq!(
        service.validate_field("terms", &SettingValue::Null),
        Some("Terms Accepted is required".to_string())
    );
}
