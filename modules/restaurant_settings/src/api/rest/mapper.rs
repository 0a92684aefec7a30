//! Mapper implementations for converting between DTOs and contract models
//!
//! This module contains all From/Into implementations for bidirectional
//! conversion between REST DTOs and transport-agnostic contract models.

use super::dto::*;
use crate::contract::{
    DayHours, FieldDefinition, FieldValidation, SelectOption, SettingValue, SettingsError,
    SettingsRecord,
};
use serde_json::Value;

// ===== Field Catalog Mappings =====

impl From<&FieldDefinition> for FieldDefinitionDto {
    fn from(field: &FieldDefinition) -> Self {
        Self {
            id: field.id.clone(),
            label: field.label.clone(),
            field_type: field.field_type.as_str().to_string(),
            required: field.required,
            validation: field
                .validation
                .as_ref()
                .filter(|v| !v.is_empty())
                .map(ValidationDto::from),
            options: field.options.iter().map(OptionDto::from).collect(),
            default_value: field.default_value.as_ref().map(Value::from),
            editable: field.editable,
            category: field.category.as_str().to_string(),
        }
    }
}

impl From<&FieldValidation> for ValidationDto {
    fn from(v: &FieldValidation) -> Self {
        Self {
            pattern: v.pattern.clone(),
            min_length: v.min_length,
            max_length: v.max_length,
            min: v.min,
            max: v.max,
        }
    }
}

impl From<&SelectOption> for OptionDto {
    fn from(o: &SelectOption) -> Self {
        Self {
            value: o.value.clone(),
            label: o.label.clone(),
        }
    }
}

// ===== Settings Mappings =====

impl From<DayHours> for DayHoursDto {
    fn from(h: DayHours) -> Self {
        Self {
            day: h.day,
            hours: h.hours,
        }
    }
}

/// Convert a JSON value submitted for `field_id`.
///
/// Arrays and objects cannot be stored and are reported against the field.
pub fn value_from_json(field_id: &str, value: Value) -> Result<SettingValue, SettingsError> {
    match value {
        Value::Null => Ok(SettingValue::Null),
        Value::Bool(b) => Ok(SettingValue::Bool(b)),
        Value::String(s) => Ok(SettingValue::Text(s)),
        Value::Number(n) => n
            .as_f64()
            .map(SettingValue::Number)
            .ok_or_else(|| SettingsError::UnsupportedValue {
                field: field_id.to_string(),
            }),
        Value::Array(_) | Value::Object(_) => Err(SettingsError::UnsupportedValue {
            field: field_id.to_string(),
        }),
    }
}

/// Convert a request body into a settings record, keeping key order
pub fn record_from_dto(body: SettingsRecordDto) -> Result<SettingsRecord, SettingsError> {
    body.into_iter()
        .map(|(field_id, value)| {
            let value = value_from_json(&field_id, value)?;
            Ok((field_id, value))
        })
        .collect()
}

pub fn record_to_dto(record: &SettingsRecord) -> SettingsRecordDto {
    record
        .iter()
        .map(|(field_id, value)| (field_id.to_string(), Value::from(value)))
        .collect()
}
