//! Entity to model mappers
//!
//! Conversions between SeaORM rows and contract models

use super::entity;
use crate::contract::{SettingValue, SettingsRecord};
use anyhow::{bail, Result};
use serde_json::Value;

// ===== Value Conversions =====

impl From<&SettingValue> for Value {
    fn from(value: &SettingValue) -> Self {
        match value {
            SettingValue::Null => Value::Null,
            SettingValue::Bool(b) => Value::Bool(*b),
            SettingValue::Text(s) => Value::String(s.clone()),
            // Whole numbers are stored as integers
            SettingValue::Number(n) if n.fract() == 0.0 && n.abs() < i64::MAX as f64 => {
                Value::from(*n as i64)
            }
            SettingValue::Number(n) => serde_json::Number::from_f64(*n)
                .map(Value::Number)
                .unwrap_or(Value::Null),
        }
    }
}

/// Parse a stored JSON value back into a setting value
pub fn setting_value_from_json(value: Value) -> Result<SettingValue> {
    Ok(match value {
        Value::Null => SettingValue::Null,
        Value::Bool(b) => SettingValue::Bool(b),
        Value::String(s) => SettingValue::Text(s),
        Value::Number(n) => match n.as_f64() {
            Some(f) => SettingValue::Number(f),
            None => bail!("number out of range: {n}"),
        },
        other => bail!("unsupported setting value: {other}"),
    })
}

// ===== Record Conversions =====

/// Rebuild a record from rows sorted by position
pub fn record_from_rows(rows: Vec<entity::Model>) -> Result<SettingsRecord> {
    rows.into_iter()
        .map(|row| Ok((row.field_id, setting_value_from_json(row.value)?)))
        .collect()
}

/// Rows for a record, skipping `Null` values
pub fn rows_from_record(restaurant: &str, record: &SettingsRecord) -> Vec<entity::ActiveModel> {
    use sea_orm::ActiveValue::Set;

    let now = chrono::Utc::now();
    record
        .iter()
        .filter(|(_, value)| !value.is_null())
        .enumerate()
        .map(|(position, (field_id, value))| entity::ActiveModel {
            restaurant: Set(restaurant.to_string()),
            field_id: Set(field_id.to_string()),
            value: Set(value.into()),
            position: Set(position as i32),
            updated_at: Set(now),
        })
        .collect()
}
