//! REST DTOs with serde derives for HTTP API

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ===== Field Catalog DTOs =====

/// Field definition response DTO
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FieldDefinitionDto {
    /// Field identifier
    #[schema(example = "phone")]
    pub id: String,

    /// Human-readable label
    #[schema(example = "Phone Number")]
    pub label: String,

    /// Input type (text, email, phone, url, textarea, time, select, boolean, number)
    #[serde(rename = "type")]
    #[schema(example = "phone")]
    pub field_type: String,

    pub required: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub validation: Option<ValidationDto>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<OptionDto>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Object)]
    pub default_value: Option<serde_json::Value>,

    pub editable: bool,

    #[schema(example = "contact")]
    pub category: String,
}

/// Field constraints
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ValidationDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_length: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
}

/// Select option
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct OptionDto {
    #[schema(example = "$$")]
    pub value: String,
    #[schema(example = "Moderate")]
    pub label: String,
}

/// List of field definitions
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FieldsListResponse {
    pub items: Vec<FieldDefinitionDto>,
    pub total: usize,
}

/// Query for filtering the field catalog
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct FieldsQuery {
    /// Restrict to one category (general, contact, hours, social)
    pub category: Option<String>,
}

// ===== Validation DTOs =====

/// Single-value validation request
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ValidateFieldRequest {
    /// Value to check; `null` counts as empty
    #[serde(default)]
    #[schema(value_type = Object)]
    pub value: serde_json::Value,
}

/// Single-value validation result
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ValidateFieldResponse {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

// ===== Settings DTOs =====

/// Settings record keyed by field id, in catalog order
pub type SettingsRecordDto = IndexMap<String, serde_json::Value>;

/// Opening hours line
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DayHoursDto {
    #[schema(example = "Monday")]
    pub day: String,
    #[schema(example = "11:00 AM - 10:00 PM")]
    pub hours: String,
}

/// Opening hours of a restaurant, Monday to Sunday
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HoursResponse {
    pub restaurant: String,
    pub hours: Vec<DayHoursDto>,
}
