//! YAML field catalog loader
//!
//! Lets a deployment replace the built-in catalog, e.g.:
//!
//! ```yaml
//! fields:
//!   - id: phone
//!     label: Phone Number
//!     type: phone
//!     category: contact
//!     required: true
//!     validation:
//!       pattern: '^\(\d{3}\) \d{3}-\d{4}$'
//! ```

use crate::contract::{
    FieldCategory, FieldDefinition, FieldType, FieldValidation, SelectOption,
};
use crate::infra::storage::mapper::setting_value_from_json;
use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogFile {
    fields: Vec<FieldEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FieldEntry {
    id: String,
    label: String,
    #[serde(rename = "type")]
    field_type: String,
    category: String,
    #[serde(default)]
    required: bool,
    #[serde(default = "default_true")]
    editable: bool,
    #[serde(default)]
    validation: Option<ValidationEntry>,
    #[serde(default)]
    options: Vec<OptionEntry>,
    #[serde(default, alias = "defaultValue")]
    default_value: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
struct ValidationEntry {
    pattern: Option<String>,
    #[serde(alias = "min_length")]
    min_length: Option<usize>,
    #[serde(alias = "max_length")]
    max_length: Option<usize>,
    min: Option<f64>,
    max: Option<f64>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct OptionEntry {
    value: String,
    label: String,
}

fn default_true() -> bool {
    true
}

/// Read a catalog file from disk
pub fn load_catalog(path: &Path) -> Result<Vec<FieldDefinition>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read field catalog {}", path.display()))?;
    parse_catalog(&content).with_context(|| format!("invalid field catalog {}", path.display()))
}

/// Parse a catalog from YAML text
pub fn parse_catalog(content: &str) -> Result<Vec<FieldDefinition>> {
    let file: CatalogFile = serde_yaml::from_str(content)?;
    file.fields.into_iter().map(FieldDefinition::try_from).collect()
}

impl TryFrom<FieldEntry> for FieldDefinition {
    type Error = anyhow::Error;

    fn try_from(entry: FieldEntry) -> Result<Self> {
        let field_type = FieldType::parse(&entry.field_type)
            .ok_or_else(|| anyhow!("field {}: unknown type '{}'", entry.id, entry.field_type))?;
        let category = FieldCategory::parse(&entry.category)
            .ok_or_else(|| anyhow!("field {}: unknown category '{}'", entry.id, entry.category))?;
        let default_value = entry
            .default_value
            .map(setting_value_from_json)
            .transpose()
            .with_context(|| format!("field {}: invalid default value", entry.id))?;

        Ok(Self {
            id: entry.id,
            label: entry.label,
            field_type,
            required: entry.required,
            validation: entry.validation.map(|v| FieldValidation {
                pattern: v.pattern,
                min_length: v.min_length,
                max_length: v.max_length,
                min: v.min,
                max: v.max,
            }),
            options: entry
                .options
                .into_iter()
                .map(|o| SelectOption::new(o.value, o.label))
                .collect(),
            default_value,
            editable: entry.editable,
            category,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contract::SettingValue;
    use crate::domain::SettingsRegistry;
    use std::io::Write;

    const CATALOG: &str = r#"
fields:
  - id: name
    label: Restaurant Name
    type: text
    category: general
    required: true
    validation:
      minLength: 2
      max_length: 100
  - id: slug
    label: Slug
    type: text
    category: general
    editable: false
  - id: phone
    label: Phone Number
    type: phone
    category: contact
    required: true
    validation:
      pattern: '^\(\d{3}\) \d{3}-\d{4}$'
  - id: monday_closed
    label: Closed on Monday
    type: boolean
    category: hours
    default_value: false
  - id: price_range
    label: Price Range
    type: select
    category: general
    options:
      - { value: "$", label: "Inexpensive" }
      - { value: "$$", label: "Moderate" }
"#;

    #[test]
    fn test_parse_catalog() {
        let fields = parse_catalog(CATALOG).unwrap();
        assert_eq!(fields.len(), 5);

        let name = &fields[0];
        assert!(name.required);
        let validation = name.validation.as_ref().unwrap();
        assert_eq!(validation.min_length, Some(2));
        assert_eq!(validation.max_length, Some(100));

        assert!(!fields[1].editable);
        assert_eq!(fields[3].default_value, Some(SettingValue::Bool(false)));
        assert_eq!(fields[4].options.len(), 2);
    }

    #[test]
    fn test_parsed_catalog_builds_registry() {
        let registry = SettingsRegistry::new(parse_catalog(CATALOG).unwrap()).unwrap();
        assert!(registry.pattern("phone").unwrap().is_match("(808) 555-0100"));
        assert_eq!(registry.get_editable_fields(Some("general")).len(), 2);
    }

    #[test]
    fn test_unknown_type_rejected() {
        let yaml = "fields:\n  - { id: x, label: X, type: color, category: general }\n";
        let err = parse_catalog(yaml).unwrap_err();
        assert!(err.to_string().contains("unknown type"));
    }

    #[test]
    fn test_unknown_category_rejected() {
        let yaml = "fields:\n  - { id: x, label: X, type: text, category: menu }\n";
        assert!(parse_catalog(yaml).is_err());
    }

    #[test]
    fn test_load_catalog_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(CATALOG.as_bytes()).unwrap();
        let fields = load_catalog(file.path()).unwrap();
        assert_eq!(fields[2].id, "phone");
    }

    #[test]
    fn test_catalog_dumped_from_rest_api_loads() {
        use crate::api::rest::dto::FieldDefinitionDto;

        let registry = SettingsRegistry::restaurant_defaults().unwrap();
        let items: Vec<FieldDefinitionDto> =
            registry.fields().iter().map(FieldDefinitionDto::from).collect();
        let dump = serde_json::json!({ "fields": items }).to_string();
        assert!(dump.contains("defaultValue"));

        let fields = parse_catalog(&dump).unwrap();
        assert_eq!(fields.len(), registry.fields().len());
        for (loaded, original) in fields.iter().zip(registry.fields()) {
            assert_eq!(loaded.id, original.id);
            assert_eq!(loaded.field_type, original.field_type);
            assert_eq!(loaded.editable, original.editable);
            assert_eq!(loaded.default_value, original.default_value, "{}", loaded.id);
        }
    }
}
