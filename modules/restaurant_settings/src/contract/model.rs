//! Contract models for restaurant settings
//!
//! These models are transport-agnostic and used for inter-module communication.
//! NO serde derives - these are pure domain models.

use indexmap::IndexMap;

/// Grouping label used to scope reads and writes to a subset of fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldCategory {
    General,
    Contact,
    Hours,
    Social,
}

impl FieldCategory {
    /// All categories in catalog declaration order
    pub const ALL: [FieldCategory; 4] = [
        FieldCategory::General,
        FieldCategory::Contact,
        FieldCategory::Hours,
        FieldCategory::Social,
    ];

    /// Wire name of the category (`general`, `contact`, `hours`, `social`)
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Contact => "contact",
            Self::Hours => "hours",
            Self::Social => "social",
        }
    }

    /// Parse a wire name. Unknown names yield `None`.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == value)
    }
}

impl std::fmt::Display for FieldCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Descriptive input type of a field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldType {
    Text,
    Email,
    Phone,
    Url,
    Textarea,
    Time,
    Select,
    Boolean,
    Number,
}

impl FieldType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Url => "url",
            Self::Textarea => "textarea",
            Self::Time => "time",
            Self::Select => "select",
            Self::Boolean => "boolean",
            Self::Number => "number",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        [
            Self::Text,
            Self::Email,
            Self::Phone,
            Self::Url,
            Self::Textarea,
            Self::Time,
            Self::Select,
            Self::Boolean,
            Self::Number,
        ]
        .into_iter()
        .find(|t| t.as_str() == value)
    }
}

/// Declared constraints for a field value. Absent constraints are not checked.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldValidation {
    /// Regex the value must match (string values only)
    pub pattern: Option<String>,
    /// Minimum length in characters (string values only)
    pub min_length: Option<usize>,
    /// Maximum length in characters (string values only)
    pub max_length: Option<usize>,
    /// Minimum numeric value (number values only)
    pub min: Option<f64>,
    /// Maximum numeric value (number values only)
    pub max: Option<f64>,
}

impl FieldValidation {
    pub fn is_empty(&self) -> bool {
        self.pattern.is_none()
            && self.min_length.is_none()
            && self.max_length.is_none()
            && self.min.is_none()
            && self.max.is_none()
    }
}

/// One allowed choice of a select field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Static definition of a single named, typed setting
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDefinition {
    /// Unique key (e.g. `monday_open`, `phone`)
    pub id: String,
    /// Human-readable name, used in error messages
    pub label: String,
    pub field_type: FieldType,
    pub required: bool,
    pub validation: Option<FieldValidation>,
    /// Choices for select fields (not enforced as a closed set)
    pub options: Vec<SelectOption>,
    /// UI hint; also used to seed a restaurant's first record
    pub default_value: Option<SettingValue>,
    /// Whether external callers may write the field
    pub editable: bool,
    pub category: FieldCategory,
}

/// Value stored for a field
#[derive(Debug, Clone, PartialEq)]
pub enum SettingValue {
    /// Absent value; merging it removes the field from the record
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
}

impl SettingValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl From<&str> for SettingValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for SettingValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<bool> for SettingValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for SettingValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i64> for SettingValue {
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

/// Flat mapping from field id to value, one per restaurant.
///
/// Keeps insertion order so batch validation reports failures in the order
/// the caller submitted them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SettingsRecord {
    values: IndexMap<String, SettingValue>,
}

impl SettingsRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field_id: &str) -> Option<&SettingValue> {
        self.values.get(field_id)
    }

    pub fn contains(&self, field_id: &str) -> bool {
        self.values.contains_key(field_id)
    }

    pub fn insert(&mut self, field_id: impl Into<String>, value: impl Into<SettingValue>) {
        self.values.insert(field_id.into(), value.into());
    }

    /// Builder-style insert
    pub fn with(mut self, field_id: impl Into<String>, value: impl Into<SettingValue>) -> Self {
        self.insert(field_id, value);
        self
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &SettingValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Shallow key-wise overwrite. `Null` values remove the key.
    pub fn merge(&mut self, changes: &SettingsRecord) {
        for (field_id, value) in changes.iter() {
            if value.is_null() {
                self.values.shift_remove(field_id);
            } else {
                self.values.insert(field_id.to_string(), value.clone());
            }
        }
    }

    /// Keep only the entries accepted by `keep`
    pub fn filtered(&self, mut keep: impl FnMut(&str) -> bool) -> SettingsRecord {
        self.values
            .iter()
            .filter(|(k, _)| keep(k))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }
}

impl FromIterator<(String, SettingValue)> for SettingsRecord {
    fn from_iter<T: IntoIterator<Item = (String, SettingValue)>>(iter: T) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

/// One formatted line of the opening hours display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayHours {
    /// Capitalized day name (`Monday` .. `Sunday`)
    pub day: String,
    /// `Closed` or `<h>:<mm> AM|PM - <h>:<mm> AM|PM`
    pub hours: String,
}
