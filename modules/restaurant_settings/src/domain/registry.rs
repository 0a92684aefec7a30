//! Field catalog registry
//!
//! Answers questions about fields without looking at any stored values. The
//! catalog is immutable once built, so a registry can be shared freely
//! between tasks behind an `Arc`.

use crate::contract::{FieldCategory, FieldDefinition};
use anyhow::{bail, Context, Result};
use regex::Regex;
use std::collections::HashMap;

/// Registry over a static field catalog
#[derive(Debug)]
pub struct SettingsRegistry {
    fields: Vec<FieldDefinition>,
    /// field id -> index into `fields`
    index: HashMap<String, usize>,
    /// field id -> compiled `validation.pattern`
    patterns: HashMap<String, Regex>,
}

impl SettingsRegistry {
    /// Build a registry from a catalog.
    ///
    /// Fails on duplicate field ids or an invalid validation pattern.
    pub fn new(fields: Vec<FieldDefinition>) -> Result<Self> {
        let mut index = HashMap::with_capacity(fields.len());
        let mut patterns = HashMap::new();

        for (position, field) in fields.iter().enumerate() {
            if index.insert(field.id.clone(), position).is_some() {
                bail!("duplicate field id in catalog: {}", field.id);
            }
            if let Some(pattern) = field.validation.as_ref().and_then(|v| v.pattern.as_deref()) {
                let regex = Regex::new(pattern)
                    .with_context(|| format!("invalid pattern for field {}", field.id))?;
                patterns.insert(field.id.clone(), regex);
            }
        }

        tracing::debug!(fields = fields.len(), "settings registry built");
        Ok(Self {
            fields,
            index,
            patterns,
        })
    }

    /// Registry over the built-in restaurant catalog
    pub fn restaurant_defaults() -> Result<Self> {
        Self::new(super::catalog::restaurant_fields())
    }

    /// Editable fields, in catalog order.
    ///
    /// With a category, only that category's editable fields. An unknown
    /// category yields an empty list.
    pub fn get_editable_fields(&self, category: Option<&str>) -> Vec<&FieldDefinition> {
        let wanted = match category {
            None => None,
            Some(name) => match FieldCategory::parse(name) {
                Some(c) => Some(c),
                None => return Vec::new(),
            },
        };

        self.fields
            .iter()
            .filter(|f| f.editable)
            .filter(|f| wanted.map_or(true, |c| f.category == c))
            .collect()
    }

    /// Look up any field, read-only ones included
    pub fn get_field_config(&self, field_id: &str) -> Option<&FieldDefinition> {
        self.index.get(field_id).map(|&i| &self.fields[i])
    }

    /// Unknown fields are reported as not editable
    pub fn is_field_editable(&self, field_id: &str) -> bool {
        self.get_field_config(field_id)
            .map(|f| f.editable)
            .unwrap_or(false)
    }

    /// Whether `field_id` is a known field of `category`
    pub fn is_in_category(&self, field_id: &str, category: &str) -> bool {
        let Some(wanted) = FieldCategory::parse(category) else {
            return false;
        };
        self.get_field_config(field_id)
            .is_some_and(|f| f.category == wanted)
    }

    /// Compiled pattern of a field, if it declares one
    pub fn pattern(&self, field_id: &str) -> Option<&Regex> {
        self.patterns.get(field_id)
    }

    /// Whole catalog in declaration order
    pub fn fields(&self) -> &[FieldDefinition] {
        &self.fields
    }
}
