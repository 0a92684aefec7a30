//! Field-level validation of setting values
//!
//! Checks run in a fixed order and only the first failure is reported:
//! required, pattern, min length, max length, min, max.

use crate::contract::{FieldDefinition, FieldType, SettingValue};
use regex::Regex;

/// Whether a value counts as missing for the required check.
///
/// `false` is a real answer for boolean fields, so it only counts as missing
/// on other field types.
pub fn is_missing(field_type: FieldType, value: &SettingValue) -> bool {
    match value {
        SettingValue::Null => true,
        SettingValue::Text(s) => s.is_empty(),
        SettingValue::Bool(b) => !b && field_type != FieldType::Boolean,
        SettingValue::Number(_) => false,
    }
}

/// Validate one value against its field definition.
///
/// `pattern` is the compiled form of `field.validation.pattern`. Pattern and
/// length constraints only apply to string values; range constraints only to
/// numbers. Other value kinds pass those checks untouched.
pub fn validate_value(
    field: &FieldDefinition,
    pattern: Option<&Regex>,
    value: &SettingValue,
) -> Option<String> {
    let missing = is_missing(field.field_type, value);
    if field.required && missing {
        return Some(format!("{} is required", field.label));
    }
    if missing {
        return None;
    }

    let validation = field.validation.as_ref()?;

    if let SettingValue::Text(text) = value {
        if let Some(regex) = pattern {
            if !regex.is_match(text) {
                return Some(format!("{} format is invalid", field.label));
            }
        }

        let length = text.chars().count();
        if let Some(min_length) = validation.min_length {
            if length < min_length {
                return Some(format!(
                    "{} must be at least {} characters",
                    field.label, min_length
                ));
            }
        }
        if let Some(max_length) = validation.max_length {
            if length > max_length {
                return Some(format!(
                    "{} must be no more than {} characters",
                    field.label, max_length
                ));
            }
        }
    }

    if let SettingValue::Number(number) = value {
        if let Some(min) = validation.min {
            if *number < min {
                return Some(format!("{} must be at least {}", field.label, min));
            }
        }
        if let Some(max) = validation.max {
            if *number > max {
                return Some(format!("{} must be no more than {}", field.label, max));
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contract::FieldCategory;
    use crate::domain::catalog::US_PHONE_PATTERN;

    fn phone() -> (FieldDefinition, Regex) {
        let field = FieldDefinition::new("phone", "Phone Number", FieldType::Phone, FieldCategory::Contact)
            .required()
            .pattern(US_PHONE_PATTERN);
        (field, Regex::new(US_PHONE_PATTERN).unwrap())
    }

    #[test]
    fn test_required_empty_string() {
        let (field, regex) = phone();
        assert_eq!(
            validate_value(&field, Some(&regex), &"".into()),
            Some("Phone Number is required".to_string())
        );
        assert_eq!(
            validate_value(&field, Some(&regex), &SettingValue::Null),
            Some("Phone Number is required".to_string())
        );
    }

    #[test]
    fn test_required_takes_precedence_over_pattern() {
        let field = FieldDefinition::new("code", "Code", FieldType::Text, FieldCategory::General)
            .required()
            .pattern(r"^\d+$")
            .length(Some(3), None);
        let regex = Regex::new(r"^\d+$").unwrap();
        assert_eq!(
            validate_value(&field, Some(&regex), &"".into()),
            Some("Code is required".to_string())
        );
    }

    #[test]
    fn test_pattern_mismatch_and_match() {
        let (field, regex) = phone();
        assert_eq!(
            validate_value(&field, Some(&regex), &"123-456-7890".into()),
            Some("Phone Number format is invalid".to_string())
        );
        assert_eq!(validate_value(&field, Some(&regex), &"(212) 555-9999".into()), None);
    }

    #[test]
    fn test_pattern_skipped_for_non_strings() {
        let field = FieldDefinition::new("count", "Count", FieldType::Number, FieldCategory::General)
            .pattern(r"^[a-z]+$");
        let regex = Regex::new(r"^[a-z]+$").unwrap();
        assert_eq!(validate_value(&field, Some(&regex), &SettingValue::Number(42.0)), None);
        assert_eq!(validate_value(&field, Some(&regex), &SettingValue::Bool(true)), None);
    }

    #[test]
    fn test_pattern_checked_before_length() {
        let field = FieldDefinition::new("zip", "ZIP Code", FieldType::Text, FieldCategory::Contact)
            .pattern(r"^\d+$")
            .length(Some(5), None);
        let regex = Regex::new(r"^\d+$").unwrap();
        assert_eq!(
            validate_value(&field, Some(&regex), &"ab".into()),
            Some("ZIP Code format is invalid".to_string())
        );
        assert_eq!(
            validate_value(&field, Some(&regex), &"12".into()),
            Some("ZIP Code must be at least 5 characters".to_string())
        );
    }

    #[test]
    fn test_length_limits() {
        let field = FieldDefinition::new("name", "Restaurant Name", FieldType::Text, FieldCategory::General)
            .required()
            .length(Some(2), Some(5));
        assert_eq!(
            validate_value(&field, None, &"x".into()),
            Some("Restaurant Name must be at least 2 characters".to_string())
        );
        assert_eq!(
            validate_value(&field, None, &"abcdef".into()),
            Some("Restaurant Name must be no more than 5 characters".to_string())
        );
        // Counted in characters, not bytes
        assert_eq!(validate_value(&field, None, &"Pāvé".into()), None);
    }

    #[test]
    fn test_numeric_range() {
        let field = FieldDefinition::new("seats", "Seating Capacity", FieldType::Number, FieldCategory::General)
            .range(Some(1.0), Some(1000.0));
        assert_eq!(
            validate_value(&field, None, &SettingValue::Number(0.0)),
            Some("Seating Capacity must be at least 1".to_string())
        );
        assert_eq!(
            validate_value(&field, None, &SettingValue::Number(1200.0)),
            Some("Seating Capacity must be no more than 1000".to_string())
        );
        assert_eq!(validate_value(&field, None, &SettingValue::Number(80.0)), None);
    }

    #[test]
    fn test_false_is_present_only_for_booleans() {
        let flag = FieldDefinition::new("open", "Open", FieldType::Boolean, FieldCategory::Hours).required();
        assert_eq!(validate_value(&flag, None, &SettingValue::Bool(false)), None);

        let text = FieldDefinition::new("name", "Restaurant Name", FieldType::Text, FieldCategory::General)
            .required();
        assert_eq!(
            validate_value(&text, None, &SettingValue::Bool(false)),
            Some("Restaurant Name is required".to_string())
        );
    }

    #[test]
    fn test_optional_empty_value_skips_constraints() {
        let field = FieldDefinition::new("website", "Website", FieldType::Url, FieldCategory::Contact)
            .pattern(r"^https?://");
        let regex = Regex::new(r"^https?://").unwrap();
        assert_eq!(validate_value(&field, Some(&regex), &"".into()), None);
    }
}
