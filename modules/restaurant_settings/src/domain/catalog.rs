//! Built-in restaurant field catalog
//!
//! Declaration order matters: it is the order of `get_editable_fields` and of
//! the admin forms (general, contact, hours, social).

use crate::contract::{
    FieldCategory, FieldDefinition, FieldType, FieldValidation, SelectOption, SettingValue,
};

pub const US_PHONE_PATTERN: &str = r"^\(\d{3}\) \d{3}-\d{4}$";
pub const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";
pub const TIME_PATTERN: &str = r"^([01]\d|2[0-3]):[0-5]\d$";
pub const URL_PATTERN: &str = r"^https?://\S+$";
pub const ZIP_CODE_PATTERN: &str = r"^\d{5}(-\d{4})?$";

/// Week days in display order: (field prefix, display name)
pub const WEEK_DAYS: [(&str, &str); 7] = [
    ("monday", "Monday"),
    ("tuesday", "Tuesday"),
    ("wednesday", "Wednesday"),
    ("thursday", "Thursday"),
    ("friday", "Friday"),
    ("saturday", "Saturday"),
    ("sunday", "Sunday"),
];

impl FieldDefinition {
    /// Editable, optional field without constraints
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        field_type: FieldType,
        category: FieldCategory,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            field_type,
            required: false,
            validation: None,
            options: Vec::new(),
            default_value: None,
            editable: true,
            category,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn read_only(mut self) -> Self {
        self.editable = false;
        self
    }

    pub fn default_value(mut self, value: impl Into<SettingValue>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    pub fn options(mut self, options: &[(&str, &str)]) -> Self {
        self.options = options
            .iter()
            .map(|(value, label)| SelectOption::new(*value, *label))
            .collect();
        self
    }

    pub fn pattern(mut self, pattern: &str) -> Self {
        self.validation_mut().pattern = Some(pattern.to_string());
        self
    }

    pub fn length(mut self, min: Option<usize>, max: Option<usize>) -> Self {
        let validation = self.validation_mut();
        validation.min_length = min;
        validation.max_length = max;
        self
    }

    pub fn range(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        let validation = self.validation_mut();
        validation.min = min;
        validation.max = max;
        self
    }

    fn validation_mut(&mut self) -> &mut FieldValidation {
        self.validation.get_or_insert_with(FieldValidation::default)
    }
}

/// The catalog shared by every restaurant storefront
pub fn restaurant_fields() -> Vec<FieldDefinition> {
    use FieldCategory::*;
    use FieldType::*;

    let mut fields = vec![
        // General
        FieldDefinition::new("restaurant_slug", "Restaurant Slug", Text, General).read_only(),
        FieldDefinition::new("name", "Restaurant Name", Text, General)
            .required()
            .length(Some(2), Some(100)),
        FieldDefinition::new("tagline", "Tagline", Text, General).length(None, Some(120)),
        FieldDefinition::new("description", "Description", Textarea, General)
            .length(None, Some(1000)),
        FieldDefinition::new("cuisine_type", "Cuisine Type", Select, General).options(&[
            ("american", "American"),
            ("hawaiian", "Hawaiian"),
            ("french", "French"),
            ("italian", "Italian"),
            ("japanese", "Japanese"),
            ("seafood", "Seafood"),
            ("wine_bar", "Wine Bar"),
            ("other", "Other"),
        ]),
        FieldDefinition::new("price_range", "Price Range", Select, General)
            .options(&[
                ("$", "$ - Inexpensive"),
                ("$$", "$$ - Moderate"),
                ("$$$", "$$$ - Expensive"),
                ("$$$$", "$$$$ - Very Expensive"),
            ])
            .default_value("$$"),
        FieldDefinition::new("seating_capacity", "Seating Capacity", Number, General)
            .range(Some(1.0), Some(1000.0)),
        FieldDefinition::new("reservations_enabled", "Accept Reservations", Boolean, General)
            .default_value(true),
        // Contact
        FieldDefinition::new("phone", "Phone Number", Phone, Contact)
            .required()
            .pattern(US_PHONE_PATTERN),
        FieldDefinition::new("email", "Email Address", Email, Contact)
            .required()
            .pattern(EMAIL_PATTERN),
        FieldDefinition::new("address", "Street Address", Text, Contact)
            .required()
            .length(None, Some(200)),
        FieldDefinition::new("city", "City", Text, Contact)
            .required()
            .length(None, Some(100))
            .default_value("New York"),
        FieldDefinition::new("state", "State", Text, Contact)
            .length(Some(2), Some(2))
            .default_value("NY"),
        FieldDefinition::new("zip_code", "ZIP Code", Text, Contact).pattern(ZIP_CODE_PATTERN),
        FieldDefinition::new("website", "Website", Url, Contact).pattern(URL_PATTERN),
        FieldDefinition::new("reservation_url", "Reservation Link", Url, Contact)
            .pattern(URL_PATTERN),
    ];

    // Hours
    for (day, name) in WEEK_DAYS {
        let weekend = matches!(day, "friday" | "saturday");
        fields.push(
            FieldDefinition::new(format!("{day}_open"), format!("{name} Opening Time"), Time, Hours)
                .pattern(TIME_PATTERN)
                .default_value("17:00"),
        );
        fields.push(
            FieldDefinition::new(format!("{day}_close"), format!("{name} Closing Time"), Time, Hours)
                .pattern(TIME_PATTERN)
                .default_value(if weekend { "23:00" } else { "22:00" }),
        );
        fields.push(
            FieldDefinition::new(format!("{day}_closed"), format!("Closed on {name}"), Boolean, Hours)
                .default_value(false),
        );
    }
    fields.push(
        FieldDefinition::new("timezone", "Timezone", Select, Hours)
            .read_only()
            .options(&[
                ("America/New_York", "Eastern Time"),
                ("Pacific/Honolulu", "Hawaii Time"),
            ])
            .default_value("America/New_York"),
    );

    // Social
    fields.extend([
        FieldDefinition::new("instagram", "Instagram", Url, Social)
            .pattern(r"^https://(www\.)?instagram\.com/[A-Za-z0-9_.]+/?$"),
        FieldDefinition::new("facebook", "Facebook", Url, Social)
            .pattern(r"^https://(www\.)?facebook\.com/[A-Za-z0-9_.\-]+/?$"),
        FieldDefinition::new("twitter", "Twitter / X", Url, Social)
            .pattern(r"^https://(www\.)?(twitter|x)\.com/[A-Za-z0-9_]+/?$"),
        FieldDefinition::new("tiktok", "TikTok", Url, Social)
            .pattern(r"^https://(www\.)?tiktok\.com/@[A-Za-z0-9_.]+/?$"),
        FieldDefinition::new("opentable_id", "OpenTable Restaurant ID", Text, Social)
            .length(None, Some(40)),
    ]);

    fields
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_ids_are_unique() {
        let fields = restaurant_fields();
        let ids: HashSet<_> = fields.iter().map(|f| f.id.as_str()).collect();
        assert_eq!(ids.len(), fields.len());
    }

    #[test]
    fn test_categories_are_declared_in_order() {
        let fields = restaurant_fields();
        let rank = |c: FieldCategory| FieldCategory::ALL.iter().position(|x| *x == c);
        assert!(fields
            .windows(2)
            .all(|w| rank(w[0].category) <= rank(w[1].category)));
    }

    #[test]
    fn test_every_day_has_three_hours_fields() {
        let fields = restaurant_fields();
        for (day, _) in WEEK_DAYS {
            for suffix in ["open", "close", "closed"] {
                let id = format!("{day}_{suffix}");
                let field = fields.iter().find(|f| f.id == id);
                assert!(field.is_some(), "missing {id}");
                assert_eq!(field.map(|f| f.category), Some(FieldCategory::Hours));
            }
        }
    }
}
