//! Contract error types for restaurant settings
//!
//! These errors are transport-agnostic and used for inter-module communication.
//! Messages are already human-readable and are shown to admin users as-is.

/// Restaurant settings errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    /// Update referenced a field that is unknown or read-only
    #[error("Field {field} is not editable")]
    NotEditable {
        /// Field id as submitted
        field: String,
    },

    /// A field value failed its required/pattern/length/range check
    #[error("{message}")]
    Validation {
        /// First validation failure of the batch
        message: String,
    },

    /// Restaurant is not served by this instance
    #[error("Restaurant not found: {restaurant}")]
    UnknownRestaurant { restaurant: String },

    /// Submitted value has a shape settings cannot hold (array, object)
    #[error("Field {field} has an unsupported value type")]
    UnsupportedValue { field: String },

    /// Storage backend failure
    #[error("Settings storage error: {0}")]
    Storage(String),
}

impl SettingsError {
    pub fn not_editable(field: impl Into<String>) -> Self {
        Self::NotEditable {
            field: field.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }
}

impl From<anyhow::Error> for SettingsError {
    fn from(e: anyhow::Error) -> Self {
        Self::Storage(format!("{e:#}"))
    }
}
