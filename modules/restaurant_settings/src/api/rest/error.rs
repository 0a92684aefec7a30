//! HTTP error mapping to RFC-9457 Problem Details

use crate::contract::SettingsError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// RFC-9457 Problem Details for HTTP API errors
#[derive(Debug, Serialize, Deserialize)]
pub struct Problem {
    /// A URI reference that identifies the problem type
    #[serde(rename = "type")]
    pub type_uri: String,

    /// A short, human-readable summary of the problem type
    pub title: String,

    /// The HTTP status code
    pub status: u16,

    /// A human-readable explanation specific to this occurrence
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,

    /// A URI reference that identifies the specific occurrence
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance: Option<String>,
}

impl Problem {
    /// Create a new Problem Details response
    pub fn new(status: StatusCode, title: impl Into<String>) -> Self {
        Self {
            type_uri: format!("https://httpstatuses.io/{}", status.as_u16()),
            title: title.into(),
            status: status.as_u16(),
            detail: None,
            instance: None,
        }
    }

    /// Add detail message
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// Add instance URI
    pub fn with_instance(mut self, instance: impl Into<String>) -> Self {
        self.instance = Some(instance.into());
        self
    }
}

impl IntoResponse for Problem {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let mut response = (status, Json(self)).into_response();
        response.headers_mut().insert(
            axum::http::header::CONTENT_TYPE,
            axum::http::HeaderValue::from_static("application/problem+json"),
        );
        response
    }
}

/// Map domain errors to HTTP Problem Details
pub fn map_domain_error(error: SettingsError) -> Problem {
    let detail = error.to_string();
    match error {
        SettingsError::NotEditable { .. } => {
            Problem::new(StatusCode::FORBIDDEN, "Field Not Editable").with_detail(detail)
        }

        SettingsError::Validation { .. } => {
            Problem::new(StatusCode::UNPROCESSABLE_ENTITY, "Validation Error").with_detail(detail)
        }

        SettingsError::UnsupportedValue { .. } => {
            Problem::new(StatusCode::BAD_REQUEST, "Unsupported Value").with_detail(detail)
        }

        SettingsError::UnknownRestaurant { restaurant } => {
            Problem::new(StatusCode::NOT_FOUND, "Restaurant Not Found")
                .with_detail(detail)
                .with_instance(format!("/restaurants/{restaurant}"))
        }

        SettingsError::Storage(reason) => {
            tracing::error!(error = %reason, "settings storage failure");
            Problem::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
                .with_detail("An unexpected error occurred")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (SettingsError::not_editable("timezone"), 403),
            (SettingsError::validation("Phone Number is required"), 422),
            (
                SettingsError::UnsupportedValue {
                    field: "name".into(),
                },
                400,
            ),
            (
                SettingsError::UnknownRestaurant {
                    restaurant: "ghost".into(),
                },
                404,
            ),
            (SettingsError::Storage("disk full".into()), 500),
        ];

        for (error, status) in cases {
            assert_eq!(map_domain_error(error).status, status);
        }
    }

    #[test]
    fn test_validation_detail_is_message() {
        let problem = map_domain_error(SettingsError::validation("Email Address format is invalid"));
        assert_eq!(problem.detail.as_deref(), Some("Email Address format is invalid"));
    }

    #[test]
    fn test_storage_detail_not_leaked() {
        let problem = map_domain_error(SettingsError::Storage("password=secret".into()));
        assert!(!problem.detail.unwrap_or_default().contains("secret"));
    }
}
