//! HTTP request handlers - thin layer that delegates to domain service

use super::{
    dto::*,
    error::{map_domain_error, Problem},
    mapper::{record_from_dto, record_to_dto, value_from_json},
};
use crate::domain::Service;
use axum::{
    extract::{Path, Query},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

// ===== Field Catalog Handlers =====

/// List editable fields, optionally of one category
pub async fn list_fields(
    service: Arc<Service>,
    Query(query): Query<FieldsQuery>,
) -> Json<FieldsListResponse> {
    let items: Vec<FieldDefinitionDto> = service
        .registry()
        .get_editable_fields(query.category.as_deref())
        .into_iter()
        .map(FieldDefinitionDto::from)
        .collect();
    let total = items.len();

    Json(FieldsListResponse { items, total })
}

/// Get one field definition
pub async fn get_field(
    service: Arc<Service>,
    Path(field_id): Path<String>,
) -> Result<Json<FieldDefinitionDto>, Problem> {
    service
        .registry()
        .get_field_config(&field_id)
        .map(|field| Json(field.into()))
        .ok_or_else(|| field_not_found(&field_id))
}

/// Validate a single value without writing it
pub async fn validate_field(
    service: Arc<Service>,
    Path(field_id): Path<String>,
    Json(req): Json<ValidateFieldRequest>,
) -> Result<Json<ValidateFieldResponse>, Problem> {
    if service.registry().get_field_config(&field_id).is_none() {
        return Err(field_not_found(&field_id));
    }
    let value = value_from_json(&field_id, req.value).map_err(map_domain_error)?;
    let error = service.validate_field(&field_id, &value);

    Ok(Json(ValidateFieldResponse {
        valid: error.is_none(),
        error,
    }))
}

fn field_not_found(field_id: &str) -> Problem {
    Problem::new(StatusCode::NOT_FOUND, "Field Not Found")
        .with_detail(format!("Field '{field_id}' was not found"))
}

// ===== Settings Handlers =====

/// Full settings record of a restaurant
pub async fn get_settings(
    service: Arc<Service>,
    Path(restaurant): Path<String>,
) -> Result<Json<SettingsRecordDto>, Problem> {
    let record = service
        .get_settings(&restaurant)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(record_to_dto(&record)))
}

/// All-or-nothing batch update
pub async fn update_settings(
    service: Arc<Service>,
    Path(restaurant): Path<String>,
    Json(body): Json<SettingsRecordDto>,
) -> Result<Json<SettingsRecordDto>, Problem> {
    let changes = record_from_dto(body).map_err(map_domain_error)?;
    let record = service
        .update_settings(&restaurant, changes)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(record_to_dto(&record)))
}

/// Editable settings of one category
pub async fn get_category_settings(
    service: Arc<Service>,
    Path((restaurant, category)): Path<(String, String)>,
) -> Result<Json<SettingsRecordDto>, Problem> {
    let record = service
        .get_settings_by_category(&restaurant, &category)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(record_to_dto(&record)))
}

/// Category-scoped update; fields of other categories are ignored
pub async fn update_category_settings(
    service: Arc<Service>,
    Path((restaurant, category)): Path<(String, String)>,
    Json(mut body): Json<SettingsRecordDto>,
) -> Result<Json<SettingsRecordDto>, Problem> {
    // Foreign keys are dropped before their values are converted
    body.retain(|field_id, _| service.registry().is_in_category(field_id, &category));
    let changes = record_from_dto(body).map_err(map_domain_error)?;
    let record = service
        .update_settings_by_category(&restaurant, &category, changes)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(record_to_dto(&record)))
}

/// Opening hours formatted for display
pub async fn get_hours(
    service: Arc<Service>,
    Path(restaurant): Path<String>,
) -> Result<Json<HoursResponse>, Problem> {
    let hours = service
        .hours_for_display(&restaurant)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(HoursResponse {
        restaurant,
        hours: hours.into_iter().map(DayHoursDto::from).collect(),
    }))
}
