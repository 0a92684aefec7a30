//! Route registration

use super::{dto::*, error::Problem, handlers};
use crate::domain::Service;
use axum::{
    extract::{Path, Query},
    routing::{get, post},
    Extension, Json, Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Register all REST routes
pub fn register_routes(router: Router, service: Arc<Service>) -> Router {
    router
        // Field catalog endpoints
        .route("/settings/fields", get(list_fields_handler))
        .route("/settings/fields/{field_id}", get(get_field_handler))
        .route(
            "/settings/fields/{field_id}/validate",
            post(validate_field_handler),
        )
        // Restaurant settings endpoints
        .route(
            "/restaurants/{restaurant}/settings",
            get(get_settings_handler).patch(update_settings_handler),
        )
        .route(
            "/restaurants/{restaurant}/settings/{category}",
            get(get_category_settings_handler).patch(update_category_settings_handler),
        )
        .route("/restaurants/{restaurant}/hours", get(get_hours_handler))
        // Add service as extension for handlers
        .layer(Extension(service))
        .layer(TraceLayer::new_for_http())
}

// ===== Handler wrappers that extract service from Extension =====

async fn list_fields_handler(
    Extension(service): Extension<Arc<Service>>,
    query: Query<FieldsQuery>,
) -> Json<FieldsListResponse> {
    handlers::list_fields(service, query).await
}

async fn get_field_handler(
    Extension(service): Extension<Arc<Service>>,
    path: Path<String>,
) -> Result<Json<FieldDefinitionDto>, Problem> {
    handlers::get_field(service, path).await
}

async fn validate_field_handler(
    Extension(service): Extension<Arc<Service>>,
    path: Path<String>,
    json: Json<ValidateFieldRequest>,
) -> Result<Json<ValidateFieldResponse>, Problem> {
    handlers::validate_field(service, path, json).await
}

async fn get_settings_handler(
    Extension(service): Extension<Arc<Service>>,
    path: Path<String>,
) -> Result<Json<SettingsRecordDto>, Problem> {
    handlers::get_settings(service, path).await
}

async fn update_settings_handler(
    Extension(service): Extension<Arc<Service>>,
    path: Path<String>,
    json: Json<SettingsRecordDto>,
) -> Result<Json<SettingsRecordDto>, Problem> {
    handlers::update_settings(service, path, json).await
}

async fn get_category_settings_handler(
    Extension(service): Extension<Arc<Service>>,
    path: Path<(String, String)>,
) -> Result<Json<SettingsRecordDto>, Problem> {
    handlers::get_category_settings(service, path).await
}

async fn update_category_settings_handler(
    Extension(service): Extension<Arc<Service>>,
    path: Path<(String, String)>,
    json: Json<SettingsRecordDto>,
) -> Result<Json<SettingsRecordDto>, Problem> {
    handlers::update_category_settings(service, path, json).await
}

async fn get_hours_handler(
    Extension(service): Extension<Arc<Service>>,
    path: Path<String>,
) -> Result<Json<HoursResponse>, Problem> {
    handlers::get_hours(service, path).await
}
