//! Service CRUD handlers

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};

use crate::api::dto::{
    CreateServiceRequest, MessageResponse, ServiceDto, UpdateServiceRequest,
};
use crate::api::error::ApiError;
use crate::api::validated_json::ValidatedJson;
use crate::infrastructure::Storage;

/// Shared state for service routes
#[derive(Clone)]
pub struct AppState {
    pub storage: Arc<dyn Storage>,
}

/// List all services
///
/// Soft-deleted records are excluded; the order is whatever storage
/// returns and is not guaranteed stable.
#[utoipa::path(
    get,
    path = "/api/services",
    tag = "Services",
    responses(
        (status = 200, description = "All non-deleted services", body = Vec<ServiceDto>),
        (status = 401, description = "Missing or invalid token")
    ),
    security(("bearer_auth" = []))
)]
pub async fn list_services(
    State(state): State<AppState>,
) -> Result<Json<Vec<ServiceDto>>, ApiError> {
    let services = state.storage.list_services().await?;
    Ok(Json(services.into_iter().map(Into::into).collect()))
}

/// Create a new service record
///
/// The identifier and timestamps are assigned server-side.
#[utoipa::path(
    post,
    path = "/api/services",
    tag = "Services",
    request_body = CreateServiceRequest,
    responses(
        (status = 200, description = "Created record", body = ServiceDto),
        (status = 401, description = "Missing or invalid token"),
        (status = 422, description = "Missing or malformed required fields")
    ),
    security(("bearer_auth" = []))
)]
pub async fn create_service(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateServiceRequest>,
) -> Result<Json<ServiceDto>, ApiError> {
    let service = request.into_service();
    state.storage.insert_service(service.clone()).await?;
    Ok(Json(service.into()))
}

/// Fetch one service by identifier
#[utoipa::path(
    get,
    path = "/api/services/{id}",
    tag = "Services",
    params(
        ("id" = String, Path, description = "Service identifier")
    ),
    responses(
        (status = 200, description = "The record", body = ServiceDto),
        (status = 401, description = "Missing or invalid token"),
        (status = 404, description = "Unknown or deleted identifier")
    ),
    security(("bearer_auth" = []))
)]
pub async fn get_service(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ServiceDto>, ApiError> {
    match state.storage.get_service(&id).await? {
        Some(service) => Ok(Json(service.into())),
        None => Err(ApiError::NotFound("Service not found".to_string())),
    }
}

/// Partially update a service
///
/// Only fields present and non-null in the body are applied; everything
/// else keeps its stored value. `updated_at` is always refreshed.
#[utoipa::path(
    put,
    path = "/api/services/{id}",
    tag = "Services",
    params(
        ("id" = String, Path, description = "Service identifier")
    ),
    request_body = UpdateServiceRequest,
    responses(
        (status = 200, description = "Full post-update record", body = ServiceDto),
        (status = 401, description = "Missing or invalid token"),
        (status = 404, description = "Unknown or deleted identifier")
    ),
    security(("bearer_auth" = []))
)]
pub async fn update_service(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdateServiceRequest>,
) -> Result<Json<ServiceDto>, ApiError> {
    let service = state.storage.update_service(&id, request.into_patch()).await?;
    Ok(Json(service.into()))
}

/// Soft-delete a service
///
/// The record stays in storage but disappears from every read path.
#[utoipa::path(
    delete,
    path = "/api/services/{id}",
    tag = "Services",
    params(
        ("id" = String, Path, description = "Service identifier")
    ),
    responses(
        (status = 200, description = "Deletion confirmation", body = MessageResponse),
        (status = 401, description = "Missing or invalid token"),
        (status = 404, description = "Unknown or already deleted identifier")
    ),
    security(("bearer_auth" = []))
)]
pub async fn delete_service(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.storage.soft_delete_service(&id).await?;
    Ok(Json(MessageResponse::new("Service deleted successfully")))
}

// ── Tests ──────────────────────────────────────────────────────
