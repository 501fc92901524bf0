use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::address_sessions::dtos::{AddressSessionResponseDto, SelectRegionRequestDto};
use crate::features::address_sessions::services::AddressSessionService;
use crate::features::regions::models::RegionLevel;
use crate::shared::types::ApiResponse;

/// Start a new address session
///
/// The province list starts loading immediately; poll the session to see it arrive.
#[utoipa::path(
    post,
    path = "/api/address-sessions",
    responses(
        (status = 201, description = "Session created", body = ApiResponse<AddressSessionResponseDto>)
    ),
    tag = "address-sessions"
)]
pub async fn create_session(
    State(service): State<Arc<AddressSessionService>>,
) -> Result<(StatusCode, Json<ApiResponse<AddressSessionResponseDto>>)> {
    let snapshot = service.create().await;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(Some(snapshot), None, None)),
    ))
}

/// Get the current state of an address session
#[utoipa::path(
    get,
    path = "/api/address-sessions/{id}",
    params(
        ("id" = Uuid, Path, description = "Session ID")
    ),
    responses(
        (status = 200, description = "Session retrieved", body = ApiResponse<AddressSessionResponseDto>),
        (status = 404, description = "Session not found")
    ),
    tag = "address-sessions"
)]
pub async fn get_session(
    State(service): State<Arc<AddressSessionService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<AddressSessionResponseDto>>> {
    let snapshot = service.get(id).await?;
    Ok(Json(ApiResponse::success(Some(snapshot), None, None)))
}

/// Select (or clear) the region at one level
///
/// Every level below the selected one is cleared. Lists that became
/// necessary start loading in the background.
#[utoipa::path(
    put,
    path = "/api/address-sessions/{id}/selection",
    params(
        ("id" = Uuid, Path, description = "Session ID")
    ),
    request_body = SelectRegionRequestDto,
    responses(
        (status = 200, description = "Selection applied", body = ApiResponse<AddressSessionResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Session not found"),
        (status = 409, description = "Parent level not selected")
    ),
    tag = "address-sessions"
)]
pub async fn select_region(
    State(service): State<Arc<AddressSessionService>>,
    Path(id): Path<Uuid>,
    AppJson(dto): AppJson<SelectRegionRequestDto>,
) -> Result<Json<ApiResponse<AddressSessionResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let snapshot = service.select(id, dto.level, dto.region_id).await?;
    Ok(Json(ApiResponse::success(
        Some(snapshot),
        Some("Selection applied".to_string()),
        None,
    )))
}

/// Retry loading a level whose list failed
#[utoipa::path(
    post,
    path = "/api/address-sessions/{id}/levels/{level}/retry",
    params(
        ("id" = Uuid, Path, description = "Session ID"),
        ("level" = String, Path, description = "province, regency (or city), district or village")
    ),
    responses(
        (status = 200, description = "Retry started", body = ApiResponse<AddressSessionResponseDto>),
        (status = 400, description = "Unknown level"),
        (status = 404, description = "Session not found"),
        (status = 409, description = "Level has not failed")
    ),
    tag = "address-sessions"
)]
pub async fn retry_level(
    State(service): State<Arc<AddressSessionService>>,
    Path((id, level)): Path<(Uuid, String)>,
) -> Result<Json<ApiResponse<AddressSessionResponseDto>>> {
    let level: RegionLevel = level.parse().map_err(AppError::BadRequest)?;

    let snapshot = service.retry(id, level).await?;
    Ok(Json(ApiResponse::success(Some(snapshot), None, None)))
}

/// Discard an address session
#[utoipa::path(
    delete,
    path = "/api/address-sessions/{id}",
    params(
        ("id" = Uuid, Path, description = "Session ID")
    ),
    responses(
        (status = 200, description = "Session deleted"),
        (status = 404, description = "Session not found")
    ),
    tag = "address-sessions"
)]
pub async fn delete_session(
    State(service): State<Arc<AddressSessionService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>> {
    service.remove(id).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Address session deleted".to_string()),
        None,
    )))
}
