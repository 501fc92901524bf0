use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};

use crate::core::error::Result;
use crate::features::regions::dtos::{RegionResponseDto, RegionSearchQuery};
use crate::features::regions::models::{Region, RegionLevel};
use crate::features::regions::services::RegionService;
use crate::shared::types::{ApiResponse, Meta};

fn list_response(regions: Vec<Region>) -> Json<ApiResponse<Vec<RegionResponseDto>>> {
    let dtos: Vec<RegionResponseDto> = regions.into_iter().map(Into::into).collect();
    let meta = Meta::with_total(dtos.len());
    Json(ApiResponse::success(Some(dtos), None, Some(meta)))
}

/// List all provinces
#[utoipa::path(
    get,
    path = "/api/regions/provinces",
    params(RegionSearchQuery),
    responses(
        (status = 200, description = "List of provinces", body = ApiResponse<Vec<RegionResponseDto>>),
        (status = 502, description = "Region API unavailable")
    ),
    tag = "regions"
)]
pub async fn list_provinces(
    State(service): State<Arc<RegionService>>,
    Query(query): Query<RegionSearchQuery>,
) -> Result<Json<ApiResponse<Vec<RegionResponseDto>>>> {
    let provinces = service.list_provinces(query.search.as_deref()).await?;
    Ok(list_response(provinces))
}

/// List regencies/cities in a province
#[utoipa::path(
    get,
    path = "/api/regions/provinces/{id}/regencies",
    params(
        ("id" = String, Path, description = "Province id"),
        RegionSearchQuery
    ),
    responses(
        (status = 200, description = "List of regencies in the province", body = ApiResponse<Vec<RegionResponseDto>>),
        (status = 502, description = "Region API unavailable")
    ),
    tag = "regions"
)]
pub async fn list_regencies_by_province(
    State(service): State<Arc<RegionService>>,
    Path(id): Path<String>,
    Query(query): Query<RegionSearchQuery>,
) -> Result<Json<ApiResponse<Vec<RegionResponseDto>>>> {
    let regencies = service
        .list_children(RegionLevel::Regency, &id, query.search.as_deref())
        .await?;
    Ok(list_response(regencies))
}

/// List districts in a regency
#[utoipa::path(
    get,
    path = "/api/regions/regencies/{id}/districts",
    params(
        ("id" = String, Path, description = "Regency id"),
        RegionSearchQuery
    ),
    responses(
        (status = 200, description = "List of districts in the regency", body = ApiResponse<Vec<RegionResponseDto>>),
        (status = 502, description = "Region API unavailable")
    ),
    tag = "regions"
)]
pub async fn list_districts_by_regency(
    State(service): State<Arc<RegionService>>,
    Path(id): Path<String>,
    Query(query): Query<RegionSearchQuery>,
) -> Result<Json<ApiResponse<Vec<RegionResponseDto>>>> {
    let districts = service
        .list_children(RegionLevel::District, &id, query.search.as_deref())
        .await?;
    Ok(list_response(districts))
}

/// List villages in a district
#[utoipa::path(
    get,
    path = "/api/regions/districts/{id}/villages",
    params(
        ("id" = String, Path, description = "District id"),
        RegionSearchQuery
    ),
    responses(
        (status = 200, description = "List of villages in the district", body = ApiResponse<Vec<RegionResponseDto>>),
        (status = 502, description = "Region API unavailable")
    ),
    tag = "regions"
)]
pub async fn list_villages_by_district(
    State(service): State<Arc<RegionService>>,
    Path(id): Path<String>,
    Query(query): Query<RegionSearchQuery>,
) -> Result<Json<ApiResponse<Vec<RegionResponseDto>>>> {
    let villages = service
        .list_children(RegionLevel::Village, &id, query.search.as_deref())
        .await?;
    Ok(list_response(villages))
}
