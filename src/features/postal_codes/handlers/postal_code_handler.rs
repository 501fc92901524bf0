use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::features::postal_codes::dtos::{PostalCodeLookupResponseDto, PostalCodeQuery};
use crate::features::postal_codes::services::PostalCodeResolver;
use crate::features::regions::models::ResolvedAddressNames;
use crate::shared::types::ApiResponse;

/// Resolve postal codes for an address given by name
///
/// `not_found` and `ambiguous` are regular outcomes (200). Only a failure of
/// the fallback search is reported as an upstream error.
#[utoipa::path(
    get,
    path = "/api/postal-codes",
    params(PostalCodeQuery),
    responses(
        (status = 200, description = "Lookup completed", body = ApiResponse<PostalCodeLookupResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 502, description = "Postal search unavailable")
    ),
    tag = "postal-codes"
)]
pub async fn lookup_postal_codes(
    State(resolver): State<Arc<PostalCodeResolver>>,
    Query(query): Query<PostalCodeQuery>,
) -> Result<Json<ApiResponse<PostalCodeLookupResponseDto>>> {
    query
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let names = ResolvedAddressNames::from(query);
    let lookup = resolver.resolve(&names).await?;

    Ok(Json(ApiResponse::success(Some(lookup.into()), None, None)))
}
