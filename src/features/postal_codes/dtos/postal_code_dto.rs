use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::{Validate, ValidationError};

use crate::features::postal_codes::models::{
    MatchTier, PostalCodeCandidate, PostalLookup, PostalStatus, SearchStrategy,
};
use crate::features::regions::models::ResolvedAddressNames;
use crate::shared::normalization::normalize;

/// Names are compared after normalization; one that normalizes to nothing matches every row.
fn validate_region_name(name: &str) -> Result<(), ValidationError> {
    if normalize(name).is_empty() {
        return Err(ValidationError::new("region_name")
            .with_message(Cow::from("must contain at least one letter or digit")));
    }
    Ok(())
}

/// Query parameters for a stateless postal code lookup
#[derive(Debug, Clone, Deserialize, Validate, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct PostalCodeQuery {
    /// Province name
    #[param(example = "DKI JAKARTA")]
    #[validate(length(min = 1, max = 255, message = "province must be 1-255 characters"))]
    #[validate(custom(function = "validate_region_name"))]
    pub province: String,

    /// Regency/city name
    #[param(example = "KOTA JAKARTA SELATAN")]
    #[validate(length(min = 1, max = 255, message = "regency must be 1-255 characters"))]
    #[validate(custom(function = "validate_region_name"))]
    pub regency: String,

    /// District name
    #[param(example = "KEBAYORAN BARU")]
    #[validate(length(min = 1, max = 255, message = "district must be 1-255 characters"))]
    #[validate(custom(function = "validate_region_name"))]
    pub district: String,

    /// Village name
    #[param(example = "GANDARIA UTARA")]
    #[validate(length(min = 1, max = 255, message = "village must be 1-255 characters"))]
    #[validate(custom(function = "validate_region_name"))]
    pub village: String,
}

impl From<PostalCodeQuery> for ResolvedAddressNames {
    fn from(query: PostalCodeQuery) -> Self {
        Self {
            province: query.province,
            regency: query.regency,
            district: query.district,
            village: query.village,
        }
    }
}

/// Response DTO for a postal code candidate
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PostalCodeCandidateDto {
    pub code: i64,
    pub village: String,
    pub district: String,
    pub regency: String,
    pub province: String,
    pub latitude: f64,
    pub longitude: f64,
    pub elevation: f64,
    pub timezone: String,
}

impl From<PostalCodeCandidate> for PostalCodeCandidateDto {
    fn from(candidate: PostalCodeCandidate) -> Self {
        Self {
            code: candidate.code,
            village: candidate.village,
            district: candidate.district,
            regency: candidate.regency,
            province: candidate.province,
            latitude: candidate.latitude,
            longitude: candidate.longitude,
            elevation: candidate.elevation,
            timezone: candidate.timezone,
        }
    }
}

/// Response DTO for a completed lookup
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PostalCodeLookupResponseDto {
    pub status: PostalStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tier: Option<MatchTier>,
    pub strategy: SearchStrategy,
    pub query: String,
    pub candidates: Vec<PostalCodeCandidateDto>,
}

impl From<PostalLookup> for PostalCodeLookupResponseDto {
    fn from(lookup: PostalLookup) -> Self {
        Self {
            status: lookup.status(),
            tier: lookup.tier,
            strategy: lookup.strategy,
            query: lookup.query,
            candidates: lookup.candidates.into_iter().map(Into::into).collect(),
        }
    }
}
