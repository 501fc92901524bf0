use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::features::regions::models::Region;

/// Query parameters for searching regions
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct RegionSearchQuery {
    /// Search by name (case, space and punctuation insensitive, partial match)
    #[param(example = "jakarta")]
    pub search: Option<String>,
}

/// Response DTO for a region at any level
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegionResponseDto {
    pub id: String,
    pub name: String,
}

impl From<Region> for RegionResponseDto {
    fn from(region: Region) -> Self {
        Self {
            id: region.id,
            name: region.name,
        }
    }
}
