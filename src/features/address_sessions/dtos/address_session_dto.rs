use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::address_sessions::models::{AddressSession, PostalState};
use crate::features::postal_codes::dtos::PostalCodeCandidateDto;
use crate::features::postal_codes::models::{MatchTier, PostalStatus, SearchStrategy};
use crate::features::regions::dtos::RegionResponseDto;
use crate::features::regions::models::{HierarchySelection, RegionLevel};
use crate::features::regions::services::LevelStatus;
use crate::shared::source_error::{SourceError, SourceErrorKind};

/// Request DTO for a selection event. A missing or empty `regionId` clears the level.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SelectRegionRequestDto {
    pub level: RegionLevel,

    #[schema(example = "3171")]
    #[validate(length(max = 32, message = "regionId must be at most 32 characters"))]
    pub region_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SourceErrorDto {
    pub kind: SourceErrorKind,
    pub message: String,
}

impl From<&SourceError> for SourceErrorDto {
    fn from(err: &SourceError) -> Self {
        Self {
            kind: err.kind(),
            message: err.to_string(),
        }
    }
}

/// State of one level's list
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LevelStateDto {
    pub level: RegionLevel,
    pub status: LevelStatus,
    /// Parent the list belongs to; absent for provinces and ineligible levels
    pub parent_id: Option<String>,
    pub regions: Vec<RegionResponseDto>,
    pub error: Option<SourceErrorDto>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PostalStateDto {
    pub status: PostalStatus,
    pub candidates: Vec<PostalCodeCandidateDto>,
    pub tier: Option<MatchTier>,
    pub strategy: Option<SearchStrategy>,
    pub query: Option<String>,
    pub error: Option<SourceErrorDto>,
}

impl From<&PostalState> for PostalStateDto {
    fn from(state: &PostalState) -> Self {
        let lookup = state.lookup();
        Self {
            status: state.status(),
            candidates: lookup
                .map(|l| l.candidates.iter().cloned().map(Into::into).collect())
                .unwrap_or_default(),
            tier: lookup.and_then(|l| l.tier),
            strategy: lookup.map(|l| l.strategy),
            query: lookup.map(|l| l.query.clone()),
            error: state.error().map(Into::into),
        }
    }
}

/// Snapshot of an address session
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddressSessionResponseDto {
    pub id: Uuid,
    pub selection: HierarchySelection,
    pub levels: Vec<LevelStateDto>,
    pub postal: PostalStateDto,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&AddressSession> for AddressSessionResponseDto {
    fn from(session: &AddressSession) -> Self {
        let resolver = session.resolver();
        let levels = RegionLevel::ALL
            .into_iter()
            .map(|level| LevelStateDto {
                level,
                status: resolver.level_status(level),
                parent_id: resolver
                    .current_key(level)
                    .and_then(|key| key.parent_id),
                regions: resolver
                    .regions(level)
                    .map(|regions| regions.iter().cloned().map(Into::into).collect())
                    .unwrap_or_default(),
                error: resolver.error(level).map(Into::into),
            })
            .collect();

        Self {
            id: session.id(),
            selection: session.selection().clone(),
            levels,
            postal: session.postal().into(),
            created_at: session.created_at(),
            updated_at: session.updated_at(),
        }
    }
}
