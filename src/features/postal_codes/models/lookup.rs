use serde::Serialize;
use utoipa::ToSchema;

use crate::features::postal_codes::models::PostalCodeCandidate;

/// Which filtering pass produced the final candidate set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum MatchTier {
    /// Village, district, regency and province all equal after normalization
    Exact,
    /// Province, district and village contain the selected names
    Partial,
}

/// Query that produced the candidate set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum SearchStrategy {
    /// District name plus the first word of the village name
    DistrictAndVillageToken,
    /// The full village name as selected
    FullVillageName,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum PostalStatus {
    /// No village selected
    Idle,
    Loading,
    Found,
    /// More than one candidate; the user has to pick
    Ambiguous,
    NotFound,
    Failed,
}

/// Result of a completed postal code lookup
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PostalLookup {
    pub candidates: Vec<PostalCodeCandidate>,
    pub tier: Option<MatchTier>,
    pub strategy: SearchStrategy,
    pub query: String,
}

impl PostalLookup {
    pub fn status(&self) -> PostalStatus {
        match self.candidates.len() {
            0 => PostalStatus::NotFound,
            1 => PostalStatus::Found,
            _ => PostalStatus::Ambiguous,
        }
    }
}
