use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One postal code record from the search index.
///
/// Rows are filtered, never edited. Text fields missing from a row decode as
/// empty strings and then simply fail to match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PostalCodeCandidate {
    pub code: i64,
    #[serde(default)]
    pub village: String,
    #[serde(default)]
    pub district: String,
    #[serde(default)]
    pub regency: String,
    #[serde(default)]
    pub province: String,
    #[serde(default)]
    pub latitude: f64,
    #[serde(default)]
    pub longitude: f64,
    #[serde(default)]
    pub elevation: f64,
    #[serde(default)]
    pub timezone: String,
}
