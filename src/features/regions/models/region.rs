use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A node at one hierarchy level as served by the region API.
///
/// `id` is only unique within the list returned for one parent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Region {
    pub id: String,
    pub name: String,
}

#[cfg(test)]
impl Region {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Human-readable names for a fully selected hierarchy, used to build postal searches
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ResolvedAddressNames {
    pub province: String,
    pub regency: String,
    pub district: String,
    pub village: String,
}
