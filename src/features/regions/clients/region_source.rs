use async_trait::async_trait;

use crate::features::regions::models::{Region, RegionLevel};
use crate::shared::source_error::SourceError;

/// Read-only provider of region lists, one list per (level, parent) pair.
///
/// `parent_id` is `None` only for [`RegionLevel::Province`].
#[async_trait]
pub trait RegionDataSource: Send + Sync {
    async fn fetch_regions(
        &self,
        level: RegionLevel,
        parent_id: Option<&str>,
    ) -> Result<Vec<Region>, SourceError>;
}
