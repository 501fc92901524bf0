use std::sync::Arc;

use crate::core::error::Result;
use crate::features::regions::clients::RegionDataSource;
use crate::features::regions::models::{Region, RegionLevel};
use crate::shared::normalization::normalize;

/// Stateless access to region lists, for callers that do not keep a session
pub struct RegionService {
    source: Arc<dyn RegionDataSource>,
}

impl RegionService {
    pub fn new(source: Arc<dyn RegionDataSource>) -> Self {
        Self { source }
    }

    /// List all provinces with optional search
    pub async fn list_provinces(&self, search: Option<&str>) -> Result<Vec<Region>> {
        let provinces = self
            .source
            .fetch_regions(RegionLevel::Province, None)
            .await
            .map_err(|e| {
                tracing::error!("Failed to fetch provinces: {}", e);
                e
            })?;

        Ok(filter_by_name(provinces, search))
    }

    /// List the children of `parent_id`, which must be a region one level above `level`
    pub async fn list_children(
        &self,
        level: RegionLevel,
        parent_id: &str,
        search: Option<&str>,
    ) -> Result<Vec<Region>> {
        let regions = self
            .source
            .fetch_regions(level, Some(parent_id))
            .await
            .map_err(|e| {
                tracing::error!("Failed to fetch {} list for {}: {}", level, parent_id, e);
                e
            })?;

        Ok(filter_by_name(regions, search))
    }
}

/// Keep regions whose normalized name contains the normalized search term
fn filter_by_name(regions: Vec<Region>, search: Option<&str>) -> Vec<Region> {
    let term = match search.map(normalize) {
        Some(term) if !term.is_empty() => term,
        _ => return regions,
    };

    regions
        .into_iter()
        .filter(|region| normalize(&region.name).contains(&term))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::AppError;
    use crate::shared::test_helpers::StaticRegionSource;

    fn service() -> RegionService {
        RegionService::new(Arc::new(StaticRegionSource::jakarta_selatan()))
    }

    #[tokio::test]
    async fn test_list_children_with_search() {
        let districts = service()
            .list_children(RegionLevel::District, "3171", Some("kebayoran-baru"))
            .await
            .unwrap();

        assert_eq!(districts.len(), 1);
        assert_eq!(districts[0].name, "KEBAYORAN BARU");
    }

    #[tokio::test]
    async fn test_blank_search_returns_everything() {
        let provinces = service().list_provinces(Some("  ")).await.unwrap();
        assert_eq!(provinces.len(), 2);
    }

    #[tokio::test]
    async fn test_upstream_failure_maps_to_external_error() {
        let source = StaticRegionSource::jakarta_selatan();
        source.fail(RegionLevel::Regency, Some("31"));
        let service = RegionService::new(Arc::new(source));

        let err = service
            .list_children(RegionLevel::Regency, "31", None)
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::ExternalServiceError(_)));
    }
}
