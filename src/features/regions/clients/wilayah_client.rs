use async_trait::async_trait;

use crate::core::config::RegionApiConfig;
use crate::features::regions::clients::RegionDataSource;
use crate::features::regions::models::{Region, RegionLevel};
use crate::shared::source_error::SourceError;

/// HTTP client for the static Indonesian region API (api-wilayah-indonesia).
///
/// Lists are served as `{base}/provinces.json` and `{base}/{level}/{parent_id}.json`.
pub struct WilayahClient {
    client: reqwest::Client,
    base_url: String,
    path_suffix: String,
}

impl WilayahClient {
    pub fn new(config: &RegionApiConfig) -> Result<Self, SourceError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("WilayahKodepos/", env!("CARGO_PKG_VERSION")))
            .timeout(config.timeout)
            .build()
            .map_err(|e| SourceError::Transport(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            path_suffix: config.path_suffix.clone(),
        })
    }

    fn list_url(&self, level: RegionLevel, parent_id: Option<&str>) -> String {
        match parent_id {
            Some(parent) => format!(
                "{}/{}/{}{}",
                self.base_url,
                level.endpoint(),
                urlencoding::encode(parent),
                self.path_suffix
            ),
            None => format!("{}/{}{}", self.base_url, level.endpoint(), self.path_suffix),
        }
    }
}

#[async_trait]
impl RegionDataSource for WilayahClient {
    async fn fetch_regions(
        &self,
        level: RegionLevel,
        parent_id: Option<&str>,
    ) -> Result<Vec<Region>, SourceError> {
        let url = self.list_url(level, parent_id);
        tracing::debug!("Fetching {} list: {}", level, url);

        let response = self.client.get(&url).send().await.map_err(|e| {
            tracing::warn!("Region request for {} failed: {:?}", level, e);
            SourceError::Transport(format!("Failed to fetch {} list: {}", level, e))
        })?;

        if !response.status().is_success() {
            tracing::warn!("Region API returned status {} for {}", response.status(), url);
            return Err(SourceError::Transport(format!(
                "Failed to fetch {} list: HTTP {}",
                level,
                response.status()
            )));
        }

        let regions: Vec<Region> = response.json().await.map_err(|e| {
            tracing::warn!("Failed to parse {} list: {:?}", level, e);
            SourceError::from_reqwest(e)
        })?;

        Ok(regions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::regions::services::RegionService;
    use std::sync::Arc;
    use std::time::Duration;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> WilayahClient {
        WilayahClient::new(&RegionApiConfig {
            base_url: format!("{}/api/", server.uri()),
            path_suffix: ".json".to_string(),
            timeout: Duration::from_secs(5),
        })
        .unwrap()
    }

    #[tokio::test]
    async fn test_fetch_provinces() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/provinces.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"id": "31", "name": "DKI JAKARTA"},
                {"id": "32", "name": "JAWA BARAT"}
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let regions = client_for(&server)
            .fetch_regions(RegionLevel::Province, None)
            .await
            .unwrap();

        assert_eq!(regions.len(), 2);
        assert_eq!(regions[0], Region::new("31", "DKI JAKARTA"));
    }

    #[tokio::test]
    async fn test_fetch_scoped_list_uses_parent_path() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/villages/3171070.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"id": "3171070002", "name": "GANDARIA UTARA"}
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let regions = client_for(&server)
            .fetch_regions(RegionLevel::Village, Some("3171070"))
            .await
            .unwrap();

        assert_eq!(regions, vec![Region::new("3171070002", "GANDARIA UTARA")]);
    }

    #[tokio::test]
    async fn test_shared_client_backs_region_service() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/provinces.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"id": "31", "name": "DKI JAKARTA"}
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let client = Arc::new(client_for(&server));
        let service = RegionService::new(client.clone());

        let provinces = service.list_provinces(None).await.unwrap();

        assert_eq!(provinces, vec![Region::new("31", "DKI JAKARTA")]);
        assert_eq!(Arc::strong_count(&client), 2);
    }

    #[tokio::test]
    async fn test_non_success_status_is_transport_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/regencies/99.json"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .fetch_regions(RegionLevel::Regency, Some("99"))
            .await
            .unwrap_err();

        assert!(matches!(err, SourceError::Transport(_)));
    }

    #[tokio::test]
    async fn test_unexpected_shape_is_malformed() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/provinces.json"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"error": "nope"})),
            )
            .mount(&server)
            .await;

        let err = client_for(&server)
            .fetch_regions(RegionLevel::Province, None)
            .await
            .unwrap_err();

        assert!(matches!(err, SourceError::MalformedResponse(_)));
    }
}
