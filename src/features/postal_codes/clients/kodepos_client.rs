use async_trait::async_trait;
use serde::Deserialize;

use crate::core::config::PostalApiConfig;
use crate::features::postal_codes::clients::PostalSearchSource;
use crate::features::postal_codes::models::PostalCodeCandidate;
use crate::shared::source_error::SourceError;

/// Status code the search API puts in `code` on success
const KODEPOS_OK: &str = "OK";

/// Response envelope of the kodepos search API
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct KodeposSearchResponse {
    #[serde(default)]
    status_code: Option<i64>,
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    data: Option<Vec<PostalCodeCandidate>>,
}

/// HTTP client for the kodepos postal code search API
pub struct KodeposClient {
    client: reqwest::Client,
    base_url: String,
}

impl KodeposClient {
    pub fn new(config: &PostalApiConfig) -> Result<Self, SourceError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("WilayahKodepos/", env!("CARGO_PKG_VERSION")))
            .timeout(config.timeout)
            .build()
            .map_err(|e| SourceError::Transport(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl PostalSearchSource for KodeposClient {
    async fn search(&self, query: &str) -> Result<Vec<PostalCodeCandidate>, SourceError> {
        let url = format!("{}/search", self.base_url);
        tracing::debug!("Postal code search: {:?}", query);

        let response = self
            .client
            .get(&url)
            .query(&[("q", query)])
            .send()
            .await
            .map_err(|e| {
                tracing::warn!("Postal search request failed: {:?}", e);
                SourceError::Transport(format!("Postal search request failed: {}", e))
            })?;

        if !response.status().is_success() {
            tracing::warn!("Postal search returned status: {}", response.status());
            return Err(SourceError::Transport(format!(
                "Postal search failed: HTTP {}",
                response.status()
            )));
        }

        let body: KodeposSearchResponse = response.json().await.map_err(|e| {
            tracing::warn!("Failed to parse postal search response: {:?}", e);
            SourceError::from_reqwest(e)
        })?;

        if body.code.as_deref() != Some(KODEPOS_OK) {
            return Err(SourceError::Transport(format!(
                "Postal search reported {} (status {})",
                body.code.as_deref().unwrap_or("no code"),
                body.status_code.unwrap_or_default()
            )));
        }

        body.data.ok_or_else(|| {
            SourceError::MalformedResponse("Postal search response has no data".to_string())
        })
    }
}
