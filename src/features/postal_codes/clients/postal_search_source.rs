use async_trait::async_trait;

use crate::features::postal_codes::models::PostalCodeCandidate;
use crate::shared::source_error::SourceError;

/// Free-text postal code search.
///
/// `Ok` with an empty list is a valid answer, distinct from an error.
#[async_trait]
pub trait PostalSearchSource: Send + Sync {
    async fn search(&self, query: &str) -> Result<Vec<PostalCodeCandidate>, SourceError>;
}
