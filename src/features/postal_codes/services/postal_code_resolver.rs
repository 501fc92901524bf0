use std::sync::Arc;

use crate::features::postal_codes::clients::PostalSearchSource;
use crate::features::postal_codes::models::{PostalCodeCandidate, PostalLookup, SearchStrategy};
use crate::features::postal_codes::services::matching::{
    fallback_query, filter_candidates, primary_query,
};
use crate::features::regions::models::ResolvedAddressNames;
use crate::shared::source_error::SourceError;

/// Finds the postal code(s) for a fully resolved address.
///
/// Searches with the district plus the first village word, falls back to the
/// full village name when that yields nothing usable, then filters the rows
/// with [`filter_candidates`]. Only a failure of the fallback search is
/// returned as an error.
pub struct PostalCodeResolver {
    source: Arc<dyn PostalSearchSource>,
}

impl PostalCodeResolver {
    pub fn new(source: Arc<dyn PostalSearchSource>) -> Self {
        Self { source }
    }

    pub async fn resolve(&self, names: &ResolvedAddressNames) -> Result<PostalLookup, SourceError> {
        let (strategy, query, candidates) = self.search(names).await?;
        let found = candidates.len();
        let (tier, candidates) = filter_candidates(candidates, names);

        tracing::info!(
            "Postal lookup for {} / {}: {} of {} candidates kept ({:?}, tier {:?})",
            names.district,
            names.village,
            candidates.len(),
            found,
            strategy,
            tier
        );

        Ok(PostalLookup {
            candidates,
            tier,
            strategy,
            query,
        })
    }

    async fn search(
        &self,
        names: &ResolvedAddressNames,
    ) -> Result<(SearchStrategy, String, Vec<PostalCodeCandidate>), SourceError> {
        let primary = primary_query(names);
        match self.source.search(&primary).await {
            Ok(candidates) if !candidates.is_empty() => {
                return Ok((SearchStrategy::DistrictAndVillageToken, primary, candidates));
            }
            Ok(_) => {
                tracing::debug!("No candidates for {:?}, retrying with village name", primary);
            }
            Err(e) => {
                tracing::warn!(
                    "Postal search for {:?} failed ({}), retrying with village name",
                    primary,
                    e
                );
            }
        }

        let fallback = fallback_query(names);
        let candidates = self.source.search(&fallback).await.map_err(|e| {
            tracing::error!("Postal search for {:?} failed: {}", fallback, e);
            match e {
                SourceError::MalformedResponse(message) => SourceError::Transport(message),
                transport => transport,
            }
        })?;

        Ok((SearchStrategy::FullVillageName, fallback, candidates))
    }
}
