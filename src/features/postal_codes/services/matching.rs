use crate::features::postal_codes::models::{MatchTier, PostalCodeCandidate};
use crate::features::regions::models::ResolvedAddressNames;
use crate::shared::normalization::normalize;

/// First search: district name followed by the first word of the village name.
///
/// The index is keyed more reliably by district plus a short village token than
/// by compound village names with qualifiers it does not know.
pub fn primary_query(names: &ResolvedAddressNames) -> String {
    let village_token = names.village.split_whitespace().next().unwrap_or_default();
    format!("{} {}", names.district.trim(), village_token)
        .trim()
        .to_string()
}

/// Second search: the village name exactly as selected
pub fn fallback_query(names: &ResolvedAddressNames) -> String {
    names.village.clone()
}

struct NormalizedNames {
    province: String,
    regency: String,
    district: String,
    village: String,
}

impl From<&ResolvedAddressNames> for NormalizedNames {
    fn from(names: &ResolvedAddressNames) -> Self {
        Self {
            province: normalize(&names.province),
            regency: normalize(&names.regency),
            district: normalize(&names.district),
            village: normalize(&names.village),
        }
    }
}

fn is_exact_match(candidate: &PostalCodeCandidate, names: &NormalizedNames) -> bool {
    normalize(&candidate.village) == names.village
        && normalize(&candidate.province) == names.province
        && normalize(&candidate.regency) == names.regency
        && normalize(&candidate.district) == names.district
}

// Regency is not compared here. Kept as-is pending product confirmation.
fn is_partial_match(candidate: &PostalCodeCandidate, names: &NormalizedNames) -> bool {
    normalize(&candidate.province).contains(&names.province)
        && normalize(&candidate.district).contains(&names.district)
        && normalize(&candidate.village).contains(&names.village)
}

/// Narrow search results down to the selected address.
///
/// Exact matches win; substring matches are only used when there is no exact
/// one. Returns `None` as tier when neither pass keeps anything. Source order
/// is preserved within a tier.
pub fn filter_candidates(
    candidates: Vec<PostalCodeCandidate>,
    names: &ResolvedAddressNames,
) -> (Option<MatchTier>, Vec<PostalCodeCandidate>) {
    let names = NormalizedNames::from(names);

    let exact: Vec<PostalCodeCandidate> = candidates
        .iter()
        .filter(|c| is_exact_match(c, &names))
        .cloned()
        .collect();
    if !exact.is_empty() {
        return (Some(MatchTier::Exact), exact);
    }

    let partial: Vec<PostalCodeCandidate> = candidates
        .into_iter()
        .filter(|c| is_partial_match(c, &names))
        .collect();
    if !partial.is_empty() {
        return (Some(MatchTier::Partial), partial);
    }

    (None, Vec::new())
}
