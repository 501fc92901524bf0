mod candidate;
mod lookup;

pub use candidate::PostalCodeCandidate;
pub use lookup::{MatchTier, PostalLookup, PostalStatus, SearchStrategy};
