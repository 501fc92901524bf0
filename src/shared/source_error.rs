use serde::Serialize;
use utoipa::ToSchema;

/// Failure reported by one of the upstream data sources (region or postal search).
///
/// Both variants are terminal for the single request that produced them.
/// Callers decide whether to fall back, surface per-level, or retry later.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SourceError {
    /// Network failure, timeout or non-2xx status
    #[error("Transport error: {0}")]
    Transport(String),

    /// The body decoded but did not have the expected shape
    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

/// Serializable classification of a [`SourceError`], exposed in API snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum SourceErrorKind {
    Transport,
    MalformedResponse,
}

impl SourceError {
    pub fn kind(&self) -> SourceErrorKind {
        match self {
            SourceError::Transport(_) => SourceErrorKind::Transport,
            SourceError::MalformedResponse(_) => SourceErrorKind::MalformedResponse,
        }
    }

    /// Classify a reqwest failure. Decode failures are shape problems, the rest are transport.
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        if err.is_decode() {
            SourceError::MalformedResponse(err.to_string())
        } else {
            SourceError::Transport(err.to_string())
        }
    }
}
