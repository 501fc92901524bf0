use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::features::postal_codes::models::{PostalLookup, PostalStatus};
use crate::features::regions::models::{
    HierarchySelection, Region, RegionLevel, ResolvedAddressNames, SelectionError,
};
use crate::features::regions::services::{FetchKey, FetchOutcome, HierarchyResolver};
use crate::shared::source_error::SourceError;

/// A postal code lookup to run for the selection in `key`
#[derive(Debug, Clone, PartialEq)]
pub struct PostalJob {
    pub key: HierarchySelection,
    pub names: ResolvedAddressNames,
}

/// Work a transition asks the caller to start
#[derive(Debug, Default, PartialEq)]
pub struct SessionEffects {
    pub fetches: Vec<FetchKey>,
    pub postal: Option<PostalJob>,
}

impl SessionEffects {
    pub fn is_empty(&self) -> bool {
        self.fetches.is_empty() && self.postal.is_none()
    }
}

/// Postal code state, tied to the selection that produced it
#[derive(Debug, Clone)]
pub struct PostalState {
    key: Option<HierarchySelection>,
    status: PostalStatus,
    lookup: Option<PostalLookup>,
    error: Option<SourceError>,
}

impl Default for PostalState {
    fn default() -> Self {
        Self {
            key: None,
            status: PostalStatus::Idle,
            lookup: None,
            error: None,
        }
    }
}

impl PostalState {
    pub fn status(&self) -> PostalStatus {
        self.status
    }

    pub fn lookup(&self) -> Option<&PostalLookup> {
        self.lookup.as_ref()
    }

    pub fn error(&self) -> Option<&SourceError> {
        self.error.as_ref()
    }

    fn start(key: HierarchySelection) -> Self {
        Self {
            key: Some(key),
            status: PostalStatus::Loading,
            ..Self::default()
        }
    }
}

/// One address form in progress: the region hierarchy plus its postal code lookup.
///
/// All methods are synchronous. Transitions return [`SessionEffects`] and
/// results come back through [`AddressSession::complete_fetch`] and
/// [`AddressSession::complete_postal`].
#[derive(Debug)]
pub struct AddressSession {
    id: Uuid,
    resolver: HierarchyResolver,
    postal: PostalState,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    last_seen: Instant,
}

impl AddressSession {
    /// New session; the returned effects hold the province list fetch.
    pub fn new() -> (Self, SessionEffects) {
        let now = Utc::now();
        let mut session = Self {
            id: Uuid::now_v7(),
            resolver: HierarchyResolver::new(),
            postal: PostalState::default(),
            created_at: now,
            updated_at: now,
            last_seen: Instant::now(),
        };
        let effects = SessionEffects {
            fetches: session.resolver.pending_fetches(),
            postal: None,
        };
        (session, effects)
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn resolver(&self) -> &HierarchyResolver {
        &self.resolver
    }

    pub fn selection(&self) -> &HierarchySelection {
        self.resolver.selection()
    }

    pub fn postal(&self) -> &PostalState {
        &self.postal
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn touch(&mut self) {
        self.last_seen = Instant::now();
    }

    pub fn idle_for(&self) -> Duration {
        self.last_seen.elapsed()
    }

    /// User picked (or cleared, with `None`) the region at `level`.
    pub fn select(
        &mut self,
        level: RegionLevel,
        region_id: Option<String>,
    ) -> Result<SessionEffects, SelectionError> {
        let fetches = self.resolver.select_level(level, region_id)?;

        // A failed lookup is retried by selecting again
        if self.postal.status == PostalStatus::Failed {
            self.postal = PostalState::default();
        }

        self.updated_at = Utc::now();
        Ok(SessionEffects {
            fetches,
            postal: self.sync_postal(),
        })
    }

    /// Re-trigger a failed region list. `None` if the level is not failed.
    pub fn retry(&mut self, level: RegionLevel) -> Option<SessionEffects> {
        let key = self.resolver.retry(level)?;
        self.updated_at = Utc::now();
        Some(SessionEffects {
            fetches: vec![key],
            postal: None,
        })
    }

    pub fn complete_fetch(
        &mut self,
        key: &FetchKey,
        result: Result<Vec<Region>, SourceError>,
    ) -> SessionEffects {
        if self.resolver.complete_fetch(key, result) == FetchOutcome::Stale {
            return SessionEffects::default();
        }

        self.updated_at = Utc::now();
        SessionEffects {
            fetches: Vec::new(),
            postal: self.sync_postal(),
        }
    }

    /// Record a lookup result. Results for any selection but the current one are dropped.
    pub fn complete_postal(
        &mut self,
        key: &HierarchySelection,
        result: Result<PostalLookup, SourceError>,
    ) -> FetchOutcome {
        if self.postal.status != PostalStatus::Loading || self.postal.key.as_ref() != Some(key) {
            tracing::debug!("Discarding stale postal code lookup for session {}", self.id);
            return FetchOutcome::Stale;
        }

        match result {
            Ok(lookup) => {
                self.postal.status = lookup.status();
                self.postal.lookup = Some(lookup);
            }
            Err(e) => {
                tracing::warn!("Postal code lookup failed for session {}: {}", self.id, e);
                self.postal.status = PostalStatus::Failed;
                self.postal.error = Some(e);
            }
        }
        self.updated_at = Utc::now();

        FetchOutcome::Applied
    }

    /// Align the postal state with the current selection and return a lookup to start, if any.
    fn sync_postal(&mut self) -> Option<PostalJob> {
        let selection = self.resolver.selection();

        if self.postal.key.as_ref() == Some(selection) {
            return None;
        }

        if !selection.is_complete() {
            self.postal = PostalState::default();
            return None;
        }

        // Village chosen but its list (or a parent list) is not loaded yet
        let Some(names) = self.resolver.resolved_names() else {
            self.postal = PostalState::default();
            return None;
        };

        let key = selection.clone();
        self.postal = PostalState::start(key.clone());
        Some(PostalJob { key, names })
    }
}
