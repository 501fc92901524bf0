use std::collections::HashMap;

use serde::Serialize;
use utoipa::ToSchema;

use crate::features::regions::models::{
    HierarchySelection, Region, RegionLevel, ResolvedAddressNames, SelectionError,
};
use crate::shared::source_error::SourceError;

/// Memo key for one region list: the level being listed and the id of its parent.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FetchKey {
    pub level: RegionLevel,
    pub parent_id: Option<String>,
}

/// Per-level lifecycle: `Idle → Loading → (Ready | Failed)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum LevelStatus {
    Idle,
    Loading,
    Ready,
    Failed,
}

/// What happened to a completed fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The key was still awaited and its state now reflects the result
    Applied,
    /// The key was no longer awaited; the result was dropped
    Stale,
}

#[derive(Debug, Clone)]
enum FetchState {
    Loading,
    Ready(Vec<Region>),
    Failed(SourceError),
}

/// Cascading selection state machine for the province → village hierarchy.
///
/// Holds the [`HierarchySelection`] and a cache of region lists keyed by
/// [`FetchKey`]. It never performs I/O: every transition returns the keys the
/// caller must fetch and results are fed back through
/// [`HierarchyResolver::complete_fetch`].
///
/// Invariants kept across transitions:
/// - a level is fetch-eligible iff its parent level is selected (the province
///   list is always eligible)
/// - at most one fetch per key is outstanding; `Ready` and `Loading` keys are
///   never handed out again
/// - every `Loading` entry belongs to a key that is current for its level, so a
///   result for any other key is stale and gets dropped
/// - a fetch failure only marks its own key `Failed`; selections and other
///   levels are left alone
#[derive(Debug, Default)]
pub struct HierarchyResolver {
    selection: HierarchySelection,
    cache: HashMap<FetchKey, FetchState>,
}

impl HierarchyResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selection(&self) -> &HierarchySelection {
        &self.selection
    }

    /// Key the given level would be listed under right now, if it is eligible.
    pub fn current_key(&self, level: RegionLevel) -> Option<FetchKey> {
        self.selection
            .parent_key(level)
            .map(|parent_id| FetchKey {
                level,
                parent_id: parent_id.map(str::to_string),
            })
    }

    /// Mark every eligible level without a cached or in-flight list as loading
    /// and return the keys to fetch.
    pub fn pending_fetches(&mut self) -> Vec<FetchKey> {
        let mut fetches = Vec::new();

        for level in RegionLevel::ALL {
            let Some(key) = self.current_key(level) else {
                continue;
            };
            if self.cache.contains_key(&key) {
                continue;
            }
            tracing::debug!(
                "Scheduling {} fetch (parent: {:?})",
                level,
                key.parent_id.as_deref()
            );
            self.cache.insert(key.clone(), FetchState::Loading);
            fetches.push(key);
        }

        fetches
    }

    /// Apply a selection event at `level` and return the fetches it makes necessary.
    ///
    /// Every level below `level` is cleared in the same step. In-flight fetches
    /// whose key stopped being current are forgotten, and failed lists below
    /// `level` are dropped so the new parent-selection event retries them.
    pub fn select_level(
        &mut self,
        level: RegionLevel,
        region_id: Option<String>,
    ) -> Result<Vec<FetchKey>, SelectionError> {
        self.selection.select(level, region_id)?;
        self.invalidate_below(level);
        Ok(self.pending_fetches())
    }

    fn invalidate_below(&mut self, level: RegionLevel) {
        let current: Vec<FetchKey> = level
            .descendants()
            .filter_map(|below| self.current_key(below))
            .collect();

        self.cache.retain(|key, state| {
            if key.level <= level {
                return true;
            }
            match state {
                FetchState::Ready(_) => true,
                FetchState::Loading => current.contains(key),
                FetchState::Failed(_) => false,
            }
        });
    }

    /// Record the result of a fetch previously returned by this resolver.
    pub fn complete_fetch(
        &mut self,
        key: &FetchKey,
        result: Result<Vec<Region>, SourceError>,
    ) -> FetchOutcome {
        if !matches!(self.cache.get(key), Some(FetchState::Loading)) {
            tracing::debug!(
                "Discarding stale {} list (parent: {:?})",
                key.level,
                key.parent_id.as_deref()
            );
            return FetchOutcome::Stale;
        }

        let state = match result {
            Ok(regions) => {
                tracing::debug!("Loaded {} {} entries", regions.len(), key.level);
                FetchState::Ready(regions)
            }
            Err(e) => {
                tracing::warn!(
                    "Failed to load {} list (parent: {:?}): {}",
                    key.level,
                    key.parent_id.as_deref(),
                    e
                );
                FetchState::Failed(e)
            }
        };
        self.cache.insert(key.clone(), state);

        FetchOutcome::Applied
    }

    /// Explicit re-trigger for a level whose current list failed to load.
    pub fn retry(&mut self, level: RegionLevel) -> Option<FetchKey> {
        let key = self.current_key(level)?;
        match self.cache.get(&key) {
            Some(FetchState::Failed(_)) => {
                self.cache.insert(key.clone(), FetchState::Loading);
                Some(key)
            }
            _ => None,
        }
    }

    fn current_state(&self, level: RegionLevel) -> Option<&FetchState> {
        self.current_key(level).and_then(|key| self.cache.get(&key))
    }

    pub fn level_status(&self, level: RegionLevel) -> LevelStatus {
        match self.current_state(level) {
            None => LevelStatus::Idle,
            Some(FetchState::Loading) => LevelStatus::Loading,
            Some(FetchState::Ready(_)) => LevelStatus::Ready,
            Some(FetchState::Failed(_)) => LevelStatus::Failed,
        }
    }

    /// The list to render for `level`. Only ever the list for the current parent.
    pub fn regions(&self, level: RegionLevel) -> Option<&[Region]> {
        match self.current_state(level) {
            Some(FetchState::Ready(regions)) => Some(regions.as_slice()),
            _ => None,
        }
    }

    pub fn error(&self, level: RegionLevel) -> Option<&SourceError> {
        match self.current_state(level) {
            Some(FetchState::Failed(e)) => Some(e),
            _ => None,
        }
    }

    /// Name of the selected region at `level`, looked up in the current list.
    pub fn selected_name(&self, level: RegionLevel) -> Option<&str> {
        let id = self.selection.get(level)?;
        self.regions(level)?
            .iter()
            .find(|region| region.id == id)
            .map(|region| region.name.as_str())
    }

    /// Names for all four levels, once every selection can be resolved.
    pub fn resolved_names(&self) -> Option<ResolvedAddressNames> {
        Some(ResolvedAddressNames {
            province: self.selected_name(RegionLevel::Province)?.to_string(),
            regency: self.selected_name(RegionLevel::Regency)?.to_string(),
            district: self.selected_name(RegionLevel::District)?.to_string(),
            village: self.selected_name(RegionLevel::Village)?.to_string(),
        })
    }
}
