use serde::Serialize;
use utoipa::ToSchema;

use crate::features::regions::models::RegionLevel;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
    #[error("Cannot select a {level} before a {parent} is selected")]
    ParentNotSelected {
        level: RegionLevel,
        parent: RegionLevel,
    },
}

/// The user's choice at every level, province first.
///
/// [`HierarchySelection::select`] is the only mutator. It rejects a selection
/// whose parent is unset and clears every level below the one it changes, so a
/// set level always has a fully set prefix.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, ToSchema)]
pub struct HierarchySelection {
    pub province: Option<String>,
    pub regency: Option<String>,
    pub district: Option<String>,
    pub village: Option<String>,
}

impl HierarchySelection {
    pub fn get(&self, level: RegionLevel) -> Option<&str> {
        match level {
            RegionLevel::Province => self.province.as_deref(),
            RegionLevel::Regency => self.regency.as_deref(),
            RegionLevel::District => self.district.as_deref(),
            RegionLevel::Village => self.village.as_deref(),
        }
    }

    fn slot_mut(&mut self, level: RegionLevel) -> &mut Option<String> {
        match level {
            RegionLevel::Province => &mut self.province,
            RegionLevel::Regency => &mut self.regency,
            RegionLevel::District => &mut self.district,
            RegionLevel::Village => &mut self.village,
        }
    }

    /// Id of the parent selection that scopes `level`.
    ///
    /// Outer `None` means the level is not fetch-eligible. `Some(None)` is the root.
    pub fn parent_key(&self, level: RegionLevel) -> Option<Option<&str>> {
        match level.parent() {
            None => Some(None),
            Some(parent) => self.get(parent).map(Some),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.village.is_some()
    }

    /// Set `level` to `region_id` and clear every level below it.
    ///
    /// An empty or missing id clears `level` itself as well.
    pub fn select(
        &mut self,
        level: RegionLevel,
        region_id: Option<String>,
    ) -> Result<(), SelectionError> {
        let region_id = region_id.filter(|id| !id.is_empty());

        if let (Some(_), Some(parent)) = (&region_id, level.parent()) {
            if self.get(parent).is_none() {
                return Err(SelectionError::ParentNotSelected { level, parent });
            }
        }

        *self.slot_mut(level) = region_id;
        for below in level.descendants() {
            *self.slot_mut(below) = None;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_selection() -> HierarchySelection {
        let mut selection = HierarchySelection::default();
        selection
            .select(RegionLevel::Province, Some("31".into()))
            .unwrap();
        selection
            .select(RegionLevel::Regency, Some("3171".into()))
            .unwrap();
        selection
            .select(RegionLevel::District, Some("3171070".into()))
            .unwrap();
        selection
            .select(RegionLevel::Village, Some("3171070002".into()))
            .unwrap();
        selection
    }

    #[test]
    fn test_select_clears_every_descendant() {
        for level in RegionLevel::ALL {
            let mut selection = full_selection();
            selection.select(level, Some("x".into())).unwrap();

            assert_eq!(selection.get(level), Some("x"));
            for below in level.descendants() {
                assert_eq!(selection.get(below), None, "{} left set after {}", below, level);
            }
            for above in RegionLevel::ALL.iter().take(level.index()) {
                assert!(selection.get(*above).is_some());
            }
        }
    }

    #[test]
    fn test_select_rejects_missing_parent() {
        let mut selection = HierarchySelection::default();
        let err = selection
            .select(RegionLevel::District, Some("3171070".into()))
            .unwrap_err();
        assert_eq!(
            err,
            SelectionError::ParentNotSelected {
                level: RegionLevel::District,
                parent: RegionLevel::Regency,
            }
        );
        assert_eq!(selection, HierarchySelection::default());
    }

    #[test]
    fn test_empty_id_clears_level_and_below() {
        let mut selection = full_selection();
        selection
            .select(RegionLevel::Regency, Some(String::new()))
            .unwrap();
        assert_eq!(selection.province.as_deref(), Some("31"));
        assert_eq!(selection.regency, None);
        assert_eq!(selection.district, None);
        assert_eq!(selection.village, None);
    }

    #[test]
    fn test_clearing_orphan_level_is_allowed() {
        let mut selection = HierarchySelection::default();
        assert!(selection.select(RegionLevel::Village, None).is_ok());
    }

    #[test]
    fn test_parent_key() {
        let mut selection = HierarchySelection::default();
        assert_eq!(selection.parent_key(RegionLevel::Province), Some(None));
        assert_eq!(selection.parent_key(RegionLevel::Regency), None);

        selection
            .select(RegionLevel::Province, Some("31".into()))
            .unwrap();
        assert_eq!(selection.parent_key(RegionLevel::Regency), Some(Some("31")));
        assert_eq!(selection.parent_key(RegionLevel::District), None);
    }
}
