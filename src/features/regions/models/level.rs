use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One step of the administrative hierarchy, in strict parent → child order.
///
/// - Level 1: Province (Provinsi)
/// - Level 2: Regency/City (Kabupaten/Kota)
/// - Level 3: District (Kecamatan)
/// - Level 4: Village (Kelurahan/Desa)
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum RegionLevel {
    Province,
    #[serde(alias = "city")]
    Regency,
    District,
    Village,
}

impl RegionLevel {
    pub const ALL: [RegionLevel; 4] = [
        RegionLevel::Province,
        RegionLevel::Regency,
        RegionLevel::District,
        RegionLevel::Village,
    ];

    pub fn index(self) -> usize {
        match self {
            RegionLevel::Province => 0,
            RegionLevel::Regency => 1,
            RegionLevel::District => 2,
            RegionLevel::Village => 3,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// The level whose selection scopes this one. `None` for the root.
    pub fn parent(self) -> Option<Self> {
        self.index().checked_sub(1).and_then(Self::from_index)
    }

    pub fn child(self) -> Option<Self> {
        Self::from_index(self.index() + 1)
    }

    /// Levels strictly below this one, nearest first.
    pub fn descendants(self) -> impl Iterator<Item = RegionLevel> {
        std::iter::successors(self.child(), |level| level.child())
    }

    /// Path segment used by the region hierarchy API
    pub fn endpoint(self) -> &'static str {
        match self {
            RegionLevel::Province => "provinces",
            RegionLevel::Regency => "regencies",
            RegionLevel::District => "districts",
            RegionLevel::Village => "villages",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RegionLevel::Province => "province",
            RegionLevel::Regency => "regency",
            RegionLevel::District => "district",
            RegionLevel::Village => "village",
        }
    }
}

impl fmt::Display for RegionLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RegionLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "province" => Ok(RegionLevel::Province),
            // forms label this level "city"
            "regency" | "city" => Ok(RegionLevel::Regency),
            "district" => Ok(RegionLevel::District),
            "village" => Ok(RegionLevel::Village),
            other => Err(format!("Unknown region level '{}'", other)),
        }
    }
}
