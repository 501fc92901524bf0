mod level;
mod region;
mod selection;

pub use level::RegionLevel;
pub use region::{Region, ResolvedAddressNames};
pub use selection::{HierarchySelection, SelectionError};
