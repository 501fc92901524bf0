mod hierarchy_resolver;
mod region_service;

pub use hierarchy_resolver::{FetchKey, FetchOutcome, HierarchyResolver, LevelStatus};
pub use region_service::RegionService;
