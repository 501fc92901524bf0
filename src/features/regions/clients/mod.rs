mod region_source;
mod wilayah_client;

pub use region_source::RegionDataSource;
pub use wilayah_client::WilayahClient;
