mod kodepos_client;
mod postal_search_source;

pub use kodepos_client::KodeposClient;
pub use postal_search_source::PostalSearchSource;
