mod address_session;

pub use address_session::{AddressSession, PostalJob, PostalState, SessionEffects};
