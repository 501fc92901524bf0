mod address_session_service;

pub use address_session_service::AddressSessionService;
