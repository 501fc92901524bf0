mod address_session_handler;

pub use address_session_handler::*;
