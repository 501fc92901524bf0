mod address_session_dto;

pub use address_session_dto::*;
