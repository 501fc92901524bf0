mod postal_code_dto;

pub use postal_code_dto::*;
