mod postal_code_handler;

pub use postal_code_handler::*;
