pub mod address_sessions;
pub mod postal_codes;
pub mod regions;
