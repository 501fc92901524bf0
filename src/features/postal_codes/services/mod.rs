pub mod matching;
mod postal_code_resolver;

pub use postal_code_resolver::PostalCodeResolver;
