//! Postal code (kode pos) lookup for a resolved address.
//!
//! The search index is loosely structured and returns non-unique rows, so a
//! lookup runs up to two searches and narrows the rows with normalized name
//! matching. See [`services::PostalCodeResolver`].
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/postal-codes` | Resolve postal codes for province/regency/district/village names |

pub mod clients;
pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use clients::KodeposClient;
pub use services::PostalCodeResolver;
