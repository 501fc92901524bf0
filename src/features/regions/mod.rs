//! Indonesian administrative regions (wilayah) feature.
//!
//! Region lists come from the public api-wilayah-indonesia dataset; nothing is
//! stored locally. This feature owns the cascading selection state machine
//! ([`services::HierarchyResolver`]) used by address sessions, and a set of
//! stateless pass-through endpoints.
//!
//! ## Data Hierarchy
//!
//! - Level 1: Provinces (Provinsi)
//! - Level 2: Regencies/Cities (Kabupaten/Kota)
//! - Level 3: Districts (Kecamatan)
//! - Level 4: Villages (Kelurahan/Desa)
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/regions/provinces` | List all provinces |
//! | GET | `/api/regions/provinces/{id}/regencies` | List regencies in a province |
//! | GET | `/api/regions/regencies/{id}/districts` | List districts in a regency |
//! | GET | `/api/regions/districts/{id}/villages` | List villages in a district |

pub mod clients;
pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use clients::WilayahClient;
pub use services::RegionService;
