//! Address sessions: one in-progress address form held in memory.
//!
//! A session wraps a [`HierarchyResolver`](crate::features::regions::services::HierarchyResolver)
//! and the postal code state for its current selection. Region lists and
//! postal lookups run as background tasks; clients poll the session snapshot.
//! Idle sessions are dropped by [`workers::SessionSweeper`].
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | POST | `/api/address-sessions` | Start a session |
//! | GET | `/api/address-sessions/{id}` | Session snapshot |
//! | PUT | `/api/address-sessions/{id}/selection` | Select or clear a level |
//! | POST | `/api/address-sessions/{id}/levels/{level}/retry` | Retry a failed level |
//! | DELETE | `/api/address-sessions/{id}` | Discard a session |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;
pub mod workers;

pub use services::AddressSessionService;
pub use workers::SessionSweeper;
