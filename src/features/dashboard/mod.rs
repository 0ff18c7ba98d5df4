//! Public dashboard.
//!
//! Summary statistics over the live report store, cached until the store
//! changes.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | GET | `/api/dashboard/summary` | No | Totals, hotspots and category counts |

pub mod dtos;
pub mod handlers;
pub mod routes;
pub mod services;

pub use routes::routes;
pub use services::DashboardService;
