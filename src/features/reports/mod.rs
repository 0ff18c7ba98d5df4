//! Community grievance reports.
//!
//! Reports live in an in-process [`ReportStore`] for the lifetime of the
//! server. Other features subscribe to the store to react to new submissions.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | POST | `/api/reports` | No | Submit a grievance |
//! | GET | `/api/reports` | No | List grievances, most recent first |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::{ReportStore, Subscription};
