//! CSV export of grievance reports.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | GET | `/api/export/reports` | No | Download all reports as CSV |

pub mod handlers;
pub mod routes;
pub mod services;
