//! Legal assistant chat.
//!
//! Questions are relayed to an OpenAI-compatible completion service together
//! with a system prompt on Ghanaian mining law. Any upstream failure is
//! answered from a keyword-matched table of canned responses instead.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | POST | `/api/chat` | No | Ask a question |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::{ChatGateway, OpenAiCompletionClient};
