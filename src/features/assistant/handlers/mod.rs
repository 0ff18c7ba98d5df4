pub mod chat_handler;

pub use chat_handler::chat;
