mod chat_message;

pub use chat_message::{ChatMessage, ChatReply, ConversationTurn};
