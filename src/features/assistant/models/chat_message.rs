use chrono::{DateTime, Utc};
use std::sync::atomic::{AtomicI64, Ordering};

static LAST_MESSAGE_ID: AtomicI64 = AtomicI64::new(0);

/// Next message id: the current epoch millisecond, bumped past the previous id
/// so ids stay strictly increasing within the process.
fn next_message_id(now: DateTime<Utc>) -> String {
    let millis = now.timestamp_millis();
    let previous = LAST_MESSAGE_ID
        .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
            Some(millis.max(last + 1))
        })
        .unwrap_or(millis);

    millis.max(previous + 1).to_string()
}

/// One entry of a conversation with the assistant
#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub id: String,
    pub content: String,
    pub is_user: bool,
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    fn new(content: impl Into<String>, is_user: bool) -> Self {
        let timestamp = Utc::now();
        Self {
            id: next_message_id(timestamp),
            content: content.into(),
            is_user,
            timestamp,
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(content, true)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(content, false)
    }
}

/// A prior turn as supplied by the client: just the text and who wrote it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversationTurn {
    pub content: String,
    pub is_user: bool,
}

/// Result of a chat exchange. `is_fallback` is set when the reply came from
/// the local canned answers instead of the completion service.
#[derive(Debug, Clone)]
pub struct ChatReply {
    pub message: ChatMessage,
    pub is_fallback: bool,
}
