use chrono::SecondsFormat;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::assistant::models::{ChatReply, ConversationTurn};

/// A prior conversation entry as sent by the client
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntryDto {
    pub content: String,
    #[serde(default)]
    pub is_user: bool,
}

impl From<HistoryEntryDto> for ConversationTurn {
    fn from(entry: HistoryEntryDto) -> Self {
        Self {
            content: entry.content,
            is_user: entry.is_user,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequestDto {
    /// The question to ask; must be non-blank
    pub message: Option<String>,
    /// Earlier turns, oldest first. Only the last 10 are forwarded.
    #[serde(default)]
    pub conversation_history: Option<Vec<HistoryEntryDto>>,
}

impl ChatRequestDto {
    /// The question text if present and not blank
    pub fn question(&self) -> Option<&str> {
        self.message
            .as_deref()
            .filter(|message| !message.trim().is_empty())
    }

    pub fn history(self) -> Vec<ConversationTurn> {
        self.conversation_history
            .unwrap_or_default()
            .into_iter()
            .map(ConversationTurn::from)
            .collect()
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChatResponseDto {
    pub response: String,
    /// RFC 3339 UTC timestamp with millisecond precision
    pub timestamp: String,
    /// Present and `true` only when the answer came from the canned responses
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback: Option<bool>,
    pub message_id: String,
}

impl From<ChatReply> for ChatResponseDto {
    fn from(reply: ChatReply) -> Self {
        Self {
            timestamp: reply
                .message
                .timestamp
                .to_rfc3339_opts(SecondsFormat::Millis, true),
            fallback: reply.is_fallback.then_some(true),
            message_id: reply.message.id,
            response: reply.message.content,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::assistant::models::ChatMessage;
    use serde_json::json;

    #[test]
    fn test_question_rejects_blank() {
        let dto: ChatRequestDto = serde_json::from_value(json!({ "message": "   " })).unwrap();
        assert!(dto.question().is_none());

        let dto: ChatRequestDto = serde_json::from_value(json!({})).unwrap();
        assert!(dto.question().is_none());

        let dto: ChatRequestDto = serde_json::from_value(json!({ "message": "hi" })).unwrap();
        assert_eq!(dto.question(), Some("hi"));
    }

    #[test]
    fn test_history_defaults_to_empty() {
        let dto: ChatRequestDto = serde_json::from_value(json!({ "message": "hi" })).unwrap();
        assert!(dto.history().is_empty());

        let dto: ChatRequestDto = serde_json::from_value(json!({
            "message": "hi",
            "conversationHistory": [{ "content": "earlier", "isUser": true }]
        }))
        .unwrap();
        assert_eq!(
            dto.history(),
            vec![ConversationTurn {
                content: "earlier".to_string(),
                is_user: true
            }]
        );
    }

    #[test]
    fn test_response_omits_fallback_flag_on_success() {
        let dto = ChatResponseDto::from(ChatReply {
            message: ChatMessage::assistant("answer"),
            is_fallback: false,
        });
        let value = serde_json::to_value(&dto).unwrap();

        assert!(value.get("fallback").is_none());
        assert_eq!(value["response"], "answer");
        assert!(value["timestamp"].as_str().unwrap().ends_with('Z'));
        assert!(value["messageId"].is_string());
    }

    #[test]
    fn test_response_marks_fallback() {
        let dto = ChatResponseDto::from(ChatReply {
            message: ChatMessage::assistant("canned"),
            is_fallback: true,
        });
        let value = serde_json::to_value(&dto).unwrap();
        assert_eq!(value["fallback"], true);
    }
}
