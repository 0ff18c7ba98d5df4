use std::sync::Arc;

use crate::features::assistant::models::{ChatMessage, ChatReply, ConversationTurn};
use crate::shared::constants::MAX_HISTORY_MESSAGES;
use crate::shared::prompts::render_assistant_prompt;

use super::completion_client::{CompletionClient, CompletionError, CompletionMessage, CompletionRole};
use super::fallback::fallback_response;

/// Build the message list sent to the completion service: the system
/// instruction, at most the last [`MAX_HISTORY_MESSAGES`] prior turns, then
/// the new question.
pub fn build_messages(
    system_prompt: &str,
    history: &[ConversationTurn],
    question: &str,
) -> Vec<CompletionMessage> {
    let start = history.len().saturating_sub(MAX_HISTORY_MESSAGES);
    let recent = &history[start..];

    let mut messages = Vec::with_capacity(recent.len() + 2);
    messages.push(CompletionMessage::new(CompletionRole::System, system_prompt));
    messages.extend(recent.iter().map(|turn| {
        let role = if turn.is_user {
            CompletionRole::User
        } else {
            CompletionRole::Assistant
        };
        CompletionMessage::new(role, turn.content.clone())
    }));
    messages.push(CompletionMessage::new(CompletionRole::User, question));
    messages
}

/// Relays questions to the completion service and degrades to canned
/// answers on any failure. [`ChatGateway::respond`] never fails.
pub struct ChatGateway {
    client: Arc<dyn CompletionClient>,
}

impl ChatGateway {
    pub fn new(client: Arc<dyn CompletionClient>) -> Self {
        Self { client }
    }

    pub async fn respond(&self, question: &ChatMessage, history: &[ConversationTurn]) -> ChatReply {
        match self.complete(&question.content, history).await {
            Ok(text) => {
                tracing::info!(
                    "Assistant replied from completion service: question_id={}, history={}",
                    question.id,
                    history.len()
                );
                ChatReply {
                    message: ChatMessage::assistant(text),
                    is_fallback: false,
                }
            }
            Err(e) => {
                tracing::warn!(
                    "Completion failed, using fallback response: question_id={}, error={}",
                    question.id,
                    e
                );
                ChatReply {
                    message: ChatMessage::assistant(fallback_response(&question.content)),
                    is_fallback: true,
                }
            }
        }
    }

    async fn complete(
        &self,
        question: &str,
        history: &[ConversationTurn],
    ) -> Result<String, CompletionError> {
        let system_prompt =
            render_assistant_prompt().map_err(|e| CompletionError::Prompt(e.to_string()))?;
        let messages = build_messages(&system_prompt, history, question);
        self.client.complete(&messages).await
    }
}
