use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::assistant::dtos::{ChatRequestDto, ChatResponseDto};
use crate::features::assistant::models::ChatMessage;
use crate::features::assistant::services::ChatGateway;

/// Ask the legal assistant a question
///
/// Always answers with 200 once the message is accepted. When the completion
/// service fails, a canned answer is returned with `fallback: true`.
#[utoipa::path(
    post,
    path = "/api/chat",
    request_body = ChatRequestDto,
    responses(
        (status = 200, description = "Assistant reply", body = ChatResponseDto),
        (status = 400, description = "Message is required")
    ),
    tag = "assistant"
)]
pub async fn chat(
    State(gateway): State<Arc<ChatGateway>>,
    AppJson(dto): AppJson<ChatRequestDto>,
) -> Result<Json<ChatResponseDto>> {
    let question = dto
        .question()
        .map(ChatMessage::user)
        .ok_or_else(|| AppError::BadRequest("Message is required".to_string()))?;
    let history = dto.history();

    let reply = gateway.respond(&question, &history).await;

    Ok(Json(reply.into()))
}
