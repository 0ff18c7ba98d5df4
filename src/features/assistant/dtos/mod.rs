mod chat_dto;

pub use chat_dto::{ChatRequestDto, ChatResponseDto, HistoryEntryDto};
