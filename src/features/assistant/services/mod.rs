mod chat_gateway;
mod completion_client;
mod fallback;

pub use chat_gateway::ChatGateway;
pub use completion_client::OpenAiCompletionClient;

#[cfg(test)]
pub use completion_client::{CompletionClient, CompletionError, CompletionMessage};
