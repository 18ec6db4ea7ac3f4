use async_trait::async_trait;

/// One request to the external text-completion service: a fixed system
/// instruction for the task plus the synthesized user prompt. A single
/// attempt per user action is the complete failure policy; there are no
/// retries and no backoff.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub system: String,
    pub prompt: String,
    pub max_output_tokens: usize,
    pub temperature: f32,
}

#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(&self, request: &CompletionRequest)
    -> Result<String, CompletionClientError>;
}

#[derive(Debug, thiserror::Error)]
pub enum CompletionClientError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("rate limited")]
    RateLimited,
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
