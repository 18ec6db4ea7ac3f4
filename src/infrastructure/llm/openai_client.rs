use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::application::ports::{CompletionClient, CompletionClientError, CompletionRequest};
use crate::config::LlmSettings;
use crate::domain::ApiCredential;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// Chat-completions client for an OpenAI-compatible endpoint. The credential
/// is scoped to this instance, passed in at construction; there is no
/// process-wide key. One synchronous attempt per call, no retries.
pub struct OpenAiClient {
    client: Client,
    base_url: String,
    credential: ApiCredential,
    model: String,
}

#[derive(Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
    max_tokens: usize,
    temperature: f32,
}

#[derive(Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

impl OpenAiClient {
    pub fn new(credential: ApiCredential, settings: &LlmSettings) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("reqwest client build never fails with valid TLS config");
        Self {
            client,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            credential,
            model: settings.model.clone(),
        }
    }

    fn build_messages(request: &CompletionRequest) -> Vec<ChatMessage> {
        vec![
            ChatMessage {
                role: "system".to_string(),
                content: request.system.clone(),
            },
            ChatMessage {
                role: "user".to_string(),
                content: request.prompt.clone(),
            },
        ]
    }
}

#[async_trait]
impl CompletionClient for OpenAiClient {
    #[tracing::instrument(skip(self, request), fields(model = %self.model, prompt_chars = request.prompt.len()))]
    async fn complete(
        &self,
        request: &CompletionRequest,
    ) -> Result<String, CompletionClientError> {
        let body = ChatCompletionRequest {
            model: self.model.clone(),
            messages: Self::build_messages(request),
            max_tokens: request.max_output_tokens,
            temperature: request.temperature,
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .header(
                "Authorization",
                format!("Bearer {}", self.credential.expose()),
            )
            .json(&body)
            .send()
            .await
            .map_err(|e| CompletionClientError::ApiRequestFailed(e.to_string()))?;

        if response.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(CompletionClientError::RateLimited);
        }

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(CompletionClientError::ApiRequestFailed(format!(
                "HTTP {status}: {body}"
            )));
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| CompletionClientError::InvalidResponse(e.to_string()))?;

        completion
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| CompletionClientError::InvalidResponse("empty choices".to_string()))
    }
}
