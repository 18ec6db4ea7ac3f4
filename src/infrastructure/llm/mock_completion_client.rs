use std::sync::Mutex;

use async_trait::async_trait;

use crate::application::ports::{CompletionClient, CompletionClientError, CompletionRequest};

/// Test double returning a canned answer, or a transport error when built
/// with [`MockCompletionClient::failing`]. Records the requests it received.
pub struct MockCompletionClient {
    response: Result<String, String>,
    requests: Mutex<Vec<CompletionRequest>>,
}

impl MockCompletionClient {
    pub fn answering(text: impl Into<String>) -> Self {
        Self {
            response: Ok(text.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            response: Err(message.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn received_requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().expect("mock mutex poisoned").clone()
    }
}

#[async_trait]
impl CompletionClient for MockCompletionClient {
    async fn complete(
        &self,
        request: &CompletionRequest,
    ) -> Result<String, CompletionClientError> {
        self.requests
            .lock()
            .expect("mock mutex poisoned")
            .push(request.clone());

        match &self.response {
            Ok(text) => Ok(text.clone()),
            Err(message) => Err(CompletionClientError::ApiRequestFailed(message.clone())),
        }
    }
}
