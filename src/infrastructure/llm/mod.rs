mod mock_completion_client;
mod openai_client;

pub use mock_completion_client::MockCompletionClient;
pub use openai_client::OpenAiClient;
