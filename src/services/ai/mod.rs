pub mod gateway;
pub mod openai;
pub mod prompts;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::models::{GenerationRequest, GenerationResult};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub role: String,
    pub content: String,
}

impl Message {
    pub fn system(content: &str) -> Self {
        Self {
            role: "system".to_string(),
            content: content.to_string(),
        }
    }

    pub fn user(content: &str) -> Self {
        Self {
            role: "user".to_string(),
            content: content.to_string(),
        }
    }
}

/// How a single completion attempt failed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CompletionError {
    #[error("rate limited: {0}")]
    RateLimited(String),

    #[error("{0}")]
    Service(String),
}

/// One call to a text-completion service. Retries live in the gateway.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    async fn complete(
        &self,
        request: &GenerationRequest,
        api_key: &str,
    ) -> Result<String, CompletionError>;
}

/// Something that can turn a request into generated text or a failure.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, request: &GenerationRequest) -> GenerationResult;

    fn label(&self) -> &'static str;
}
