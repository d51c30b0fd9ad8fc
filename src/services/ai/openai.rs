use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::json;

use super::{CompletionError, CompletionProvider, Message};
use crate::models::GenerationRequest;

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

pub struct OpenAiProvider {
    base_url: String,
    model: String,
    client: reqwest::Client,
}

impl OpenAiProvider {
    pub fn new(base_url: String, model: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            model,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl CompletionProvider for OpenAiProvider {
    async fn complete(
        &self,
        request: &GenerationRequest,
        api_key: &str,
    ) -> Result<String, CompletionError> {
        let messages = [
            Message::system(&request.system_instruction),
            Message::user(&request.prompt),
        ];

        let body = json!({
            "model": self.model,
            "messages": messages,
            "temperature": request.temperature,
            "max_tokens": request.max_output_tokens,
        });

        let resp = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| CompletionError::Service(format!("failed to call OpenAI API: {e}")))?;

        let status = resp.status();
        let raw = resp
            .text()
            .await
            .map_err(|e| CompletionError::Service(format!("failed to read OpenAI response: {e}")))?;

        classify_response(status, &raw)
    }
}

fn classify_response(status: StatusCode, raw: &str) -> Result<String, CompletionError> {
    let data: Option<serde_json::Value> = serde_json::from_str(raw).ok();

    if status == StatusCode::TOO_MANY_REQUESTS {
        return Err(CompletionError::RateLimited(error_message(data.as_ref(), raw)));
    }

    if !status.is_success() {
        return Err(CompletionError::Service(format!(
            "OpenAI API error ({status}): {}",
            error_message(data.as_ref(), raw)
        )));
    }

    let data = data.ok_or_else(|| {
        CompletionError::Service("failed to parse OpenAI response".to_string())
    })?;

    let message = &data["choices"][0]["message"];
    if !message.is_object() {
        return Err(CompletionError::Service(
            "missing message in OpenAI response".to_string(),
        ));
    }

    // A null content is a valid, empty completion.
    Ok(message["content"].as_str().unwrap_or_default().to_string())
}

fn error_message(data: Option<&serde_json::Value>, raw: &str) -> String {
    data.and_then(|d| d["error"]["message"].as_str())
        .map(str::to_string)
        .unwrap_or_else(|| raw.trim().to_string())
}
