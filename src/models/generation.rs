use serde::Serialize;

pub const DEFAULT_TEMPERATURE: f32 = 0.7;
pub const DEFAULT_MAX_OUTPUT_TOKENS: u32 = 500;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerationRequest {
    pub prompt: String,
    pub system_instruction: String,
    pub temperature: f32,
    pub max_output_tokens: u32,
}

impl GenerationRequest {
    /// Temperature is clamped into `[0, 2]` and the token budget to at least 1.
    pub fn new(
        prompt: impl Into<String>,
        system_instruction: impl Into<String>,
        temperature: f32,
        max_output_tokens: u32,
    ) -> Self {
        let temperature = if temperature.is_nan() {
            DEFAULT_TEMPERATURE
        } else {
            temperature.clamp(0.0, 2.0)
        };

        Self {
            prompt: prompt.into(),
            system_instruction: system_instruction.into(),
            temperature,
            max_output_tokens: max_output_tokens.max(1),
        }
    }

    pub fn with_defaults(prompt: impl Into<String>, system_instruction: impl Into<String>) -> Self {
        Self::new(
            prompt,
            system_instruction,
            DEFAULT_TEMPERATURE,
            DEFAULT_MAX_OUTPUT_TOKENS,
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GenerationError {
    #[error("Missing credential")]
    MissingCredential,

    #[error("{0}")]
    RateLimited(String),

    #[error("{0}")]
    Service(String),

    #[error("Generation returned blank text")]
    BlankResult,

    #[error("Generation disabled")]
    Disabled,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationResult {
    Success(String),
    Failure(GenerationError),
}

impl GenerationResult {
    /// Human-readable failure reason, `None` on success.
    pub fn reason(&self) -> Option<String> {
        match self {
            GenerationResult::Success(_) => None,
            GenerationResult::Failure(e) => Some(e.to_string()),
        }
    }

    /// Folds a blank success into `BlankResult`. The gateway itself reports
    /// empty completions as success; callers that want fallback text on
    /// blank output go through here.
    pub fn non_blank(self) -> Result<String, GenerationError> {
        match self {
            GenerationResult::Success(text) if text.trim().is_empty() => {
                Err(GenerationError::BlankResult)
            }
            GenerationResult::Success(text) => Ok(text),
            GenerationResult::Failure(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_clamps_temperature_and_tokens() {
        let req = GenerationRequest::new("p", "s", 3.5, 0);
        assert_eq!(req.temperature, 2.0);
        assert_eq!(req.max_output_tokens, 1);

        let req = GenerationRequest::new("p", "s", -1.0, 200);
        assert_eq!(req.temperature, 0.0);
        assert_eq!(req.max_output_tokens, 200);
    }

    #[test]
    fn test_failure_reasons() {
        let missing = GenerationResult::Failure(GenerationError::MissingCredential);
        assert_eq!(missing.reason().as_deref(), Some("Missing credential"));

        let limited = GenerationResult::Failure(GenerationError::RateLimited("slow down".into()));
        assert_eq!(limited.reason().as_deref(), Some("slow down"));

        assert_eq!(GenerationResult::Success("hi".into()).reason(), None);
    }

    #[test]
    fn test_non_blank() {
        assert_eq!(
            GenerationResult::Success("  \n ".into()).non_blank(),
            Err(GenerationError::BlankResult)
        );
        assert_eq!(
            GenerationResult::Success("text".into()).non_blank(),
            Ok("text".to_string())
        );
        assert_eq!(
            GenerationResult::Failure(GenerationError::Disabled).non_blank(),
            Err(GenerationError::Disabled)
        );
    }
}
