use std::env;
use std::time::Duration;

use crate::services::ai::openai::{DEFAULT_BASE_URL, DEFAULT_MODEL};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GenerationMode {
    OpenAi,
    Offline,
}

impl GenerationMode {
    pub fn parse(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "offline" | "off" | "fallback" => GenerationMode::Offline,
            _ => GenerationMode::OpenAi,
        }
    }
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub generation_mode: GenerationMode,
    pub openai_api_key: Option<String>,
    pub openai_model: String,
    pub openai_base_url: String,
    pub retry_unit: Duration,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            generation_mode: GenerationMode::parse(
                &env::var("GENERATION_MODE").unwrap_or_default(),
            ),
            openai_api_key: env::var("OPENAI_API_KEY")
                .ok()
                .map(|k| k.trim().to_string())
                .filter(|k| !k.is_empty()),
            openai_model: env::var("OPENAI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            openai_base_url: env::var("OPENAI_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            retry_unit: Duration::from_millis(
                env::var("RETRY_UNIT_MS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(1000),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generation_mode_parse() {
        assert_eq!(GenerationMode::parse("offline"), GenerationMode::Offline);
        assert_eq!(GenerationMode::parse(" Fallback "), GenerationMode::Offline);
        assert_eq!(GenerationMode::parse("openai"), GenerationMode::OpenAi);
        assert_eq!(GenerationMode::parse(""), GenerationMode::OpenAi);
    }
}
