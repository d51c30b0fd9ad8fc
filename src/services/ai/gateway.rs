use std::time::Duration;

use async_trait::async_trait;

use super::{CompletionError, CompletionProvider, TextGenerator};
use crate::models::{GenerationError, GenerationRequest, GenerationResult};

/// Exponential backoff for rate-limited attempts. Delays are expressed in
/// multiples of `unit`.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub initial_delay: f64,
    pub multiplier: f64,
    pub max_delay: f64,
    pub unit: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            initial_delay: 1.0,
            multiplier: 1.8,
            max_delay: 12.0,
            unit: Duration::from_secs(1),
        }
    }
}

impl RetryPolicy {
    pub fn with_unit(unit: Duration) -> Self {
        Self {
            unit,
            ..Self::default()
        }
    }

    /// Sleeps taken between attempts, in order. There is one fewer than
    /// `max_attempts` since nothing waits after the last attempt.
    pub fn delays(&self) -> Vec<Duration> {
        let mut delay = self.initial_delay;
        (1..self.max_attempts)
            .map(|_| {
                let current = delay.min(self.max_delay);
                delay = (delay * self.multiplier).min(self.max_delay);
                self.unit.mul_f64(current)
            })
            .collect()
    }
}

pub struct GenerationGateway {
    provider: Box<dyn CompletionProvider>,
    policy: RetryPolicy,
}

impl GenerationGateway {
    pub fn new(provider: Box<dyn CompletionProvider>, policy: RetryPolicy) -> Self {
        Self { provider, policy }
    }

    pub async fn generate(
        &self,
        request: &GenerationRequest,
        credential: Option<&str>,
    ) -> GenerationResult {
        let Some(api_key) = credential.map(str::trim).filter(|k| !k.is_empty()) else {
            tracing::info!("no credential configured, skipping generation");
            return GenerationResult::Failure(GenerationError::MissingCredential);
        };

        let delays = self.policy.delays();
        let mut last_rate_limit = String::new();

        for attempt in 1..=self.policy.max_attempts {
            match self.provider.complete(request, api_key).await {
                Ok(text) => {
                    tracing::debug!(attempt, "generation succeeded");
                    return GenerationResult::Success(text.trim().to_string());
                }
                Err(CompletionError::RateLimited(msg)) => {
                    last_rate_limit = msg;
                    let Some(delay) = delays.get(attempt as usize - 1) else {
                        break;
                    };
                    tracing::warn!(
                        attempt,
                        max_attempts = self.policy.max_attempts,
                        delay_ms = delay.as_millis() as u64,
                        "generation rate limited, backing off"
                    );
                    tokio::time::sleep(*delay).await;
                }
                Err(CompletionError::Service(msg)) => {
                    tracing::error!(attempt, error = %msg, "generation failed");
                    return GenerationResult::Failure(GenerationError::Service(msg));
                }
            }
        }

        tracing::warn!(
            max_attempts = self.policy.max_attempts,
            "generation rate limited on every attempt"
        );
        if last_rate_limit.trim().is_empty() {
            last_rate_limit = "Rate limited".to_string();
        }
        GenerationResult::Failure(GenerationError::RateLimited(last_rate_limit))
    }
}

/// Network-backed generator: the gateway plus the configured credential.
pub struct GatewayGenerator {
    gateway: GenerationGateway,
    credential: Option<String>,
}

impl GatewayGenerator {
    pub fn new(gateway: GenerationGateway, credential: Option<String>) -> Self {
        Self {
            gateway,
            credential,
        }
    }
}

#[async_trait]
impl TextGenerator for GatewayGenerator {
    async fn generate(&self, request: &GenerationRequest) -> GenerationResult {
        self.gateway
            .generate(request, self.credential.as_deref())
            .await
    }

    fn label(&self) -> &'static str {
        "openai"
    }
}

/// Never generates; every caller lands on the deterministic templates.
pub struct OfflineGenerator;

#[async_trait]
impl TextGenerator for OfflineGenerator {
    async fn generate(&self, _request: &GenerationRequest) -> GenerationResult {
        GenerationResult::Failure(GenerationError::Disabled)
    }

    fn label(&self) -> &'static str {
        "offline"
    }
}
