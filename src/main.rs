use std::sync::Arc;

use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use slotcopy::config::{AppConfig, GenerationMode};
use slotcopy::handlers;
use slotcopy::services::ai::gateway::{
    GatewayGenerator, GenerationGateway, OfflineGenerator, RetryPolicy,
};
use slotcopy::services::ai::openai::OpenAiProvider;
use slotcopy::services::ai::TextGenerator;
use slotcopy::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env();

    let generator: Box<dyn TextGenerator> = match config.generation_mode {
        GenerationMode::Offline => {
            tracing::info!("generation disabled, serving template text only");
            Box::new(OfflineGenerator)
        }
        GenerationMode::OpenAi => {
            if config.openai_api_key.is_none() {
                tracing::warn!("OPENAI_API_KEY not set, every request will use template text");
            }
            tracing::info!(
                "using OpenAI generator (model: {}, url: {})",
                config.openai_model,
                config.openai_base_url
            );
            let provider = OpenAiProvider::new(
                config.openai_base_url.clone(),
                config.openai_model.clone(),
            );
            let gateway = GenerationGateway::new(
                Box::new(provider),
                RetryPolicy::with_unit(config.retry_unit),
            );
            Box::new(GatewayGenerator::new(gateway, config.openai_api_key.clone()))
        }
    };

    let state = Arc::new(AppState { generator });

    let app = handlers::router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
