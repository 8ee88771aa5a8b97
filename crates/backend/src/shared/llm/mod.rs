pub mod openai_provider;
pub mod types;

use once_cell::sync::OnceCell;
use std::sync::Arc;

use crate::shared::config::Config;
use openai_provider::OpenAiProvider;
use types::LlmProvider;

static PROVIDER: OnceCell<Option<Arc<dyn LlmProvider>>> = OnceCell::new();

/// Build the text-generation collaborator from configuration. An empty API
/// key leaves the feature disabled rather than failing requests later.
pub fn initialize_provider(config: &Config) {
    let provider: Option<Arc<dyn LlmProvider>> = if config.ai.api_key.trim().is_empty() {
        tracing::warn!("AI API key not configured; analysis features are disabled");
        None
    } else {
        let provider = match &config.ai.api_endpoint {
            Some(endpoint) => OpenAiProvider::new_with_endpoint(
                endpoint.clone(),
                config.ai.api_key.clone(),
                config.ai.model.clone(),
                config.ai.temperature,
                config.ai.max_tokens,
            ),
            None => OpenAiProvider::new(
                config.ai.api_key.clone(),
                config.ai.model.clone(),
                config.ai.temperature,
                config.ai.max_tokens,
            ),
        };
        tracing::info!(
            "AI provider configured: {} / {}",
            provider.provider_name(),
            config.ai.model
        );
        Some(Arc::new(provider))
    };
    let _ = PROVIDER.set(provider);
}

/// `None` means the feature is disabled (no key configured).
pub fn provider() -> Option<Arc<dyn LlmProvider>> {
    PROVIDER.get().cloned().flatten()
}
