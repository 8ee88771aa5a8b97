use async_trait::async_trait;
use thiserror::Error;

/// Falhas do colaborador de geração de texto.
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("API error: {0}")]
    ApiError(String),

    #[error("Authentication error: {0}")]
    AuthError(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

/// Trait do colaborador de geração de texto. The core only ever supplies a
/// prompt and consumes the generated text.
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Generate a completion for a single user prompt.
    async fn generate(&self, prompt: &str) -> Result<String, LlmError>;

    /// Provider name for logging.
    fn provider_name(&self) -> &str;
}
