//! Bedrock model client
//!
//! This module wraps a [`Provider`] with the body dialect of the configured
//! model: it builds the JSON request for a prompt, sends it, and parses the
//! JSON response. Errors are surfaced unchanged; there is no retry.

use crate::core::constants::stop;
use crate::core::provider::{Provider, ProviderError};
use crate::models::{ApiFormat, ModelParams, ModelResponse};
use std::sync::Arc;
use std::time::Instant;
use tracing::{Instrument, debug, info_span, warn};

/// Error types that can occur while invoking a model
#[derive(Debug, thiserror::Error)]
pub enum InvokeError {
    #[error("failed to marshal request body: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("failed to invoke model: {0}")]
    Provider(#[from] ProviderError),

    #[error("failed to unmarshal response: {0}")]
    Decode(#[source] serde_json::Error),
}

/// Client sending single prompts to a Bedrock-hosted model
#[derive(Clone)]
pub struct BedrockClient {
    provider: Arc<dyn Provider>,
    format: ApiFormat,
}

impl BedrockClient {
    /// Create a new client
    ///
    /// # Arguments
    ///
    /// * `provider` - Transport used to reach the Bedrock runtime
    /// * `format` - Body dialect expected by the configured model
    pub fn new(provider: Arc<dyn Provider>, format: ApiFormat) -> Self {
        Self { provider, format }
    }

    pub fn provider_name(&self) -> &str {
        self.provider.provider_name()
    }

    /// Invoke the model with `prompt` and return its completion
    pub async fn invoke_model(
        &self,
        prompt: &str,
        params: &ModelParams,
    ) -> Result<ModelResponse, InvokeError> {
        let request_id = uuid::Uuid::new_v4().to_string();
        let span = info_span!("invoke_model", %request_id, model_id = %params.model_id);

        self.send(prompt, params).instrument(span).await
    }

    async fn send(&self, prompt: &str, params: &ModelParams) -> Result<ModelResponse, InvokeError> {
        let body = self
            .format
            .encode(prompt, params)
            .map_err(InvokeError::Encode)?;
        debug!("Sending {} byte {} request", body.len(), self.format.as_str());

        let started = Instant::now();
        let raw = self.provider.invoke(&params.model_id, body).await?;
        let response = self.format.decode(&raw).map_err(InvokeError::Decode)?;

        debug!(
            "Completed {} in {:?} (stop_reason: {}, stop: {:?})",
            response.response_type.as_deref().unwrap_or("response"),
            started.elapsed(),
            response.stop_reason.as_deref().unwrap_or("none"),
            response.stop
        );
        if response.stop_reason.as_deref() == Some(stop::MAX_TOKENS) {
            warn!("Completion truncated at max_tokens = {}", params.max_tokens);
        }

        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::providers::mock::MockProvider;

    fn client(provider: MockProvider) -> (BedrockClient, Arc<MockProvider>) {
        let provider = Arc::new(provider);
        (
            BedrockClient::new(provider.clone(), ApiFormat::TextCompletion),
            provider,
        )
    }

    #[tokio::test]
    async fn test_invoke_model_round_trip() {
        let (client, provider) = client(MockProvider::completing(" Paris."));
        let params = ModelParams::claude_defaults("anthropic.claude-v2:1");

        let response = client.invoke_model("Capital of France?", &params).await.unwrap();

        assert_eq!(response.completion, " Paris.");
        assert_eq!(provider.request_count(), 1);
        let (model_id, body) = provider.request(0);
        assert_eq!(model_id, "anthropic.claude-v2:1");
        assert_eq!(body["prompt"], "\n\nHuman: Capital of France?\n\nAssistant:");
        assert_eq!(body["max_tokens_to_sample"], 500);
    }

    #[tokio::test]
    async fn test_provider_error_surfaces() {
        let (client, _) = client(
            MockProvider::completing("unused")
                .then_reply(Err(ProviderError::RateLimit("slow down".to_string()))),
        );
        let params = ModelParams::claude_defaults("anthropic.claude-v2:1");

        let err = client.invoke_model("Hi", &params).await.unwrap_err();

        assert!(matches!(err, InvokeError::Provider(ProviderError::RateLimit(_))));
        assert_eq!(
            err.to_string(),
            "failed to invoke model: Rate limit exceeded: slow down"
        );
    }

    #[tokio::test]
    async fn test_malformed_response_is_decode_error() {
        let (client, _) = client(MockProvider::completing("unused").then_reply(Ok("<html>")));
        let params = ModelParams::claude_defaults("anthropic.claude-v2:1");

        let err = client.invoke_model("Hi", &params).await.unwrap_err();

        assert!(matches!(err, InvokeError::Decode(_)));
        assert!(err.to_string().starts_with("failed to unmarshal response"));
    }

    #[tokio::test]
    async fn test_messages_format() {
        let provider = Arc::new(MockProvider::completing("unused").then_reply(Ok(
            r#"{"type":"message","content":[{"type":"text","text":"Bonjour"}],"stop_reason":"end_turn"}"#,
        )));
        let client = BedrockClient::new(provider.clone(), ApiFormat::Messages);
        let params = ModelParams::claude_defaults("anthropic.claude-3-haiku-20240307-v1:0");

        let response = client.invoke_model("Translate hello", &params).await.unwrap();

        assert_eq!(response.completion, "Bonjour");
        let (_, body) = provider.request(0);
        assert_eq!(body["anthropic_version"], "bedrock-2023-05-31");
        assert_eq!(body["messages"][0]["content"][0]["text"], "Translate hello");
    }
}
