//! Bedrock runtime over plain HTTPS with a Bedrock API key

use crate::core::constants::content;
use crate::core::provider::{Provider, ProviderError};
use async_trait::async_trait;
use reqwest::{Client, Url};
use std::time::Duration;
use tracing::debug;

/// Bedrock runtime provider authenticating with a bearer API key
pub struct BedrockHttpProvider {
    client: Client,
    endpoint: Url,
    api_key: String,
}

impl BedrockHttpProvider {
    /// Create a new HTTP provider
    ///
    /// # Arguments
    ///
    /// * `region` - AWS region hosting the runtime endpoint (e.g., "us-east-1")
    /// * `endpoint_url` - Optional endpoint override, takes precedence over `region`
    /// * `api_key` - Bedrock API key sent as bearer token
    /// * `timeout` - Request timeout in seconds
    pub fn new(
        region: Option<&str>,
        endpoint_url: Option<&str>,
        api_key: String,
        timeout: u64,
    ) -> Result<Self, ProviderError> {
        let endpoint = match (endpoint_url, region) {
            (Some(url), _) => url.to_string(),
            (None, Some(region)) => format!("https://bedrock-runtime.{}.amazonaws.com", region),
            (None, None) => {
                return Err(ProviderError::BadRequest(
                    "A region or endpoint URL is required for the Bedrock API key provider"
                        .to_string(),
                ));
            }
        };
        let endpoint = Url::parse(&endpoint).map_err(|e| {
            ProviderError::BadRequest(format!("Invalid endpoint URL {}: {}", endpoint, e))
        })?;

        let client = Client::builder()
            .timeout(Duration::from_secs(timeout))
            .build()
            .map_err(|e| ProviderError::Unexpected(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoint,
            api_key,
        })
    }

    /// Get the `InvokeModel` URL for the model
    ///
    /// The model id is pushed as a single path segment so inference profile
    /// ARNs keep their `/` percent-encoded.
    fn invoke_url(&self, model_id: &str) -> Result<Url, ProviderError> {
        let mut url = self.endpoint.clone();
        url.path_segments_mut()
            .map_err(|_| {
                ProviderError::BadRequest(format!("Endpoint URL cannot be a base: {}", self.endpoint))
            })?
            .pop_if_empty()
            .push("model")
            .push(model_id)
            .push("invoke");
        Ok(url)
    }

    /// Classify Bedrock errors
    fn classify_error(error_detail: &str) -> String {
        let detail = serde_json::from_str::<serde_json::Value>(error_detail)
            .ok()
            .and_then(|v| {
                v.get("message")
                    .or_else(|| v.get("Message"))
                    .and_then(|m| m.as_str())
                    .map(str::to_string)
            })
            .unwrap_or_else(|| error_detail.to_string());
        let error_lower = detail.to_lowercase();

        if error_lower.contains("don't have access to the model")
            || error_lower.contains("do not have access to the model")
        {
            return "Model access not granted. Enable the model in the Bedrock console."
                .to_string();
        }

        if error_lower.contains("on-demand throughput isn't supported") {
            return "Model requires an inference profile. Use the inference profile ID as MODEL_ID."
                .to_string();
        }

        detail
    }

    /// Map a non-success status and its body onto [`ProviderError`]
    ///
    /// Only 401/403 bodies that blame the key or bearer token get the API key
    /// hint; elsewhere those words may just echo request content.
    fn status_error(status: u16, error_detail: &str) -> ProviderError {
        let message = Self::classify_error(error_detail);

        match status {
            401 | 403 => {
                let lower = message.to_lowercase();
                if lower.contains("api key") || lower.contains("bearer") {
                    ProviderError::Authentication(
                        "Invalid Bedrock API key. Please check AWS_BEARER_TOKEN_BEDROCK."
                            .to_string(),
                    )
                } else {
                    ProviderError::Authentication(message)
                }
            }
            429 => ProviderError::RateLimit(message),
            400 => ProviderError::BadRequest(message),
            404 => ProviderError::ModelNotFound(message),
            _ => ProviderError::ApiError { status, message },
        }
    }
}

#[async_trait]
impl Provider for BedrockHttpProvider {
    async fn invoke(&self, model_id: &str, body: Vec<u8>) -> Result<Vec<u8>, ProviderError> {
        let url = self.invoke_url(model_id)?;
        debug!("POST {}", url);

        let response = self
            .client
            .post(url)
            .header("Content-Type", content::JSON)
            .header("Accept", content::JSON)
            .bearer_auth(&self.api_key)
            .body(body)
            .send()
            .await
            .map_err(|e| ProviderError::Transport(e.to_string()))?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(Self::status_error(status.as_u16(), &error_text));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| ProviderError::Transport(format!("Failed to read response: {}", e)))?;

        Ok(bytes.to_vec())
    }

    fn provider_name(&self) -> &str {
        "Bedrock (API key)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider(region: Option<&str>, endpoint: Option<&str>) -> BedrockHttpProvider {
        BedrockHttpProvider::new(region, endpoint, "key".to_string(), 30).unwrap()
    }

    #[test]
    fn test_invoke_url_from_region() {
        let url = provider(Some("us-east-1"), None)
            .invoke_url("anthropic.claude-v2:1")
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://bedrock-runtime.us-east-1.amazonaws.com/model/anthropic.claude-v2:1/invoke"
        );
    }

    #[test]
    fn test_invoke_url_encodes_arn() {
        let url = provider(None, Some("http://localhost:4566/proxy/"))
            .invoke_url("arn:aws:bedrock:us-east-1:123456789012:inference-profile/us.anthropic.claude")
            .unwrap();
        assert!(url.as_str().starts_with("http://localhost:4566/proxy/model/"));
        assert!(url.as_str().contains("inference-profile%2Fus.anthropic.claude"));
        assert!(url.as_str().ends_with("/invoke"));
    }

    #[test]
    fn test_requires_region_or_endpoint() {
        let result = BedrockHttpProvider::new(None, None, "key".to_string(), 30);
        assert!(matches!(result, Err(ProviderError::BadRequest(_))));
    }

    #[test]
    fn test_classify_extracts_message() {
        let body = r#"{"message":"Malformed input request: temperature out of range"}"#;
        assert_eq!(
            BedrockHttpProvider::classify_error(body),
            "Malformed input request: temperature out of range"
        );
    }

    #[test]
    fn test_classify_model_access() {
        let body = r#"{"Message":"You don't have access to the model with the specified model ID."}"#;
        assert!(BedrockHttpProvider::classify_error(body).contains("Model access"));
    }

    #[test]
    fn test_classify_plain_text_passthrough() {
        assert_eq!(BedrockHttpProvider::classify_error("gateway timeout"), "gateway timeout");
    }

    #[test]
    fn test_status_error_mapping() {
        let body = r#"{"message":"nope"}"#;
        assert!(matches!(
            BedrockHttpProvider::status_error(401, body),
            ProviderError::Authentication(m) if m == "nope"
        ));
        assert!(matches!(
            BedrockHttpProvider::status_error(403, body),
            ProviderError::Authentication(m) if m == "nope"
        ));
        assert!(matches!(
            BedrockHttpProvider::status_error(429, body),
            ProviderError::RateLimit(m) if m == "nope"
        ));
        assert!(matches!(
            BedrockHttpProvider::status_error(400, body),
            ProviderError::BadRequest(m) if m == "nope"
        ));
        assert!(matches!(
            BedrockHttpProvider::status_error(404, body),
            ProviderError::ModelNotFound(m) if m == "nope"
        ));
        match BedrockHttpProvider::status_error(503, body) {
            ProviderError::ApiError { status, message } => {
                assert_eq!(status, 503);
                assert_eq!(message, "nope");
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn test_bad_key_hint_only_on_auth_status() {
        let body = r#"{"message":"Invalid bearer token"}"#;
        match BedrockHttpProvider::status_error(401, body) {
            ProviderError::Authentication(msg) => {
                assert!(msg.contains("AWS_BEARER_TOKEN_BEDROCK"))
            }
            other => panic!("unexpected: {other:?}"),
        }

        let body = r#"{"message":"Malformed input request: prompt mentions a bearer bond"}"#;
        match BedrockHttpProvider::status_error(400, body) {
            ProviderError::BadRequest(msg) => {
                assert_eq!(msg, "Malformed input request: prompt mentions a bearer bond")
            }
            other => panic!("unexpected: {other:?}"),
        }
    }
}
