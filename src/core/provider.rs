//! Provider abstraction layer for Bedrock transports
//!
//! This module defines a common trait for the ways a request body can reach
//! the Bedrock runtime (AWS SDK with ambient credentials, or plain HTTPS with
//! a Bedrock API key).

use async_trait::async_trait;
use thiserror::Error;

/// Error types for provider operations
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("Authentication failed: {0}")]
    Authentication(String),

    #[error("Rate limit exceeded: {0}")]
    RateLimit(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Model not found: {0}")]
    ModelNotFound(String),

    #[error("API error (status {status}): {message}")]
    ApiError { status: u16, message: String },

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Trait for Bedrock runtime transports
#[async_trait]
pub trait Provider: Send + Sync {
    /// Send a JSON body to `InvokeModel` for `model_id`, returning the raw
    /// JSON response body
    async fn invoke(&self, model_id: &str, body: Vec<u8>) -> Result<Vec<u8>, ProviderError>;

    /// Get the provider name
    fn provider_name(&self) -> &str;
}

/// Supported provider types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProviderType {
    /// AWS SDK with the default credential chain
    #[default]
    Sdk,
    /// HTTPS with a Bedrock API key as bearer token
    ApiKey,
}

impl ProviderType {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "sdk" | "aws" | "default" => Some(ProviderType::Sdk),
            "api-key" | "api_key" | "apikey" | "bearer" => Some(ProviderType::ApiKey),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_type_from_str() {
        assert_eq!(ProviderType::from_str("SDK"), Some(ProviderType::Sdk));
        assert_eq!(ProviderType::from_str("api-key"), Some(ProviderType::ApiKey));
        assert_eq!(ProviderType::from_str("bearer"), Some(ProviderType::ApiKey));
        assert_eq!(ProviderType::from_str("vertexai"), None);
    }

    #[test]
    fn test_error_display() {
        let err = ProviderError::ApiError {
            status: 503,
            message: "Service unavailable".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "API error (status 503): Service unavailable"
        );
    }
}
