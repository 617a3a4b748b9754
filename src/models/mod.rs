//! Model invocation data models
//!
//! This module contains the parameter and response records shared by every
//! request, plus the two body dialects Claude models accept on Bedrock.

pub mod completion;
pub mod messages;

use crate::core::constants::defaults;
use completion::{TextCompletionRequest, TextCompletionResponse};
use messages::{MessagesRequest, MessagesResponse};
use serde::{Deserialize, Serialize};

/// Sampling parameters for a single invocation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelParams {
    /// Bedrock model identifier, e.g. `anthropic.claude-v2:1`
    pub model_id: String,
    /// Creativity of the output (0.0 to 1.0)
    pub temperature: f64,
    /// Nucleus sampling mass (0.0 to 1.0)
    pub top_p: f64,
    /// Limits sampling to the k most probable tokens
    pub top_k: u32,
    /// Maximum number of tokens to generate
    pub max_tokens: u32,
}

impl ModelParams {
    /// Default parameters for Claude models
    pub fn claude_defaults(model_id: impl Into<String>) -> Self {
        Self {
            model_id: model_id.into(),
            temperature: defaults::TEMPERATURE,
            top_p: defaults::TOP_P,
            top_k: defaults::TOP_K,
            max_tokens: defaults::MAX_TOKENS,
        }
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }
}

/// Completion returned by the model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelResponse {
    #[serde(rename = "type")]
    pub response_type: Option<String>,
    pub completion: String,
    pub stop_reason: Option<String>,
    pub stop: Option<String>,
}

/// Body dialect used when talking to the model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ApiFormat {
    /// Legacy `prompt`/`completion` format (Claude v2 and earlier)
    #[default]
    TextCompletion,
    /// Anthropic Messages format (Claude 3 and later)
    Messages,
}

impl ApiFormat {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "text-completion" | "text_completion" | "completion" | "text" => {
                Some(ApiFormat::TextCompletion)
            }
            "messages" | "message" => Some(ApiFormat::Messages),
            _ => None,
        }
    }

    /// Serialize the request body for `prompt`
    pub fn encode(&self, prompt: &str, params: &ModelParams) -> serde_json::Result<Vec<u8>> {
        match self {
            ApiFormat::TextCompletion => {
                serde_json::to_vec(&TextCompletionRequest::new(prompt, params))
            }
            ApiFormat::Messages => serde_json::to_vec(&MessagesRequest::new(prompt, params)),
        }
    }

    /// Parse a response body into a [`ModelResponse`]
    pub fn decode(&self, body: &[u8]) -> serde_json::Result<ModelResponse> {
        match self {
            ApiFormat::TextCompletion => {
                serde_json::from_slice::<TextCompletionResponse>(body).map(Into::into)
            }
            ApiFormat::Messages => serde_json::from_slice::<MessagesResponse>(body).map(Into::into),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ApiFormat::TextCompletion => "text-completion",
            ApiFormat::Messages => "messages",
        }
    }
}
