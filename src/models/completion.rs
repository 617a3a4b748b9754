//! Text completion data models
//!
//! Request and response bodies for the legacy Claude text completion format
//! (`prompt` / `completion`) accepted by Bedrock for Claude v2 models.

use crate::core::constants::framing;
use crate::models::{ModelParams, ModelResponse};
use serde::{Deserialize, Serialize};

/// Text completion request body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextCompletionRequest {
    pub prompt: String,
    pub temperature: f64,
    pub top_p: f64,
    pub top_k: u32,
    pub max_tokens_to_sample: u32,
}

impl TextCompletionRequest {
    /// Wrap `prompt` in a single Human/Assistant exchange.
    pub fn new(prompt: &str, params: &ModelParams) -> Self {
        Self {
            prompt: format!("{}{}{}", framing::HUMAN, prompt, framing::ASSISTANT),
            temperature: params.temperature,
            top_p: params.top_p,
            top_k: params.top_k,
            max_tokens_to_sample: params.max_tokens,
        }
    }
}

/// Text completion response body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextCompletionResponse {
    #[serde(rename = "type", default)]
    pub response_type: Option<String>,
    pub completion: String,
    #[serde(default)]
    pub stop_reason: Option<String>,
    #[serde(default)]
    pub stop: Option<String>,
}

impl From<TextCompletionResponse> for ModelResponse {
    fn from(response: TextCompletionResponse) -> Self {
        ModelResponse {
            response_type: response.response_type,
            completion: response.completion,
            stop_reason: response.stop_reason,
            stop: response.stop,
        }
    }
}
