//! Anthropic Messages data models
//!
//! This module defines the request and response structures for the Claude
//! Messages format as accepted by Bedrock `InvokeModel`. Only single-turn
//! text exchanges are modelled.

use crate::core::constants::{BEDROCK_ANTHROPIC_VERSION, content, role};
use crate::models::{ModelParams, ModelResponse};
use serde::{Deserialize, Serialize};

/// Text content block
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentBlock {
    #[serde(rename = "type")]
    pub content_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// Message with role and content
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub role: String,
    pub content: Vec<ContentBlock>,
}

/// Messages request body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessagesRequest {
    pub anthropic_version: String,
    pub max_tokens: u32,
    pub temperature: f64,
    pub top_p: f64,
    pub top_k: u32,
    pub messages: Vec<Message>,
}

impl MessagesRequest {
    /// Build a single user turn carrying `prompt`.
    pub fn new(prompt: &str, params: &ModelParams) -> Self {
        Self {
            anthropic_version: BEDROCK_ANTHROPIC_VERSION.to_string(),
            max_tokens: params.max_tokens,
            temperature: params.temperature,
            top_p: params.top_p,
            top_k: params.top_k,
            messages: vec![Message {
                role: role::USER.to_string(),
                content: vec![ContentBlock {
                    content_type: content::TEXT.to_string(),
                    text: Some(prompt.to_string()),
                }],
            }],
        }
    }
}

/// Messages response body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessagesResponse {
    #[serde(rename = "type", default)]
    pub response_type: Option<String>,
    pub content: Vec<ContentBlock>,
    #[serde(default)]
    pub stop_reason: Option<String>,
    #[serde(default)]
    pub stop_sequence: Option<String>,
}

impl From<MessagesResponse> for ModelResponse {
    fn from(response: MessagesResponse) -> Self {
        // Non-text blocks carry no completion text
        let completion = response
            .content
            .iter()
            .filter(|block| block.content_type == content::TEXT)
            .filter_map(|block| block.text.as_deref())
            .collect::<Vec<_>>()
            .join("\n");

        ModelResponse {
            response_type: response.response_type,
            completion,
            stop_reason: response.stop_reason,
            stop: response.stop_sequence,
        }
    }
}
