//! Constants for model invocation
//!
//! This module defines string constants used throughout the application for
//! prompt framing, content types, stop reasons and default sampling values.

/// Text completion prompt framing
pub mod framing {
    /// Marker opening the human turn
    pub const HUMAN: &str = "\n\nHuman: ";

    /// Marker opening the assistant turn
    pub const ASSISTANT: &str = "\n\nAssistant:";
}

/// Message role constants
pub mod role {
    /// User role identifier
    pub const USER: &str = "user";
}

/// Content type constants
pub mod content {
    /// Text content block type
    pub const TEXT: &str = "text";

    /// MIME type for request and response bodies
    pub const JSON: &str = "application/json";
}

/// Stop reason constants
pub mod stop {
    /// Generation hit the token limit (both formats)
    pub const MAX_TOKENS: &str = "max_tokens";
}

/// Anthropic version pinned by Bedrock for the Messages API
pub const BEDROCK_ANTHROPIC_VERSION: &str = "bedrock-2023-05-31";

/// Default sampling values for Claude models
pub mod defaults {
    pub const TEMPERATURE: f64 = 0.7;
    pub const TOP_P: f64 = 1.0;
    pub const TOP_K: u32 = 500;
    pub const MAX_TOKENS: u32 = 500;
}
