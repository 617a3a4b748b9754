//! In-memory provider replaying canned responses

use crate::core::provider::{Provider, ProviderError};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;

/// Records every request body and answers from a queue of canned replies.
/// When the queue is empty, the fallback reply is used.
pub struct MockProvider {
    replies: Mutex<VecDeque<Result<Vec<u8>, ProviderError>>>,
    fallback: String,
    pub requests: Mutex<Vec<(String, serde_json::Value)>>,
}

impl MockProvider {
    /// Always answers with a text completion of `completion`
    pub fn completing(completion: &str) -> Self {
        Self {
            replies: Mutex::new(VecDeque::new()),
            fallback: serde_json::json!({
                "type": "completion",
                "completion": completion,
                "stop_reason": "stop_sequence",
                "stop": "\n\nHuman:"
            })
            .to_string(),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Queue a raw reply ahead of the fallback
    pub fn then_reply(self, reply: Result<&str, ProviderError>) -> Self {
        self.replies
            .lock()
            .unwrap()
            .push_back(reply.map(|body| body.as_bytes().to_vec()));
        self
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn request(&self, index: usize) -> (String, serde_json::Value) {
        self.requests.lock().unwrap()[index].clone()
    }
}

#[async_trait]
impl Provider for MockProvider {
    async fn invoke(&self, model_id: &str, body: Vec<u8>) -> Result<Vec<u8>, ProviderError> {
        let parsed = serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null);
        self.requests
            .lock()
            .unwrap()
            .push((model_id.to_string(), parsed));

        match self.replies.lock().unwrap().pop_front() {
            Some(reply) => reply,
            None => Ok(self.fallback.as_bytes().to_vec()),
        }
    }

    fn provider_name(&self) -> &str {
        "mock"
    }
}
