//! Bedrock runtime through the AWS SDK
//!
//! Credentials come from the default AWS provider chain (environment,
//! shared profile, SSO, instance metadata), so nothing secret lives in this
//! application's configuration.

use crate::core::constants::content;
use crate::core::provider::{Provider, ProviderError};
use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_config::timeout::TimeoutConfig;
use aws_sdk_bedrockruntime::Client;
use aws_sdk_bedrockruntime::config::Region;
use aws_sdk_bedrockruntime::config::http::HttpResponse;
use aws_sdk_bedrockruntime::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_sdk_bedrockruntime::operation::invoke_model::InvokeModelError;
use aws_sdk_bedrockruntime::primitives::Blob;
use std::time::Duration;
use tracing::{debug, warn};

/// Bedrock runtime provider backed by `aws-sdk-bedrockruntime`
pub struct BedrockSdkProvider {
    client: Client,
}

impl BedrockSdkProvider {
    /// Load the shared AWS config and build a runtime client
    ///
    /// # Arguments
    ///
    /// * `region` - AWS region, falls back to the SDK's region chain when `None`
    /// * `endpoint_url` - Optional endpoint override
    /// * `timeout` - Per-operation timeout in seconds
    pub async fn new(region: Option<String>, endpoint_url: Option<String>, timeout: u64) -> Self {
        let mut loader = aws_config::defaults(BehaviorVersion::latest()).timeout_config(
            TimeoutConfig::builder()
                .operation_timeout(Duration::from_secs(timeout))
                .build(),
        );
        if let Some(region) = region {
            loader = loader.region(Region::new(region));
        }
        if let Some(url) = endpoint_url {
            loader = loader.endpoint_url(url);
        }

        let sdk_config = loader.load().await;
        match sdk_config.region() {
            Some(region) => debug!("Bedrock runtime region: {}", region),
            None => warn!("No AWS region resolved; requests will fail until AWS_REGION is set"),
        }

        Self {
            client: Client::new(&sdk_config),
        }
    }
}

/// Map a modelled `InvokeModel` service error onto [`ProviderError`]
///
/// The response metadata message is preferred; without it the error's own
/// display (`<Exception>: <message>`) is used.
fn classify_service_error(err: &InvokeModelError, status: Option<u16>) -> ProviderError {
    let message = err
        .message()
        .map(str::to_string)
        .unwrap_or_else(|| err.to_string());

    if err.is_access_denied_exception() {
        ProviderError::Authentication(message)
    } else if err.is_throttling_exception() || err.is_service_quota_exceeded_exception() {
        ProviderError::RateLimit(message)
    } else if err.is_validation_exception() {
        ProviderError::BadRequest(message)
    } else if err.is_resource_not_found_exception() {
        ProviderError::ModelNotFound(message)
    } else {
        ProviderError::ApiError {
            status: status.unwrap_or(500),
            message,
        }
    }
}

fn classify_sdk_error(err: SdkError<InvokeModelError, HttpResponse>) -> ProviderError {
    match &err {
        SdkError::ServiceError(context) => {
            classify_service_error(context.err(), Some(context.raw().status().as_u16()))
        }
        SdkError::TimeoutError(_) | SdkError::DispatchFailure(_) | SdkError::ResponseError(_) => {
            ProviderError::Transport(DisplayErrorContext(&err).to_string())
        }
        _ => ProviderError::Unexpected(DisplayErrorContext(&err).to_string()),
    }
}

#[async_trait]
impl Provider for BedrockSdkProvider {
    async fn invoke(&self, model_id: &str, body: Vec<u8>) -> Result<Vec<u8>, ProviderError> {
        let output = self
            .client
            .invoke_model()
            .model_id(model_id)
            .content_type(content::JSON)
            .accept(content::JSON)
            .body(Blob::new(body))
            .send()
            .await
            .map_err(classify_sdk_error)?;

        Ok(output.body().as_ref().to_vec())
    }

    fn provider_name(&self) -> &str {
        "Bedrock (AWS SDK)"
    }
}
