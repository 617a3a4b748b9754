//! Bedrock Prompt Engineering Demo
//!
//! An interactive CLI that sends zero-shot, few-shot and chain-of-thought
//! example prompts to a Claude model hosted on Amazon Bedrock and prints the
//! completions.

mod cli;
mod core;
mod models;
mod prompting;

use crate::cli::session::Session;
use crate::core::client::BedrockClient;
use crate::core::config::Config;
use crate::core::logging::init_logging;
use crate::core::provider::{Provider, ProviderType};
use crate::core::providers::{BedrockHttpProvider, BedrockSdkProvider};
use std::io;
use std::sync::Arc;
use tracing::{error, info};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Check for --help flag
    if std::env::args().any(|arg| arg == "--help" || arg == "-h") {
        print_help();
        return;
    }

    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Configuration Error: {:#}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config.log_level);

    // Create provider based on configuration
    let provider: Arc<dyn Provider> = match config.provider {
        ProviderType::Sdk => Arc::new(
            BedrockSdkProvider::new(
                config.aws_region.clone(),
                config.endpoint_url.clone(),
                config.request_timeout,
            )
            .await,
        ),
        ProviderType::ApiKey => match BedrockHttpProvider::new(
            config.aws_region.as_deref(),
            config.endpoint_url.as_deref(),
            config.bedrock_api_key.clone().unwrap_or_default(),
            config.request_timeout,
        ) {
            Ok(provider) => Arc::new(provider),
            Err(e) => {
                error!("Error creating Bedrock client: {}", e);
                std::process::exit(1);
            }
        },
    };

    let client = BedrockClient::new(provider, config.api_format);
    info!(
        "Using provider: {} (model: {}, format: {})",
        client.provider_name(),
        config.model_id,
        config.api_format.as_str()
    );

    let mut session = Session::new(
        &client,
        config.default_params(),
        io::stdin().lock(),
        io::stdout(),
    );
    if let Err(e) = session.run().await {
        error!("Terminal error: {}", e);
        std::process::exit(1);
    }
}

/// Print help message
fn print_help() {
    println!("Bedrock Prompt Engineering Demo v0.1.0");
    println!();
    println!("Usage: bedrock-prompt-lab [OPTIONS]");
    println!();
    println!("Options:");
    println!("  -h, --help    Display this help message");
    println!();
    println!("Configuration is read from CONFIG_PATH (or ./config.toml when present),");
    println!("then from a .env file and the environment.");
    println!();
    println!("Environment variables:");
    println!("  MODEL_ID - Bedrock model or inference profile ID (required)");
    println!("  AWS_REGION - AWS region (falls back to AWS_DEFAULT_REGION)");
    println!("  PROVIDER - sdk (AWS credential chain, default) or api-key");
    println!("  API_FORMAT - text-completion (default) or messages");
    println!("  AWS_BEARER_TOKEN_BEDROCK - Bedrock API key (api-key provider)");
    println!("  BEDROCK_ENDPOINT_URL - Bedrock runtime endpoint override");
    println!("  LOG_LEVEL - Logging level (default: info)");
    println!("  REQUEST_TIMEOUT - Request timeout in seconds (default: 90)");
    println!("  CONFIG_PATH - Path to a TOML configuration file");
}
