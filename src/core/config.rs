//! Application configuration management
//!
//! This module handles loading and validating configuration from an optional
//! TOML file, a `.env` file and environment variables. All configuration is
//! validated at startup.

use crate::core::constants::defaults;
use crate::core::provider::ProviderType;
use crate::models::{ApiFormat, ModelParams};
use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::Path;

/// Default request timeout in seconds
const DEFAULT_REQUEST_TIMEOUT: u64 = 90;

/// Config file looked up in the working directory when `CONFIG_PATH` is unset
const DEFAULT_CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AwsConfig {
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default)]
    pub endpoint_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ModelConfig {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub api_format: Option<String>,
    #[serde(default = "default_temperature")]
    pub temperature: f64,
    #[serde(default = "default_top_p")]
    pub top_p: f64,
    #[serde(default = "default_top_k")]
    pub top_k: u32,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            id: None,
            api_format: None,
            temperature: default_temperature(),
            top_p: default_top_p(),
            top_k: default_top_k(),
            max_tokens: default_max_tokens(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default = "default_request_timeout")]
    pub request_timeout: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            request_timeout: default_request_timeout(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_request_timeout() -> u64 {
    DEFAULT_REQUEST_TIMEOUT
}

fn default_temperature() -> f64 {
    defaults::TEMPERATURE
}

fn default_top_p() -> f64 {
    defaults::TOP_P
}

fn default_top_k() -> u32 {
    defaults::TOP_K
}

fn default_max_tokens() -> u32 {
    defaults::MAX_TOKENS
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct TomlConfig {
    #[serde(default)]
    pub provider: Option<String>,
    #[serde(default)]
    pub aws: AwsConfig,
    #[serde(default)]
    pub model: ModelConfig,
    #[serde(default)]
    pub app: AppConfig,
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// How requests reach the Bedrock runtime
    pub provider: ProviderType,

    /// AWS region; the SDK provider falls back to its own region chain
    pub aws_region: Option<String>,

    /// Bedrock API key (required for the API key provider)
    pub bedrock_api_key: Option<String>,

    /// Bedrock runtime endpoint override
    pub endpoint_url: Option<String>,

    /// Model identifier or inference profile
    pub model_id: String,

    /// Request body dialect of the model
    pub api_format: ApiFormat,

    /// Default sampling parameters
    pub temperature: f64,
    pub top_p: f64,
    pub top_k: u32,
    pub max_tokens: u32,

    /// Logging level
    pub log_level: String,

    /// Request timeout in seconds
    pub request_timeout: u64,
}

impl Config {
    /// Load configuration from a TOML file, without environment overrides
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read or parsed, or if it names an
    /// unknown provider or API format.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path).context("Failed to read configuration file")?;

        let config: TomlConfig =
            toml::from_str(&content).context("Failed to parse TOML configuration")?;

        Self::from_toml(config)
    }

    fn from_toml(config: TomlConfig) -> Result<Self> {
        let provider = match config.provider.as_deref() {
            Some(value) => ProviderType::from_str(value)
                .context("Invalid provider value. Must be one of: sdk, api-key")?,
            None => ProviderType::default(),
        };

        let api_format = match config.model.api_format.as_deref() {
            Some(value) => ApiFormat::from_str(value)
                .context("Invalid api_format value. Must be one of: text-completion, messages")?,
            None => ApiFormat::default(),
        };

        Ok(Config {
            provider,
            aws_region: config.aws.region,
            bedrock_api_key: config.aws.api_key,
            endpoint_url: config.aws.endpoint_url,
            model_id: config.model.id.unwrap_or_default(),
            api_format,
            temperature: config.model.temperature,
            top_p: config.model.top_p,
            top_k: config.model.top_k,
            max_tokens: config.model.max_tokens,
            log_level: config.app.log_level,
            request_timeout: config.app.request_timeout,
        })
    }

    /// Load configuration from `.env`, the config file and the environment
    ///
    /// The file is `CONFIG_PATH` when set, otherwise `config.toml` if it
    /// exists. Environment variables override file values.
    pub fn from_env() -> Result<Self> {
        check_dotenv(dotenv::dotenv())?;

        let mut config = Self::load_file(std::env::var("CONFIG_PATH").ok().as_deref())?;

        config.apply_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Load `config_path`, or `config.toml` when the path is unset or blank
    fn load_file(config_path: Option<&str>) -> Result<Self> {
        match config_path.map(str::trim).filter(|path| !path.is_empty()) {
            Some(path) => Self::from_file(path)
                .with_context(|| format!("Failed to load configuration from {}", path)),
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => Self::from_file(DEFAULT_CONFIG_FILE),
            None => Self::from_toml(TomlConfig::default()),
        }
    }

    /// Apply environment overrides read through `lookup`
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        if let Some(value) = lookup("PROVIDER") {
            self.provider = ProviderType::from_str(&value)
                .context("Invalid PROVIDER value. Must be one of: sdk, api-key")?;
        }
        if let Some(region) = lookup("AWS_REGION").or_else(|| lookup("AWS_DEFAULT_REGION")) {
            self.aws_region = Some(region);
        }
        if let Some(model_id) = lookup("MODEL_ID") {
            self.model_id = model_id;
        }
        if let Some(value) = lookup("API_FORMAT") {
            self.api_format = ApiFormat::from_str(&value)
                .context("Invalid API_FORMAT value. Must be one of: text-completion, messages")?;
        }
        if let Some(key) = lookup("AWS_BEARER_TOKEN_BEDROCK") {
            self.bedrock_api_key = Some(key);
        }
        if let Some(url) = lookup("BEDROCK_ENDPOINT_URL") {
            self.endpoint_url = Some(url);
        }
        if let Some(level) = lookup("LOG_LEVEL") {
            self.log_level = level;
        }
        if let Some(value) = lookup("REQUEST_TIMEOUT") {
            self.request_timeout = value
                .trim()
                .parse()
                .with_context(|| format!("Invalid REQUEST_TIMEOUT value: {}", value))?;
        }
        Ok(())
    }

    /// Validate the assembled configuration
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - No model id is configured
    /// - Sampling parameters are out of range
    /// - The API key provider lacks a key, or both a region and an endpoint
    pub fn validate(&self) -> Result<()> {
        if self.model_id.trim().is_empty() {
            bail!("MODEL_ID is required (e.g. anthropic.claude-v2:1)");
        }
        if !(0.0..=1.0).contains(&self.temperature) {
            bail!("temperature must be between 0.0 and 1.0, got {}", self.temperature);
        }
        if !(0.0..=1.0).contains(&self.top_p) {
            bail!("top_p must be between 0.0 and 1.0, got {}", self.top_p);
        }
        if self.max_tokens == 0 {
            bail!("max_tokens must be greater than zero");
        }
        if self.request_timeout == 0 {
            bail!("request_timeout must be greater than zero");
        }
        if self.provider == ProviderType::ApiKey {
            if self.bedrock_api_key.as_deref().is_none_or(str::is_empty) {
                bail!("AWS_BEARER_TOKEN_BEDROCK is required for the api-key provider");
            }
            if self.aws_region.is_none() && self.endpoint_url.is_none() {
                bail!("AWS_REGION or BEDROCK_ENDPOINT_URL is required for the api-key provider");
            }
        }
        Ok(())
    }

    /// Default parameters every prompt starts from
    pub fn default_params(&self) -> ModelParams {
        ModelParams {
            model_id: self.model_id.clone(),
            temperature: self.temperature,
            top_p: self.top_p,
            top_k: self.top_k,
            max_tokens: self.max_tokens,
        }
    }
}

/// Accept a loaded or missing `.env`; a malformed one is an error
///
/// dotenv stops at the first bad line, so carrying on would silently drop
/// every variable after it.
fn check_dotenv<T>(result: dotenv::Result<T>) -> Result<()> {
    match result {
        Ok(_) => Ok(()),
        Err(dotenv::Error::Io(e)) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(anyhow::Error::new(e).context("Failed to parse .env")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_test_config() -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
            provider = "api-key"

            [aws]
            region = "us-west-2"
            api_key = "bedrock-key"

            [model]
            id = "anthropic.claude-v2:1"
            temperature = 0.5
            max_tokens = 300

            [app]
            log_level = "debug"
            request_timeout = 30
        "#
        )
        .unwrap();
        file.flush().unwrap();
        file
    }

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_load_config() {
        let file = create_test_config();
        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.provider, ProviderType::ApiKey);
        assert_eq!(config.aws_region.as_deref(), Some("us-west-2"));
        assert_eq!(config.model_id, "anthropic.claude-v2:1");
        assert_eq!(config.api_format, ApiFormat::TextCompletion);
        assert_eq!(config.temperature, 0.5);
        assert_eq!(config.top_k, 500);
        assert_eq!(config.max_tokens, 300);
        assert_eq!(config.request_timeout, 30);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_defaults_without_file() {
        let config = Config::from_toml(TomlConfig::default()).unwrap();
        assert_eq!(config.provider, ProviderType::Sdk);
        assert_eq!(config.log_level, "info");
        assert_eq!(config.request_timeout, 90);
        assert_eq!(
            config.default_params(),
            ModelParams::claude_defaults("")
        );
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_env_overrides_file() {
        let file = create_test_config();
        let mut config = Config::from_file(file.path()).unwrap();
        config
            .apply_overrides(env(&[
                ("PROVIDER", "sdk"),
                ("AWS_REGION", "eu-central-1"),
                ("MODEL_ID", "anthropic.claude-3-haiku-20240307-v1:0"),
                ("API_FORMAT", "messages"),
                ("REQUEST_TIMEOUT", "15"),
                ("LOG_LEVEL", ""),
            ]))
            .unwrap();
        assert_eq!(config.provider, ProviderType::Sdk);
        assert_eq!(config.aws_region.as_deref(), Some("eu-central-1"));
        assert_eq!(config.model_id, "anthropic.claude-3-haiku-20240307-v1:0");
        assert_eq!(config.api_format, ApiFormat::Messages);
        assert_eq!(config.request_timeout, 15);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_default_region_fallback() {
        let mut config = Config::from_toml(TomlConfig::default()).unwrap();
        config
            .apply_overrides(env(&[("AWS_DEFAULT_REGION", "ap-south-1")]))
            .unwrap();
        assert_eq!(config.aws_region.as_deref(), Some("ap-south-1"));
    }

    #[test]
    fn test_invalid_overrides() {
        let mut config = Config::from_toml(TomlConfig::default()).unwrap();
        assert!(config.apply_overrides(env(&[("PROVIDER", "vertexai")])).is_err());
        assert!(config.apply_overrides(env(&[("REQUEST_TIMEOUT", "soon")])).is_err());
    }

    #[test]
    fn test_api_key_provider_requires_key() {
        let mut config = Config::from_toml(TomlConfig::default()).unwrap();
        config
            .apply_overrides(env(&[
                ("PROVIDER", "api-key"),
                ("MODEL_ID", "anthropic.claude-v2:1"),
                ("AWS_REGION", "us-east-1"),
            ]))
            .unwrap();
        assert!(config.validate().is_err());

        config.bedrock_api_key = Some("bedrock-key".to_string());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_sampling_ranges() {
        let mut config = Config::from_toml(TomlConfig::default()).unwrap();
        config.model_id = "anthropic.claude-v2:1".to_string();
        assert!(config.validate().is_ok());

        config.temperature = 1.5;
        assert!(config.validate().is_err());

        config.temperature = 0.7;
        config.max_tokens = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_dotenv_is_tolerated() {
        let dir = tempfile::tempdir().unwrap();
        assert!(check_dotenv(dotenv::from_path(dir.path().join(".env"))).is_ok());
    }

    #[test]
    fn test_malformed_dotenv_is_reported() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "this is not valid\nMODEL_ID=anthropic.claude-v2:1\n").unwrap();
        file.flush().unwrap();

        let err = check_dotenv(dotenv::from_path(file.path())).unwrap_err();
        assert!(format!("{:#}", err).starts_with("Failed to parse .env"));
    }

    #[test]
    fn test_blank_config_path_falls_back() {
        assert!(Config::load_file(Some("")).is_ok());
        assert!(Config::load_file(Some("   ")).is_ok());
    }

    #[test]
    fn test_config_path_is_loaded() {
        let file = create_test_config();
        let path = file.path().to_str().unwrap();
        let config = Config::load_file(Some(path)).unwrap();
        assert_eq!(config.provider, ProviderType::ApiKey);
        assert!(Config::load_file(Some("/nonexistent/bedrock.toml")).is_err());
    }
}
