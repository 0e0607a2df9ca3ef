use serde::{Deserialize, Serialize};
use std::net::IpAddr;

/// Root configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub ai_detection: AiDetectionConfig,
    #[serde(default)]
    pub fact_check: FactCheckConfig,
}

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: IpAddr,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Origins allowed by CORS. `"*"` allows any origin.
    #[serde(default = "default_cors_origins")]
    pub cors_allowed_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_allowed_origins: default_cors_origins(),
        }
    }
}

fn default_host() -> IpAddr {
    IpAddr::V4(std::net::Ipv4Addr::UNSPECIFIED)
}

fn default_port() -> u16 {
    8000
}

fn default_cors_origins() -> Vec<String> {
    vec!["*".to_string()]
}

/// AI-generated text detection provider (Winston AI) configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AiDetectionConfig {
    /// Bearer token. Empty means not configured.
    /// Also read from the `WINSTONAI_API_KEY` environment variable.
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_ai_detection_url")]
    pub base_url: String,
    /// Request timeout in seconds (default: 10)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl Default for AiDetectionConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: default_ai_detection_url(),
            timeout_secs: default_timeout(),
        }
    }
}

impl AiDetectionConfig {
    pub fn has_api_key(&self) -> bool {
        !self.api_key.trim().is_empty()
    }
}

fn default_ai_detection_url() -> String {
    "https://api.gowinston.ai/v2".to_string()
}

/// Fact-check search provider (Google Fact Check Tools) configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FactCheckConfig {
    /// Query-parameter API key. Empty means not configured.
    /// Also read from the `FACT_CHECK_API_KEY` environment variable.
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_fact_check_url")]
    pub base_url: String,
    /// Request timeout in seconds (default: 10)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl Default for FactCheckConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: default_fact_check_url(),
            timeout_secs: default_timeout(),
        }
    }
}

impl FactCheckConfig {
    pub fn has_api_key(&self) -> bool {
        !self.api_key.trim().is_empty()
    }
}

fn default_fact_check_url() -> String {
    "https://factchecktools.googleapis.com/v1alpha1".to_string()
}

fn default_timeout() -> u64 {
    10
}

/// Sanitized config for API responses (secrets redacted)
#[derive(Debug, Clone, Serialize)]
pub struct SanitizedConfig {
    pub server: ServerConfig,
    pub ai_detection: SanitizedProviderConfig,
    pub fact_check: SanitizedProviderConfig,
}

/// Provider config with the credential hidden
#[derive(Debug, Clone, Serialize)]
pub struct SanitizedProviderConfig {
    pub base_url: String,
    pub api_key_configured: bool,
    pub timeout_secs: u64,
}

impl From<&Config> for SanitizedConfig {
    fn from(config: &Config) -> Self {
        Self {
            server: config.server.clone(),
            ai_detection: SanitizedProviderConfig {
                base_url: config.ai_detection.base_url.clone(),
                api_key_configured: config.ai_detection.has_api_key(),
                timeout_secs: config.ai_detection.timeout_secs,
            },
            fact_check: SanitizedProviderConfig {
                base_url: config.fact_check.base_url.clone(),
                api_key_configured: config.fact_check.has_api_key(),
                timeout_secs: config.fact_check.timeout_secs,
            },
        }
    }
}
