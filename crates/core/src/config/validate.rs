use reqwest::Url;

use super::{types::Config, ConfigError};

/// Validate configuration
/// Currently validates:
/// - Server port is not 0
/// - Provider timeouts are positive
/// - Provider base URLs are absolute http(s) URLs
/// - CORS origins are `*` or http(s) origins
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "server.port cannot be 0".to_string(),
        ));
    }

    for origin in &config.server.cors_allowed_origins {
        if origin != "*" && !is_http_url(origin) {
            return Err(ConfigError::ValidationError(format!(
                "server.cors_allowed_origins contains an invalid origin: {}",
                origin
            )));
        }
    }

    validate_provider(
        "ai_detection",
        &config.ai_detection.base_url,
        config.ai_detection.timeout_secs,
    )?;
    validate_provider(
        "fact_check",
        &config.fact_check.base_url,
        config.fact_check.timeout_secs,
    )?;

    Ok(())
}

fn validate_provider(section: &str, base_url: &str, timeout_secs: u64) -> Result<(), ConfigError> {
    if timeout_secs == 0 {
        return Err(ConfigError::ValidationError(format!(
            "{}.timeout_secs must be greater than 0",
            section
        )));
    }
    if !is_http_url(base_url) {
        return Err(ConfigError::ValidationError(format!(
            "{}.base_url is not a valid http(s) URL: {}",
            section, base_url
        )));
    }
    Ok(())
}

fn is_http_url(value: &str) -> bool {
    Url::parse(value)
        .map(|url| matches!(url.scheme(), "http" | "https") && url.has_host())
        .unwrap_or(false)
}
