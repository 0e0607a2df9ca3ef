use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use std::path::Path;

use super::{types::Config, ConfigError};

/// Prefix for environment overrides, e.g. `AEGIS_SERVER__PORT=9000`.
const ENV_PREFIX: &str = "AEGIS_";

/// Credential variable names the providers document.
const WINSTON_KEY_VAR: &str = "WINSTONAI_API_KEY";
const FACT_CHECK_KEY_VAR: &str = "FACT_CHECK_API_KEY";

/// Load configuration from file with environment variable overrides
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.display().to_string()));
    }

    extract(with_env(Figment::new().merge(Toml::file(path))))
}

/// Load configuration from defaults and environment variables only
pub fn load_config_from_env() -> Result<Config, ConfigError> {
    extract(with_env(Figment::new()))
}

/// Load configuration from TOML string (useful for testing)
pub fn load_config_from_str(toml_str: &str) -> Result<Config, ConfigError> {
    toml::from_str(toml_str).map_err(|e| ConfigError::ParseError(e.to_string()))
}

fn with_env(figment: Figment) -> Figment {
    figment
        .merge(Env::prefixed(ENV_PREFIX).split("__"))
        .merge(
            Env::raw()
                .only(&[WINSTON_KEY_VAR])
                .map(|_| "ai_detection.api_key".into()),
        )
        .merge(
            Env::raw()
                .only(&[FACT_CHECK_KEY_VAR])
                .map(|_| "fact_check.api_key".into()),
        )
}

fn extract(figment: Figment) -> Result<Config, ConfigError> {
    figment
        .extract()
        .map_err(|e| ConfigError::ParseError(e.to_string()))
}
