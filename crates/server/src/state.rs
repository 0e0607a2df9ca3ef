use aegis_core::{Analyzer, Config, SanitizedConfig};

/// Shared application state
pub struct AppState {
    config: Config,
    analyzer: Analyzer,
}

impl AppState {
    pub fn new(config: Config, analyzer: Analyzer) -> Self {
        Self { config, analyzer }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn sanitized_config(&self) -> SanitizedConfig {
        SanitizedConfig::from(&self.config)
    }

    pub fn analyzer(&self) -> &Analyzer {
        &self.analyzer
    }
}
