pub mod analysis;
pub mod config;
pub mod detection;
pub mod fact_check;
pub mod metrics;
pub mod outcome;
pub mod testing;

pub use analysis::{
    validate_text, AnalysisError, AnalysisRequest, AnalysisResponse, Analyzer, SetupError,
    MIN_TEXT_CHARS,
};
pub use config::{
    load_config, load_config_from_env, load_config_from_str, validate_config, AiDetectionConfig,
    Config, ConfigError, FactCheckConfig, SanitizedConfig, ServerConfig,
};
pub use detection::{ai_likelihood_from_human_score, AiDetector, DetectionError, WinstonClient};
pub use fact_check::{ClaimResult, FactCheckError, FactChecker, GoogleFactCheckClient};
pub use outcome::ProviderOutcome;
