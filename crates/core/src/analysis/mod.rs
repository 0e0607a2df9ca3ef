//! Analysis orchestration.
//!
//! Validates submitted text, queries the detection and fact-check providers
//! concurrently, and assembles the combined response.

mod analyzer;
mod types;

pub use analyzer::Analyzer;
pub use types::*;

use thiserror::Error;

use crate::detection::DetectionError;
use crate::fact_check::FactCheckError;

/// Fewest characters accepted for analysis.
pub const MIN_TEXT_CHARS: usize = 10;

/// Errors surfaced to the caller of `Analyzer::analyze`.
///
/// Provider failures never appear here; they degrade the response instead.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("Text is too short for analysis.")]
    TextTooShort { length: usize },
}

/// Errors building the provider clients at startup.
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("Failed to create AI detection client: {0}")]
    Detection(#[from] DetectionError),

    #[error("Failed to create fact check client: {0}")]
    FactCheck(#[from] FactCheckError),
}

/// Reject text with fewer than `MIN_TEXT_CHARS` characters.
pub fn validate_text(text: &str) -> Result<(), AnalysisError> {
    let length = text.chars().count();
    if length < MIN_TEXT_CHARS {
        return Err(AnalysisError::TextTooShort { length });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_texts_rejected() {
        for text in ["", "a", "Too short", "123456789"] {
            assert_eq!(
                validate_text(text),
                Err(AnalysisError::TextTooShort {
                    length: text.chars().count()
                })
            );
        }
    }

    #[test]
    fn test_ten_chars_accepted() {
        assert!(validate_text("1234567890").is_ok());
        assert!(validate_text("This is a long enough test string.").is_ok());
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // 5 characters, 10 bytes
        assert!(validate_text("ééééé").is_err());
    }

    #[test]
    fn test_error_message() {
        assert_eq!(
            AnalysisError::TextTooShort { length: 3 }.to_string(),
            "Text is too short for analysis."
        );
    }
}
