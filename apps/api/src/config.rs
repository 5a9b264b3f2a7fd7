use anyhow::{Context, Result};
use tracing::warn;

const DEFAULT_GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com";

/// Application configuration loaded from environment variables.
///
/// The Gemini key is optional: without it the service still starts, but every
/// model call fails and the quiz runs on fallback data.
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: Option<String>,
    pub gemini_api_base: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let gemini_api_key = optional_env("GEMINI_API_KEY").or_else(|| optional_env("API_KEY"));
        if gemini_api_key.is_none() {
            warn!("GEMINI_API_KEY is not set; all model calls will fail and fall back");
        }

        Ok(Config {
            gemini_api_key,
            gemini_api_base: optional_env("GEMINI_API_BASE")
                .unwrap_or_else(|| DEFAULT_GEMINI_API_BASE.to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

/// Reads a variable, treating an empty or whitespace-only value as unset.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optional_env_missing_is_none() {
        assert!(optional_env("INSPIRE_TEST_SURELY_UNSET_VARIABLE").is_none());
    }

    #[test]
    fn test_optional_env_blank_is_none() {
        std::env::set_var("INSPIRE_TEST_BLANK_VARIABLE", "   ");
        assert!(optional_env("INSPIRE_TEST_BLANK_VARIABLE").is_none());
    }

    #[test]
    fn test_optional_env_trims_value() {
        std::env::set_var("INSPIRE_TEST_PADDED_VARIABLE", "  key-123 ");
        assert_eq!(
            optional_env("INSPIRE_TEST_PADDED_VARIABLE").as_deref(),
            Some("key-123")
        );
    }
}
