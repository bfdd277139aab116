use std::str::FromStr;

use anyhow::{Context, Result};

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_MAX_RESUME_CHARS: usize = 100_000;
pub const DEFAULT_ENGINE_NAME: &str = "candidate-vetting";

/// Application configuration loaded from environment variables.
/// Every variable is optional; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Résumé texts longer than this (in characters) are rejected with 413.
    pub max_resume_chars: usize,
    pub engine_name: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: parse_env("PORT", DEFAULT_PORT)
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            max_resume_chars: parse_env("MAX_RESUME_CHARS", DEFAULT_MAX_RESUME_CHARS)
                .context("MAX_RESUME_CHARS must be a positive integer")?,
            engine_name: std::env::var("REPORT_ENGINE_NAME")
                .unwrap_or_else(|_| DEFAULT_ENGINE_NAME.to_string()),
        })
    }
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("Invalid value for '{key}': {raw:?}")),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_var_uses_default() {
        let port: u16 = parse_env("CANDIDATE_VETTING_TEST_UNSET_PORT", 8080).unwrap();
        assert_eq!(port, 8080);
    }

    #[test]
    fn test_set_var_is_parsed() {
        std::env::set_var("CANDIDATE_VETTING_TEST_LIMIT", " 2500 ");
        let limit: usize = parse_env("CANDIDATE_VETTING_TEST_LIMIT", 1).unwrap();
        assert_eq!(limit, 2500);
    }

    #[test]
    fn test_malformed_var_is_an_error() {
        std::env::set_var("CANDIDATE_VETTING_TEST_BAD_PORT", "eighty");
        assert!(parse_env::<u16>("CANDIDATE_VETTING_TEST_BAD_PORT", 8080).is_err());
    }
}
