use std::path::PathBuf;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub anthropic_api_key: String,
    pub port: u16,
    pub rust_log: String,
    /// Transport timeout for a single LLM round-trip.
    pub llm_timeout_secs: u64,
    /// Directory holding the TTF files used for PDF export.
    pub pdf_font_dir: PathBuf,
    /// Family name; genpdf expects `<name>-Regular.ttf`, `<name>-Bold.ttf`, etc.
    pub pdf_font_name: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            anthropic_api_key: require_env("ANTHROPIC_API_KEY")?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            llm_timeout_secs: std::env::var("LLM_TIMEOUT_SECS")
                .unwrap_or_else(|_| "120".to_string())
                .parse::<u64>()
                .context("LLM_TIMEOUT_SECS must be a whole number of seconds")?,
            pdf_font_dir: std::env::var("PDF_FONT_DIR")
                .unwrap_or_else(|_| "./fonts".to_string())
                .into(),
            pdf_font_name: std::env::var("PDF_FONT_NAME")
                .unwrap_or_else(|_| "LiberationSerif".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
