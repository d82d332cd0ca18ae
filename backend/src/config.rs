//! Application configuration
//!
//! Centralized configuration management with environment variable support
//! and sensible defaults.

use crate::orchestrator::config::{
    ModelConfig, DEFAULT_GEMINI_API_BASE_URL, DEFAULT_GEMINI_MODEL, DEFAULT_MAX_TEXT_LENGTH,
};
use std::env;
use std::str::FromStr;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Server configuration
    pub server: ServerConfig,
    /// Model client configuration
    pub model: ModelConfig,
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port to bind the server to
    pub port: u16,
    /// Host address to bind to
    pub host: String,
}

fn parsed_var<T: FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

/// Like [`parsed_var`], but zero also falls back to the default
fn nonzero_var<T: FromStr + PartialEq + Default>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .filter(|v: &T| *v != T::default())
        .unwrap_or(default)
}

fn string_var(name: &str, default: &str) -> String {
    env::var(name)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

impl Config {
    /// Load configuration from environment variables with defaults
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig {
                port: parsed_var("PORT", 8080),
                host: string_var("HOST", "0.0.0.0"),
            },
            model: ModelConfig {
                api_key: env::var("GEMINI_API_KEY").unwrap_or_default(),
                model: string_var("GEMINI_MODEL", DEFAULT_GEMINI_MODEL),
                api_base_url: string_var("GEMINI_API_BASE_URL", DEFAULT_GEMINI_API_BASE_URL),
                timeout_secs: nonzero_var("GEMINI_TIMEOUT_SECS", 30),
                max_text_length: nonzero_var("MAX_TEXT_LENGTH", DEFAULT_MAX_TEXT_LENGTH),
            },
        }
    }

    /// Get the server address as a string
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
