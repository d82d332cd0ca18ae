//! Model configuration
//!
//! Settings for the model client and the flows built on it.

/// Default Gemini model name
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";

/// Default Gemini API base URL
pub const DEFAULT_GEMINI_API_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default maximum length of free-text request fields
pub const DEFAULT_MAX_TEXT_LENGTH: usize = 10_000;

/// Model configuration
#[derive(Clone)]
pub struct ModelConfig {
    /// Gemini API key
    pub api_key: String,
    /// Gemini model name
    pub model: String,
    /// Gemini API base URL
    pub api_base_url: String,
    /// HTTP request timeout in seconds
    pub timeout_secs: u64,
    /// Maximum length of free-text request fields, in characters
    pub max_text_length: usize,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: DEFAULT_GEMINI_MODEL.to_string(),
            api_base_url: DEFAULT_GEMINI_API_BASE_URL.to_string(),
            timeout_secs: 30,
            max_text_length: DEFAULT_MAX_TEXT_LENGTH,
        }
    }
}

// Keeps the API key out of logs
impl std::fmt::Debug for ModelConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelConfig")
            .field("api_key_set", &!self.api_key.is_empty())
            .field("model", &self.model)
            .field("api_base_url", &self.api_base_url)
            .field("timeout_secs", &self.timeout_secs)
            .field("max_text_length", &self.max_text_length)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_api_key() {
        let config = ModelConfig {
            api_key: "secret-key".to_string(),
            ..Default::default()
        };
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("secret-key"));
        assert!(rendered.contains("api_key_set: true"));
    }
}
