pub mod entities;
pub mod services;

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.0-flash";
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";

#[derive(Clone, Debug)]
pub struct NutrilensConfig {
    pub llm: LLMConfig,
}

#[derive(Clone, Debug)]
pub struct LLMConfig {
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
    pub gemini_base_url: String,
}

impl LLMConfig {
    /// Blank keys are treated the same as a missing key.
    pub fn new(gemini_api_key: Option<String>, gemini_model: String, gemini_base_url: String) -> Self {
        Self {
            gemini_api_key: gemini_api_key.filter(|key| !key.trim().is_empty()),
            gemini_model,
            gemini_base_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_api_key_is_unset() {
        let config = LLMConfig::new(
            Some("   ".to_string()),
            DEFAULT_GEMINI_MODEL.to_string(),
            DEFAULT_GEMINI_BASE_URL.to_string(),
        );
        assert_eq!(config.gemini_api_key, None);
    }

    #[test]
    fn test_api_key_is_kept() {
        let config = LLMConfig::new(
            Some("abc".to_string()),
            DEFAULT_GEMINI_MODEL.to_string(),
            DEFAULT_GEMINI_BASE_URL.to_string(),
        );
        assert_eq!(config.gemini_api_key.as_deref(), Some("abc"));
    }
}
