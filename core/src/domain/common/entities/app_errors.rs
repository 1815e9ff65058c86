use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("Invalid input")]
    InvalidInput,

    #[error("No file uploaded")]
    MissingFile,

    #[error("Missing Gemini API key")]
    MissingApiKey,

    #[error("No answer from Gemini")]
    NoAnswer,

    #[error("{0}")]
    ExternalServiceError(String),
}

impl CoreError {
    /// Failures caused by the caller's input rather than by configuration or upstream.
    pub fn is_validation(&self) -> bool {
        matches!(self, CoreError::InvalidInput | CoreError::MissingFile)
    }
}
