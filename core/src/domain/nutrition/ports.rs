use crate::domain::{
    common::entities::app_errors::CoreError,
    nutrition::{
        entities::{GenerationPayload, GenerationResult},
        value_objects::{AnalyzeImageInput, AskNutritionistInput},
    },
};

/// Outbound port to the generative-language API.
#[cfg_attr(test, mockall::automock)]
pub trait GenerationClient: Send + Sync {
    /// Whether a credential is available for outbound calls.
    fn is_configured(&self) -> bool;

    /// Sends one request and returns the parsed body, whatever the HTTP status was.
    fn generate(
        &self,
        payload: GenerationPayload,
    ) -> impl Future<Output = Result<GenerationResult, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait NutritionService: Send + Sync {
    fn analyze_image(
        &self,
        input: AnalyzeImageInput,
    ) -> impl Future<Output = Result<GenerationResult, CoreError>> + Send;

    fn ask_nutritionist(
        &self,
        input: AskNutritionistInput,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}
