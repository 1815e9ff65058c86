use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    nutrition::{
        entities::GenerationResult,
        ports::{GenerationClient, NutritionService},
        prompts::{image_analysis_payload, nutritionist_payload},
        value_objects::{AnalyzeImageInput, AskNutritionistInput},
    },
};

impl<G> NutritionService for Service<G>
where
    G: GenerationClient,
{
    async fn analyze_image(&self, input: AnalyzeImageInput) -> Result<GenerationResult, CoreError> {
        if input.image_data.is_empty() {
            return Err(CoreError::MissingFile);
        }

        if !self.generation_client.is_configured() {
            tracing::error!("image analysis requested without a Gemini API key");
            return Err(CoreError::MissingApiKey);
        }

        tracing::debug!(
            size_bytes = input.image_data.len(),
            mime_type = %input.mime_type,
            "analyzing food image"
        );

        let payload = image_analysis_payload(&input);
        self.generation_client.generate(payload).await
    }

    async fn ask_nutritionist(&self, input: AskNutritionistInput) -> Result<String, CoreError> {
        if input.message.is_empty() {
            return Err(CoreError::InvalidInput);
        }

        if !self.generation_client.is_configured() {
            return Err(CoreError::MissingApiKey);
        }

        let payload = nutritionist_payload(&input);
        let result = self.generation_client.generate(payload).await?;

        result.answer_text().map(str::to_string).ok_or_else(|| {
            tracing::warn!(response = %result.0, "Gemini response has no answer text");
            CoreError::NoAnswer
        })
    }
}
