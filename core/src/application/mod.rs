use crate::{
    domain::common::{NutrilensConfig, services::Service},
    infrastructure::llm::GeminiLLMClient,
};

pub type NutrilensService = Service<GeminiLLMClient>;

pub fn create_service(config: NutrilensConfig) -> NutrilensService {
    if config.llm.gemini_api_key.is_none() {
        tracing::warn!("GEMINI_API_KEY is not set; analysis and chat requests will fail");
    }

    Service::new(GeminiLLMClient::new(config.llm))
}
