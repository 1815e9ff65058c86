use reqwest::Client;
use serde::Serialize;

use crate::domain::{
    common::{LLMConfig, entities::app_errors::CoreError},
    nutrition::{
        entities::{GenerationPayload, GenerationResult, Part},
        ports::GenerationClient,
    },
};

#[derive(Debug, Clone)]
pub struct GeminiLLMClient {
    api_key: Option<String>,
    model_name: String,
    base_url: String,
    client: Client,
}

#[derive(Debug, Serialize)]
struct GeminiRequest<'a> {
    contents: [Content<'a>; 1],
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: &'a [Part],
}

impl GeminiLLMClient {
    pub fn new(config: LLMConfig) -> Self {
        Self::new_with_client(config, Client::new())
    }

    pub fn new_with_client(config: LLMConfig, client: Client) -> Self {
        Self {
            api_key: config.gemini_api_key,
            model_name: config.gemini_model,
            base_url: config.gemini_base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model_name
        )
    }
}

impl GenerationClient for GeminiLLMClient {
    fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    async fn generate(&self, payload: GenerationPayload) -> Result<GenerationResult, CoreError> {
        let api_key = self.api_key.as_deref().ok_or(CoreError::MissingApiKey)?;

        let request = GeminiRequest {
            contents: [Content {
                parts: &payload.parts,
            }],
        };

        let response = self
            .client
            .post(self.endpoint())
            .query(&[("key", api_key)])
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Gemini API request failed: {}", e);
                CoreError::ExternalServiceError(format!("LLM API error: {}", e))
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("Gemini API returned status {}", status);
        }

        let body: serde_json::Value = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse Gemini response: {}", e);
            CoreError::ExternalServiceError(format!("Failed to parse LLM response: {}", e))
        })?;

        tracing::debug!(%status, response = %body, "Gemini API response");

        Ok(GenerationResult::new(body))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::domain::common::DEFAULT_GEMINI_MODEL;

    fn make_client(server: &MockServer, api_key: Option<&str>) -> GeminiLLMClient {
        GeminiLLMClient::new(LLMConfig::new(
            api_key.map(str::to_string),
            DEFAULT_GEMINI_MODEL.to_string(),
            format!("{}/", server.uri()),
        ))
    }

    fn text_payload(text: &str) -> GenerationPayload {
        GenerationPayload {
            parts: vec![Part::Text {
                text: text.to_string(),
            }],
        }
    }

    #[tokio::test]
    async fn test_generate_posts_contents_with_key() {
        let server = MockServer::start().await;
        let upstream = json!({
            "candidates": [{ "content": { "parts": [{ "text": "Eat more fibre." }] } }]
        });

        Mock::given(method("POST"))
            .and(path("/v1beta/models/gemini-2.0-flash:generateContent"))
            .and(query_param("key", "test-key"))
            .and(header("content-type", "application/json"))
            .and(body_json(json!({
                "contents": [{ "parts": [{ "text": "hello" }] }]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(upstream.clone()))
            .expect(1)
            .mount(&server)
            .await;

        let client = make_client(&server, Some("test-key"));
        let result = client.generate(text_payload("hello")).await.unwrap();

        assert_eq!(result.into_inner(), upstream);
    }

    #[tokio::test]
    async fn test_generate_returns_body_on_error_status() {
        let server = MockServer::start().await;
        let upstream = json!({
            "error": { "code": 400, "message": "API key not valid", "status": "INVALID_ARGUMENT" }
        });

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(400).set_body_json(upstream.clone()))
            .mount(&server)
            .await;

        let client = make_client(&server, Some("bad-key"));
        let result = client.generate(text_payload("hello")).await.unwrap();

        assert_eq!(result.answer_text(), None);
        assert_eq!(result.into_inner(), upstream);
    }

    #[tokio::test]
    async fn test_generate_rejects_non_json_body() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(502).set_body_string("<html>bad gateway</html>"))
            .mount(&server)
            .await;

        let client = make_client(&server, Some("test-key"));
        let err = client.generate(text_payload("hello")).await.unwrap_err();

        assert!(matches!(err, CoreError::ExternalServiceError(_)));
    }

    #[tokio::test]
    async fn test_generate_without_key_makes_no_request() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let client = make_client(&server, None);
        assert!(!client.is_configured());

        let err = client.generate(text_payload("hello")).await.unwrap_err();
        assert_eq!(err, CoreError::MissingApiKey);
    }

    #[tokio::test]
    async fn test_generate_reports_transport_failure() {
        let client = GeminiLLMClient::new(LLMConfig::new(
            Some("test-key".to_string()),
            DEFAULT_GEMINI_MODEL.to_string(),
            "http://127.0.0.1:1".to_string(),
        ));

        let err = client.generate(text_payload("hello")).await.unwrap_err();

        match err {
            CoreError::ExternalServiceError(message) => {
                assert!(message.starts_with("LLM API error:"), "{message}")
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
