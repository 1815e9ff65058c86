use axum::extract::State;
use nutrilens_core::domain::nutrition::{
    ports::NutritionService, value_objects::AskNutritionistInput,
};
use serde::{Deserialize, Serialize};
use tracing::{error, info};
use utoipa::ToSchema;

use crate::application::http::{
    nutrition::validators::ChatbotValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ChatbotResponse {
    pub answer: String,
}

#[utoipa::path(
    post,
    path = "/chatbot",
    tag = "nutrition",
    summary = "Ask the nutritionist",
    description = "Answers a free-text food or health question through Gemini.",
    request_body = ChatbotValidator,
    responses(
        (status = 200, body = ChatbotResponse),
        (status = 400, description = "Invalid input", body = ApiErrorResponse),
        (status = 500, description = "Missing Gemini API key, no answer from Gemini, or upstream failure", body = ApiErrorResponse)
    ),
)]
pub async fn chatbot(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<ChatbotValidator>,
) -> Result<Response<ChatbotResponse>, ApiError> {
    info!(message = %payload.message, "Chatbot request message");

    let answer = state
        .service
        .ask_nutritionist(AskNutritionistInput {
            message: payload.message,
        })
        .await
        .map_err(|e| {
            error!(error = %e, "Chatbot request failed");
            ApiError::from(e)
        })?;

    Ok(Response::OK(ChatbotResponse { answer }))
}
