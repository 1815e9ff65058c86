use axum::{
    extract::{
        Multipart, State,
        multipart::{MultipartError, MultipartRejection},
    },
    http::StatusCode,
};
use nutrilens_core::domain::nutrition::{
    entities::GenerationResult, ports::NutritionService, value_objects::AnalyzeImageInput,
};
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;

use crate::application::http::{
    nutrition::validators::AnalyzeImageForm,
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse},
            response::Response,
        },
        app_state::AppState,
    },
};

const FILE_FIELD: &str = "file";
const NO_FILE_MESSAGE: &str = "No file uploaded";
const SERVER_ERROR_MESSAGE: &str = "Server Error";

#[derive(Debug, Serialize, ToSchema)]
pub struct AnalyzeImageResponse {
    pub result: GenerationResult,
}

#[utoipa::path(
    post,
    path = "/analyze-image",
    tag = "nutrition",
    summary = "Analyze a food image",
    description = "Sends the uploaded image to Gemini for nutrition analysis, disease risk and healthy alternatives. The upstream response is returned unchanged.",
    request_body(content = AnalyzeImageForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, body = AnalyzeImageResponse),
        (status = 400, description = "No file uploaded", body = ApiErrorResponse),
        (status = 413, description = "Upload exceeds the configured body limit", body = ApiErrorResponse),
        (status = 500, description = "Server Error", body = ApiErrorResponse)
    ),
)]
pub async fn analyze_image(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Response<AnalyzeImageResponse>, ApiError> {
    let mut multipart = multipart.map_err(|e| {
        error!("Rejected multipart request: {}", e.body_text());
        ApiError::BadRequest(NO_FILE_MESSAGE.to_string())
    })?;
    let mut input: Option<AnalyzeImageInput> = None;

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let content_type = field.content_type().map(str::to_string);
        let data = field.bytes().await.map_err(multipart_error)?;

        if !data.is_empty() {
            input = Some(AnalyzeImageInput::new(data.to_vec(), content_type.as_deref()));
            break;
        }
    }

    let input = input.ok_or_else(|| ApiError::BadRequest(NO_FILE_MESSAGE.to_string()))?;

    let result = state.service.analyze_image(input).await.map_err(|e| {
        error!(error = %e, "Gemini image analysis failed");
        ApiError::InternalServerError(SERVER_ERROR_MESSAGE.to_string())
    })?;

    Ok(Response::OK(AnalyzeImageResponse { result }))
}

fn multipart_error(e: MultipartError) -> ApiError {
    error!("Failed to read multipart body: {}", e.body_text());

    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        ApiError::PayloadTooLarge(e.body_text())
    } else {
        ApiError::BadRequest(NO_FILE_MESSAGE.to_string())
    }
}
