use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct ChatbotValidator {
    #[validate(length(min = 1, message = "message is required"))]
    #[schema(example = "Is paneer healthy?")]
    pub message: String,
}

/// Multipart body of an image analysis request, for the OpenAPI docs only.
#[derive(Debug, ToSchema)]
#[allow(dead_code)]
pub struct AnalyzeImageForm {
    #[schema(value_type = String, format = Binary)]
    pub file: Vec<u8>,
}
