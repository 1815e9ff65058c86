use base64::{Engine as _, engine::general_purpose};

use crate::domain::nutrition::{
    entities::{GenerationPayload, InlineData, Part},
    value_objects::{AnalyzeImageInput, AskNutritionistInput},
};

pub const IMAGE_ANALYSIS_INSTRUCTION: &str = "\n        Give me a detailed nutrition analysis, disease risk, and healthy alternatives for the food item in this image.\n        ";

pub const NUTRITIONIST_INSTRUCTION: &str = "You are a professional nutritionist. Based on the user's question about food or health, give clear, practical, and accurate advice.";

/// Inline image first, then the analysis instruction.
pub fn image_analysis_payload(input: &AnalyzeImageInput) -> GenerationPayload {
    GenerationPayload {
        parts: vec![
            Part::InlineData {
                inline_data: InlineData {
                    mime_type: input.mime_type.clone(),
                    data: general_purpose::STANDARD.encode(&input.image_data),
                },
            },
            Part::Text {
                text: IMAGE_ANALYSIS_INSTRUCTION.to_string(),
            },
        ],
    }
}

pub fn nutritionist_payload(input: &AskNutritionistInput) -> GenerationPayload {
    GenerationPayload {
        parts: vec![Part::Text {
            text: format!(
                "\n{}\nQuestion: \"{}\"\n",
                NUTRITIONIST_INSTRUCTION, input.message
            ),
        }],
    }
}
