use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Ordered parts sent to the generation API for a single request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationPayload {
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Part {
    InlineData { inline_data: InlineData },
    Text { text: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InlineData {
    pub mime_type: String,
    pub data: String,
}

/// Raw JSON returned by the generation API.
///
/// The shape is not guaranteed, so nothing is assumed beyond what
/// [`GenerationResult::answer_text`] checks for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
#[schema(value_type = Object)]
pub struct GenerationResult(pub serde_json::Value);

impl GenerationResult {
    pub fn new(value: serde_json::Value) -> Self {
        Self(value)
    }

    /// Text of the first part of the first candidate, if present and non-empty.
    pub fn answer_text(&self) -> Option<&str> {
        self.0
            .get("candidates")?
            .get(0)?
            .get("content")?
            .get("parts")?
            .get(0)?
            .get("text")?
            .as_str()
            .filter(|text| !text.is_empty())
    }

    pub fn into_inner(self) -> serde_json::Value {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_answer_text_reads_first_candidate() {
        let result = GenerationResult::new(json!({
            "candidates": [
                { "content": { "parts": [{ "text": "first" }, { "text": "second" }] } },
                { "content": { "parts": [{ "text": "other" }] } }
            ]
        }));
        assert_eq!(result.answer_text(), Some("first"));
    }

    #[test]
    fn test_answer_text_missing_path() {
        let cases = [
            json!({}),
            json!({ "candidates": [] }),
            json!({ "candidates": [{ "content": {} }] }),
            json!({ "candidates": [{ "content": { "parts": [] } }] }),
            json!({ "candidates": [{ "content": { "parts": [{ "inline_data": {} }] } }] }),
            json!({ "candidates": [{ "content": { "parts": [{ "text": 42 }] } }] }),
            json!({ "candidates": [{ "content": { "parts": [{ "text": "" }] } }] }),
            json!({ "error": { "code": 400, "message": "API key not valid" } }),
            json!("not an object"),
        ];

        for case in cases {
            assert_eq!(GenerationResult::new(case.clone()).answer_text(), None, "{case}");
        }
    }

    #[test]
    fn test_parts_serialize_in_wire_shape() {
        let payload = GenerationPayload {
            parts: vec![
                Part::InlineData {
                    inline_data: InlineData {
                        mime_type: "image/png".to_string(),
                        data: "AAEC".to_string(),
                    },
                },
                Part::Text {
                    text: "describe".to_string(),
                },
            ],
        };

        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({
                "parts": [
                    { "inline_data": { "mime_type": "image/png", "data": "AAEC" } },
                    { "text": "describe" }
                ]
            })
        );
    }
}
