/// Content type used when an upload does not declare a usable image type.
pub const DEFAULT_IMAGE_MIME_TYPE: &str = "image/jpeg";

#[derive(Debug, Clone)]
pub struct AnalyzeImageInput {
    pub image_data: Vec<u8>,
    pub mime_type: String,
}

impl AnalyzeImageInput {
    /// Keeps the declared content type only when it names an image.
    pub fn new(image_data: Vec<u8>, declared_mime_type: Option<&str>) -> Self {
        let mime_type = declared_mime_type
            .map(str::trim)
            .filter(|mime| mime.len() > "image/".len() && mime.starts_with("image/"))
            .unwrap_or(DEFAULT_IMAGE_MIME_TYPE)
            .to_string();

        Self {
            image_data,
            mime_type,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AskNutritionistInput {
    pub message: String,
}
