use crate::application::http::{health::HealthApiDoc, nutrition::router::NutritionApiDoc};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "NutriLens API"
    ),
    nest(
        (path = "/api", api = NutritionApiDoc),
        (path = "/health", api = HealthApiDoc),
    )
)]
pub struct ApiDoc;
