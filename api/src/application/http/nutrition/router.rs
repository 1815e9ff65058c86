use super::handlers::{
    analyze_image::{__path_analyze_image, analyze_image},
    chatbot::{__path_chatbot, chatbot},
};
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::post};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(analyze_image, chatbot))]
pub struct NutritionApiDoc;

pub fn nutrition_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/api/analyze-image", state.args.server.root_path),
            post(analyze_image),
        )
        .route(
            &format!("{}/api/chatbot", state.args.server.root_path),
            post(chatbot),
        )
}
