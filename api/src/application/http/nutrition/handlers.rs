pub mod analyze_image;
pub mod chatbot;
