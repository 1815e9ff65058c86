//! Turns free-text analysis answers into labeled sections for display.

pub mod entities;
pub mod services;

pub use entities::*;
pub use services::*;
