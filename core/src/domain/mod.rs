pub mod common;
pub mod nutrition;
pub mod report;
