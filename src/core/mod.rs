pub mod app;
pub mod config;
pub mod input;
pub mod report;
