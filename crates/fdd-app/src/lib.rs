//! Application service layer - use cases, config, export

pub mod app;
pub mod config;
pub mod export;
