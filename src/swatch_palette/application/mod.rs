pub mod config;
pub mod error;
pub mod palette_service;
