pub mod error;
pub mod file_storage;
pub mod html_renderer;
pub mod image_processor;
