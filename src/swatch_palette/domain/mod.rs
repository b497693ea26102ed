pub mod color;
pub mod error;
pub mod file_storage_trait;
pub mod image_processor_trait;
pub mod palette;
pub mod region;
pub mod swatch;
