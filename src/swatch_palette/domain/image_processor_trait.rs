use image::RgbaImage;

use crate::domain::color::Rgb;
use crate::domain::region::Region;
use crate::infrastructure::error::InfrastructureError;

#[cfg(test)]
use mockall::automock;

/// Pixel-level operations on swatch photographs.
#[cfg_attr(test, automock)]
pub trait ImageProcessor {
    /// Decodes encoded image bytes; the format is sniffed from the content.
    fn decode(&self, image_bytes: &[u8]) -> Result<RgbaImage, InfrastructureError>;

    /// Copies `region` out of `image`, with the region's anchor at (0, 0).
    fn crop(&self, image: &RgbaImage, region: Region) -> Result<RgbaImage, InfrastructureError>;

    /// Mean of each channel over every pixel, alpha ignored.
    fn average_color(&self, image: &RgbaImage) -> Result<Rgb, InfrastructureError>;

    fn encode_png(&self, image: &RgbaImage) -> Result<Vec<u8>, InfrastructureError>;
}
