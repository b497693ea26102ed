use std::io::Cursor;

use image::{imageops, ImageFormat, RgbaImage};

use super::error::InfrastructureError;
use crate::domain::color::Rgb;
use crate::domain::error::DomainError;
use crate::domain::image_processor_trait::ImageProcessor;
use crate::domain::region::Region;

pub struct DefaultImageProcessor;

impl DefaultImageProcessor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DefaultImageProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageProcessor for DefaultImageProcessor {
    fn decode(&self, image_bytes: &[u8]) -> Result<RgbaImage, InfrastructureError> {
        let reader = image::io::Reader::new(Cursor::new(image_bytes))
            .with_guessed_format()
            .map_err(InfrastructureError::IoError)?;
        Ok(reader
            .decode()
            .map_err(InfrastructureError::ImageLibError)?
            .to_rgba8())
    }

    fn crop(&self, image: &RgbaImage, region: Region) -> Result<RgbaImage, InfrastructureError> {
        region.ensure_within(image.width(), image.height())?;
        Ok(imageops::crop_imm(image, region.x, region.y, region.width, region.height).to_image())
    }

    fn average_color(&self, image: &RgbaImage) -> Result<Rgb, InfrastructureError> {
        let pixel_count = u64::from(image.width()) * u64::from(image.height());
        if pixel_count == 0 {
            return Err(DomainError::ZeroArea(Region::new(0, 0, image.width(), image.height())).into());
        }

        // pixel_count * 255 fits in u64 for anything the decoder can allocate.
        let (mut r, mut g, mut b) = (0u64, 0u64, 0u64);
        for pixel in image.pixels() {
            r += u64::from(pixel[0]);
            g += u64::from(pixel[1]);
            b += u64::from(pixel[2]);
        }

        // Each mean is at most 255.
        Ok(Rgb::new(
            (r / pixel_count) as u8,
            (g / pixel_count) as u8,
            (b / pixel_count) as u8,
        ))
    }

    fn encode_png(&self, image: &RgbaImage) -> Result<Vec<u8>, InfrastructureError> {
        let mut buffer = Cursor::new(Vec::new());
        image
            .write_to(&mut buffer, ImageFormat::Png)
            .map_err(|e| InfrastructureError::EncodeError(e.to_string()))?;
        Ok(buffer.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn processor() -> DefaultImageProcessor {
        DefaultImageProcessor::new()
    }

    #[test]
    fn test_average_of_uniform_region_is_that_color() {
        for color in [Rgb::new(0, 0, 0), Rgb::new(255, 255, 255), Rgb::new(12, 200, 77)] {
            let image = RgbaImage::from_pixel(50, 50, color.into());
            assert_eq!(processor().average_color(&image).unwrap(), color);
        }
    }

    #[test]
    fn test_average_of_single_pixel_is_exact() {
        let image = RgbaImage::from_pixel(1, 1, Rgba([1, 128, 254, 3]));
        assert_eq!(processor().average_color(&image).unwrap(), Rgb::new(1, 128, 254));
    }

    #[test]
    fn test_average_truncates() {
        let mut image = RgbaImage::from_pixel(3, 1, Rgba([255, 0, 10, 255]));
        image.put_pixel(2, 0, Rgba([254, 1, 11, 255]));
        // r: 764 / 3 = 254.67, g: 1 / 3, b: 31 / 3 = 10.33
        assert_eq!(processor().average_color(&image).unwrap(), Rgb::new(254, 0, 10));
    }

    #[test]
    fn test_average_of_empty_image_fails() {
        let image = RgbaImage::new(0, 0);
        let result = processor().average_color(&image);
        match result {
            Err(InfrastructureError::DomainErrorWrapper(DomainError::ZeroArea(_))) => {}
            other => panic!("Expected ZeroArea, got {:?}", other),
        }
    }

    #[test]
    fn test_crop_remaps_anchor_to_origin() {
        let mut image = RgbaImage::from_pixel(10, 10, Rgba([0, 0, 0, 255]));
        image.put_pixel(4, 6, Rgba([9, 8, 7, 255]));

        let cropped = processor().crop(&image, Region::new(4, 6, 3, 2)).unwrap();
        assert_eq!(cropped.dimensions(), (3, 2));
        assert_eq!(*cropped.get_pixel(0, 0), Rgba([9, 8, 7, 255]));
        assert_eq!(*cropped.get_pixel(1, 0), Rgba([0, 0, 0, 255]));
    }

    #[test]
    fn test_crop_out_of_bounds_fails() {
        let image = RgbaImage::new(100, 100);
        let result = processor().crop(&image, Region::square(60, 60, 50));
        match result {
            Err(InfrastructureError::DomainErrorWrapper(DomainError::OutOfBounds { .. })) => {}
            other => panic!("Expected OutOfBounds, got {:?}", other),
        }
    }

    #[test]
    fn test_crop_zero_area_fails() {
        let image = RgbaImage::new(100, 100);
        let result = processor().crop(&image, Region::new(10, 10, 0, 10));
        assert!(matches!(
            result,
            Err(InfrastructureError::DomainErrorWrapper(DomainError::ZeroArea(_)))
        ));
    }

    #[test]
    fn test_png_encoding_decodes_back() {
        let mut image = RgbaImage::from_pixel(4, 3, Rgba([200, 10, 30, 255]));
        image.put_pixel(3, 2, Rgba([1, 2, 3, 255]));

        let bytes = processor().encode_png(&image).unwrap();
        assert!(!bytes.is_empty());
        let decoded = processor().decode(&bytes).unwrap();
        assert_eq!(decoded, image);
    }

    #[test]
    fn test_decode_invalid_image_data() {
        let result = processor().decode(&[1, 2, 3, 4]);
        match result {
            Err(InfrastructureError::ImageLibError(_)) | Err(InfrastructureError::IoError(_)) => {}
            other => panic!("Expected ImageLibError or IoError, got {:?}", other.map(|i| i.dimensions())),
        }
    }
}
