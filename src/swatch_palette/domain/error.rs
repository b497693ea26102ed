use thiserror::Error;

use crate::domain::region::Region;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Invalid region {0}: zero area")]
    ZeroArea(Region),

    #[error("Region {region} lies outside the {image_width}x{image_height} image")]
    OutOfBounds {
        region: Region,
        image_width: u32,
        image_height: u32,
    },

    #[error("Invalid swatch file name: {0}")]
    InvalidSwatchName(String),

    #[error("Invalid hex color: {0}")]
    InvalidHex(String),
}
