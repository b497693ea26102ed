use std::fmt;
use std::str::FromStr;

use crate::domain::error::DomainError;

/// An opaque 8-bit RGB color. Alpha is always fully opaque and so not stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// How a blended channel value is brought back to an integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rounding {
    Floor,
    HalfUp,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// `#rrggbb`, lowercase.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Parses `rrggbb` with an optional leading `#`. Either case is accepted.
    pub fn from_hex(hex_str: &str) -> Result<Self, DomainError> {
        let hex = hex_str.strip_prefix('#').unwrap_or(hex_str);
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(DomainError::InvalidHex(hex_str.to_string()));
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).map_err(|_| DomainError::InvalidHex(hex_str.to_string()))
        };
        Ok(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    /// Linear RGB interpolation toward white: `base + ratio * (255 - base)` per channel.
    /// `ratio` is clamped to `[0, 1]`.
    pub fn blend_toward_white(&self, ratio: f64, rounding: Rounding) -> Self {
        let ratio = ratio.clamp(0.0, 1.0);
        let blend = |base: u8| {
            let base = f64::from(base);
            let value = base + ratio * (255.0 - base);
            let rounded = match rounding {
                Rounding::Floor => value.floor(),
                Rounding::HalfUp => (value + 0.5).floor(),
            };
            rounded.clamp(0.0, 255.0) as u8
        };
        Self::new(blend(self.r), blend(self.g), blend(self.b))
    }

    /// Lighter variant used in color records.
    pub fn tint(&self, ratio: f64) -> Self {
        self.blend_toward_white(ratio, Rounding::HalfUp)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Rgb {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rgb::from_hex(s)
    }
}

impl From<image::Rgba<u8>> for Rgb {
    fn from(pixel: image::Rgba<u8>) -> Self {
        Self::new(pixel[0], pixel[1], pixel[2])
    }
}

impl From<Rgb> for image::Rgba<u8> {
    fn from(color: Rgb) -> Self {
        image::Rgba([color.r, color.g, color.b, 255])
    }
}
