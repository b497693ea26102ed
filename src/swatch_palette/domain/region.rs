use std::fmt;

use imageproc::rect::Rect;

use crate::domain::error::DomainError;

/// A rectangle anchored at its top-left corner, in source image pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Region {
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub const fn square(x: u32, y: u32, size: u32) -> Self {
        Self::new(x, y, size, size)
    }

    pub fn area(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }

    /// Fails unless the region has a non-zero area and lies entirely inside
    /// an image of the given dimensions. Regions are never clamped.
    pub fn ensure_within(&self, image_width: u32, image_height: u32) -> Result<(), DomainError> {
        if self.area() == 0 {
            return Err(DomainError::ZeroArea(*self));
        }
        let out_of_bounds = DomainError::OutOfBounds {
            region: *self,
            image_width,
            image_height,
        };
        if image_width == 0 || image_height == 0 {
            return Err(out_of_bounds);
        }

        // Rect works in i32, so both far edges must be representable.
        let (Some(left), Some(top)) = (to_i32(self.x, self.width), to_i32(self.y, self.height)) else {
            return Err(out_of_bounds);
        };
        if to_i32(0, image_width).is_none() || to_i32(0, image_height).is_none() {
            return Err(out_of_bounds);
        }

        let requested = Rect::at(left, top).of_size(self.width, self.height);
        let bounds = Rect::at(0, 0).of_size(image_width, image_height);
        match bounds.intersect(requested) {
            Some(inside) if inside == requested => Ok(()),
            _ => Err(out_of_bounds),
        }
    }
}

fn to_i32(origin: u32, extent: u32) -> Option<i32> {
    let end = origin.checked_add(extent)?;
    i32::try_from(end).ok()?;
    i32::try_from(origin).ok()
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}+{}+{}", self.width, self.height, self.x, self.y)
    }
}

/// The fixed set of regions sampled from every swatch, in output order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CropLayout {
    regions: Vec<Region>,
}

impl CropLayout {
    pub fn new(regions: Vec<Region>) -> Self {
        Self { regions }
    }

    /// 50x50 samples used for the Blick swatch photographs.
    pub fn blick() -> Self {
        Self::new(vec![
            Region::square(60, 300, 50),
            Region::square(500, 300, 50),
            Region::square(900, 700, 50),
        ])
    }

    /// 200x200 samples along the top band of the Golden swatch photographs.
    pub fn golden() -> Self {
        Self::new(vec![
            Region::square(150, 50, 200),
            Region::square(450, 50, 200),
            Region::square(800, 50, 200),
        ])
    }

    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Validates every region before anything is cropped.
    pub fn ensure_within(&self, image_width: u32, image_height: u32) -> Result<(), DomainError> {
        self.regions
            .iter()
            .try_for_each(|region| region.ensure_within(image_width, image_height))
    }
}
