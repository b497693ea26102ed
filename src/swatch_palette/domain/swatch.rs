use std::ffi::OsString;
use std::path::{Path, PathBuf};

use image::RgbaImage;

use crate::domain::color::Rgb;
use crate::domain::error::DomainError;

/// One input photograph, named `<id>_<ColorName>_<rest>.jpg`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Swatch {
    pub path: PathBuf,
    pub name: String,
}

impl Swatch {
    pub fn new(path: PathBuf, name: String) -> Self {
        Self { path, name }
    }

    /// Takes the color name from the second underscore-delimited segment of the
    /// file name, e.g. `01637_DeepViolet_6610-l.jpg` -> `DeepViolet`.
    pub fn from_path(path: &Path) -> Result<Self, DomainError> {
        let invalid = || DomainError::InvalidSwatchName(path.display().to_string());
        let file_name = path.file_name().and_then(|n| n.to_str()).ok_or_else(invalid)?;

        let segments: Vec<&str> = file_name.split('_').collect();
        if segments.len() < 3 {
            return Err(invalid());
        }
        let name = segments[1];
        if name.is_empty() {
            return Err(invalid());
        }
        Ok(Self::new(path.to_path_buf(), name.to_string()))
    }

    /// Where the crop of region `index` (0-based) is persisted:
    /// `<source path>.<index + 1>.png`.
    pub fn crop_path(&self, index: usize) -> PathBuf {
        let mut path: OsString = self.path.as_os_str().to_owned();
        path.push(format!(".{}.png", index + 1));
        PathBuf::from(path)
    }

    /// Source path with forward slashes, as referenced from the gallery page.
    pub fn display_path(&self) -> String {
        self.path.to_string_lossy().replace('\\', "/")
    }
}

/// The cropped regions of one swatch and their average colors, in layout order.
#[derive(Debug, Clone)]
pub struct SwatchSample {
    pub swatch: Swatch,
    pub crops: Vec<RgbaImage>,
    pub colors: Vec<Rgb>,
}

impl SwatchSample {
    pub fn new(swatch: Swatch, crops: Vec<RgbaImage>, colors: Vec<Rgb>) -> Self {
        Self {
            swatch,
            crops,
            colors,
        }
    }
}
