use std::path::{Path, PathBuf};
use std::sync::Arc;

use image::RgbaImage;
use log::{debug, info, warn};

use super::config::{OutputConfig, OutputMode};
use super::error::ApplicationError;
use crate::domain::file_storage_trait::FileStorage;
use crate::domain::image_processor_trait::ImageProcessor;
use crate::domain::palette::Palette;
use crate::domain::region::CropLayout;
use crate::domain::swatch::{Swatch, SwatchSample};
use crate::infrastructure::error::InfrastructureError;
use crate::infrastructure::html_renderer::GalleryRenderer;

const SWATCH_EXTENSIONS: [&str; 2] = ["jpg", "jpeg"];

/// A cropped region waiting to be written next to its source image.
#[derive(Debug, Clone)]
pub struct CropArtifact {
    pub path: PathBuf,
    pub image: RgbaImage,
}

/// Accumulator threaded through the fold over discovered swatches.
#[derive(Debug, Clone, Default)]
pub struct BatchOutcome {
    pub palette: Palette,
    pub crops: Vec<CropArtifact>,
}

impl BatchOutcome {
    fn with_sample(mut self, sample: SwatchSample) -> Self {
        self.palette = self.palette.with_sample(&sample);
        let swatch = sample.swatch;
        self.crops.extend(
            sample
                .crops
                .into_iter()
                .enumerate()
                .map(|(index, image)| CropArtifact {
                    path: swatch.crop_path(index),
                    image,
                }),
        );
        self
    }
}

pub struct PaletteService {
    image_processor: Arc<dyn ImageProcessor>,
    storage: Arc<dyn FileStorage>,
    layout: CropLayout,
}

impl PaletteService {
    pub fn new(
        image_processor: Arc<dyn ImageProcessor>,
        storage: Arc<dyn FileStorage>,
        layout: CropLayout,
    ) -> Self {
        Self {
            image_processor,
            storage,
            layout,
        }
    }

    fn is_swatch_file(path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| SWATCH_EXTENSIONS.iter().any(|known| ext.eq_ignore_ascii_case(known)))
            .unwrap_or(false)
    }

    /// JPEG files in `input_dir` named `*_*_*`, sorted by path.
    pub fn discover(&self, input_dir: &Path) -> Result<Vec<Swatch>, ApplicationError> {
        let mut files = self
            .storage
            .list_files(input_dir)
            .map_err(|e| ApplicationError::swatch(input_dir, "list swatches in", e))?;
        files.sort();

        let swatches = files
            .into_iter()
            .filter(|path| Self::is_swatch_file(path))
            .filter_map(|path| match Swatch::from_path(&path) {
                Ok(swatch) => Some(swatch),
                Err(e) => {
                    debug!("Skipping {}: {}", path.display(), e);
                    None
                }
            })
            .collect();
        Ok(swatches)
    }

    /// Crops every layout region out of one swatch and averages each crop.
    /// All regions are checked against the image before any is cropped.
    pub fn sample_swatch(&self, swatch: &Swatch) -> Result<SwatchSample, ApplicationError> {
        let path = swatch.path.as_path();
        let bytes = self
            .storage
            .read_image(path)
            .map_err(|e| ApplicationError::swatch(path, "read", e))?;
        let image = self
            .image_processor
            .decode(&bytes)
            .map_err(|e| ApplicationError::swatch(path, "decode", e))?;

        self.layout
            .ensure_within(image.width(), image.height())
            .map_err(|e| ApplicationError::swatch(path, "crop", e.into()))?;

        let mut crops = Vec::with_capacity(self.layout.len());
        let mut colors = Vec::with_capacity(self.layout.len());
        for (index, region) in self.layout.regions().iter().enumerate() {
            let crop = self
                .image_processor
                .crop(&image, *region)
                .map_err(|e| ApplicationError::swatch(path, "crop", e))?;
            let color = self
                .image_processor
                .average_color(&crop)
                .map_err(|e| ApplicationError::swatch(path, "average", e))?;
            debug!("{} region {} ({}): {}", swatch.name, index, region, color);
            crops.push(crop);
            colors.push(color);
        }

        Ok(SwatchSample::new(swatch.clone(), crops, colors))
    }

    /// Samples every discovered swatch. A color name already sampled earlier in
    /// the run is skipped. The first failure aborts the whole batch.
    pub fn build_palette(&self, input_dir: &Path) -> Result<BatchOutcome, ApplicationError> {
        let swatches = self.discover(input_dir)?;
        if swatches.is_empty() {
            warn!("No swatch images found in {}", input_dir.display());
        }

        swatches
            .iter()
            .enumerate()
            .try_fold(BatchOutcome::default(), |outcome, (index, swatch)| {
                if outcome.palette.contains_color(&swatch.name) {
                    warn!(
                        "Skipping {}: color {} already sampled",
                        swatch.path.display(),
                        swatch.name
                    );
                    return Ok(outcome);
                }
                info!("{} {}", index, swatch.path.display());
                let sample = self.sample_swatch(swatch)?;
                Ok(outcome.with_sample(sample))
            })
    }

    /// Writes crop images, then the JSON map, then (in gallery mode) the HTML
    /// page and the text listing. Everything is encoded before the first write.
    pub fn publish(&self, outcome: &BatchOutcome, outputs: &OutputConfig) -> Result<(), ApplicationError> {
        let mut encoded_crops = Vec::with_capacity(outcome.crops.len());
        for crop in &outcome.crops {
            let bytes = self
                .image_processor
                .encode_png(&crop.image)
                .map_err(|e| ApplicationError::swatch(&crop.path, "encode crop", e))?;
            encoded_crops.push((crop.path.as_path(), bytes));
        }

        let mut documents = vec![(
            "color map",
            outputs.json_path(),
            outcome.palette.to_json().map_err(InfrastructureError::from)?,
        )];
        if outputs.mode == OutputMode::Gallery {
            let renderer = GalleryRenderer::new()?;
            documents.push((
                "gallery",
                outputs.html_path(),
                renderer.render(outcome.palette.records())?,
            ));
            documents.push(("palette listing", outputs.text_path(), outcome.palette.palette_text()));
        }

        for (path, bytes) in encoded_crops {
            self.storage
                .save_image(path, &bytes)
                .map_err(|e| ApplicationError::output("crop", path, e))?;
        }
        for (what, path, text) in documents {
            self.storage
                .write_text(&path, &text)
                .map_err(|e| ApplicationError::output(what, &path, e))?;
            info!("Wrote {} to {}", what, path.display());
        }
        Ok(())
    }

    /// Builds the palette from `input_dir` and publishes it.
    pub fn run(&self, input_dir: &Path, outputs: &OutputConfig) -> Result<Palette, ApplicationError> {
        let outcome = self.build_palette(input_dir)?;
        if outcome.palette.is_empty() {
            warn!("Palette is empty; writing empty outputs");
        }
        self.publish(&outcome, outputs)?;
        info!(
            "Sampled {} colors into {} entries",
            outcome.palette.records().len(),
            outcome.palette.entries().len()
        );
        Ok(outcome.palette)
    }
}
