use serde::Serialize;
use tera::{Context, Tera};

use super::error::InfrastructureError;
use crate::domain::palette::ColorRecord;

const GALLERY_TEMPLATE_NAME: &str = "gallery.html";
const GALLERY_TEMPLATE: &str = include_str!("../../../templates/gallery.html");

/// Columns per gallery row; crop rows are padded with blank swatches up to this.
const GALLERY_COLUMNS: usize = 5;

#[derive(Serialize, Debug)]
struct GalleryCard<'a> {
    name: &'a str,
    path: &'a str,
    crops: &'a [String],
    placeholders: usize,
    hexes: Vec<String>,
}

#[derive(Serialize, Debug)]
struct GalleryPage<'a> {
    title: &'a str,
    colors: Vec<GalleryCard<'a>>,
}

pub struct GalleryRenderer {
    tera: Tera,
}

impl GalleryRenderer {
    pub fn new() -> Result<Self, InfrastructureError> {
        let mut tera = Tera::default();
        tera.add_raw_template(GALLERY_TEMPLATE_NAME, GALLERY_TEMPLATE)?;
        Ok(Self { tera })
    }

    /// Renders one card per record, in the order given.
    pub fn render(&self, records: &[ColorRecord]) -> Result<String, InfrastructureError> {
        let colors = records
            .iter()
            .map(|record| GalleryCard {
                name: &record.name,
                path: &record.path,
                crops: &record.crop_paths,
                placeholders: GALLERY_COLUMNS.saturating_sub(record.crop_paths.len()),
                hexes: record.hexes(),
            })
            .collect();
        let page = GalleryPage {
            title: "Swatch palette",
            colors,
        };

        log::debug!("Rendering gallery with {} colors", records.len());
        let context = Context::from_serialize(&page)?;
        Ok(self.tera.render(GALLERY_TEMPLATE_NAME, &context)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::color::Rgb;

    fn record(name: &str) -> ColorRecord {
        ColorRecord {
            name: name.to_string(),
            path: format!("0001_{name}_x.jpg"),
            crop_paths: (1..=3).map(|i| format!("0001_{name}_x.jpg.{i}.png")).collect(),
            colors: vec![Rgb::new(255, 0, 0), Rgb::new(0, 255, 0), Rgb::new(0, 0, 255)],
        }
    }

    #[test]
    fn test_render_contains_every_hex_and_crop() {
        let renderer = GalleryRenderer::new().unwrap();
        let html = renderer.render(&[record("Scarlet")]).unwrap();

        assert!(html.contains("<h2>Scarlet</h2>"));
        assert!(html.contains("src=\"0001_Scarlet_x.jpg\""));
        for i in 1..=3 {
            assert!(html.contains(&format!("src=\"0001_Scarlet_x.jpg.{i}.png\"")));
        }
        for hex in ["#ff0000", "#00ff00", "#0000ff", "#8080ff", "#bfbfff"] {
            assert!(html.contains(&format!("background:{hex};")), "missing swatch {hex}");
            assert!(html.contains(&format!("<code>{hex}</code>")), "missing label {hex}");
        }
        // Two blank placeholders pad the crop row.
        assert_eq!(html.matches("background:#ffffff;").count(), 2);
    }

    #[test]
    fn test_render_keeps_record_order() {
        let renderer = GalleryRenderer::new().unwrap();
        let html = renderer.render(&[record("Zinc"), record("Amber")]).unwrap();

        let zinc = html.find("<h2>Zinc</h2>").unwrap();
        let amber = html.find("<h2>Amber</h2>").unwrap();
        assert!(zinc < amber);
    }

    #[test]
    fn test_render_escapes_names() {
        let renderer = GalleryRenderer::new().unwrap();
        let html = renderer.render(&[record("<b>")]).unwrap();
        assert!(!html.contains("<h2><b></h2>"));
        assert!(html.contains("&lt;b&gt;"));
    }

    #[test]
    fn test_render_empty_page() {
        let renderer = GalleryRenderer::new().unwrap();
        let html = renderer.render(&[]).unwrap();
        assert!(html.contains("<title>Swatch palette</title>"));
        assert!(!html.contains("class=\"card\""));
    }
}
