use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::color::Rgb;
use crate::domain::swatch::SwatchSample;

/// Blend ratios toward white for the two tints shown next to each swatch.
pub const TINT_RATIOS: [f64; 2] = [0.5, 0.75];

/// Everything displayed for one color family.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorRecord {
    pub name: String,
    pub path: String,
    pub crop_paths: Vec<String>,
    pub colors: Vec<Rgb>,
}

impl ColorRecord {
    pub fn from_sample(sample: &SwatchSample) -> Self {
        let crop_paths = (0..sample.colors.len())
            .map(|index| sample.swatch.crop_path(index).to_string_lossy().replace('\\', "/"))
            .collect();
        Self {
            name: sample.swatch.name.clone(),
            path: sample.swatch.display_path(),
            crop_paths,
            colors: sample.colors.clone(),
        }
    }

    /// The last sampled region is the swatch proper; its tints follow it.
    pub fn tints(&self) -> Vec<Rgb> {
        match self.colors.last() {
            Some(base) => TINT_RATIOS.iter().map(|ratio| base.tint(*ratio)).collect(),
            None => Vec::new(),
        }
    }

    /// Region colors followed by the tints, as hex strings.
    pub fn hexes(&self) -> Vec<String> {
        self.colors
            .iter()
            .chain(self.tints().iter())
            .map(Rgb::to_hex)
            .collect()
    }
}

/// Suffix appended to the color name for the `index`-th hex of a record in the
/// text listing.
pub fn variant_suffix(index: usize) -> String {
    match index {
        0 => "Heavy".to_string(),
        1 => String::new(),
        n => format!("Light{n}"),
    }
}

/// Accumulated result of a run. Built by folding samples in discovery order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Palette {
    entries: BTreeMap<String, String>,
    records: Vec<ColorRecord>,
}

impl Palette {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sample(mut self, sample: &SwatchSample) -> Self {
        for (index, color) in sample.colors.iter().enumerate() {
            self.entries
                .insert(format!("{}{}", sample.swatch.name, index), color.to_hex());
        }
        self.records.push(ColorRecord::from_sample(sample));
        self
    }

    pub fn contains_color(&self, name: &str) -> bool {
        self.records.iter().any(|record| record.name == name)
    }

    /// `<name><regionIndex>` -> `#rrggbb`.
    pub fn entries(&self) -> &BTreeMap<String, String> {
        &self.entries
    }

    pub fn records(&self) -> &[ColorRecord] {
        &self.records
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Pretty JSON object with one-space indentation and sorted keys.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        let mut buffer = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b" ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
        self.entries.serialize(&mut serializer)?;
        // serde_json only ever writes valid UTF-8.
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }

    /// One `<name><suffix>\t\t<hex>` line per hex of every record.
    pub fn palette_text(&self) -> String {
        let mut text = String::new();
        for record in &self.records {
            for (index, hex) in record.hexes().iter().enumerate() {
                text.push_str(&format!("{}{}\t\t{}\n", record.name, variant_suffix(index), hex));
            }
        }
        text.trim().to_string()
    }
}
