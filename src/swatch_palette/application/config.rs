use std::path::{Path, PathBuf};

use crate::domain::region::CropLayout;

/// Which files a run writes besides the crop images.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// The JSON name -> hex map only.
    Flat,
    /// The JSON map, the HTML gallery and the text palette listing.
    Gallery,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputConfig {
    pub output_dir: PathBuf,
    pub mode: OutputMode,
    pub json_name: String,
    pub html_name: String,
    pub text_name: String,
}

impl OutputConfig {
    pub fn json_path(&self) -> PathBuf {
        self.output_dir.join(&self.json_name)
    }

    pub fn html_path(&self) -> PathBuf {
        self.output_dir.join(&self.html_name)
    }

    pub fn text_path(&self) -> PathBuf {
        self.output_dir.join(&self.text_name)
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            mode: OutputMode::Gallery,
            json_name: "palette.json".to_string(),
            html_name: "index.html".to_string(),
            text_name: "palette.txt".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub input_dir: PathBuf,
    pub layout: CropLayout,
    pub outputs: OutputConfig,
}

impl RunConfig {
    pub fn new(input_dir: &Path, layout: CropLayout, outputs: OutputConfig) -> Self {
        Self {
            input_dir: input_dir.to_path_buf(),
            layout,
            outputs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_output_paths() {
        let outputs = OutputConfig {
            output_dir: PathBuf::from("out"),
            ..OutputConfig::default()
        };
        assert_eq!(outputs.json_path(), PathBuf::from("out/palette.json"));
        assert_eq!(outputs.html_path(), PathBuf::from("out/index.html"));
        assert_eq!(outputs.text_path(), PathBuf::from("out/palette.txt"));
        assert_eq!(outputs.mode, OutputMode::Gallery);
    }
}
