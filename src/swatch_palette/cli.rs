use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::application::config::{OutputConfig, OutputMode, RunConfig};
use crate::domain::region::CropLayout;

/// Samples average colors from swatch photographs named `<id>_<ColorName>_<rest>.jpg`
/// and writes a color map, an HTML gallery and a palette listing
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Directory containing the swatch images
    #[arg(default_value = ".")]
    pub input_dir: PathBuf,

    /// Directory the color map, gallery and palette listing are written to
    #[arg(short, long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Fixed crop geometry matching the photographs
    #[arg(short, long, value_enum, default_value_t = Layout::Golden)]
    pub layout: Layout,

    /// Which documents to write besides the crop images
    #[arg(short, long, value_enum, default_value_t = Mode::Gallery)]
    pub mode: Mode,

    /// File name of the JSON color map
    #[arg(long, default_value = "palette.json")]
    pub json_name: String,

    /// File name of the HTML gallery
    #[arg(long, default_value = "index.html")]
    pub html_name: String,

    /// File name of the text palette listing
    #[arg(long, default_value = "palette.txt")]
    pub text_name: String,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// Three 50x50 regions
    Blick,
    /// Three 200x200 regions along the top band
    Golden,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Only the JSON color map
    Flat,
    /// Color map, HTML gallery and palette listing
    Gallery,
}

impl From<Layout> for CropLayout {
    fn from(value: Layout) -> Self {
        match value {
            Layout::Blick => CropLayout::blick(),
            Layout::Golden => CropLayout::golden(),
        }
    }
}

impl From<Mode> for OutputMode {
    fn from(value: Mode) -> Self {
        match value {
            Mode::Flat => OutputMode::Flat,
            Mode::Gallery => OutputMode::Gallery,
        }
    }
}

impl From<Cli> for RunConfig {
    fn from(cli: Cli) -> Self {
        RunConfig::new(
            &cli.input_dir,
            cli.layout.into(),
            OutputConfig {
                output_dir: cli.output_dir,
                mode: cli.mode.into(),
                json_name: cli.json_name,
                html_name: cli.html_name,
                text_name: cli.text_name,
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config: RunConfig = Cli::parse_from(["swatch_palette"]).into();
        assert_eq!(config.input_dir, PathBuf::from("."));
        assert_eq!(config.layout, CropLayout::golden());
        assert_eq!(config.outputs, OutputConfig::default());
    }

    #[test]
    fn test_flags() {
        let config: RunConfig = Cli::parse_from([
            "swatch_palette",
            "images",
            "-o",
            "site",
            "--layout",
            "blick",
            "--mode",
            "flat",
            "--json-name",
            "blick.json",
        ])
        .into();
        assert_eq!(config.input_dir, PathBuf::from("images"));
        assert_eq!(config.layout, CropLayout::blick());
        assert_eq!(config.outputs.mode, OutputMode::Flat);
        assert_eq!(config.outputs.json_path(), PathBuf::from("site/blick.json"));
    }

    #[test]
    fn test_rejects_unknown_layout() {
        assert!(Cli::try_parse_from(["swatch_palette", "--layout", "square"]).is_err());
    }

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
