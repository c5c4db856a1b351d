//! Command-line arguments.

use std::path::{Path, PathBuf};

use caster_renderer::{Color, RenderConfig};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "raycast", version)]
#[command(about = "Render a JSON scene description to a binary PPM image", long_about = None)]
pub struct Cli {
    /// Output image width in pixels
    #[arg(value_parser = clap::value_parser!(u32).range(1..))]
    pub width: u32,

    /// Output image height in pixels
    #[arg(value_parser = clap::value_parser!(u32).range(1..))]
    pub height: u32,

    /// Scene description (.json)
    #[arg(value_parser = json_path)]
    pub input: PathBuf,

    /// Output image (.ppm)
    #[arg(value_parser = ppm_path)]
    pub output: PathBuf,

    /// Render rows in parallel
    #[arg(long)]
    pub parallel: bool,

    /// Background color for rays that hit nothing, as R,G,B in [0, 1]
    #[arg(long, value_name = "R,G,B", value_parser = parse_color)]
    pub background: Option<Color>,
}

impl Cli {
    /// Render settings for this invocation.
    pub fn render_config(&self) -> RenderConfig {
        let defaults = RenderConfig::default();
        RenderConfig {
            width: self.width,
            height: self.height,
            background: self.background.unwrap_or(defaults.background),
            parallel: self.parallel,
        }
    }
}

fn has_extension(path: &Path, ext: &str) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(ext))
}

fn json_path(s: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(s);
    if has_extension(&path, "json") {
        Ok(path)
    } else {
        Err(format!("scene file must have a .json extension: {s}"))
    }
}

fn ppm_path(s: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(s);
    if has_extension(&path, "ppm") {
        Ok(path)
    } else {
        Err(format!("output file must have a .ppm extension: {s}"))
    }
}

fn parse_color(s: &str) -> Result<Color, String> {
    let channels = s
        .split(',')
        .map(|c| c.trim().parse::<f64>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| format!("invalid color component in '{s}': {e}"))?;

    match channels[..] {
        [r, g, b] => Ok(Color::new(r, g, b)),
        _ => Err(format!("expected three components R,G,B, got {}", channels.len())),
    }
}
