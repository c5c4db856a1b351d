//! raycast - render a JSON scene description to a binary PPM image.
//!
//! Usage: raycast [--parallel] [--background R,G,B] <WIDTH> <HEIGHT> <INPUT.json> <OUTPUT.ppm>

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;

use caster_core::load_scene;
use caster_renderer::{render, save_ppm};

mod args;

use args::Cli;

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    run(&cli)
}

/// Load, render, then write. The output file is only touched once the
/// image exists.
fn run(cli: &Cli) -> Result<()> {
    log::info!("Loading scene {}", cli.input.display());
    let scene = load_scene(&cli.input)
        .with_context(|| format!("Failed to load scene {}", cli.input.display()))?;

    let image = render(&scene, &cli.render_config())
        .with_context(|| format!("Failed to render {}", cli.input.display()))?;

    save_ppm(&image, &cli.output)
        .with_context(|| format!("Failed to write image {}", cli.output.display()))?;

    Ok(())
}
