//! Binary PPM (P6) output.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::RenderResult;
use crate::renderer::ImageBuffer;

/// Write an image as binary PPM.
///
/// The header is `P6\n<width> <height>\n255\n`, followed by the pixel bytes
/// top row first.
pub fn write_ppm<W: Write>(image: &ImageBuffer, mut writer: W) -> RenderResult<()> {
    write!(writer, "P6\n{} {}\n255\n", image.width, image.height)?;
    writer.write_all(image.as_bytes())?;
    writer.flush()?;
    Ok(())
}

/// Save an image as a binary PPM file, replacing any existing file.
pub fn save_ppm<P: AsRef<Path>>(image: &ImageBuffer, path: P) -> RenderResult<()> {
    let path = path.as_ref();
    let file = File::create(path)?;
    write_ppm(image, BufWriter::new(file))?;
    log::info!("Saved {}x{} image to {}", image.width, image.height, path.display());
    Ok(())
}
