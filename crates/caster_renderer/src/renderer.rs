//! Core ray casting renderer.
//!
//! Casts one ray per pixel, keeps the nearest hit and writes the hit
//! primitive's flat color, or the background on a miss.

use std::time::Instant;

use caster_core::{Color, Scene};
use rayon::prelude::*;

use crate::camera::ViewPlane;
use crate::error::{RenderError, RenderResult};
use crate::intersect::nearest_hit;

/// One 8-bit RGB pixel.
pub type Rgb = [u8; 3];

/// Render configuration.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Output width in pixels
    pub width: u32,
    /// Output height in pixels
    pub height: u32,
    /// Color for rays that hit nothing
    pub background: Color,
    /// Render rows on the rayon thread pool
    pub parallel: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            background: Color::splat(0.33),
            parallel: false,
        }
    }
}

impl RenderConfig {
    /// Check the output resolution.
    pub fn validate(&self) -> RenderResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(RenderError::InvalidResolution {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }
}

/// Convert a color to 8-bit RGB.
///
/// Each channel is scaled by 255 and truncated. Values outside [0, 1]
/// saturate, NaN becomes 0.
pub fn color_to_rgb(color: Color) -> Rgb {
    [
        (color.x * 255.0) as u8,
        (color.y * 255.0) as u8,
        (color.z * 255.0) as u8,
    ]
}

/// Row-major RGB image, top row first.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pixels: Vec<Rgb>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![[0; 3]; width as usize * height as usize],
        }
    }

    /// Get the pixel at (x, y), y = 0 being the top row.
    pub fn get(&self, x: u32, y: u32) -> Rgb {
        self.pixels[self.index(x, y)]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, rgb: Rgb) {
        let index = self.index(x, y);
        self.pixels[index] = rgb;
    }

    /// One row of pixels.
    pub fn row(&self, y: u32) -> &[Rgb] {
        let start = self.index(0, y);
        &self.pixels[start..start + self.width as usize]
    }

    /// All pixels as packed RGB bytes.
    pub fn as_bytes(&self) -> &[u8] {
        self.pixels.as_flattened()
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }
}

/// Render a single pixel. `row` 0 is the top of the image.
pub fn render_pixel(
    view: &ViewPlane,
    scene: &Scene,
    x: u32,
    row: u32,
    config: &RenderConfig,
) -> RenderResult<Rgb> {
    let ray = view.primary_ray(x, row, config.width, config.height)?;
    let color = match nearest_hit(&ray, scene) {
        Some(hit) => hit.color,
        None => config.background,
    };
    Ok(color_to_rgb(color))
}

fn render_row(
    view: &ViewPlane,
    scene: &Scene,
    row: u32,
    pixels: &mut [Rgb],
    config: &RenderConfig,
) -> RenderResult<()> {
    for (x, pixel) in pixels.iter_mut().enumerate() {
        *pixel = render_pixel(view, scene, x as u32, row, config)?;
    }
    Ok(())
}

/// Render the entire scene to an image buffer.
///
/// The camera is resolved and the resolution checked before any pixel is
/// computed. With `config.parallel` the rows are split across rayon
/// workers; the result is identical either way.
pub fn render(scene: &Scene, config: &RenderConfig) -> RenderResult<ImageBuffer> {
    config.validate()?;
    let view = ViewPlane::from_scene(scene)?;

    log::info!(
        "Rendering {}x{} through {} x {} view plane ({} primitives{})",
        config.width,
        config.height,
        view.width,
        view.height,
        scene.len(),
        if config.parallel { ", parallel" } else { "" }
    );

    let start = Instant::now();
    let mut image = ImageBuffer::new(config.width, config.height);
    let row_len = config.width as usize;

    if config.parallel {
        image
            .pixels
            .par_chunks_mut(row_len)
            .enumerate()
            .try_for_each(|(row, pixels)| render_row(&view, scene, row as u32, pixels, config))?;
    } else {
        for (row, pixels) in image.pixels.chunks_mut(row_len).enumerate() {
            render_row(&view, scene, row as u32, pixels, config)?;
        }
    }

    log::info!("Rendered in {:?}", start.elapsed());

    Ok(image)
}

#[cfg(test)]
mod tests {
    use super::*;
    use caster_core::{parse_scene, Primitive};
    use caster_math::DVec3;

    const BACKGROUND: Rgb = [84, 84, 84];

    fn config(width: u32, height: u32) -> RenderConfig {
        RenderConfig {
            width,
            height,
            ..Default::default()
        }
    }

    #[test]
    fn test_color_to_rgb_truncates() {
        assert_eq!(color_to_rgb(Color::new(1.0, 0.0, 0.5)), [255, 0, 127]);
        assert_eq!(color_to_rgb(Color::splat(0.33)), BACKGROUND);
        assert_eq!(color_to_rgb(Color::new(0.999, 0.004, 0.0)), [254, 1, 0]);
    }

    #[test]
    fn test_color_to_rgb_saturates() {
        assert_eq!(color_to_rgb(Color::new(2.0, -1.0, f64::NAN)), [255, 0, 0]);
    }

    #[test]
    fn test_image_buffer_indexing() {
        let mut image = ImageBuffer::new(3, 2);
        image.set(2, 1, [1, 2, 3]);
        assert_eq!(image.get(2, 1), [1, 2, 3]);
        assert_eq!(image.row(1), &[[0, 0, 0], [0, 0, 0], [1, 2, 3]]);
        assert_eq!(image.as_bytes().len(), 18);
        assert_eq!(&image.as_bytes()[15..], &[1, 2, 3]);
    }

    #[test]
    fn test_render_rejects_zero_resolution() {
        let scene = parse_scene(r#"[{"type": "camera", "width": 1, "height": 1}]"#).unwrap();
        assert!(matches!(
            render(&scene, &config(0, 10)),
            Err(RenderError::InvalidResolution { width: 0, height: 10 })
        ));
    }

    #[test]
    fn test_render_requires_camera() {
        let scene = parse_scene(
            r#"[{"type": "sphere", "color": [1, 0, 0], "position": [0, 0, 3], "radius": 1}]"#,
        )
        .unwrap();
        assert!(matches!(render(&scene, &config(4, 4)), Err(RenderError::NoCamera)));
    }

    #[test]
    fn test_render_sphere_silhouette() {
        let scene = parse_scene(
            r#"[
                {"type": "camera", "width": 2, "height": 2},
                {"type": "sphere", "color": [1, 0, 0], "position": [0, 0, 3], "radius": 1}
            ]"#,
        )
        .unwrap();

        let image = render(&scene, &config(10, 10)).unwrap();
        assert_eq!((image.width, image.height), (10, 10));

        let mut hits = 0;
        for row in 0..10 {
            for x in 0..10 {
                // Pixel center on the view plane at z = 1
                let px = -1.0 + 2.0 * (x as f64 + 0.5) / 10.0;
                let py = -1.0 + 2.0 * ((9 - row) as f64 + 0.5) / 10.0;
                // Ray-to-center distance below the radius: 9s / (1 + s) < 1
                let s = px * px + py * py;
                let expected = if 8.0 * s < 1.0 { [255, 0, 0] } else { BACKGROUND };
                assert_eq!(image.get(x, row), expected, "pixel ({x}, {row})");
                if 8.0 * s < 1.0 {
                    hits += 1;
                }
            }
        }
        assert_eq!(hits, 12);
    }

    #[test]
    fn test_render_vertical_flip() {
        let scene = parse_scene(
            r#"[
                {"type": "camera", "width": 2, "height": 2},
                {"type": "plane", "color": [0, 1, 0], "position": [0, -1, 0], "normal": [0, 1, 0]}
            ]"#,
        )
        .unwrap();

        let image = render(&scene, &config(2, 2)).unwrap();

        // Top row looks up, over the floor
        assert_eq!(image.row(0), &[BACKGROUND, BACKGROUND]);
        assert_eq!(image.row(1), &[[0, 255, 0], [0, 255, 0]]);
    }

    #[test]
    fn test_render_uses_background() {
        let scene = parse_scene(r#"[{"type": "camera", "width": 1, "height": 1}]"#).unwrap();
        let config = RenderConfig {
            background: Color::new(0.0, 0.0, 1.0),
            ..config(3, 3)
        };

        let image = render(&scene, &config).unwrap();
        assert!(image.as_bytes().chunks(3).all(|rgb| rgb == [0, 0, 255]));
    }

    #[test]
    fn test_render_huge_view_plane() {
        let scene = parse_scene(
            r#"[
                {"type": "camera", "width": 1e200, "height": 1e200},
                {"type": "plane", "color": [0, 1, 0], "position": [0, -1, 0], "normal": [0, 1, 0]}
            ]"#,
        )
        .unwrap();

        let image = render(&scene, &config(2, 2)).unwrap();

        // Rays are nearly flat: the top row misses, the bottom row hits the floor
        assert_eq!(image.row(0), &[BACKGROUND, BACKGROUND]);
        assert_eq!(image.row(1), &[[0, 255, 0], [0, 255, 0]]);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let mut scene = parse_scene(
            r#"[
                {"type": "camera", "width": 1.5, "height": 1},
                {"type": "plane", "color": [0.2, 0.8, 0.2], "position": [0, -1, 0], "normal": [0, 1, 0]},
                {"type": "plane", "color": [0.1, 0.1, 0.6], "position": [0, 0, 30], "normal": [0, 0, -1]}
            ]"#,
        )
        .unwrap();
        for i in 0..6 {
            scene.push(Primitive::Sphere {
                color: Color::new(i as f64 / 6.0, 0.5, 1.0 - i as f64 / 6.0),
                position: DVec3::new(i as f64 - 2.5, 0.0, 8.0 + i as f64),
                radius: 0.8,
            });
        }

        let sequential = render(&scene, &config(37, 23)).unwrap();
        let parallel = render(
            &scene,
            &RenderConfig {
                parallel: true,
                ..config(37, 23)
            },
        )
        .unwrap();

        assert_eq!(sequential, parallel);
    }
}
