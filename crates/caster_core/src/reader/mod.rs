//! Scene document reader.
//!
//! Scene documents are a small, strict subset of JSON: a top-level list of
//! flat objects, each tagged with a `"type"` key.
//!
//! ```text
//! [
//!   {"type": "camera", "width": 0.7, "height": 0.7},
//!   {"type": "sphere", "color": [1, 0, 0], "position": [0, 0, 5], "radius": 1},
//!   {"type": "plane", "color": [0, 1, 0], "position": [0, -1, 0], "normal": [0, 1, 0]}
//! ]
//! ```
//!
//! ## Not Supported
//!
//! - Escape sequences or non-ASCII characters in strings
//! - Nested objects, `true`/`false`/`null`
//! - Unknown keys (rejected, not skipped)
//!
//! # Example
//!
//! ```ignore
//! use caster_core::reader::load_scene;
//!
//! let scene = load_scene("scene.json")?;
//! println!("Loaded {} primitives", scene.len());
//! ```

mod error;
mod lexer;
mod parser;

use std::io::Read;
use std::path::Path;

use crate::scene::Scene;

pub use error::*;
pub use lexer::{SceneReader, MAX_STRING_LEN};

/// Parse a scene document held in memory.
pub fn parse_scene_bytes(input: &[u8]) -> ParseResult<Scene> {
    SceneReader::new(input).read_scene()
}

/// Parse a scene document from a string (useful for testing).
pub fn parse_scene(input: &str) -> ParseResult<Scene> {
    parse_scene_bytes(input.as_bytes())
}

/// Read a scene document from any byte stream.
pub fn read_scene<R: Read>(mut reader: R) -> ParseResult<Scene> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    parse_scene_bytes(&bytes)
}

/// Load a scene document from a file.
pub fn load_scene<P: AsRef<Path>>(path: P) -> ParseResult<Scene> {
    let path = path.as_ref();
    log::debug!("Loading scene from {}", path.display());
    let bytes = std::fs::read(path)?;
    parse_scene_bytes(&bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{Color, Primitive, PrimitiveKind};
    use caster_math::DVec3;

    #[test]
    fn test_read_scene_from_reader() {
        let _ = env_logger::builder().is_test(true).try_init();

        let input = br#"[{"type": "camera", "width": 1, "height": 2}]"#;
        let scene = read_scene(&input[..]).unwrap();
        assert_eq!(scene.cameras().collect::<Vec<_>>(), vec![(1.0, 2.0)]);
    }

    #[test]
    fn test_load_scene_missing_file() {
        let err = load_scene("/nonexistent/scene.json").unwrap_err();
        assert!(matches!(err, ParseError::Io(_)));
    }

    #[test]
    fn test_readers_do_not_share_line_state() {
        let bad = "[\n\n\n{\"type\": \"cube\"}]";
        assert_eq!(parse_scene(bad).unwrap_err().line(), Some(4));
        // A second run starts counting from line 1 again.
        assert_eq!(parse_scene(bad).unwrap_err().line(), Some(4));

        let bad_first_line = "[{\"type\": \"cube\"}]";
        assert_eq!(parse_scene(bad_first_line).unwrap_err().line(), Some(1));
    }

    #[test]
    fn test_document_round_trip() {
        let scene: Scene = [
            Primitive::Camera {
                width: 0.7,
                height: 0.35,
            },
            Primitive::Sphere {
                color: Color::new(0.1, 0.2, 0.3),
                position: DVec3::new(-1.5, 2.25, 10.0),
                radius: 1.0e-3,
            },
            Primitive::Plane {
                color: Color::new(1.0, 1.0, 0.0),
                position: DVec3::new(0.0, -4.0, 0.0),
                normal: DVec3::new(0.0, 2.0, -0.5),
            },
        ]
        .into_iter()
        .collect();

        let document = scene.to_document().unwrap();
        let reparsed = parse_scene(&document).unwrap();

        assert_eq!(reparsed.len(), scene.len());
        assert_eq!(reparsed.count_of(PrimitiveKind::Sphere), 1);
        assert_eq!(reparsed, scene);
    }

    #[test]
    fn test_record_count_matches_object_count() {
        let mut document = String::from("[");
        for i in 0..25 {
            if i > 0 {
                document.push_str(",\n");
            }
            document.push_str(&format!(
                r#"{{"type": "sphere", "color": [1, 1, 1], "position": [0, 0, {i}], "radius": 0.5}}"#
            ));
        }
        document.push(']');

        let scene = parse_scene(&document).unwrap();
        assert_eq!(scene.len(), 25);
        for (i, primitive) in scene.iter().enumerate() {
            match primitive {
                Primitive::Sphere { position, .. } => assert_eq!(position.z, i as f64),
                other => panic!("Expected sphere, got {other:?}"),
            }
        }
    }
}
