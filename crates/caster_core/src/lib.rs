//! Caster Core - scene model and scene document reader.
//!
//! This crate provides:
//!
//! - **Scene types**: `Scene`, `Primitive`, `PrimitiveKind`
//! - **Scene reader**: strict parsing of scene documents with line-numbered errors
//!
//! # Example
//!
//! ```ignore
//! use caster_core::load_scene;
//!
//! let scene = load_scene("scene.json")?;
//! println!("Loaded {} primitives", scene.len());
//! ```

pub mod reader;
pub mod scene;

// Re-export commonly used types
pub use reader::{load_scene, parse_scene, read_scene, ParseError, ParseResult};
pub use scene::{Color, Primitive, PrimitiveKind, Scene};
