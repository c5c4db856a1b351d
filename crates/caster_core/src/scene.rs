//! Scene types for the ray caster.
//!
//! A [`Scene`] is an ordered list of [`Primitive`] records, kept in the
//! order they appeared in the scene document. It is built once by the
//! reader and only read afterwards.

use std::fmt;

use caster_math::DVec3;
use serde::Serialize;

/// RGB color with each channel nominally in [0, 1].
pub type Color = DVec3;

/// Discriminator for the three record kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    Camera,
    Sphere,
    Plane,
}

impl PrimitiveKind {
    /// Look up a kind by its scene-document type name.
    pub fn from_type_name(name: &str) -> Option<Self> {
        match name {
            "camera" => Some(Self::Camera),
            "sphere" => Some(Self::Sphere),
            "plane" => Some(Self::Plane),
            _ => None,
        }
    }

    /// The type name used in scene documents.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Camera => "camera",
            Self::Sphere => "sphere",
            Self::Plane => "plane",
        }
    }
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}

/// One record of a scene document.
///
/// Serializes back to the document form, `{"type": "sphere", ...}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Primitive {
    /// View-plane dimensions. Has no geometry of its own.
    Camera { width: f64, height: f64 },

    /// Sphere centered at `position`.
    Sphere {
        color: Color,
        position: DVec3,
        radius: f64,
    },

    /// Infinite plane through `position`. `normal` is kept as written.
    Plane {
        color: Color,
        position: DVec3,
        normal: DVec3,
    },
}

impl Primitive {
    pub fn kind(&self) -> PrimitiveKind {
        match self {
            Primitive::Camera { .. } => PrimitiveKind::Camera,
            Primitive::Sphere { .. } => PrimitiveKind::Sphere,
            Primitive::Plane { .. } => PrimitiveKind::Plane,
        }
    }

    /// Surface color, `None` for cameras.
    pub fn color(&self) -> Option<Color> {
        match self {
            Primitive::Camera { .. } => None,
            Primitive::Sphere { color, .. } | Primitive::Plane { color, .. } => Some(*color),
        }
    }
}

/// An ordered, immutable-after-load list of primitives.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Scene {
    primitives: Vec<Primitive>,
}

impl Scene {
    /// Create a new empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a primitive, keeping document order.
    pub fn push(&mut self, primitive: Primitive) {
        self.primitives.push(primitive);
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    /// All records in document order.
    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Primitive> {
        self.primitives.iter()
    }

    /// Camera records as `(width, height)`, in document order.
    pub fn cameras(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.primitives.iter().filter_map(|p| match *p {
            Primitive::Camera { width, height } => Some((width, height)),
            _ => None,
        })
    }

    /// Count records of one kind.
    pub fn count_of(&self, kind: PrimitiveKind) -> usize {
        self.primitives.iter().filter(|p| p.kind() == kind).count()
    }

    /// Write the scene back out as a scene document.
    ///
    /// Non-finite values have no representation in the format and come out
    /// as `null`, which the reader rejects.
    pub fn to_document(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl FromIterator<Primitive> for Scene {
    fn from_iter<I: IntoIterator<Item = Primitive>>(iter: I) -> Self {
        Self {
            primitives: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Scene {
    type Item = &'a Primitive;
    type IntoIter = std::slice::Iter<'a, Primitive>;

    fn into_iter(self) -> Self::IntoIter {
        self.primitives.iter()
    }
}
