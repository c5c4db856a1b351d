//! Scene grammar on top of the lexer.
//!
//! # Supported Syntax
//!
//! ```text
//! scene   := '[' ( object ( ',' object )* )? ']'
//! object  := '{' "type" ':' type-name ( ',' key ':' value )* '}'
//! value   := number | '[' number ',' number ',' number ']'
//! ```
//!
//! Type names are `camera`, `sphere` and `plane`. Keys are `width`,
//! `height`, `radius`, `color`, `position` and `normal`, each legal only for
//! some kinds. The first problem found ends the read.

use caster_math::DVec3;

use super::error::{GrammarErrorKind, ParseResult, SemanticErrorKind};
use super::lexer::SceneReader;
use crate::scene::{Primitive, PrimitiveKind, Scene};

/// A recognized property key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Property {
    Width,
    Height,
    Radius,
    Color,
    Position,
    Normal,
}

impl Property {
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "width" => Some(Self::Width),
            "height" => Some(Self::Height),
            "radius" => Some(Self::Radius),
            "color" => Some(Self::Color),
            "position" => Some(Self::Position),
            "normal" => Some(Self::Normal),
            _ => None,
        }
    }

    fn valid_for(self, kind: PrimitiveKind) -> bool {
        match self {
            Self::Width | Self::Height => kind == PrimitiveKind::Camera,
            Self::Radius => kind == PrimitiveKind::Sphere,
            Self::Normal => kind == PrimitiveKind::Plane,
            Self::Color | Self::Position => kind != PrimitiveKind::Camera,
        }
    }
}

/// Values seen so far for the object being read.
///
/// Repeated keys overwrite earlier values.
struct PrimitiveBuilder {
    kind: PrimitiveKind,
    width: Option<f64>,
    height: Option<f64>,
    radius: Option<f64>,
    color: Option<DVec3>,
    position: Option<DVec3>,
    normal: Option<DVec3>,
}

impl PrimitiveBuilder {
    fn new(kind: PrimitiveKind) -> Self {
        Self {
            kind,
            width: None,
            height: None,
            radius: None,
            color: None,
            position: None,
            normal: None,
        }
    }

    /// Build the record, or name the first required field that is missing.
    fn finish(self) -> Result<Primitive, &'static str> {
        match self.kind {
            PrimitiveKind::Camera => Ok(Primitive::Camera {
                width: self.width.ok_or("width")?,
                height: self.height.ok_or("height")?,
            }),
            PrimitiveKind::Sphere => Ok(Primitive::Sphere {
                position: self.position.ok_or("position")?,
                color: self.color.ok_or("color")?,
                radius: self.radius.ok_or("radius")?,
            }),
            PrimitiveKind::Plane => Ok(Primitive::Plane {
                position: self.position.ok_or("position")?,
                color: self.color.ok_or("color")?,
                normal: self.normal.ok_or("normal")?,
            }),
        }
    }
}

impl<'a> SceneReader<'a> {
    /// Read the whole document into a scene.
    ///
    /// An empty list `[]` is reported with a warning and yields an empty
    /// scene; the caller decides whether that is usable.
    pub fn read_scene(mut self) -> ParseResult<Scene> {
        let mut scene = Scene::new();

        self.skip_ws();
        self.expect_byte(b'[')?;
        self.skip_ws();

        if self.peek() == Some(b']') {
            self.bump();
            log::warn!("Scene is empty (line {})", self.line());
            self.expect_end()?;
            return Ok(scene);
        }

        loop {
            match self.peek_or_eof()? {
                b'{' => self.bump(),
                c => return Err(self.grammar_error(GrammarErrorKind::ExpectedObject(c as char))),
            }

            let primitive = self.parse_object()?;
            log::debug!("Read {} record ending on line {}", primitive.kind(), self.line());
            scene.push(primitive);

            self.skip_ws();
            match self.peek_or_eof()? {
                b',' => {
                    self.bump();
                    self.skip_ws();
                }
                b']' => {
                    self.bump();
                    break;
                }
                c => return Err(self.grammar_error(GrammarErrorKind::ExpectedSeparator(c as char))),
            }
        }

        self.expect_end()?;

        log::info!(
            "Read scene with {} primitives ({} cameras, {} spheres, {} planes)",
            scene.len(),
            scene.count_of(PrimitiveKind::Camera),
            scene.count_of(PrimitiveKind::Sphere),
            scene.count_of(PrimitiveKind::Plane)
        );

        Ok(scene)
    }

    /// Parse one object. The opening `{` has already been consumed.
    fn parse_object(&mut self) -> ParseResult<Primitive> {
        self.skip_ws();
        let key = self.next_string()?;
        if key != "type" {
            return Err(self.grammar_error(GrammarErrorKind::MissingTypeKey(key)));
        }

        self.skip_ws();
        self.expect_byte(b':')?;
        self.skip_ws();

        let type_name = self.next_string()?;
        let kind = PrimitiveKind::from_type_name(&type_name)
            .ok_or_else(|| self.grammar_error(GrammarErrorKind::UnknownType(type_name)))?;

        let mut builder = PrimitiveBuilder::new(kind);
        self.skip_ws();

        loop {
            match self.peek_or_eof()? {
                b'}' => {
                    // Report a missing field on the line of the closing brace.
                    let primitive = builder.finish().map_err(|field| {
                        self.semantic_error(SemanticErrorKind::MissingField { kind, field })
                    })?;
                    self.bump();
                    return Ok(primitive);
                }
                b',' => {
                    self.bump();
                    self.skip_ws();
                    self.parse_property(&mut builder)?;
                    self.skip_ws();
                }
                c => {
                    return Err(self.grammar_error(GrammarErrorKind::ExpectedFieldOrClose(c as char)))
                }
            }
        }
    }

    /// Parse `key: value` into the builder.
    fn parse_property(&mut self, builder: &mut PrimitiveBuilder) -> ParseResult<()> {
        let key = self.next_string()?;
        let property = match Property::from_name(&key) {
            Some(property) => property,
            None => return Err(self.semantic_error(SemanticErrorKind::UnknownProperty(key))),
        };
        if !property.valid_for(builder.kind) {
            return Err(self.semantic_error(SemanticErrorKind::PropertyMismatch {
                key,
                kind: builder.kind,
            }));
        }

        self.skip_ws();
        self.expect_byte(b':')?;
        self.skip_ws();

        match property {
            Property::Width => builder.width = Some(self.next_number()?),
            Property::Height => builder.height = Some(self.next_number()?),
            Property::Radius => builder.radius = Some(self.next_number()?),
            Property::Color => builder.color = Some(self.next_vector()?),
            Property::Position => builder.position = Some(self.next_vector()?),
            Property::Normal => builder.normal = Some(self.next_vector()?),
        }

        Ok(())
    }

    /// Only whitespace may follow the closing `]`.
    fn expect_end(&mut self) -> ParseResult<()> {
        self.skip_ws();
        match self.peek() {
            None => Ok(()),
            Some(c) => Err(self.grammar_error(GrammarErrorKind::TrailingContent(c as char))),
        }
    }
}
