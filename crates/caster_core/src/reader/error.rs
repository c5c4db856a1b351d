//! Errors produced while reading a scene document.

use thiserror::Error;

use crate::scene::PrimitiveKind;

/// Errors that can occur while reading a scene.
///
/// Every variant except [`ParseError::Io`] carries the 1-based line on which
/// the problem was detected.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Lex error at line {line}: {kind}")]
    Lex { line: usize, kind: LexErrorKind },

    #[error("Grammar error at line {line}: {kind}")]
    Grammar { line: usize, kind: GrammarErrorKind },

    #[error("Semantic error at line {line}: {kind}")]
    Semantic { line: usize, kind: SemanticErrorKind },
}

impl ParseError {
    /// Line the error was detected on, if it came from the document itself.
    pub fn line(&self) -> Option<usize> {
        match self {
            ParseError::Io(_) => None,
            ParseError::Lex { line, .. }
            | ParseError::Grammar { line, .. }
            | ParseError::Semantic { line, .. } => Some(*line),
        }
    }
}

/// Malformed tokens.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LexErrorKind {
    #[error("unexpected end of input")]
    UnexpectedEof,

    #[error("expected a string, found {0:?}")]
    ExpectedString(char),

    #[error("strings longer than {max} characters are not supported")]
    StringTooLong { max: usize },

    #[error("strings with escape sequences are not supported")]
    EscapeSequence,

    #[error("strings may contain only printable ASCII, found byte 0x{0:02x}")]
    NonPrintable(u8),

    #[error("invalid number {0:?}")]
    InvalidNumber(String),

    #[error("malformed vector: expected {expected:?}, found {found:?}")]
    MalformedVector { expected: char, found: char },
}

/// Tokens in the wrong place.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GrammarErrorKind {
    #[error("expected {expected:?}, found {found:?}")]
    Expected { expected: char, found: char },

    #[error("expected '{{' or ']', found {0:?}")]
    ExpectedObject(char),

    #[error("expected ',' or '}}' inside object, found {0:?}")]
    ExpectedFieldOrClose(char),

    #[error("expected ',' or ']' after object, found {0:?}")]
    ExpectedSeparator(char),

    #[error("expected \"type\" as the first key, found {0:?}")]
    MissingTypeKey(String),

    #[error("unknown type {0:?}")]
    UnknownType(String),

    #[error("unexpected content after end of scene: {0:?}")]
    TrailingContent(char),
}

/// Well-formed tokens that do not make sense for the record.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SemanticErrorKind {
    #[error("unknown property {0:?}")]
    UnknownProperty(String),

    #[error("property {key:?} is not valid for a {kind}")]
    PropertyMismatch { key: String, kind: PrimitiveKind },

    #[error("{kind} is missing required property {field:?}")]
    MissingField {
        kind: PrimitiveKind,
        field: &'static str,
    },
}

/// Result type for reading operations.
pub type ParseResult<T> = Result<T, ParseError>;
