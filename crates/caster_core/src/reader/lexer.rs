//! Byte-level tokenizer for scene documents.
//!
//! The reader walks the raw bytes directly; there is no separate token
//! stream. Each `next_*` method consumes exactly one token (after the caller
//! has skipped any leading whitespace) or fails with the current line.

use caster_math::DVec3;

use super::error::{GrammarErrorKind, LexErrorKind, ParseError, ParseResult, SemanticErrorKind};

/// Longest string literal the reader accepts.
pub const MAX_STRING_LEN: usize = 128;

/// Per-invocation reader state: the input, a cursor and the line counter.
pub struct SceneReader<'a> {
    input: &'a [u8],
    pos: usize,
    line: usize,
}

impl<'a> SceneReader<'a> {
    /// Create a reader positioned at the start of `input`, on line 1.
    pub fn new(input: &'a [u8]) -> Self {
        Self {
            input,
            pos: 0,
            line: 1,
        }
    }

    /// Current 1-based line.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Look at the next byte without consuming it.
    pub(super) fn peek(&self) -> Option<u8> {
        self.input.get(self.pos).copied()
    }

    /// Like [`peek`](Self::peek), but running out of input is an error.
    pub(super) fn peek_or_eof(&self) -> ParseResult<u8> {
        self.peek()
            .ok_or_else(|| self.lex_error(LexErrorKind::UnexpectedEof))
    }

    /// Consume one byte, keeping the line counter up to date.
    pub(super) fn bump(&mut self) {
        if let Some(c) = self.peek() {
            if c == b'\n' {
                self.line += 1;
            }
            self.pos += 1;
        }
    }

    /// Consume and return the next byte.
    pub fn next_byte(&mut self) -> ParseResult<u8> {
        let c = self.peek_or_eof()?;
        self.bump();
        Ok(c)
    }

    /// Consume the next byte, which must be `expected`.
    pub fn expect_byte(&mut self, expected: u8) -> ParseResult<()> {
        let found = self.peek_or_eof()?;
        if found != expected {
            return Err(self.grammar_error(GrammarErrorKind::Expected {
                expected: expected as char,
                found: found as char,
            }));
        }
        self.bump();
        Ok(())
    }

    /// Skip spaces, tabs, newlines and carriage returns.
    pub fn skip_ws(&mut self) {
        while let Some(b' ' | b'\t' | b'\n' | b'\r') = self.peek() {
            self.bump();
        }
    }

    /// Read a double-quoted string.
    ///
    /// No escapes, printable ASCII only, at most [`MAX_STRING_LEN`] characters.
    pub fn next_string(&mut self) -> ParseResult<String> {
        let open = self.peek_or_eof()?;
        if open != b'"' {
            return Err(self.lex_error(LexErrorKind::ExpectedString(open as char)));
        }
        self.bump();

        let mut buffer = String::new();
        loop {
            let c = self.next_byte()?;
            if c == b'"' {
                return Ok(buffer);
            }
            if buffer.len() >= MAX_STRING_LEN {
                return Err(self.lex_error(LexErrorKind::StringTooLong {
                    max: MAX_STRING_LEN,
                }));
            }
            if c == b'\\' {
                return Err(self.lex_error(LexErrorKind::EscapeSequence));
            }
            if !(32..=126).contains(&c) {
                return Err(self.lex_error(LexErrorKind::NonPrintable(c)));
            }
            buffer.push(c as char);
        }
    }

    /// Read a decimal floating point number.
    ///
    /// Accepts an optional sign, digits with an optional fraction and an
    /// optional exponent. The scanned text must parse as `f64` in full.
    pub fn next_number(&mut self) -> ParseResult<f64> {
        let start = self.pos;

        if let Some(b'+' | b'-') = self.peek() {
            self.bump();
        }
        self.skip_digits();
        if self.peek() == Some(b'.') {
            self.bump();
            self.skip_digits();
        }
        if let Some(b'e' | b'E') = self.peek() {
            self.bump();
            if let Some(b'+' | b'-') = self.peek() {
                self.bump();
            }
            self.skip_digits();
        }

        // Everything scanned above is ASCII.
        let text = String::from_utf8_lossy(&self.input[start..self.pos]);
        if text.is_empty() {
            return match self.peek() {
                None => Err(self.lex_error(LexErrorKind::UnexpectedEof)),
                Some(c) => Err(self.lex_error(LexErrorKind::InvalidNumber((c as char).to_string()))),
            };
        }

        text.parse::<f64>()
            .map_err(|_| self.lex_error(LexErrorKind::InvalidNumber(text.into_owned())))
    }

    /// Read a `[x, y, z]` literal.
    pub fn next_vector(&mut self) -> ParseResult<DVec3> {
        self.expect_vector_byte(b'[')?;
        self.skip_ws();
        let x = self.next_number()?;
        self.skip_ws();
        self.expect_vector_byte(b',')?;
        self.skip_ws();
        let y = self.next_number()?;
        self.skip_ws();
        self.expect_vector_byte(b',')?;
        self.skip_ws();
        let z = self.next_number()?;
        self.skip_ws();
        self.expect_vector_byte(b']')?;
        Ok(DVec3::new(x, y, z))
    }

    fn expect_vector_byte(&mut self, expected: u8) -> ParseResult<()> {
        let found = self.peek_or_eof()?;
        if found != expected {
            return Err(self.lex_error(LexErrorKind::MalformedVector {
                expected: expected as char,
                found: found as char,
            }));
        }
        self.bump();
        Ok(())
    }

    fn skip_digits(&mut self) {
        while let Some(b'0'..=b'9') = self.peek() {
            self.bump();
        }
    }

    pub(super) fn lex_error(&self, kind: LexErrorKind) -> ParseError {
        ParseError::Lex {
            line: self.line,
            kind,
        }
    }

    pub(super) fn grammar_error(&self, kind: GrammarErrorKind) -> ParseError {
        ParseError::Grammar {
            line: self.line,
            kind,
        }
    }

    pub(super) fn semantic_error(&self, kind: SemanticErrorKind) -> ParseError {
        ParseError::Semantic {
            line: self.line,
            kind,
        }
    }
}
