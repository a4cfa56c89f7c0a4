//! Parse errors.

use std::fmt;
use std::io;

use vdf_reader::{Position, ReadError, Span};

/// What went wrong.
#[derive(Debug)]
pub enum ParseErrorKind {
    /// The input ended inside a quoted string.
    UnterminatedString,
    /// An object entry did not start with a quoted key.
    MalformedKey {
        /// The character found where `"` was expected.
        found: char,
    },
    /// A value position held something other than `{` or `"`.
    UnexpectedCharacter {
        /// The offending character.
        found: char,
    },
    /// The input ended where a value was expected.
    UnexpectedEndOfInput,
    /// Objects were nested deeper than the configured limit.
    NestingTooDeep {
        /// The configured maximum depth.
        limit: usize,
    },
    /// The input is not valid UTF-8.
    InvalidUtf8,
    /// The underlying reader failed.
    Io(io::Error),
}

/// A parse error with its source location.
#[derive(Debug)]
pub struct ParseError {
    /// The kind of error.
    pub kind: ParseErrorKind,
    /// Byte range the error points at.
    pub span: Span,
    /// Line and column of the start of `span`.
    pub position: Position,
}

impl ParseError {
    /// Create a new parse error.
    pub fn new(kind: ParseErrorKind, span: Span, position: Position) -> Self {
        Self {
            kind,
            span,
            position,
        }
    }

    /// Error pointing at a single character.
    pub(crate) fn at_char(kind: ParseErrorKind, c: char, position: Position) -> Self {
        let span = Span::new(position.offset, position.offset + c.len_utf8());
        Self::new(kind, span, position)
    }

    pub(crate) fn from_read(err: ReadError, position: Position) -> Self {
        match err {
            ReadError::Io(err) => Self::new(
                ParseErrorKind::Io(err),
                Span::empty(position.offset),
                position,
            ),
            ReadError::InvalidUtf8 { offset } => Self::new(
                ParseErrorKind::InvalidUtf8,
                Span::new(offset, offset + 1),
                position,
            ),
        }
    }
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseErrorKind::UnterminatedString => write!(f, "unterminated string"),
            ParseErrorKind::MalformedKey { found } => {
                write!(f, "expected quoted key, found {found:?}")
            }
            ParseErrorKind::UnexpectedCharacter { found } => {
                write!(f, "unexpected character {found:?}, expected '{{' or '\"'")
            }
            ParseErrorKind::UnexpectedEndOfInput => {
                write!(f, "unexpected end of input, expected a value")
            }
            ParseErrorKind::NestingTooDeep { limit } => {
                write!(f, "objects nested deeper than {limit} levels")
            }
            ParseErrorKind::InvalidUtf8 => write!(f, "invalid UTF-8"),
            ParseErrorKind::Io(err) => write!(f, "read failed: {err}"),
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} at line {}, column {}",
            self.kind, self.position.line, self.position.column
        )
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            ParseErrorKind::Io(err) => Some(err),
            _ => None,
        }
    }
}
