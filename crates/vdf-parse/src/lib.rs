#![doc = include_str!("../README.md")]

use std::io::Read;

pub use vdf_reader::{Position, Span};
pub use vdf_tree::{Document, Node, Object};

mod diagnostic;

mod error;
pub use error::{ParseError, ParseErrorKind};

mod options;
pub use options::{DEFAULT_MAX_DEPTH, ParseOptions};

mod parser;
pub use parser::Parser;

/// Parse a KeyValues document from a byte stream.
pub fn parse<R: Read>(source: R) -> Result<Document, ParseError> {
    Parser::new(source).parse_document()
}

/// Parse a KeyValues document from a byte stream with explicit options.
pub fn parse_with_options<R: Read>(
    source: R,
    options: ParseOptions,
) -> Result<Document, ParseError> {
    Parser::with_options(source, options).parse_document()
}

/// Parse a KeyValues document held in memory.
pub fn parse_str(source: &str) -> Result<Document, ParseError> {
    parse(source.as_bytes())
}
