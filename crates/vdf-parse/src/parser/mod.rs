//! Recursive-descent parser for KeyValues text.

use std::io::Read;

use tracing::{debug, trace};
use vdf_reader::{CharReader, Position, Span};
use vdf_tree::{Document, Node, Object};

use crate::{ParseError, ParseErrorKind, ParseOptions};

#[cfg(test)]
mod tests;

/// Recursive-descent parser over a character source.
///
/// Every character is pulled through [`CharReader`]; the parser never looks more than
/// one character ahead.
pub struct Parser<R> {
    reader: CharReader<R>,
    options: ParseOptions,
    /// Number of objects currently open below the root.
    depth: usize,
}

impl<R: Read> Parser<R> {
    /// Create a new parser for the given source.
    pub fn new(source: R) -> Self {
        Self::with_options(source, ParseOptions::default())
    }

    /// Create a new parser with explicit options.
    pub fn with_options(source: R, options: ParseOptions) -> Self {
        Self {
            reader: CharReader::new(source),
            options,
            depth: 0,
        }
    }

    /// Parse the whole source as one document.
    ///
    /// The top level is an implicit object. If the first non-whitespace character is
    /// `{`, the document is that braced object instead, and nothing after its closing
    /// brace is read.
    pub fn parse_document(mut self) -> Result<Document, ParseError> {
        debug!("parsing document");
        let root = match self.next(true)? {
            Some('{') => {
                let open = self.reader.last_position();
                trace!("explicit root object at offset {}", open.offset);
                self.parse_object(Some(open))?
            }
            Some(c) => {
                self.reader.unread(c);
                self.parse_object(None)?
            }
            None => Object::new(),
        };
        debug!(entries = root.len(), "parsed document");
        Ok(Document::from(root))
    }

    /// Parse object entries up to `}` or the end of input.
    ///
    /// `open` is the position of the opening brace, `None` for the implicit root.
    fn parse_object(&mut self, open: Option<Position>) -> Result<Object, ParseError> {
        let mut obj = Object::new();
        loop {
            let c = match self.next(true)? {
                Some('}') => break,
                Some(c) => c,
                None => {
                    if let Some(open) = open {
                        debug!(
                            "input ended inside object opened at line {}, column {}",
                            open.line, open.column
                        );
                    }
                    break;
                }
            };

            let key_start = self.reader.last_position();
            if c != '"' {
                return Err(ParseError::at_char(
                    ParseErrorKind::MalformedKey { found: c },
                    c,
                    key_start,
                ));
            }

            let key = self.parse_string(key_start)?;
            let value = self.parse_value()?;
            if obj.contains_key(&key) {
                trace!(key = %key, "repeated key");
            } else {
                trace!(key = %key, "entry");
            }
            obj.merge_entry(key, value);
        }
        Ok(obj)
    }

    /// Parse the value that follows a key: a braced object or a quoted string.
    fn parse_value(&mut self) -> Result<Node, ParseError> {
        match self.next(true)? {
            Some('{') => {
                let open = self.reader.last_position();
                if self.depth >= self.options.max_depth {
                    return Err(ParseError::at_char(
                        ParseErrorKind::NestingTooDeep {
                            limit: self.options.max_depth,
                        },
                        '{',
                        open,
                    ));
                }
                self.depth += 1;
                let obj = self.parse_object(Some(open))?;
                self.depth -= 1;
                Ok(Node::Object(obj))
            }
            Some('"') => {
                let open = self.reader.last_position();
                Ok(Node::String(self.parse_string(open)?))
            }
            Some(c) => Err(ParseError::at_char(
                ParseErrorKind::UnexpectedCharacter { found: c },
                c,
                self.reader.last_position(),
            )),
            None => {
                let end = self.reader.position();
                Err(ParseError::new(
                    ParseErrorKind::UnexpectedEndOfInput,
                    Span::empty(end.offset),
                    end,
                ))
            }
        }
    }

    /// Parse the body of a quoted string; the opening `"` at `open` is already consumed.
    ///
    /// Backslashes stay in the text. A `"` closes the string unless the character
    /// before it is a backslash that is not itself escaped.
    fn parse_string(&mut self, open: Position) -> Result<String, ParseError> {
        let mut text = String::new();
        let mut escaped = false;
        loop {
            let Some(c) = self.next(false)? else {
                let end = self.reader.position();
                return Err(ParseError::new(
                    ParseErrorKind::UnterminatedString,
                    Span::new(open.offset, end.offset),
                    open,
                ));
            };
            match c {
                '"' if !escaped => return Ok(text),
                '\\' => escaped = !escaped,
                _ => escaped = false,
            }
            text.push(c);
        }
    }

    fn next(&mut self, skip_whitespace: bool) -> Result<Option<char>, ParseError> {
        self.reader
            .next(skip_whitespace)
            .map_err(|err| ParseError::from_read(err, self.reader.position()))
    }
}
