//! Character reader for KeyValues source text.

use std::io::{self, BufRead, BufReader, Read};

use tracing::debug;

use crate::ReadError;

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Location of a character in the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    /// Byte offset from the start of the source.
    pub offset: usize,
    /// 1-based line number.
    pub line: usize,
    /// 1-based column, counted in characters.
    pub column: usize,
}

impl Position {
    /// The position of the first character of a source.
    pub fn start() -> Self {
        Self {
            offset: 0,
            line: 1,
            column: 1,
        }
    }

    fn advance(&mut self, c: char) {
        self.offset += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::start()
    }
}

/// Pulls one character at a time out of a byte source.
///
/// The reader never looks further ahead than the character it returns. The parser's
/// single character of lookahead is provided by [`CharReader::unread`], which stashes
/// one character to be handed out again by the next read.
pub struct CharReader<R> {
    inner: BufReader<R>,
    /// Position of the next byte to decode.
    position: Position,
    /// Position of the most recently returned character.
    last: Position,
    /// Single pushback slot.
    pending: Option<(char, Position)>,
}

impl<R: Read> CharReader<R> {
    /// Create a reader over `source`.
    pub fn new(source: R) -> Self {
        Self {
            inner: BufReader::new(source),
            position: Position::start(),
            last: Position::start(),
            pending: None,
        }
    }

    /// Position of the next character that will be returned.
    pub fn position(&self) -> Position {
        match self.pending {
            Some((_, position)) => position,
            None => self.position,
        }
    }

    /// Position of the character returned by the most recent read.
    pub fn last_position(&self) -> Position {
        self.last
    }

    /// Read the next character.
    ///
    /// With `skip_whitespace`, consecutive whitespace is discarded first and the first
    /// non-whitespace character is returned. Returns `Ok(None)` once the source is
    /// exhausted.
    pub fn next(&mut self, skip_whitespace: bool) -> Result<Option<char>, ReadError> {
        let mut c = self.read_char()?;
        while skip_whitespace {
            match c {
                Some(ws) if ws.is_whitespace() => c = self.read_char()?,
                _ => break,
            }
        }
        Ok(c)
    }

    /// Push back the character returned by the last read.
    ///
    /// # Panics
    /// Panics if a character is already pending; only one character of lookahead exists.
    pub fn unread(&mut self, c: char) {
        assert!(self.pending.is_none(), "double unread - this is a bug");
        self.pending = Some((c, self.last));
    }

    fn read_char(&mut self) -> Result<Option<char>, ReadError> {
        if let Some((c, position)) = self.pending.take() {
            self.last = position;
            return Ok(Some(c));
        }

        loop {
            let start = self.position;
            let Some(c) = self.decode_char()? else {
                return Ok(None);
            };
            if c == BYTE_ORDER_MARK && start.offset == 0 {
                self.position.offset += c.len_utf8();
                continue;
            }
            self.last = start;
            self.position.advance(c);
            return Ok(Some(c));
        }
    }

    /// Decode one UTF-8 scalar value. Does not update the position.
    fn decode_char(&mut self) -> Result<Option<char>, ReadError> {
        let offset = self.position.offset;
        let Some(lead) = self.read_byte()? else {
            return Ok(None);
        };

        let width = match lead {
            0x00..=0x7f => return Ok(Some(char::from(lead))),
            0xc2..=0xdf => 2,
            0xe0..=0xef => 3,
            0xf0..=0xf4 => 4,
            _ => return Err(invalid_utf8(offset)),
        };

        let mut buf = [lead, 0, 0, 0];
        for slot in &mut buf[1..width] {
            match self.read_byte()? {
                Some(byte) => *slot = byte,
                None => return Err(invalid_utf8(offset)),
            }
        }

        std::str::from_utf8(&buf[..width])
            .ok()
            .and_then(|s| s.chars().next())
            .map(Some)
            .ok_or_else(|| invalid_utf8(offset))
    }

    fn read_byte(&mut self) -> Result<Option<u8>, ReadError> {
        let byte = loop {
            match self.inner.fill_buf() {
                Ok(buf) => break buf.first().copied(),
                Err(err) if err.kind() == io::ErrorKind::Interrupted => {}
                Err(err) => {
                    debug!("source read failed at offset {}: {err}", self.position.offset);
                    return Err(ReadError::Io(err));
                }
            }
        };
        if byte.is_some() {
            self.inner.consume(1);
        }
        Ok(byte)
    }
}

fn invalid_utf8(offset: usize) -> ReadError {
    debug!("invalid UTF-8 at offset {offset}");
    ReadError::InvalidUtf8 { offset }
}
