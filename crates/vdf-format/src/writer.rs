//! KeyValues output writer.

use std::io;

use vdf_tree::{Document, Node, Object};

use crate::options::FormatOptions;
use crate::scalar::guard_raw;

/// Serialize a document with default options.
pub fn to_string(doc: &Document) -> String {
    to_string_with_options(doc, FormatOptions::default())
}

/// Serialize a document with the given options.
pub fn to_string_with_options(doc: &Document, options: FormatOptions) -> String {
    let mut writer = VdfWriter::with_options(options);
    writer.write_document(doc);
    writer.finish()
}

/// Serialize a document into `out` with default options.
pub fn write_document<W: io::Write>(doc: &Document, mut out: W) -> io::Result<()> {
    out.write_all(to_string(doc).as_bytes())
}

/// Builds KeyValues text.
///
/// Keys and string values are always quoted. Each entry goes on its own line; an
/// object value puts its braces on their own lines at the key's indentation.
pub struct VdfWriter {
    out: String,
    options: FormatOptions,
    depth: usize,
}

impl VdfWriter {
    /// Create a new writer with default options.
    pub fn new() -> Self {
        Self::with_options(FormatOptions::default())
    }

    /// Create a new writer with the given options.
    pub fn with_options(options: FormatOptions) -> Self {
        Self {
            out: String::new(),
            options,
            depth: 0,
        }
    }

    /// Consume the writer and return the output.
    pub fn finish(self) -> String {
        self.out
    }

    /// Write a whole document.
    pub fn write_document(&mut self, doc: &Document) {
        if self.options.braced_root {
            self.write_braced(&doc.root);
        } else {
            self.write_entries(&doc.root);
        }
    }

    /// Write one `"key" value` entry at the current depth.
    pub fn write_entry(&mut self, key: &str, value: &Node) {
        self.write_indent();
        self.write_quoted(key);
        match value {
            Node::String(text) => {
                self.out.push_str(self.options.key_value_separator);
                self.write_quoted(text);
                self.out.push('\n');
            }
            Node::Object(obj) => {
                self.out.push('\n');
                self.write_braced(obj);
            }
        }
    }

    fn write_entries(&mut self, obj: &Object) {
        for (key, value) in obj.iter() {
            self.write_entry(key, value);
        }
    }

    fn write_braced(&mut self, obj: &Object) {
        self.write_indent();
        self.out.push_str("{\n");
        self.depth += 1;
        self.write_entries(obj);
        self.depth -= 1;
        self.write_indent();
        self.out.push_str("}\n");
    }

    fn write_indent(&mut self) {
        for _ in 0..self.depth {
            self.out.push_str(self.options.indent);
        }
    }

    fn write_quoted(&mut self, raw: &str) {
        self.out.push('"');
        self.out.push_str(&guard_raw(raw));
        self.out.push('"');
    }
}

impl Default for VdfWriter {
    fn default() -> Self {
        Self::new()
    }
}
