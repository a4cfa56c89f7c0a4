//! Formatting options for KeyValues serialization.

/// Options for KeyValues serialization.
#[derive(Debug, Clone)]
pub struct FormatOptions {
    /// Indentation string, one per nesting level (default: "\t")
    pub indent: &'static str,

    /// Written between a key and its string value (default: "\t\t")
    pub key_value_separator: &'static str,

    /// Wrap the root entries in `{ ... }` (default: false)
    pub braced_root: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            indent: "\t",
            key_value_separator: "\t\t",
            braced_root: false,
        }
    }
}

impl FormatOptions {
    /// Create new default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a custom indentation string.
    pub fn indent(mut self, indent: &'static str) -> Self {
        self.indent = indent;
        self
    }

    /// Set the separator between a key and its string value.
    pub fn key_value_separator(mut self, separator: &'static str) -> Self {
        self.key_value_separator = separator;
        self
    }

    /// Wrap the root entries in braces.
    pub fn braced_root(mut self, braced: bool) -> Self {
        self.braced_root = braced;
        self
    }
}
