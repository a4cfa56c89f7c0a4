//! Parser configuration.

/// Default nesting limit. Parsing at this depth fits a 2 MiB thread stack in debug builds.
pub const DEFAULT_MAX_DEPTH: usize = 100;

/// Options for parsing.
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// Maximum number of nested objects below the root (default: [`DEFAULT_MAX_DEPTH`]).
    ///
    /// Opening an object beyond this depth fails with
    /// [`ParseErrorKind::NestingTooDeep`](crate::ParseErrorKind::NestingTooDeep).
    pub max_depth: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl ParseOptions {
    /// Create new default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum nesting depth.
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }
}
