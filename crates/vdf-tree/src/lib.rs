#![doc = include_str!("../README.md")]
//! Document tree representation for KeyValues (VDF) files.
//!
//! This crate provides the value model the parser builds: string leaves, ordered
//! objects with unique keys, and the merge rule applied when a key repeats.

#[cfg(feature = "json")]
mod json;
mod value;

pub use value::{Node, Object};

/// A KeyValues document (root is always an implicit object).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    /// The root object.
    pub root: Object,
}

impl Document {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a root-level value by key.
    pub fn get(&self, key: &str) -> Option<&Node> {
        self.root.get(key)
    }

    /// Follow a sequence of keys from the root.
    ///
    /// Returns `None` for an empty path, since the root itself is not a [`Node`].
    pub fn lookup<I, K>(&self, path: I) -> Option<&Node>
    where
        I: IntoIterator<Item = K>,
        K: AsRef<str>,
    {
        let mut path = path.into_iter();
        let first = path.next()?;
        self.root.get(first.as_ref())?.lookup(path)
    }

    /// Mutable version of [`Document::lookup`].
    pub fn lookup_mut<I, K>(&mut self, path: I) -> Option<&mut Node>
    where
        I: IntoIterator<Item = K>,
        K: AsRef<str>,
    {
        let mut path = path.into_iter();
        let first = path.next()?;
        self.root.get_mut(first.as_ref())?.lookup_mut(path)
    }

    /// Consume the document and return its root object.
    pub fn into_root(self) -> Object {
        self.root
    }
}

impl From<Object> for Document {
    fn from(root: Object) -> Self {
        Self { root }
    }
}

impl From<Document> for Node {
    fn from(doc: Document) -> Self {
        Node::Object(doc.root)
    }
}
