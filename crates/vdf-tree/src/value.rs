//! Value types for KeyValues documents.
//!
//! Every value is one of two things:
//! - a string leaf, `"value"`, holding the raw text between the quotes
//! - an object, `{ "key" value ... }`, an ordered mapping with unique keys
//!
//! String text is kept exactly as written: `"a\"b"` is stored as `a\"b`, backslash
//! included. Interpreting escapes is left to the caller.

use indexmap::IndexMap;
use indexmap::map::Entry;

/// A KeyValues value: a string leaf or a nested object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Quoted string text, escapes retained verbatim.
    String(String),
    /// Braced object.
    Object(Object),
}

/// An ordered mapping of keys to values.
///
/// Keys are unique. Iteration follows first-insertion order; overwriting a key keeps
/// the position of its first occurrence.
#[derive(Clone, Default)]
pub struct Object {
    entries: IndexMap<String, Node>,
}

impl Node {
    /// Create a string value.
    pub fn string(text: impl Into<String>) -> Self {
        Node::String(text.into())
    }

    /// Create an empty object value.
    pub fn object() -> Self {
        Node::Object(Object::new())
    }

    /// Check if this is a string leaf.
    pub fn is_string(&self) -> bool {
        matches!(self, Node::String(_))
    }

    /// Check if this is an object.
    pub fn is_object(&self) -> bool {
        matches!(self, Node::Object(_))
    }

    /// Get as string text.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Node::String(text) => Some(text),
            Node::Object(_) => None,
        }
    }

    /// Get as object.
    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Node::Object(obj) => Some(obj),
            Node::String(_) => None,
        }
    }

    /// Get as mutable object.
    pub fn as_object_mut(&mut self) -> Option<&mut Object> {
        match self {
            Node::Object(obj) => Some(obj),
            Node::String(_) => None,
        }
    }

    /// Follow a sequence of keys down through nested objects.
    ///
    /// An empty path returns `self`. Keys are matched exactly, so numeric-looking keys
    /// such as `"7"` are ordinary strings.
    pub fn lookup<I, K>(&self, path: I) -> Option<&Node>
    where
        I: IntoIterator<Item = K>,
        K: AsRef<str>,
    {
        let mut node = self;
        for key in path {
            node = node.as_object()?.get(key.as_ref())?;
        }
        Some(node)
    }

    /// Mutable version of [`Node::lookup`].
    pub fn lookup_mut<I, K>(&mut self, path: I) -> Option<&mut Node>
    where
        I: IntoIterator<Item = K>,
        K: AsRef<str>,
    {
        let mut node = self;
        for key in path {
            node = node.as_object_mut()?.get_mut(key.as_ref())?;
        }
        Some(node)
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Node::String(text)
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Node::String(text.to_string())
    }
}

impl From<Object> for Node {
    fn from(obj: Object) -> Self {
        Node::Object(obj)
    }
}

impl Object {
    /// Create an empty object.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get entry value by key.
    pub fn get(&self, key: &str) -> Option<&Node> {
        self.entries.get(key)
    }

    /// Get mutable entry value by key.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut Node> {
        self.entries.get_mut(key)
    }

    /// Check if key exists.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over entries as (key, value) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Node)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Iterate over keys.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Iterate over values.
    pub fn values(&self) -> impl Iterator<Item = &Node> {
        self.entries.values()
    }

    /// Iterate over values mutably.
    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut Node> {
        self.entries.values_mut()
    }

    /// Insert or overwrite an entry.
    ///
    /// An existing key keeps its position. Returns the previous value, if any.
    pub fn insert(&mut self, key: impl Into<String>, value: Node) -> Option<Node> {
        self.entries.insert(key.into(), value)
    }

    /// Insert an entry, folding it into an existing one with the same key.
    ///
    /// If both the existing and the incoming value are objects, the incoming entries
    /// are merged into the existing object with this same rule, recursively. In every
    /// other case the incoming value replaces the existing one in place.
    pub fn merge_entry(&mut self, key: impl Into<String>, value: Node) {
        match self.entries.entry(key.into()) {
            Entry::Vacant(slot) => {
                slot.insert(value);
            }
            Entry::Occupied(mut slot) => match (slot.get_mut(), value) {
                (Node::Object(existing), Node::Object(incoming)) => existing.merge(incoming),
                (existing, value) => *existing = value,
            },
        }
    }

    /// Merge every entry of `other` into this object with [`Object::merge_entry`].
    pub fn merge(&mut self, other: Object) {
        for (key, value) in other.entries {
            self.merge_entry(key, value);
        }
    }
}

// `IndexMap` equality ignores order; two objects are equal only in the same order.
impl PartialEq for Object {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl Eq for Object {}

impl std::fmt::Debug for Object {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K: Into<String>> FromIterator<(K, Node)> for Object {
    fn from_iter<T: IntoIterator<Item = (K, Node)>>(iter: T) -> Self {
        let mut obj = Object::new();
        obj.extend(iter);
        obj
    }
}

impl<K: Into<String>> Extend<(K, Node)> for Object {
    fn extend<T: IntoIterator<Item = (K, Node)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.merge_entry(key, value);
        }
    }
}

impl IntoIterator for Object {
    type Item = (String, Node);
    type IntoIter = indexmap::map::IntoIter<String, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a Object {
    type Item = (&'a String, &'a Node);
    type IntoIter = indexmap::map::Iter<'a, String, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
