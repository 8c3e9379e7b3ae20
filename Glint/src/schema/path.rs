//! Field paths for schema diagnostics

use std::fmt;

/// Location of a value inside a JSON document.
///
/// Paths are built on the stack while the mapper descends, one borrowed link
/// per level, and are only rendered when an error is reported. The rendered
/// form looks like `$.extensions.VRM.humanoid.humanBones[3].bone`.
#[derive(Debug, Clone, Copy)]
pub enum JsonPath<'a> {
    /// The document root.
    Root,
    /// A member of an object.
    Key(&'a JsonPath<'a>, &'a str),
    /// An element of an array.
    Index(&'a JsonPath<'a>, usize),
}

impl<'a> JsonPath<'a> {
    /// Path of the object member `key` below this path.
    #[must_use]
    pub fn key(&'a self, key: &'a str) -> JsonPath<'a> {
        JsonPath::Key(self, key)
    }

    /// Path of the array element `index` below this path.
    #[must_use]
    pub fn index(&'a self, index: usize) -> JsonPath<'a> {
        JsonPath::Index(self, index)
    }
}

impl Default for JsonPath<'_> {
    fn default() -> Self {
        JsonPath::Root
    }
}

fn is_plain_key(key: &str) -> bool {
    !key.is_empty() && key.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

impl fmt::Display for JsonPath<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JsonPath::Root => f.write_str("$"),
            JsonPath::Key(parent, key) if is_plain_key(key) => write!(f, "{parent}.{key}"),
            JsonPath::Key(parent, key) => write!(f, "{parent}[{key:?}]"),
            JsonPath::Index(parent, index) => write!(f, "{parent}[{index}]"),
        }
    }
}
