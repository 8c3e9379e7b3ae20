//! Extension slots
//!
//! A glTF `extensions` object maps extension names to vendor objects. The
//! slot keeps every entry as raw JSON, so unknown extensions survive a
//! read/write cycle untouched, and decodes a known one on request through the
//! same schema walker as the core types.

use serde_json::{Map, Value};

use super::object::{SchemaObject, decode_object, encode_object};
use super::path::JsonPath;
use super::value::{FromJson, ToJson, type_mismatch};
use crate::error::Result;

/// A vendor extension that lives under a fixed key of an `extensions` object.
///
/// Declaring the type with [`schema_object!`](crate::schema_object) and
/// naming it here is all that is needed for [`Extensions::get`] to decode it.
pub trait Extension: SchemaObject {
    /// Key of the extension inside an `extensions` object.
    const NAME: &'static str;
}

/// The `extensions` member of a glTF property.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Extensions {
    entries: Map<String, Value>,
}

impl Extensions {
    /// Creates an empty extension slot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether no extension is present.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of extensions present.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Names of the extensions present, in document order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Whether an extension with the given name is present.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Raw JSON of the named extension.
    pub fn raw(&self, name: &str) -> Option<&Value> {
        self.entries.get(name)
    }

    /// Store raw JSON under `name`, returning the previous value.
    pub fn insert_raw(&mut self, name: impl Into<String>, value: Value) -> Option<Value> {
        self.entries.insert(name.into(), value)
    }

    /// Remove the named extension, returning its raw JSON.
    pub fn remove(&mut self, name: &str) -> Option<Value> {
        self.entries.shift_remove(name)
    }

    /// Decode extension `T` if present, reporting errors relative to the
    /// document root (`$.extensions.NAME`).
    pub fn get<T: Extension>(&self) -> Result<Option<T>> {
        self.get_at(&JsonPath::Root)
    }

    /// Decode extension `T` if present, with `owner` as the path of the
    /// property holding this slot, e.g. `$.nodes[0]`.
    pub fn get_at<T: Extension>(&self, owner: &JsonPath<'_>) -> Result<Option<T>> {
        let slot = owner.key("extensions");
        self.entries
            .get(T::NAME)
            .map(|value| decode_object(value, &slot.key(T::NAME)))
            .transpose()
    }

    /// Encode `extension` under its name, returning the previous raw value.
    pub fn insert<T: Extension>(&mut self, extension: &T) -> Option<Value> {
        self.entries.insert(T::NAME.to_owned(), encode_object(extension))
    }
}

impl FromJson for Extensions {
    fn from_json(value: &Value, path: &JsonPath<'_>) -> Result<Self> {
        match value {
            Value::Object(entries) => Ok(Self { entries: entries.clone() }),
            other => Err(type_mismatch(path, "object", other)),
        }
    }
}

impl ToJson for Extensions {
    fn to_json(&self) -> Value {
        Value::Object(self.entries.clone())
    }
}
