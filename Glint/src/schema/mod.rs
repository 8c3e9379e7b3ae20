//! Schema-driven JSON mapping
//!
//! Converts `serde_json` value trees to typed objects and back. Types declare
//! their wire layout once with [`schema_object!`](crate::schema_object) and
//! [`json_enum!`](crate::json_enum); a single generic walker does the rest.

mod enums;
mod extension;
mod object;
mod path;
mod value;

// Public API
pub use enums::{EnumEncoding, JsonEnum};
pub use extension::{Extension, Extensions};
pub use object::{FieldSchema, Presence, SchemaObject, TypeSchema, decode_object, encode_object};
pub use path::JsonPath;
pub use value::{FromJson, ToJson, json_kind, type_mismatch};

/// JSON value tree consumed and produced by the mapper.
pub use serde_json::Value;

/// Decode a schema type from JSON text.
///
/// # Errors
/// Returns an error if the text is not JSON or does not fit `T`'s schema.
pub fn from_json_str<T: FromJson>(text: &str) -> crate::Result<T> {
    let value: Value = serde_json::from_str(text)?;
    T::from_json(&value, &JsonPath::Root)
}

/// Encode a schema type as compact JSON text.
///
/// # Errors
/// Returns an error if serialization fails.
pub fn to_json_string<T: ToJson>(value: &T) -> crate::Result<String> {
    Ok(serde_json::to_string(&value.to_json())?)
}

/// Encode a schema type as indented JSON text.
///
/// # Errors
/// Returns an error if serialization fails.
pub fn to_json_string_pretty<T: ToJson>(value: &T) -> crate::Result<String> {
    Ok(serde_json::to_string_pretty(&value.to_json())?)
}
