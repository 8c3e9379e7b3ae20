//! Descriptor-driven object mapping
//!
//! Every schema type declares a static [`TypeSchema`] (one [`FieldSchema`]
//! per field) through [`schema_object!`](crate::schema_object). The generic
//! walkers [`decode_object`] and [`encode_object`] consult that table; the
//! per-type code the macro generates only routes a wire name to its field.

use serde_json::{Map, Value};

use super::path::JsonPath;
use super::value::type_mismatch;
use crate::error::{Error, Result};

/// Whether a field may be absent on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    /// Absence is a schema violation.
    Required,
    /// Absence leaves the declared default; the field is omitted on write
    /// when it equals its omission sentinel.
    Ignorable,
}

/// Wire metadata for one field of a schema type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSchema {
    /// Rust field name.
    pub name: &'static str,
    /// Member name in the JSON object.
    pub wire_name: &'static str,
    /// Whether the member may be absent.
    pub presence: Presence,
}

impl FieldSchema {
    /// Whether this field may be absent on the wire.
    pub fn is_ignorable(&self) -> bool {
        self.presence == Presence::Ignorable
    }
}

/// Wire metadata for a schema type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeSchema {
    /// Type name used in diagnostics.
    pub name: &'static str,
    /// Fields in declaration (and serialization) order.
    pub fields: &'static [FieldSchema],
}

impl TypeSchema {
    /// Look up a field by its wire name.
    pub fn field(&self, wire_name: &str) -> Option<&'static FieldSchema> {
        self.fields.iter().find(|f| f.wire_name == wire_name)
    }
}

/// A plain data type whose JSON mapping is described by a [`TypeSchema`].
///
/// Implemented by [`schema_object!`](crate::schema_object); hand-written
/// impls must keep the three routing methods consistent with `SCHEMA`.
pub trait SchemaObject: Default {
    /// The type's field table.
    const SCHEMA: TypeSchema;

    /// Decode `value` into the field with the given wire name.
    fn decode_field(&mut self, wire_name: &str, value: &Value, path: &JsonPath<'_>) -> Result<()>;

    /// Encode the field with the given wire name.
    fn encode_field(&self, wire_name: &str) -> Value;

    /// Whether the field currently equals its omission sentinel.
    fn is_omittable(&self, wire_name: &str) -> bool;
}

/// Decode a JSON object into `T`, field by field, as `T::SCHEMA` dictates.
///
/// Members not named in the schema are ignored.
pub fn decode_object<T: SchemaObject>(value: &Value, path: &JsonPath<'_>) -> Result<T> {
    let Value::Object(members) = value else {
        return Err(type_mismatch(path, "object", value));
    };

    let mut decoded = T::default();
    for field in T::SCHEMA.fields {
        match members.get(field.wire_name) {
            Some(member) => decoded.decode_field(field.wire_name, member, &path.key(field.wire_name))?,
            None if field.is_ignorable() => {}
            None => {
                return Err(Error::MissingField {
                    type_name: T::SCHEMA.name,
                    field: field.wire_name,
                    path: path.to_string(),
                });
            }
        }
    }
    Ok(decoded)
}

/// Encode `object` as a JSON object, omitting ignorable fields that hold
/// their omission sentinel.
pub fn encode_object<T: SchemaObject>(object: &T) -> Value {
    let mut members = Map::new();
    for field in T::SCHEMA.fields {
        if field.is_ignorable() && object.is_omittable(field.wire_name) {
            continue;
        }
        members.insert(field.wire_name.to_owned(), object.encode_field(field.wire_name));
    }
    Value::Object(members)
}

/// Declare a schema object: the struct, its `Default`, its [`TypeSchema`] and
/// its JSON conversions.
///
/// Each field is written as
/// `name: Type = default => "wireName"` followed by an optional presence
/// clause:
///
/// - nothing: required; absence is [`Error::MissingField`];
/// - `(ignorable)`: absence keeps `default`; omitted on write when equal to
///   `default`;
/// - `(ignorable when SENTINEL)`: as above, but omitted when equal to
///   `SENTINEL`. `SENTINEL` must equal `default`, otherwise a field holding
///   it would be written as absent and read back as `default`; debug builds
///   assert this on encode.
///
/// ```
/// use glint::schema::{FromJson, JsonPath, ToJson};
///
/// glint::schema_object! {
///     /// A labelled point.
///     pub struct Marker {
///         pub label: String = String::new() => "label",
///         pub weight: f32 = 1.0 => "weight" (ignorable),
///         pub layer: u32 = 0 => "layer" (ignorable when 0),
///     }
/// }
///
/// let marker = Marker::from_json(&serde_json::json!({ "label": "tip" }), &JsonPath::Root)?;
/// assert_eq!(marker.weight, 1.0);
/// assert_eq!(marker.to_json(), serde_json::json!({ "label": "tip" }));
/// # Ok::<(), glint::Error>(())
/// ```
#[macro_export]
macro_rules! schema_object {
    (@presence) => {
        $crate::schema::Presence::Required
    };
    (@presence ignorable) => {
        $crate::schema::Presence::Ignorable
    };

    (@omit $value:expr, $ty:ty, $default:expr) => {
        false
    };
    (@omit $value:expr, $ty:ty, $default:expr, ignorable) => {{
        let sentinel: $ty = $default;
        $value == sentinel
    }};
    (@omit $value:expr, $ty:ty, $default:expr, ignorable, $sentinel:expr) => {{
        let sentinel: $ty = $sentinel;
        let default: $ty = $default;
        debug_assert!(
            sentinel == default,
            "omission sentinel of an ignorable field must equal its declared default"
        );
        $value == sentinel
    }};

    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$field_meta:meta])*
                $field_vis:vis $field:ident : $ty:ty = $default:expr => $wire:literal
                    $( ( $presence:ident $( when $sentinel:expr )? ) )?
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        $vis struct $name {
            $(
                $(#[$field_meta])*
                $field_vis $field: $ty,
            )*
        }

        impl ::core::default::Default for $name {
            fn default() -> Self {
                Self {
                    $( $field: $default, )*
                }
            }
        }

        impl $crate::schema::SchemaObject for $name {
            const SCHEMA: $crate::schema::TypeSchema = $crate::schema::TypeSchema {
                name: stringify!($name),
                fields: &[
                    $(
                        $crate::schema::FieldSchema {
                            name: stringify!($field),
                            wire_name: $wire,
                            presence: $crate::schema_object!(@presence $( $presence )?),
                        },
                    )*
                ],
            };

            fn decode_field(
                &mut self,
                wire_name: &str,
                value: &$crate::schema::Value,
                path: &$crate::schema::JsonPath<'_>,
            ) -> $crate::Result<()> {
                match wire_name {
                    $( $wire => self.$field = $crate::schema::FromJson::from_json(value, path)?, )*
                    _ => {}
                }
                Ok(())
            }

            fn encode_field(&self, wire_name: &str) -> $crate::schema::Value {
                match wire_name {
                    $( $wire => $crate::schema::ToJson::to_json(&self.$field), )*
                    _ => $crate::schema::Value::Null,
                }
            }

            fn is_omittable(&self, wire_name: &str) -> bool {
                match wire_name {
                    $(
                        $wire => $crate::schema_object!(
                            @omit self.$field, $ty, $default $(, $presence $(, $sentinel)?)?
                        ),
                    )*
                    _ => false,
                }
            }
        }

        impl $crate::schema::FromJson for $name {
            fn from_json(
                value: &$crate::schema::Value,
                path: &$crate::schema::JsonPath<'_>,
            ) -> $crate::Result<Self> {
                $crate::schema::decode_object(value, path)
            }
        }

        impl $crate::schema::ToJson for $name {
            fn to_json(&self) -> $crate::schema::Value {
                $crate::schema::encode_object(self)
            }
        }
    };
}
