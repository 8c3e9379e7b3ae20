//! Conversions between JSON value trees and field types
//!
//! Leaf conversions for primitives and the container shapes that schema
//! objects are built from. Schema objects and wire enums get their impls
//! from `schema_object!` and `json_enum!`.

use indexmap::IndexMap;
use serde_json::{Map, Number, Value};

use super::path::JsonPath;
use crate::error::{Error, Result};

/// Conversion from a JSON value tree into a typed value.
pub trait FromJson: Sized {
    /// Decode `value`, found at `path`, into `Self`.
    fn from_json(value: &Value, path: &JsonPath<'_>) -> Result<Self>;
}

/// Conversion from a typed value into a JSON value tree.
pub trait ToJson {
    /// Encode `self` as a JSON value.
    fn to_json(&self) -> Value;
}

/// Human-readable kind of a JSON value, for diagnostics.
pub fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Build a [`Error::TypeMismatch`] for `value` at `path`.
pub fn type_mismatch(path: &JsonPath<'_>, expected: &'static str, value: &Value) -> Error {
    let found = match value {
        Value::Number(n) => format!("number {n}"),
        other => json_kind(other).to_string(),
    };
    Error::TypeMismatch {
        path: path.to_string(),
        expected,
        found,
    }
}

impl FromJson for bool {
    fn from_json(value: &Value, path: &JsonPath<'_>) -> Result<Self> {
        value.as_bool().ok_or_else(|| type_mismatch(path, "boolean", value))
    }
}

impl ToJson for bool {
    fn to_json(&self) -> Value {
        Value::Bool(*self)
    }
}

impl FromJson for String {
    fn from_json(value: &Value, path: &JsonPath<'_>) -> Result<Self> {
        value
            .as_str()
            .map(str::to_owned)
            .ok_or_else(|| type_mismatch(path, "string", value))
    }
}

impl ToJson for String {
    fn to_json(&self) -> Value {
        Value::String(self.clone())
    }
}

/// Integral value of a JSON number, if it has one.
///
/// Floats are accepted only when they carry no fractional part.
fn integral(number: &Number) -> Option<i128> {
    if let Some(n) = number.as_i64() {
        return Some(i128::from(n));
    }
    if let Some(n) = number.as_u64() {
        return Some(i128::from(n));
    }
    number
        .as_f64()
        .filter(|f| f.fract() == 0.0 && f.abs() < 2f64.powi(64))
        .map(|f| f as i128)
}

macro_rules! impl_json_integer {
    ($($ty:ty),* $(,)?) => {
        $(
            impl FromJson for $ty {
                fn from_json(value: &Value, path: &JsonPath<'_>) -> Result<Self> {
                    let Value::Number(number) = value else {
                        return Err(type_mismatch(path, stringify!($ty), value));
                    };
                    integral(number)
                        .and_then(|n| <$ty>::try_from(n).ok())
                        .ok_or_else(|| type_mismatch(path, stringify!($ty), value))
                }
            }

            impl ToJson for $ty {
                fn to_json(&self) -> Value {
                    Value::from(*self)
                }
            }
        )*
    };
}

impl_json_integer!(i8, i16, i32, i64, u8, u16, u32, u64, usize);

impl FromJson for f64 {
    fn from_json(value: &Value, path: &JsonPath<'_>) -> Result<Self> {
        value.as_f64().ok_or_else(|| type_mismatch(path, "f64", value))
    }
}

impl ToJson for f64 {
    fn to_json(&self) -> Value {
        Number::from_f64(*self).map_or(Value::Null, Value::Number)
    }
}

impl FromJson for f32 {
    fn from_json(value: &Value, path: &JsonPath<'_>) -> Result<Self> {
        let wide = value.as_f64().ok_or_else(|| type_mismatch(path, "f32", value))?;
        let narrow = wide as f32;
        // Narrowing is allowed; overflowing to infinity is not.
        if narrow.is_infinite() {
            return Err(type_mismatch(path, "f32", value));
        }
        Ok(narrow)
    }
}

impl ToJson for f32 {
    fn to_json(&self) -> Value {
        // Shortest decimal form of the f32, so 0.05 is written as 0.05.
        self.to_string()
            .parse::<f64>()
            .ok()
            .and_then(Number::from_f64)
            .map_or(Value::Null, Value::Number)
    }
}

impl<T: FromJson> FromJson for Option<T> {
    fn from_json(value: &Value, path: &JsonPath<'_>) -> Result<Self> {
        match value {
            Value::Null => Ok(None),
            other => T::from_json(other, path).map(Some),
        }
    }
}

impl<T: ToJson> ToJson for Option<T> {
    fn to_json(&self) -> Value {
        self.as_ref().map_or(Value::Null, ToJson::to_json)
    }
}

impl<T: FromJson> FromJson for Vec<T> {
    fn from_json(value: &Value, path: &JsonPath<'_>) -> Result<Self> {
        let Value::Array(items) = value else {
            return Err(type_mismatch(path, "array", value));
        };
        items
            .iter()
            .enumerate()
            .map(|(index, item)| T::from_json(item, &path.index(index)))
            .collect()
    }
}

impl<T: ToJson> ToJson for Vec<T> {
    fn to_json(&self) -> Value {
        Value::Array(self.iter().map(ToJson::to_json).collect())
    }
}

impl<T: FromJson, const N: usize> FromJson for [T; N] {
    fn from_json(value: &Value, path: &JsonPath<'_>) -> Result<Self> {
        let items = Vec::<T>::from_json(value, path)?;
        let len = items.len();
        items.try_into().map_err(|_| Error::TypeMismatch {
            path: path.to_string(),
            expected: "fixed-length array",
            found: format!("array of {len} (expected {N})"),
        })
    }
}

impl<T: ToJson, const N: usize> ToJson for [T; N] {
    fn to_json(&self) -> Value {
        Value::Array(self.iter().map(ToJson::to_json).collect())
    }
}

impl<T: FromJson> FromJson for IndexMap<String, T> {
    fn from_json(value: &Value, path: &JsonPath<'_>) -> Result<Self> {
        let Value::Object(members) = value else {
            return Err(type_mismatch(path, "object", value));
        };
        members
            .iter()
            .map(|(key, member)| T::from_json(member, &path.key(key)).map(|item| (key.clone(), item)))
            .collect()
    }
}

impl<T: ToJson> ToJson for IndexMap<String, T> {
    fn to_json(&self) -> Value {
        Value::Object(
            self.iter()
                .map(|(key, member)| (key.clone(), member.to_json()))
                .collect::<Map<String, Value>>(),
        )
    }
}

impl FromJson for Value {
    fn from_json(value: &Value, _path: &JsonPath<'_>) -> Result<Self> {
        Ok(value.clone())
    }
}

impl ToJson for Value {
    fn to_json(&self) -> Value {
        self.clone()
    }
}
