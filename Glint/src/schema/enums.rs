//! Wire encodings for enums
//!
//! glTF and its extensions encode enums two ways: as numeric codes
//! (`magFilter: 9729`) or as symbolic names (`"bone": "leftUpperArm"`).
//! [`json_enum!`](crate::json_enum) declares which one a type uses, once, on
//! the type itself; every field of that type follows it.

/// How an enum is represented in JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnumEncoding {
    /// A JSON integer matched against declared codes.
    Numeric,
    /// A JSON string matched exactly (case-sensitive) against declared names.
    String,
}

/// Metadata shared by every enum declared with [`json_enum!`](crate::json_enum).
pub trait JsonEnum: Copy + 'static {
    /// Type name used in diagnostics.
    const NAME: &'static str;
    /// Wire representation of the type.
    const ENCODING: EnumEncoding;
    /// All variants in declaration order.
    const VARIANTS: &'static [Self];
}

/// Declare an enum together with its JSON wire encoding.
///
/// `enum Name: string { Variant = "wireName", .. }` encodes variants as
/// strings; `enum Name: numeric { Variant = 1234, .. }` encodes them as
/// integers. Decoding a value that matches no variant is
/// [`Error::UnknownEnumValue`](crate::Error::UnknownEnumValue).
#[macro_export]
macro_rules! json_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident : string {
            $( $(#[$variant_meta:meta])* $variant:ident = $wire:literal ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $( $(#[$variant_meta])* $variant, )*
        }

        impl $name {
            /// Symbolic name used on the wire.
            pub fn as_str(self) -> &'static str {
                match self {
                    $( Self::$variant => $wire, )*
                }
            }

            /// Look up a variant by its exact wire name.
            pub fn from_wire_name(name: &str) -> ::core::option::Option<Self> {
                match name {
                    $( $wire => ::core::option::Option::Some(Self::$variant), )*
                    _ => ::core::option::Option::None,
                }
            }
        }

        impl $crate::schema::JsonEnum for $name {
            const NAME: &'static str = stringify!($name);
            const ENCODING: $crate::schema::EnumEncoding = $crate::schema::EnumEncoding::String;
            const VARIANTS: &'static [Self] = &[ $( Self::$variant, )* ];
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $crate::schema::FromJson for $name {
            fn from_json(
                value: &$crate::schema::Value,
                path: &$crate::schema::JsonPath<'_>,
            ) -> $crate::Result<Self> {
                let $crate::schema::Value::String(text) = value else {
                    return Err($crate::schema::type_mismatch(path, "string", value));
                };
                Self::from_wire_name(text).ok_or_else(|| $crate::Error::UnknownEnumValue {
                    type_name: stringify!($name),
                    value: ::std::format!("{text:?}"),
                    path: path.to_string(),
                })
            }
        }

        impl $crate::schema::ToJson for $name {
            fn to_json(&self) -> $crate::schema::Value {
                $crate::schema::Value::String(self.as_str().to_owned())
            }
        }
    };

    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident : numeric {
            $( $(#[$variant_meta:meta])* $variant:ident = $code:literal ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $( $(#[$variant_meta])* $variant, )*
        }

        impl $name {
            /// Numeric code used on the wire.
            pub fn code(self) -> i64 {
                match self {
                    $( Self::$variant => $code, )*
                }
            }

            /// Look up a variant by its numeric code.
            pub fn from_code(code: i64) -> ::core::option::Option<Self> {
                match code {
                    $( $code => ::core::option::Option::Some(Self::$variant), )*
                    _ => ::core::option::Option::None,
                }
            }
        }

        impl $crate::schema::JsonEnum for $name {
            const NAME: &'static str = stringify!($name);
            const ENCODING: $crate::schema::EnumEncoding = $crate::schema::EnumEncoding::Numeric;
            const VARIANTS: &'static [Self] = &[ $( Self::$variant, )* ];
        }

        impl $crate::schema::FromJson for $name {
            fn from_json(
                value: &$crate::schema::Value,
                path: &$crate::schema::JsonPath<'_>,
            ) -> $crate::Result<Self> {
                let code = <i64 as $crate::schema::FromJson>::from_json(value, path)?;
                Self::from_code(code).ok_or_else(|| $crate::Error::UnknownEnumValue {
                    type_name: stringify!($name),
                    value: code.to_string(),
                    path: path.to_string(),
                })
            }
        }

        impl $crate::schema::ToJson for $name {
            fn to_json(&self) -> $crate::schema::Value {
                $crate::schema::Value::from(self.code())
            }
        }
    };
}
