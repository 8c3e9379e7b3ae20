//! Buffers, buffer views and accessors

use crate::json_enum;
use crate::schema::{Extensions, Value};
use crate::schema_object;

schema_object! {
    /// A block of binary data. In a GLB, buffer 0 without a `uri` is the BIN chunk.
    pub struct Buffer {
        pub name: Option<String> = None => "name" (ignorable),
        pub byte_length: usize = 0 => "byteLength",
        pub uri: Option<String> = None => "uri" (ignorable),
        pub extensions: Extensions = Extensions::new() => "extensions" (ignorable),
        pub extras: Value = Value::Null => "extras" (ignorable),
    }
}

json_enum! {
    /// GPU binding target hint of a buffer view.
    pub enum BufferTarget: numeric {
        ArrayBuffer = 34962,
        ElementArrayBuffer = 34963,
    }
}

schema_object! {
    /// A contiguous byte range of a buffer.
    pub struct BufferView {
        pub name: Option<String> = None => "name" (ignorable),
        pub buffer: usize = 0 => "buffer",
        pub byte_offset: usize = 0 => "byteOffset" (ignorable),
        pub byte_length: usize = 0 => "byteLength",
        pub byte_stride: Option<usize> = None => "byteStride" (ignorable),
        pub target: Option<BufferTarget> = None => "target" (ignorable),
        pub extensions: Extensions = Extensions::new() => "extensions" (ignorable),
        pub extras: Value = Value::Null => "extras" (ignorable),
    }
}

json_enum! {
    /// Scalar type of accessor components.
    pub enum ComponentType: numeric {
        Byte = 5120,
        UnsignedByte = 5121,
        Short = 5122,
        UnsignedShort = 5123,
        UnsignedInt = 5125,
        Float = 5126,
    }
}

impl ComponentType {
    /// Size of one component in bytes.
    pub fn size(self) -> usize {
        match self {
            ComponentType::Byte | ComponentType::UnsignedByte => 1,
            ComponentType::Short | ComponentType::UnsignedShort => 2,
            ComponentType::UnsignedInt | ComponentType::Float => 4,
        }
    }
}

json_enum! {
    /// Element shape of an accessor.
    pub enum AccessorType: string {
        Scalar = "SCALAR",
        Vec2 = "VEC2",
        Vec3 = "VEC3",
        Vec4 = "VEC4",
        Mat2 = "MAT2",
        Mat3 = "MAT3",
        Mat4 = "MAT4",
    }
}

impl AccessorType {
    /// Number of components per element.
    pub fn component_count(self) -> usize {
        match self {
            AccessorType::Scalar => 1,
            AccessorType::Vec2 => 2,
            AccessorType::Vec3 => 3,
            AccessorType::Vec4 | AccessorType::Mat2 => 4,
            AccessorType::Mat3 => 9,
            AccessorType::Mat4 => 16,
        }
    }
}

schema_object! {
    /// A typed view into a buffer view.
    pub struct Accessor {
        pub name: Option<String> = None => "name" (ignorable),
        pub buffer_view: Option<usize> = None => "bufferView" (ignorable),
        pub byte_offset: usize = 0 => "byteOffset" (ignorable),
        pub component_type: ComponentType = ComponentType::Float => "componentType",
        pub normalized: bool = false => "normalized" (ignorable),
        pub count: usize = 0 => "count",
        pub accessor_type: AccessorType = AccessorType::Scalar => "type",
        pub max: Vec<f32> = Vec::new() => "max" (ignorable),
        pub min: Vec<f32> = Vec::new() => "min" (ignorable),
        pub extensions: Extensions = Extensions::new() => "extensions" (ignorable),
        pub extras: Value = Value::Null => "extras" (ignorable),
    }
}

impl Accessor {
    /// Size of one element in bytes, without stride padding.
    pub fn element_size(&self) -> usize {
        self.component_type.size() * self.accessor_type.component_count()
    }
}
