//! Meshes and primitives

use indexmap::IndexMap;

use crate::json_enum;
use crate::schema::{Extensions, Value};
use crate::schema_object;

json_enum! {
    /// Topology of a primitive.
    pub enum PrimitiveMode: numeric {
        Points = 0,
        Lines = 1,
        LineLoop = 2,
        LineStrip = 3,
        Triangles = 4,
        TriangleStrip = 5,
        TriangleFan = 6,
    }
}

schema_object! {
    /// Geometry to be rendered with a material.
    pub struct Primitive {
        /// Attribute semantic (`POSITION`, `TEXCOORD_0`, ...) to accessor index.
        pub attributes: IndexMap<String, usize> = IndexMap::new() => "attributes",
        pub indices: Option<usize> = None => "indices" (ignorable),
        pub material: Option<usize> = None => "material" (ignorable),
        pub mode: PrimitiveMode = PrimitiveMode::Triangles => "mode" (ignorable when PrimitiveMode::Triangles),
        /// Morph targets.
        pub targets: Vec<IndexMap<String, usize>> = Vec::new() => "targets" (ignorable),
        pub extensions: Extensions = Extensions::new() => "extensions" (ignorable),
        pub extras: Value = Value::Null => "extras" (ignorable),
    }
}

schema_object! {
    /// A set of primitives.
    pub struct Mesh {
        pub name: Option<String> = None => "name" (ignorable),
        pub primitives: Vec<Primitive> = Vec::new() => "primitives",
        /// Default morph target weights.
        pub weights: Vec<f32> = Vec::new() => "weights" (ignorable),
        pub extensions: Extensions = Extensions::new() => "extensions" (ignorable),
        pub extras: Value = Value::Null => "extras" (ignorable),
    }
}
