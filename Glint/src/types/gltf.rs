//! Root glTF 2.0 document

use crate::error::Result;
use crate::schema::{Extension, Extensions, FromJson, JsonPath, ToJson, Value};
use crate::schema_object;

use super::buffer::{Accessor, Buffer, BufferView};
use super::mesh::Mesh;
use super::sampler::Sampler;

schema_object! {
    /// Asset metadata.
    pub struct Asset {
        /// glTF version this asset targets, e.g. `"2.0"`.
        pub version: String = String::from("2.0") => "version",
        /// Tool that generated the asset.
        pub generator: Option<String> = None => "generator" (ignorable),
        pub copyright: Option<String> = None => "copyright" (ignorable),
        /// Minimum glTF version a loader must support.
        pub min_version: Option<String> = None => "minVersion" (ignorable),
        pub extensions: Extensions = Extensions::new() => "extensions" (ignorable),
        pub extras: Value = Value::Null => "extras" (ignorable),
    }
}

schema_object! {
    /// A set of root nodes.
    pub struct Scene {
        pub name: Option<String> = None => "name" (ignorable),
        pub nodes: Vec<usize> = Vec::new() => "nodes" (ignorable),
        pub extensions: Extensions = Extensions::new() => "extensions" (ignorable),
        pub extras: Value = Value::Null => "extras" (ignorable),
    }
}

schema_object! {
    /// A node in the scene hierarchy.
    ///
    /// The TRS properties default to the identity transform and are left out
    /// of the written JSON while they hold it.
    pub struct Node {
        pub name: Option<String> = None => "name" (ignorable),
        pub children: Vec<usize> = Vec::new() => "children" (ignorable),
        pub mesh: Option<usize> = None => "mesh" (ignorable),
        pub skin: Option<usize> = None => "skin" (ignorable),
        pub camera: Option<usize> = None => "camera" (ignorable),
        pub matrix: Option<[f32; 16]> = None => "matrix" (ignorable),
        pub translation: [f32; 3] = [0.0; 3] => "translation" (ignorable),
        /// Unit quaternion, `[x, y, z, w]`.
        pub rotation: [f32; 4] = [0.0, 0.0, 0.0, 1.0] => "rotation" (ignorable),
        pub scale: [f32; 3] = [1.0; 3] => "scale" (ignorable),
        pub weights: Vec<f32> = Vec::new() => "weights" (ignorable),
        pub extensions: Extensions = Extensions::new() => "extensions" (ignorable),
        pub extras: Value = Value::Null => "extras" (ignorable),
    }
}

schema_object! {
    /// The root object of a glTF document.
    pub struct Gltf {
        pub asset: Asset = Asset::default() => "asset",
        /// Index of the default scene.
        pub scene: Option<usize> = None => "scene" (ignorable),
        pub scenes: Vec<Scene> = Vec::new() => "scenes" (ignorable),
        pub nodes: Vec<Node> = Vec::new() => "nodes" (ignorable),
        pub meshes: Vec<Mesh> = Vec::new() => "meshes" (ignorable),
        pub accessors: Vec<Accessor> = Vec::new() => "accessors" (ignorable),
        pub buffer_views: Vec<BufferView> = Vec::new() => "bufferViews" (ignorable),
        pub buffers: Vec<Buffer> = Vec::new() => "buffers" (ignorable),
        pub samplers: Vec<Sampler> = Vec::new() => "samplers" (ignorable),
        pub extensions_used: Vec<String> = Vec::new() => "extensionsUsed" (ignorable),
        pub extensions_required: Vec<String> = Vec::new() => "extensionsRequired" (ignorable),
        pub extensions: Extensions = Extensions::new() => "extensions" (ignorable),
        pub extras: Value = Value::Null => "extras" (ignorable),
    }
}

impl Gltf {
    /// Decode a document from a parsed JSON value tree.
    ///
    /// # Errors
    /// Returns a schema violation if the value does not describe a glTF root.
    pub fn from_json_value(value: &Value) -> Result<Self> {
        Self::from_json(value, &JsonPath::Root)
    }

    /// Decode a document from JSON text.
    ///
    /// # Errors
    /// Returns an error if the text is not JSON or not a glTF root.
    pub fn from_json_str(text: &str) -> Result<Self> {
        crate::schema::from_json_str(text)
    }

    /// Encode the document as a JSON value tree.
    pub fn to_json_value(&self) -> Value {
        self.to_json()
    }

    /// Encode the document as compact JSON text.
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    pub fn to_json_string(&self) -> Result<String> {
        crate::schema::to_json_string(self)
    }

    /// Whether `name` is listed in `extensionsUsed`.
    pub fn uses_extension(&self, name: &str) -> bool {
        self.extensions_used.iter().any(|used| used == name)
    }

    /// Decode root extension `T`, if present.
    pub fn extension<T: Extension>(&self) -> Result<Option<T>> {
        self.extensions.get_at::<T>(&JsonPath::Root)
    }

    /// Store root extension `T` and list it in `extensionsUsed`.
    pub fn set_extension<T: Extension>(&mut self, extension: &T) {
        self.extensions.insert(extension);
        if !self.uses_extension(T::NAME) {
            self.extensions_used.push(T::NAME.to_owned());
        }
    }
}
