//! glTF 2.0 scene description types
//!
//! The subset of the glTF object model this crate maps: enough of the scene,
//! mesh and buffer graph to locate binary data, plus samplers. Every type is
//! a plain schema object.

mod buffer;
mod gltf;
mod mesh;
mod sampler;

pub use buffer::{Accessor, AccessorType, Buffer, BufferTarget, BufferView, ComponentType};
pub use gltf::{Asset, Gltf, Node, Scene};
pub use mesh::{Mesh, Primitive, PrimitiveMode};
pub use sampler::{MagFilter, MinFilter, Sampler, WrapMode};
