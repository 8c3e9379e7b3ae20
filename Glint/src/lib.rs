//! # Glint
//!
//! A pure-Rust reader and writer for GLB (binary glTF 2.0) containers, with a
//! schema-driven mapping from the JSON scene description to typed Rust
//! objects.
//!
//! ## Supported Formats
//!
//! - **GLB** - strict chunk framing, ordering and uniqueness checks
//! - **glTF 2.0** - asset, scene, node, mesh, buffer and sampler subset
//! - **VRM 0.x** - humanoid bone mapping (`extensions.VRM`)
//!
//! ## Quick Start
//!
//! ### Reading a GLB File
//!
//! ```no_run
//! use glint::glb::read_glb;
//!
//! let container = read_glb("avatar.vrm")?;
//! println!("{} nodes", container.gltf.nodes.len());
//!
//! if let Some(vrm) = container.vrm()? {
//!     println!("{} humanoid bones", vrm.humanoid.human_bones.len());
//! }
//! # Ok::<(), glint::Error>(())
//! ```
//!
//! ### Writing and Re-reading
//!
//! ```
//! use glint::prelude::*;
//!
//! let container = GltfContainer::new(Gltf::default()).with_buffer(vec![1u8, 2, 3, 4]);
//! let bytes = serialize_glb(&container)?;
//! let parsed = parse_glb_bytes(&bytes)?;
//! assert_eq!(parsed, container);
//! # Ok::<(), glint::Error>(())
//! ```
//!
//! ### Declaring Extension Types
//!
//! Vendor extensions are plain schema objects; see
//! [`schema_object!`] and [`schema::Extension`].

pub mod error;
pub mod ext;
pub mod glb;
pub mod schema;
pub mod types;

// Re-exports for convenience
pub use error::{Error, Result};

/// Prelude module for common imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::glb::{
        GlbReader, GltfContainer, ReadOptions, StoredBuffer, WriteOptions, parse_glb_bytes, read_glb, serialize_glb,
        write_glb,
    };
    pub use crate::schema::{Extension, Extensions, FromJson, JsonPath, ToJson};
    pub use crate::types::Gltf;

    // VRM 0.x exports
    pub use crate::ext::vrm0::{HumanBone, HumanBoneName, Humanoid, Vrm};
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
