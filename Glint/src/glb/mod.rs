//! GLB binary container
//!
//! A GLB file is a 12-byte header followed by length-prefixed chunks: the
//! JSON scene description first, then optionally the BIN buffer.
//!
//! ```text
//! magic "glTF" | version 2 | total length
//! length | "JSON" | payload (space padded)
//! length | "BIN\0" | payload (zero padded)
//! ```

mod buffer;
mod chunk;
mod container;
mod cursor;
mod inspect;
mod options;
mod reader;
mod writer;

// Public API
pub use buffer::StoredBuffer;
pub use chunk::{
    CHUNK_HEADER_LENGTH, CHUNK_TYPE_BIN, CHUNK_TYPE_JSON, Chunk, ChunkKind, ChunkReader, GLB_MAGIC, GLB_VERSION,
    GlbHeader, HEADER_LENGTH,
};
pub use container::GltfContainer;
pub use cursor::ByteCursor;
pub use inspect::{ChunkInfo, GlbInfo, inspect_glb, inspect_glb_bytes};
pub use options::{ReadOptions, WriteOptions};
pub use reader::{GlbReader, parse_glb_bytes, read_glb, read_glb_with_options};
pub use writer::{serialize_glb, serialize_glb_with_options, write_glb, write_glb_to, write_glb_with_options};
