//! GLB container reading
//!
//! The reader walks the chunk sequence once, enforcing the container rules as
//! it goes: JSON first, BIN (if any) second, each at most once, anything else
//! skipped. The first violation aborts the parse.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use super::buffer::StoredBuffer;
use super::chunk::{ChunkKind, ChunkReader, GlbHeader};
use super::container::GltfContainer;
use super::cursor::ByteCursor;
use super::options::ReadOptions;
use crate::error::{Error, Result};
use crate::schema::Value;
use crate::types::Gltf;

const JSON_CHUNK_INDEX: usize = 0;
const BIN_CHUNK_INDEX: usize = 1;

/// Read a GLB file from disk.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be opened or read, a
/// malformed-container error if the framing is invalid, or a schema
/// violation if the JSON chunk is not a valid glTF document.
///
/// [`Error::Io`]: crate::Error::Io
pub fn read_glb<P: AsRef<Path>>(path: P) -> Result<GltfContainer> {
    read_glb_with_options(path, &ReadOptions::default())
}

/// Read a GLB file from disk with explicit options.
///
/// # Errors
///
/// See [`read_glb`].
pub fn read_glb_with_options<P: AsRef<Path>>(path: P, options: &ReadOptions) -> Result<GltfContainer> {
    let file = File::open(path)?;
    GlbReader::new(options.clone()).read(BufReader::new(file))
}

/// Parse GLB data from bytes.
///
/// # Errors
///
/// See [`read_glb`].
pub fn parse_glb_bytes(data: &[u8]) -> Result<GltfContainer> {
    GlbReader::default().read(data)
}

/// Streaming GLB reader.
#[derive(Debug, Clone, Default)]
pub struct GlbReader {
    options: ReadOptions,
}

impl GlbReader {
    pub fn new(options: ReadOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ReadOptions {
        &self.options
    }

    /// Read one container from `reader`, consuming it to the end.
    ///
    /// # Errors
    ///
    /// Returns a malformed-container error for bad framing, chunk order or
    /// duplicates, or a schema violation from the JSON mapping.
    pub fn read<R: Read>(&self, reader: R) -> Result<GltfContainer> {
        let mut cursor = ByteCursor::new(reader);
        let header = GlbHeader::read(&mut cursor)?;
        tracing::debug!(version = header.version, length = header.length, "Read GLB header");

        let mut chunks = ChunkReader::new(cursor).with_max_chunk_length(self.options.max_chunk_length);
        let mut gltf: Option<Gltf> = None;
        let mut buffer: Option<StoredBuffer> = None;
        let mut index = 0usize;

        while let Some(chunk) = chunks.next_chunk()? {
            match chunk.kind {
                ChunkKind::Json => {
                    check_slot(gltf.is_some(), chunk.kind, index, JSON_CHUNK_INDEX, chunk.offset)?;
                    tracing::debug!(offset = chunk.offset, length = chunk.length, "Accepted JSON chunk");
                    gltf = Some(decode_json_chunk(&chunk.payload, chunk.offset)?);
                }
                ChunkKind::Binary => {
                    check_slot(buffer.is_some(), chunk.kind, index, BIN_CHUNK_INDEX, chunk.offset)?;
                    tracing::debug!(offset = chunk.offset, length = chunk.length, "Accepted BIN chunk");
                    buffer = Some(StoredBuffer::new(chunk.payload));
                }
                ChunkKind::Unknown(tag) => {
                    tracing::trace!(offset = chunk.offset, length = chunk.length, tag, "Skipped unknown chunk");
                }
            }
            index += 1;
        }

        if self.options.validate_length {
            let actual = chunks.position();
            if u64::from(header.length) != actual {
                return Err(Error::LengthMismatch {
                    declared: header.length,
                    actual,
                });
            }
        }

        let gltf = gltf.ok_or(Error::MissingJsonChunk)?;
        Ok(GltfContainer { gltf, buffer })
    }
}

/// Enforce uniqueness, then position, for a JSON or BIN chunk.
fn check_slot(seen: bool, kind: ChunkKind, index: usize, expected_index: usize, offset: u64) -> Result<()> {
    if seen {
        return Err(Error::DuplicateChunk { kind, offset });
    }
    if index != expected_index {
        return Err(Error::ChunkOutOfOrder {
            kind,
            index,
            expected_index,
            offset,
        });
    }
    Ok(())
}

/// Decode the JSON chunk payload into a glTF document.
///
/// Trailing NUL padding is stripped; trailing spaces are left to the JSON
/// parser.
fn decode_json_chunk(payload: &[u8], offset: u64) -> Result<Gltf> {
    let end = payload.iter().rposition(|&b| b != 0).map_or(0, |last| last + 1);
    let text = std::str::from_utf8(&payload[..end])?;
    let value: Value =
        serde_json::from_str(text).map_err(|source| Error::InvalidJsonChunk { offset, source })?;
    Gltf::from_json_value(&value)
}
