//! GLB structure inspection
//!
//! Lists the header and chunk table of a container without interpreting the
//! JSON or enforcing chunk order, for diagnosing files the reader rejects.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::Serialize;

use super::chunk::{ChunkReader, GlbHeader};
use super::cursor::ByteCursor;
use crate::error::Result;

/// Information about a GLB container.
#[derive(Debug, Clone, Serialize)]
pub struct GlbInfo {
    pub version: u32,
    /// Total length declared in the header.
    pub declared_length: u32,
    /// Bytes actually present.
    pub actual_length: u64,
    pub num_chunks: usize,
    pub chunks: Vec<ChunkInfo>,
}

/// Information about one chunk.
#[derive(Debug, Clone, Serialize)]
pub struct ChunkInfo {
    pub index: usize,
    pub kind: String,
    pub offset: u64,
    pub length: u32,
}

/// Get information about a GLB file's structure.
///
/// # Errors
/// Returns an error if the file cannot be read, the header is invalid, or a
/// chunk is truncated.
pub fn inspect_glb<P: AsRef<Path>>(source: P) -> Result<GlbInfo> {
    let file = File::open(source.as_ref())?;
    inspect_glb_reader(BufReader::new(file))
}

/// Get information about GLB data in memory.
///
/// # Errors
/// See [`inspect_glb`].
pub fn inspect_glb_bytes(data: &[u8]) -> Result<GlbInfo> {
    inspect_glb_reader(data)
}

fn inspect_glb_reader<R: Read>(reader: R) -> Result<GlbInfo> {
    let mut cursor = ByteCursor::new(reader);
    let header = GlbHeader::read(&mut cursor)?;
    let mut chunks = ChunkReader::new(cursor);

    let mut infos = Vec::new();
    while let Some(chunk) = chunks.next_chunk()? {
        infos.push(ChunkInfo {
            index: infos.len(),
            kind: chunk.kind.to_string(),
            offset: chunk.offset,
            length: chunk.length,
        });
    }

    Ok(GlbInfo {
        version: header.version,
        declared_length: header.length,
        actual_length: chunks.position(),
        num_chunks: infos.len(),
        chunks: infos,
    })
}
