//! GLB header and chunk framing

use std::fmt;
use std::io::{Read, Write};

use byteorder::{LittleEndian, WriteBytesExt};

use super::cursor::ByteCursor;
use crate::error::{Error, Result};

/// `"glTF"` read as a little-endian `u32`.
pub const GLB_MAGIC: u32 = 0x46546C67;
/// The only container version this crate reads and writes.
pub const GLB_VERSION: u32 = 2;
/// Size of the file header in bytes.
pub const HEADER_LENGTH: u64 = 12;
/// Size of a chunk header (length + type) in bytes.
pub const CHUNK_HEADER_LENGTH: u64 = 8;
/// Chunk type tag `"JSON"`.
pub const CHUNK_TYPE_JSON: u32 = 0x4E4F534A;
/// Chunk type tag `"BIN\0"`.
pub const CHUNK_TYPE_BIN: u32 = 0x004E4942;

/// Type of a chunk, decoded from its tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChunkKind {
    /// Scene description, UTF-8 JSON.
    Json,
    /// Binary buffer payload.
    Binary,
    /// Any other tag; skipped by the reader.
    Unknown(u32),
}

impl ChunkKind {
    pub fn from_tag(tag: u32) -> Self {
        match tag {
            CHUNK_TYPE_JSON => ChunkKind::Json,
            CHUNK_TYPE_BIN => ChunkKind::Binary,
            other => ChunkKind::Unknown(other),
        }
    }

    pub fn tag(self) -> u32 {
        match self {
            ChunkKind::Json => CHUNK_TYPE_JSON,
            ChunkKind::Binary => CHUNK_TYPE_BIN,
            ChunkKind::Unknown(tag) => tag,
        }
    }
}

impl fmt::Display for ChunkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChunkKind::Json => f.write_str("JSON"),
            ChunkKind::Binary => f.write_str("BIN"),
            ChunkKind::Unknown(tag) => {
                let bytes = tag.to_le_bytes();
                if bytes.iter().all(|b| b.is_ascii_graphic() || *b == 0) {
                    let text: String = bytes.iter().filter(|b| **b != 0).map(|b| char::from(*b)).collect();
                    write!(f, "unknown ({text})")
                } else {
                    write!(f, "unknown ({tag:#010X})")
                }
            }
        }
    }
}

/// The 12-byte file header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlbHeader {
    pub version: u32,
    /// Total container length in bytes, header included.
    pub length: u32,
}

impl GlbHeader {
    /// Read and validate the header.
    ///
    /// Magic is checked before the version is read, so a foreign file fails
    /// on its first four bytes.
    ///
    /// # Errors
    /// Returns [`Error::InvalidGlbMagic`], [`Error::UnsupportedGlbVersion`],
    /// or [`Error::UnexpectedEof`] for a stream shorter than 12 bytes.
    pub fn read<R: Read>(cursor: &mut ByteCursor<R>) -> Result<Self> {
        let magic = cursor.read_u32()?;
        if magic != GLB_MAGIC {
            return Err(Error::InvalidGlbMagic { found: magic });
        }
        let version = cursor.read_u32()?;
        if version != GLB_VERSION {
            return Err(Error::UnsupportedGlbVersion { version });
        }
        let length = cursor.read_u32()?;
        Ok(Self { version, length })
    }

    /// Write the header.
    ///
    /// # Errors
    /// Returns an error if writing fails.
    pub fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        writer.write_u32::<LittleEndian>(GLB_MAGIC)?;
        writer.write_u32::<LittleEndian>(self.version)?;
        writer.write_u32::<LittleEndian>(self.length)?;
        Ok(())
    }
}

/// One chunk as read from the stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    /// Byte offset of the chunk header.
    pub offset: u64,
    /// Declared payload length.
    pub length: u32,
    pub kind: ChunkKind,
    /// Payload bytes; empty for skipped unknown chunks.
    pub payload: Vec<u8>,
}

/// Reads chunks one at a time after the header.
#[derive(Debug)]
pub struct ChunkReader<R> {
    cursor: ByteCursor<R>,
    max_chunk_length: Option<u32>,
    finished: bool,
}

fn truncated(err: Error) -> Error {
    match err {
        Error::UnexpectedEof {
            offset,
            expected,
            available,
        } => Error::TruncatedChunk {
            offset,
            expected,
            available,
        },
        other => other,
    }
}

impl<R: Read> ChunkReader<R> {
    /// Continue reading from `cursor`, which must sit at a chunk boundary.
    pub fn new(cursor: ByteCursor<R>) -> Self {
        Self {
            cursor,
            max_chunk_length: None,
            finished: false,
        }
    }

    /// Reject chunks that declare more than `limit` payload bytes.
    #[must_use]
    pub fn with_max_chunk_length(mut self, limit: Option<u32>) -> Self {
        self.max_chunk_length = limit;
        self
    }

    /// Bytes consumed so far, header included.
    pub fn position(&self) -> u64 {
        self.cursor.position()
    }

    pub fn into_cursor(self) -> ByteCursor<R> {
        self.cursor
    }

    /// Read the next chunk.
    ///
    /// Returns `Ok(None)` when the stream ends exactly at a chunk boundary.
    ///
    /// # Errors
    /// Returns [`Error::TruncatedChunk`] if the stream ends inside a chunk,
    /// or [`Error::ChunkTooLarge`] if the declared length exceeds the limit.
    pub fn next_chunk(&mut self) -> Result<Option<Chunk>> {
        let offset = self.cursor.position();
        let Some(length) = self.cursor.try_read_u32().map_err(truncated)? else {
            return Ok(None);
        };
        let kind = ChunkKind::from_tag(self.cursor.read_u32().map_err(truncated)?);

        if let Some(limit) = self.max_chunk_length {
            if length > limit {
                return Err(Error::ChunkTooLarge { offset, length, limit });
            }
        }

        let payload = match kind {
            ChunkKind::Unknown(_) => {
                self.cursor.skip(u64::from(length)).map_err(truncated)?;
                Vec::new()
            }
            ChunkKind::Json | ChunkKind::Binary => {
                self.cursor.read_bytes(length as usize).map_err(truncated)?
            }
        };

        Ok(Some(Chunk {
            offset,
            length,
            kind,
            payload,
        }))
    }
}

impl<R: Read> Iterator for ChunkReader<R> {
    type Item = Result<Chunk>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let next = self.next_chunk().transpose();
        if !matches!(next, Some(Ok(_))) {
            self.finished = true;
        }
        next
    }
}
