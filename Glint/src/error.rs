//! Error types for `Glint`

use thiserror::Error;

use crate::glb::ChunkKind;

/// The error type for `Glint` operations.
///
/// Variants fall into two families: malformed-container errors raised by the
/// GLB reader (always carrying a byte offset) and schema violations raised by
/// the JSON mapper (always carrying a field path). Neither is recoverable
/// within a single parse.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum Error {
    // ==================== IO Errors ====================
    /// IO error from the underlying reader or writer.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ==================== GLB Container Errors ====================
    /// The header magic is not `glTF`.
    #[error("invalid GLB magic: expected 0x46546C67 (\"glTF\"), found {found:#010X}")]
    InvalidGlbMagic {
        /// The magic value found in the header.
        found: u32,
    },

    /// The container version is not 2.
    #[error("unsupported GLB version: {version} (supported: 2)")]
    UnsupportedGlbVersion {
        /// The version number found in the header.
        version: u32,
    },

    /// The stream ended in the middle of a fixed-width read.
    #[error("unexpected end of stream at offset {offset}: needed {expected} bytes, {available} available")]
    UnexpectedEof {
        /// Byte offset where the read started.
        offset: u64,
        /// Number of bytes requested.
        expected: u64,
        /// Number of bytes actually available.
        available: u64,
    },

    /// The stream ended partway through a chunk header or payload.
    #[error("truncated chunk at offset {offset}: needed {expected} bytes, {available} available")]
    TruncatedChunk {
        /// Byte offset of the read that came up short.
        offset: u64,
        /// Number of bytes requested.
        expected: u64,
        /// Number of bytes actually available.
        available: u64,
    },

    /// A JSON or BIN chunk appeared at the wrong position.
    #[error("{kind} chunk at offset {offset} must be chunk #{expected_index}, found at #{index}")]
    ChunkOutOfOrder {
        /// Kind of the misplaced chunk.
        kind: ChunkKind,
        /// Position of the chunk in the sequence.
        index: usize,
        /// Position the chunk is required to occupy.
        expected_index: usize,
        /// Byte offset of the chunk header.
        offset: u64,
    },

    /// A second JSON or BIN chunk was found.
    #[error("duplicate {kind} chunk at offset {offset}")]
    DuplicateChunk {
        /// Kind of the duplicated chunk.
        kind: ChunkKind,
        /// Byte offset of the duplicate chunk header.
        offset: u64,
    },

    /// The container holds no JSON chunk.
    #[error("GLB container has no JSON chunk")]
    MissingJsonChunk,

    /// A chunk declares a payload larger than the configured limit.
    #[error("chunk at offset {offset} declares {length} bytes (limit: {limit})")]
    ChunkTooLarge {
        /// Byte offset of the chunk header.
        offset: u64,
        /// Declared payload length.
        length: u32,
        /// Configured maximum payload length.
        limit: u32,
    },

    /// The header's total length disagrees with the bytes consumed.
    #[error("GLB header declares {declared} bytes but container is {actual} bytes")]
    LengthMismatch {
        /// Length declared in the header.
        declared: u32,
        /// Bytes actually consumed.
        actual: u64,
    },

    /// The JSON chunk is not valid UTF-8.
    #[error("JSON chunk is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),

    /// The JSON chunk of a container is not well-formed JSON.
    #[error("JSON chunk at offset {offset} is not valid JSON: {source}")]
    InvalidJsonChunk {
        /// Byte offset of the JSON chunk header.
        offset: u64,
        /// The parser error.
        source: serde_json::Error,
    },

    /// JSON parsing or serialization error outside a container.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A buffer view cannot be resolved against the stored buffer.
    #[error("buffer view {index} is out of range: {message}")]
    BufferViewOutOfRange {
        /// Index of the buffer view in the document.
        index: usize,
        /// Description of what is out of range.
        message: String,
    },

    // ==================== Schema Violations ====================
    /// A required field is absent from a JSON object.
    #[error("missing required field '{field}' of {type_name} at {path}")]
    MissingField {
        /// Name of the schema type being decoded.
        type_name: &'static str,
        /// Wire name of the missing field.
        field: &'static str,
        /// Path of the enclosing object.
        path: String,
    },

    /// A JSON value has the wrong kind for its target field.
    #[error("type mismatch at {path}: expected {expected}, found {found}")]
    TypeMismatch {
        /// Path of the offending value.
        path: String,
        /// The expected kind.
        expected: &'static str,
        /// The kind (or value) actually found.
        found: String,
    },

    /// A JSON value matches none of an enum's declared wire values.
    #[error("unknown {type_name} value {value} at {path}")]
    UnknownEnumValue {
        /// Name of the enum type.
        type_name: &'static str,
        /// The offending wire value.
        value: String,
        /// Path of the offending value.
        path: String,
    },
}

impl Error {
    /// Whether this error reports a structurally invalid GLB container.
    ///
    /// Bad JSON text passed straight to the mapper is [`Error::Json`] and
    /// does not count.
    pub fn is_malformed_container(&self) -> bool {
        matches!(
            self,
            Error::InvalidGlbMagic { .. }
                | Error::UnsupportedGlbVersion { .. }
                | Error::UnexpectedEof { .. }
                | Error::TruncatedChunk { .. }
                | Error::ChunkOutOfOrder { .. }
                | Error::DuplicateChunk { .. }
                | Error::MissingJsonChunk
                | Error::ChunkTooLarge { .. }
                | Error::LengthMismatch { .. }
                | Error::InvalidUtf8(_)
                | Error::InvalidJsonChunk { .. }
        )
    }

    /// Whether this error reports JSON that does not fit its schema.
    pub fn is_schema_violation(&self) -> bool {
        matches!(
            self,
            Error::MissingField { .. } | Error::TypeMismatch { .. } | Error::UnknownEnumValue { .. }
        )
    }
}

/// A specialized Result type for `Glint` operations.
pub type Result<T> = std::result::Result<T, Error>;
