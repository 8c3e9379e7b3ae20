use glint::glb::{
    CHUNK_TYPE_BIN, CHUNK_TYPE_JSON, ChunkKind, GLB_MAGIC, GlbReader, GltfContainer, ReadOptions, WriteOptions,
    inspect_glb, parse_glb_bytes, read_glb, serialize_glb, write_glb_with_options,
};
use glint::prelude::*;
use glint::types::{Buffer, BufferView};
use pretty_assertions::assert_eq;
use tempfile::tempdir;

const MINIMAL_JSON: &[u8] = br#"{"asset":{"version":"2.0"}}"#;
const XDAT: u32 = 0x5441_4458;

/// Builds raw GLB bytes chunk by chunk, without any validation.
struct GlbBuilder {
    bytes: Vec<u8>,
}

impl GlbBuilder {
    fn new() -> Self {
        Self::with_header(GLB_MAGIC, 2, 0)
    }

    fn with_header(magic: u32, version: u32, length: u32) -> Self {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&magic.to_le_bytes());
        bytes.extend_from_slice(&version.to_le_bytes());
        bytes.extend_from_slice(&length.to_le_bytes());
        Self { bytes }
    }

    fn chunk(mut self, tag: u32, payload: &[u8]) -> Self {
        self.bytes.extend_from_slice(&(payload.len() as u32).to_le_bytes());
        self.bytes.extend_from_slice(&tag.to_le_bytes());
        self.bytes.extend_from_slice(payload);
        self
    }

    fn json(self, payload: &[u8]) -> Self {
        self.chunk(CHUNK_TYPE_JSON, payload)
    }

    fn bin(self, payload: &[u8]) -> Self {
        self.chunk(CHUNK_TYPE_BIN, payload)
    }

    fn offset(&self) -> u64 {
        self.bytes.len() as u64
    }

    /// Patch the header length to the actual size.
    fn sized(mut self) -> Vec<u8> {
        let len = self.bytes.len() as u32;
        self.bytes[8..12].copy_from_slice(&len.to_le_bytes());
        self.bytes
    }

    fn build(self) -> Vec<u8> {
        self.bytes
    }
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}

#[test]
fn test_minimal_container_from_raw_bytes() {
    let mut data = vec![0x67, 0x6C, 0x54, 0x46, 0x02, 0x00, 0x00, 0x00, 0x4C, 0x00, 0x00, 0x00];
    data.extend_from_slice(&(MINIMAL_JSON.len() as u32).to_le_bytes());
    data.extend_from_slice(b"JSON");
    data.extend_from_slice(MINIMAL_JSON);

    let container = parse_glb_bytes(&data).unwrap();
    assert_eq!(container.gltf.asset.version, "2.0");
    assert!(container.buffer.is_none());
}

#[test]
fn test_bin_before_json_is_out_of_order() {
    let data = GlbBuilder::with_header(GLB_MAGIC, 2, 0x4C)
        .bin(&[0; 4])
        .json(MINIMAL_JSON)
        .build();
    let err = parse_glb_bytes(&data).unwrap_err();
    assert!(err.is_malformed_container());
    match err {
        Error::ChunkOutOfOrder {
            kind,
            index,
            expected_index,
            offset,
        } => {
            assert_eq!(kind, ChunkKind::Binary);
            assert_eq!(index, 0);
            assert_eq!(expected_index, 1);
            assert_eq!(offset, 12);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_zero_magic_fails_before_chunks() {
    // Chunk data is garbage on purpose; it must never be looked at.
    let mut data = GlbBuilder::with_header(0, 2, 0x4C).build();
    data.extend_from_slice(&[0xFF; 3]);
    let err = parse_glb_bytes(&data).unwrap_err();
    assert!(matches!(err, Error::InvalidGlbMagic { found: 0 }));
}

#[test]
fn test_unsupported_version() {
    let data = GlbBuilder::with_header(GLB_MAGIC, 1, 0).json(MINIMAL_JSON).build();
    let err = parse_glb_bytes(&data).unwrap_err();
    assert!(matches!(err, Error::UnsupportedGlbVersion { version: 1 }));
}

#[test]
fn test_short_header() {
    let err = parse_glb_bytes(&[0x67, 0x6C, 0x54, 0x46, 0x02]).unwrap_err();
    assert!(matches!(err, Error::UnexpectedEof { offset: 4, .. }));
}

#[test]
fn test_json_bin_and_unknown_chunks() {
    init_tracing();
    let payload: Vec<u8> = (0u8..32).collect();
    let data = GlbBuilder::new()
        .json(MINIMAL_JSON)
        .bin(&payload)
        .chunk(XDAT, b"extra data")
        .sized();

    let container = GlbReader::new(ReadOptions::new().with_validate_length(true))
        .read(&data[..])
        .unwrap();
    assert_eq!(container.buffer.as_deref(), Some(&payload[..]));
}

#[test]
fn test_two_json_chunks_are_duplicates() {
    let builder = GlbBuilder::new().json(MINIMAL_JSON);
    let second = builder.offset();
    let data = builder.json(MINIMAL_JSON).build();

    let err = parse_glb_bytes(&data).unwrap_err();
    match err {
        Error::DuplicateChunk { kind, offset } => {
            assert_eq!(kind, ChunkKind::Json);
            assert_eq!(offset, second);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_two_bin_chunks_are_duplicates() {
    let data = GlbBuilder::new().json(MINIMAL_JSON).bin(&[1; 4]).bin(&[2; 4]).build();
    let err = parse_glb_bytes(&data).unwrap_err();
    assert!(matches!(err, Error::DuplicateChunk { kind: ChunkKind::Binary, .. }));
}

#[test]
fn test_json_after_unknown_is_out_of_order() {
    let data = GlbBuilder::new().chunk(XDAT, &[0; 4]).json(MINIMAL_JSON).build();
    let err = parse_glb_bytes(&data).unwrap_err();
    assert!(matches!(
        err,
        Error::ChunkOutOfOrder { kind: ChunkKind::Json, index: 1, expected_index: 0, .. }
    ));
}

#[test]
fn test_missing_json_chunk() {
    let data = GlbBuilder::new().chunk(XDAT, &[0; 8]).build();
    assert!(matches!(parse_glb_bytes(&data), Err(Error::MissingJsonChunk)));

    let data = GlbBuilder::new().build();
    assert!(matches!(parse_glb_bytes(&data), Err(Error::MissingJsonChunk)));
}

#[test]
fn test_truncated_bin_chunk() {
    let builder = GlbBuilder::new().json(MINIMAL_JSON);
    let bin_offset = builder.offset();
    let mut data = builder.bin(&[7; 16]).build();
    data.truncate(data.len() - 6);

    let err = parse_glb_bytes(&data).unwrap_err();
    match err {
        Error::TruncatedChunk {
            offset,
            expected,
            available,
        } => {
            assert_eq!(offset, bin_offset + 8);
            assert_eq!(expected, 16);
            assert_eq!(available, 10);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_length_checked_only_on_request() {
    let data = GlbBuilder::with_header(GLB_MAGIC, 2, 0x4C).json(MINIMAL_JSON).build();
    assert!(parse_glb_bytes(&data).is_ok());

    let err = GlbReader::new(ReadOptions::new().with_validate_length(true))
        .read(&data[..])
        .unwrap_err();
    assert!(matches!(err, Error::LengthMismatch { declared: 0x4C, actual: 47 }));
}

#[test]
fn test_max_chunk_length() {
    let data = GlbBuilder::new().json(MINIMAL_JSON).bin(&[0; 64]).build();
    let err = GlbReader::new(ReadOptions::new().with_max_chunk_length(32))
        .read(&data[..])
        .unwrap_err();
    assert!(matches!(err, Error::ChunkTooLarge { length: 64, limit: 32, .. }));
}

#[test]
fn test_schema_violation_in_json_chunk() {
    let data = GlbBuilder::new().json(br#"{"asset":{}}"#).build();
    let err = parse_glb_bytes(&data).unwrap_err();
    assert!(err.is_schema_violation());
    assert!(matches!(err, Error::MissingField { type_name: "Asset", field: "version", .. }));
}

#[test]
fn test_invalid_json_text() {
    let data = GlbBuilder::new().json(b"{\"asset\":").build();
    let err = parse_glb_bytes(&data).unwrap_err();
    assert!(err.is_malformed_container());
    assert!(matches!(err, Error::InvalidJsonChunk { offset: 12, .. }));
}

#[test]
fn test_space_padded_json() {
    let mut json = MINIMAL_JSON.to_vec();
    json.push(b' ');
    let data = GlbBuilder::new().json(&json).build();
    assert_eq!(parse_glb_bytes(&data).unwrap().gltf.asset.version, "2.0");
}

#[test]
fn test_write_then_read_file() {
    init_tracing();
    let dir = tempdir().unwrap();
    let path = dir.path().join("model.glb");

    let mut gltf = Gltf::default();
    gltf.buffers.push(Buffer {
        byte_length: 6,
        ..Buffer::default()
    });
    gltf.buffer_views.push(BufferView {
        byte_offset: 2,
        byte_length: 4,
        ..BufferView::default()
    });
    let container = GltfContainer::new(gltf).with_buffer(vec![10u8, 11, 12, 13, 14, 15]);

    write_glb_with_options(&path, &container, &WriteOptions::new().with_generator("glint tests")).unwrap();
    let read = read_glb(&path).unwrap();

    assert_eq!(read.gltf.asset.generator.as_deref(), Some("glint tests"));
    assert_eq!(read.gltf.buffer_views, container.gltf.buffer_views);
    assert_eq!(read.buffer_view_bytes(0).unwrap().as_slice(), &[12, 13, 14, 15]);
    // The BIN chunk is zero padded to eight bytes.
    assert_eq!(read.buffer.as_deref(), Some(&[10u8, 11, 12, 13, 14, 15, 0, 0][..]));

    let info = inspect_glb(&path).unwrap();
    assert_eq!(info.num_chunks, 2);
    assert_eq!(u64::from(info.declared_length), info.actual_length);
}

#[test]
fn test_serialized_bytes_reparse_identically() {
    let container = GltfContainer::new(Gltf::from_json_str(r#"{"asset":{"version":"2.0"},"scene":0,"scenes":[{"nodes":[0]}],"nodes":[{"name":"root"}]}"#).unwrap())
        .with_buffer(vec![0u8; 8]);
    let bytes = serialize_glb(&container).unwrap();
    assert_eq!(parse_glb_bytes(&bytes).unwrap(), container);
    assert_eq!(serialize_glb(&parse_glb_bytes(&bytes).unwrap()).unwrap(), bytes);
}
