//! GLB container writing

use std::io::{self, Write};
use std::path::Path;

use byteorder::{LittleEndian, WriteBytesExt};

use super::buffer::StoredBuffer;
use super::chunk::{CHUNK_HEADER_LENGTH, CHUNK_TYPE_BIN, CHUNK_TYPE_JSON, GLB_VERSION, GlbHeader, HEADER_LENGTH};
use super::container::GltfContainer;
use super::options::WriteOptions;
use crate::error::Result;
use crate::schema::ToJson;

/// Serialize a container to GLB bytes.
///
/// # Errors
/// Returns an error if JSON serialization fails or the container would
/// exceed 4 GiB.
pub fn serialize_glb(container: &GltfContainer) -> Result<Vec<u8>> {
    serialize_glb_with_options(container, &WriteOptions::default())
}

/// Serialize a container to GLB bytes with explicit options.
///
/// # Errors
/// See [`serialize_glb`].
pub fn serialize_glb_with_options(container: &GltfContainer, options: &WriteOptions) -> Result<Vec<u8>> {
    let mut output = Vec::new();
    write_glb_to(&mut output, container, options)?;
    Ok(output)
}

/// Write a container as a GLB file.
///
/// # Errors
/// Returns an error if serialization or file writing fails.
pub fn write_glb<P: AsRef<Path>>(path: P, container: &GltfContainer) -> Result<()> {
    write_glb_with_options(path, container, &WriteOptions::default())
}

/// Write a container as a GLB file with explicit options.
///
/// # Errors
/// Returns an error if serialization or file writing fails.
pub fn write_glb_with_options<P: AsRef<Path>>(
    path: P,
    container: &GltfContainer,
    options: &WriteOptions,
) -> Result<()> {
    let data = serialize_glb_with_options(container, options)?;
    std::fs::write(path, data)?;
    Ok(())
}

fn padding(len: usize) -> usize {
    (4 - (len % 4)) % 4
}

fn chunk_length(len: usize) -> Result<u32> {
    u32::try_from(len).map_err(|_| too_large())
}

fn too_large() -> crate::Error {
    io::Error::new(io::ErrorKind::InvalidInput, "GLB container exceeds 4 GiB").into()
}

/// Write a container in GLB form to `writer`.
///
/// The JSON chunk is padded with spaces and the BIN chunk with zeros to a
/// four-byte boundary. A BIN chunk is written only if the container has a
/// buffer.
///
/// # Errors
/// See [`serialize_glb`].
pub fn write_glb_to<W: Write>(mut writer: W, container: &GltfContainer, options: &WriteOptions) -> Result<()> {
    let mut document = container.gltf.to_json_value();
    if container.gltf.asset.generator.is_none() {
        if let Some(generator) = &options.generator {
            let mut asset = container.gltf.asset.clone();
            asset.generator = Some(generator.clone());
            document["asset"] = asset.to_json();
        }
    }
    let json = serde_json::to_vec(&document)?;

    let json_padding = padding(json.len());
    let json_chunk_len = json.len() + json_padding;
    let bin = container.buffer.as_ref().map(StoredBuffer::as_slice);
    let bin_padding = bin.map_or(0, |b| padding(b.len()));
    let bin_chunk_len = bin.map_or(0, |b| b.len() + bin_padding);

    let mut total_len = HEADER_LENGTH + CHUNK_HEADER_LENGTH + json_chunk_len as u64;
    if bin.is_some() {
        total_len += CHUNK_HEADER_LENGTH + bin_chunk_len as u64;
    }
    let total_len = u32::try_from(total_len).map_err(|_| too_large())?;

    GlbHeader {
        version: GLB_VERSION,
        length: total_len,
    }
    .write(&mut writer)?;

    writer.write_u32::<LittleEndian>(chunk_length(json_chunk_len)?)?;
    writer.write_u32::<LittleEndian>(CHUNK_TYPE_JSON)?;
    writer.write_all(&json)?;
    writer.write_all(&b"   "[..json_padding])?;

    if let Some(bin) = bin {
        writer.write_u32::<LittleEndian>(chunk_length(bin_chunk_len)?)?;
        writer.write_u32::<LittleEndian>(CHUNK_TYPE_BIN)?;
        writer.write_all(bin)?;
        writer.write_all(&[0u8; 3][..bin_padding])?;
    }

    tracing::debug!(
        json_length = json_chunk_len,
        bin_length = bin_chunk_len,
        total_length = total_len,
        "Wrote GLB container"
    );
    Ok(())
}
