//! Parsed GLB contents

use super::buffer::StoredBuffer;
use crate::error::{Error, Result};
use crate::ext::vrm0::Vrm;
use crate::types::Gltf;

/// A parsed GLB: the typed scene description and the optional BIN payload.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GltfContainer {
    pub gltf: Gltf,
    /// Payload of the BIN chunk, if the container has one.
    pub buffer: Option<StoredBuffer>,
}

impl GltfContainer {
    pub fn new(gltf: Gltf) -> Self {
        Self { gltf, buffer: None }
    }

    #[must_use]
    pub fn with_buffer(mut self, buffer: impl Into<StoredBuffer>) -> Self {
        self.buffer = Some(buffer.into());
        self
    }

    /// Resolve buffer view `index` to the bytes it covers.
    ///
    /// Only buffer 0 is embedded in a GLB, so views into other buffers are
    /// rejected.
    ///
    /// # Errors
    /// Returns [`Error::BufferViewOutOfRange`] if the view does not exist,
    /// refers to an external buffer, or exceeds the BIN chunk.
    pub fn buffer_view_bytes(&self, index: usize) -> Result<StoredBuffer> {
        let out_of_range = |message: String| Error::BufferViewOutOfRange { index, message };

        let view = self.gltf.buffer_views.get(index).ok_or_else(|| {
            out_of_range(format!("document has {} buffer views", self.gltf.buffer_views.len()))
        })?;
        if view.buffer != 0 {
            return Err(out_of_range(format!(
                "refers to buffer {}; only buffer 0 is embedded",
                view.buffer
            )));
        }
        if self.gltf.buffers.first().is_some_and(|b| b.uri.is_some()) {
            return Err(out_of_range("buffer 0 is external".to_string()));
        }
        let buffer = self
            .buffer
            .as_ref()
            .ok_or_else(|| out_of_range("container has no BIN chunk".to_string()))?;

        buffer.slice(view.byte_offset, view.byte_length).ok_or_else(|| {
            out_of_range(format!(
                "bytes {}..{} exceed BIN chunk of {} bytes",
                view.byte_offset,
                view.byte_offset.saturating_add(view.byte_length),
                buffer.len()
            ))
        })
    }

    /// Decode the VRM 0.x root extension, if present.
    ///
    /// # Errors
    /// Returns a schema violation if the extension does not fit its schema.
    pub fn vrm(&self) -> Result<Option<Vrm>> {
        self.gltf.extension::<Vrm>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Buffer, BufferView};

    fn container() -> GltfContainer {
        let mut gltf = Gltf::default();
        gltf.buffers.push(Buffer { byte_length: 12, ..Buffer::default() });
        gltf.buffer_views.push(BufferView { byte_offset: 4, byte_length: 8, ..BufferView::default() });
        gltf.buffer_views.push(BufferView { byte_offset: 8, byte_length: 8, ..BufferView::default() });
        GltfContainer::new(gltf).with_buffer((0u8..12).collect::<Vec<_>>())
    }

    #[test]
    fn test_buffer_view_bytes() {
        let bytes = container().buffer_view_bytes(0).unwrap();
        assert_eq!(bytes.as_slice(), &[4, 5, 6, 7, 8, 9, 10, 11]);
    }

    #[test]
    fn test_buffer_view_out_of_range() {
        let container = container();
        assert!(matches!(
            container.buffer_view_bytes(1),
            Err(Error::BufferViewOutOfRange { index: 1, .. })
        ));
        assert!(matches!(
            container.buffer_view_bytes(5),
            Err(Error::BufferViewOutOfRange { index: 5, .. })
        ));
    }

    #[test]
    fn test_buffer_view_without_bin() {
        let mut container = container();
        container.buffer = None;
        let err = container.buffer_view_bytes(0).unwrap_err();
        assert!(err.to_string().contains("no BIN chunk"));
    }
}
