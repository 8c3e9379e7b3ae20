//! Shared storage for the BIN chunk

use std::fmt;
use std::ops::Deref;

use bytes::Bytes;

/// Immutable, reference-counted view over binary buffer bytes.
///
/// Clones and [`slice`](Self::slice)s share the same allocation and stay
/// valid after the reader that produced them is gone.
#[derive(Clone, PartialEq, Eq, Default)]
pub struct StoredBuffer {
    bytes: Bytes,
}

impl StoredBuffer {
    pub fn new(data: Vec<u8>) -> Self {
        Self { bytes: Bytes::from(data) }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.bytes
    }

    /// Sub-view of `len` bytes starting at `offset`, without copying.
    ///
    /// Returns `None` if the range does not fit.
    pub fn slice(&self, offset: usize, len: usize) -> Option<StoredBuffer> {
        let end = offset.checked_add(len)?;
        if end > self.bytes.len() {
            return None;
        }
        Some(Self {
            bytes: self.bytes.slice(offset..end),
        })
    }

    /// The underlying shared bytes.
    pub fn to_bytes(&self) -> Bytes {
        self.bytes.clone()
    }
}

impl From<Vec<u8>> for StoredBuffer {
    fn from(data: Vec<u8>) -> Self {
        Self::new(data)
    }
}

impl From<Bytes> for StoredBuffer {
    fn from(bytes: Bytes) -> Self {
        Self { bytes }
    }
}

impl Deref for StoredBuffer {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.bytes
    }
}

impl AsRef<[u8]> for StoredBuffer {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl fmt::Debug for StoredBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoredBuffer").field("len", &self.bytes.len()).finish()
    }
}
