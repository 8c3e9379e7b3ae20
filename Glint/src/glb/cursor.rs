//! Offset-tracking little-endian reader

use std::io::{self, ErrorKind, Read};

use byteorder::{ByteOrder, LittleEndian};

use crate::error::{Error, Result};

/// Forward-only reader that counts every byte it consumes.
///
/// The cursor owns its source and never seeks, so it works over files,
/// sockets and in-memory slices alike. Short reads are reported as
/// [`Error::UnexpectedEof`] with the offset at which the read started.
#[derive(Debug)]
pub struct ByteCursor<R> {
    inner: R,
    position: u64,
}

impl<R: Read> ByteCursor<R> {
    pub fn new(inner: R) -> Self {
        Self { inner, position: 0 }
    }

    /// Bytes consumed so far.
    pub fn position(&self) -> u64 {
        self.position
    }

    pub fn into_inner(self) -> R {
        self.inner
    }

    /// Read until `buf` is full or the source is exhausted; returns the
    /// number of bytes read.
    fn fill(&mut self, buf: &mut [u8]) -> Result<usize> {
        let mut filled = 0;
        while filled < buf.len() {
            match self.inner.read(&mut buf[filled..]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(e) if e.kind() == ErrorKind::Interrupted => {}
                Err(e) => return Err(e.into()),
            }
        }
        self.position += filled as u64;
        Ok(filled)
    }

    /// Read a little-endian `u32`, or `None` if the source was already
    /// exhausted.
    ///
    /// # Errors
    /// Returns [`Error::UnexpectedEof`] if between one and three bytes remain.
    pub fn try_read_u32(&mut self) -> Result<Option<u32>> {
        let offset = self.position;
        let mut buf = [0u8; 4];
        match self.fill(&mut buf)? {
            0 => Ok(None),
            4 => Ok(Some(LittleEndian::read_u32(&buf))),
            available => Err(Error::UnexpectedEof {
                offset,
                expected: 4,
                available: available as u64,
            }),
        }
    }

    /// Read a little-endian `u32`.
    ///
    /// # Errors
    /// Returns [`Error::UnexpectedEof`] if fewer than four bytes remain.
    pub fn read_u32(&mut self) -> Result<u32> {
        let offset = self.position;
        self.try_read_u32()?.ok_or(Error::UnexpectedEof {
            offset,
            expected: 4,
            available: 0,
        })
    }

    /// Read exactly `len` bytes.
    ///
    /// The buffer grows with the data actually read, so a bogus length on a
    /// short stream does not allocate up front.
    ///
    /// # Errors
    /// Returns [`Error::UnexpectedEof`] if fewer than `len` bytes remain.
    pub fn read_bytes(&mut self, len: usize) -> Result<Vec<u8>> {
        let offset = self.position;
        let mut buf = Vec::new();
        let read = self.inner.by_ref().take(len as u64).read_to_end(&mut buf)?;
        self.position += read as u64;
        if read < len {
            return Err(Error::UnexpectedEof {
                offset,
                expected: len as u64,
                available: read as u64,
            });
        }
        Ok(buf)
    }

    /// Consume `len` bytes without keeping them.
    ///
    /// # Errors
    /// Returns [`Error::UnexpectedEof`] if fewer than `len` bytes remain.
    pub fn skip(&mut self, len: u64) -> Result<()> {
        let offset = self.position;
        let skipped = io::copy(&mut self.inner.by_ref().take(len), &mut io::sink())?;
        self.position += skipped;
        if skipped < len {
            return Err(Error::UnexpectedEof {
                offset,
                expected: len,
                available: skipped,
            });
        }
        Ok(())
    }
}
