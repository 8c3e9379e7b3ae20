//! Reader and writer options

/// Options for reading GLB containers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReadOptions {
    /// Check the header's total length against the bytes actually consumed.
    pub validate_length: bool,
    /// Reject any chunk declaring a larger payload, before allocating for it.
    pub max_chunk_length: Option<u32>,
}

impl ReadOptions {
    /// Create default options (lenient length, no chunk limit).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail with [`Error::LengthMismatch`](crate::Error::LengthMismatch)
    /// when the header length is wrong.
    #[must_use]
    pub fn with_validate_length(mut self, validate: bool) -> Self {
        self.validate_length = validate;
        self
    }

    #[must_use]
    pub fn with_max_chunk_length(mut self, limit: u32) -> Self {
        self.max_chunk_length = Some(limit);
        self
    }
}

/// Options for writing GLB containers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WriteOptions {
    /// Stamped into `asset.generator` when the document has none.
    pub generator: Option<String>,
}

impl WriteOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_generator(mut self, generator: impl Into<String>) -> Self {
        self.generator = Some(generator.into());
        self
    }
}
