//! Source bundle types: where it lives, whether it is there, what gets written.

use std::fmt;
use std::path::{Path, PathBuf};

/// Opaque (bucket, key) locator of a source bundle.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BundleLocation {
    pub bucket: String,
    pub key: String,
}

impl BundleLocation {
    #[must_use]
    pub fn new(bucket: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            key: key.into(),
        }
    }
}

impl fmt::Display for BundleLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "s3://{}/{}", self.bucket, self.key)
    }
}

/// Result of the existence check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BundlePresence {
    Found,
    NotFound,
}

impl BundlePresence {
    #[must_use]
    pub fn is_found(self) -> bool {
        self == Self::Found
    }
}

/// Where the uploaded bytes came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PayloadSource {
    /// The object key string itself. Long-standing behaviour kept for
    /// compatibility with existing pipelines; it is not a deployable bundle.
    KeyString,
    /// Contents of a local file given with `--bundle-file`.
    File(PathBuf),
}

/// Bytes written by the upload step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundlePayload {
    pub bytes: Vec<u8>,
    pub source: PayloadSource,
}

impl BundlePayload {
    /// Payload whose body is the key of `location`.
    #[must_use]
    pub fn key_string(location: &BundleLocation) -> Self {
        Self {
            bytes: location.key.as_bytes().to_vec(),
            source: PayloadSource::KeyString,
        }
    }

    /// Payload read from `path`.
    #[must_use]
    pub fn file(path: &Path, bytes: Vec<u8>) -> Self {
        Self {
            bytes,
            source: PayloadSource::File(path.to_path_buf()),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}
