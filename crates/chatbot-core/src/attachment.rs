//! Local file attachment reference.

use std::path::{Path, PathBuf};

use crate::error::CoreError;

/// Reference to a single local file picked by the user.
///
/// Only metadata is kept; the file content is never read or uploaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    /// File name shown in the transcript.
    pub name: String,
    /// Location on disk.
    pub path: PathBuf,
    /// Size at the time it was attached.
    pub size_bytes: u64,
}

impl Attachment {
    pub fn new(name: impl Into<String>, path: PathBuf, size_bytes: u64) -> Self {
        Self {
            name: name.into(),
            path,
            size_bytes,
        }
    }

    /// Build an attachment from a path on disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CoreError> {
        let path = path.as_ref();
        let metadata = std::fs::metadata(path).map_err(|source| CoreError::AttachmentIo {
            path: path.to_path_buf(),
            source,
        })?;

        if !metadata.is_file() {
            return Err(CoreError::NotAFile(path.to_path_buf()));
        }

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        Ok(Self::new(name, path.to_path_buf(), metadata.len()))
    }
}
