//! Core domain errors.

use std::path::PathBuf;

use thiserror::Error;

/// Core domain errors for Chatbot.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Attachment path could not be read.
    #[error("Cannot read attachment '{path}': {source}")]
    AttachmentIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Attachment path exists but is not a regular file.
    #[error("Attachment is not a file: {0}")]
    NotAFile(PathBuf),
}
