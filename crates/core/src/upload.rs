use std::io;
use std::path::Path;

use tgcloud_models::{FolderSelection, UploadRequest};
use tgcloud_utils::format_bytes;
use tgcloud_utils::media_types::{classify_media_type, media_type_for_extension};
use tracing::debug;

/// A local file the user picked for upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickedFile {
    pub name: String,
    pub media_type: String,
    pub size: u64,
}

impl PickedFile {
    pub fn new(name: impl Into<String>, media_type: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            media_type: media_type.into(),
            size,
        }
    }

    /// Reads name and size from disk and derives the media type from the
    /// extension.
    ///
    /// # Errors
    /// Returns an error if the path does not exist, is not a regular file or
    /// has no file name.
    pub async fn from_path(path: &Path) -> io::Result<Self> {
        let metadata = tokio::fs::metadata(path).await?;
        if !metadata.is_file() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("{} is not a regular file", path.display()),
            ));
        }

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "path has no file name"))?;
        let extension = path.extension().map(|e| e.to_string_lossy()).unwrap_or_default();

        let media_type = media_type_for_extension(&extension);
        debug!("Picked {} ({}, {})", name, media_type, format_bytes(metadata.len()));

        Ok(Self::new(name, media_type, metadata.len()))
    }
}

/// Upload intent for `file` into the currently selected folder.
#[must_use]
pub fn build_upload_request(file: &PickedFile, current: &FolderSelection) -> UploadRequest {
    UploadRequest {
        file_name: file.name.clone(),
        folder: current.upload_target().to_string(),
        file_type: classify_media_type(&file.media_type),
    }
}
