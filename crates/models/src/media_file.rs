use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse file category used by the storage backend.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Eq, Hash, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    Photo,
    Video,
    #[serde(other)]
    Document,
}

impl FileKind {
    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Photo => "🖼️",
            Self::Video => "🎥",
            Self::Document => "📄",
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Photo => "photo",
            Self::Video => "video",
            Self::Document => "document",
        }
    }
}

impl fmt::Display for FileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Display metadata of one stored file, as returned by `/api/files`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FileItem {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: FileKind,
    pub folder: String,
    pub created_at: String,
    pub size: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Folder {
    pub name: String,
    #[serde(default)]
    pub file_count: u64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FolderList {
    #[serde(default)]
    pub folders: Vec<Folder>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FileList {
    #[serde(default)]
    pub files: Vec<FileItem>,
}
