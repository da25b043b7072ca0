use std::fmt;

use crate::{FileItem, Folder, Stats};

/// Label of the synthetic folder that lists every file.
pub const ALL_FILES: &str = "All Files";

/// Folder that receives uploads made while "All Files" is selected.
pub const DEFAULT_UPLOAD_FOLDER: &str = "General";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FolderSelection {
    #[default]
    AllFiles,
    Named(String),
}

impl FolderSelection {
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        if name == ALL_FILES {
            Self::AllFiles
        } else {
            Self::Named(name.to_string())
        }
    }

    /// Value of the `folder` query parameter, if any.
    #[must_use]
    pub fn filter(&self) -> Option<&str> {
        match self {
            Self::AllFiles => None,
            Self::Named(name) => Some(name.as_str()),
        }
    }

    #[must_use]
    pub fn upload_target(&self) -> &str {
        match self {
            Self::AllFiles => DEFAULT_UPLOAD_FOLDER,
            Self::Named(name) => name.as_str(),
        }
    }

    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::AllFiles => ALL_FILES,
            Self::Named(name) => name.as_str(),
        }
    }
}

impl fmt::Display for FolderSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One card of the folder grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FolderEntry<'a> {
    AllFiles,
    Folder(&'a Folder),
    NewFolder,
}

impl FolderEntry<'_> {
    #[must_use]
    pub fn selection(&self) -> Option<FolderSelection> {
        match self {
            Self::AllFiles => Some(FolderSelection::AllFiles),
            Self::Folder(folder) => Some(FolderSelection::from_name(&folder.name)),
            Self::NewFolder => None,
        }
    }
}

/// Everything fetched from the backend plus the selected folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub loading: bool,
    pub stats: Stats,
    pub folders: Vec<Folder>,
    pub files: Vec<FileItem>,
    pub current_folder: FolderSelection,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            loading: true,
            stats: Stats::default(),
            folders: Vec::new(),
            files: Vec::new(),
            current_folder: FolderSelection::AllFiles,
        }
    }
}

impl ViewState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All Files, then the known folders in server order, then New Folder.
    #[must_use]
    pub fn folder_entries(&self) -> Vec<FolderEntry<'_>> {
        let mut entries = Vec::with_capacity(self.folders.len() + 2);
        entries.push(FolderEntry::AllFiles);
        entries.extend(self.folders.iter().map(FolderEntry::Folder));
        entries.push(FolderEntry::NewFolder);
        entries
    }

    #[must_use]
    pub fn is_current(&self, entry: &FolderEntry<'_>) -> bool {
        entry.selection().as_ref() == Some(&self.current_folder)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    Editing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Info,
    Error,
}

/// A message the user has to acknowledge before doing anything else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub kind: AlertKind,
    pub message: String,
}

impl Alert {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            kind: AlertKind::Info,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: AlertKind::Error,
            message: message.into(),
        }
    }
}

/// Terminal interaction state that has no backend counterpart.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UiState {
    pub input_mode: InputMode,
    pub input_buffer: String,
    pub folder_cursor: usize,
    pub file_scroll: usize,
    pub alert: Option<Alert>,
    pub show_help: bool,
}
