mod media_file;
mod state;
mod statistics;
mod upload;

pub use media_file::{FileItem, FileKind, FileList, Folder, FolderList};
pub use state::{
    ALL_FILES, Alert, AlertKind, DEFAULT_UPLOAD_FOLDER, FolderEntry, FolderSelection, InputMode, UiState, ViewState,
};
pub use statistics::Stats;
pub use upload::{UploadRequest, UploadTicket};
