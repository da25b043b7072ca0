use std::path::Path;

use tgcloud_core::{PickedFile, build_upload_request};
use tgcloud_models::{Alert, FolderEntry, FolderSelection};
use tracing::{debug, error, info};

use super::App;

impl App {
    /// Initial load: profile and folders concurrently, then the unfiltered
    /// file list once both arrived. Clears `loading` once done, whatever
    /// failed.
    pub async fn bootstrap(&mut self) {
        self.view.loading = true;

        let (profile, folders) = tokio::join!(self.api.profile(), self.api.folders());
        let mut complete = true;

        match profile {
            Ok(stats) => self.view.stats = stats,
            Err(e) => {
                error!("Failed to fetch profile: {}", e);
                complete = false;
            }
        }
        match folders {
            Ok(folders) => {
                info!("Loaded {} folders", folders.len());
                self.view.folders = folders;
            }
            Err(e) => {
                error!("Failed to fetch folders: {}", e);
                complete = false;
            }
        }

        if complete {
            self.fetch_files(&FolderSelection::AllFiles).await;
        } else {
            debug!("Skipping initial file list after a failed bootstrap request");
        }

        self.view.loading = false;
        self.clamp_folder_cursor();
    }

    /// Replaces the file list with the backend's view of `selection`. On
    /// failure the previous list stays.
    pub async fn fetch_files(&mut self, selection: &FolderSelection) {
        match self.api.files(selection.filter()).await {
            Ok(files) => {
                debug!("Loaded {} files for {}", files.len(), selection);
                self.view.files = files;
                self.ui.file_scroll = 0;
            }
            Err(e) => error!("Failed to fetch files for {}: {}", selection, e),
        }
    }

    /// Makes `selection` current and loads its files. The name is not
    /// checked against the known folders.
    pub async fn select_folder(&mut self, selection: FolderSelection) {
        info!("Switching to folder {}", selection);
        self.view.current_folder = selection.clone();
        self.fetch_files(&selection).await;
    }

    /// Reloads the files of the current folder.
    pub async fn refresh(&mut self) {
        let current = self.view.current_folder.clone();
        self.fetch_files(&current).await;
    }

    /// Applies the folder-grid entry under the cursor.
    pub async fn activate_entry(&mut self) {
        let selection = match self.view.folder_entries().get(self.ui.folder_cursor) {
            Some(FolderEntry::NewFolder) => {
                debug!("New Folder has no action");
                None
            }
            Some(entry) => entry.selection(),
            None => None,
        };

        if let Some(selection) = selection {
            self.select_folder(selection).await;
        }
    }

    /// Asks the backend for upload metadata. The file's bytes are not sent.
    pub async fn upload_file(&mut self, file: &PickedFile) {
        let request = build_upload_request(file, &self.view.current_folder);
        info!(
            "Requesting upload of {} ({}) into {}",
            request.file_name, request.file_type, request.folder
        );

        match self.api.request_upload(&request).await {
            Ok(ticket) => {
                self.ui.alert = Some(Alert::info(format!(
                    "Ready to upload {} to {}",
                    file.name, ticket.folder
                )));
                self.refresh().await;
            }
            Err(e) => {
                error!("Upload failed: {}", e);
                self.ui.alert = Some(Alert::error("Upload failed. Please try again."));
            }
        }
    }

    /// Resolves `path` to a local file and starts the upload request.
    pub async fn upload_path(&mut self, path: &Path) {
        match PickedFile::from_path(path).await {
            Ok(file) => self.upload_file(&file).await,
            Err(e) => {
                error!("Cannot upload {:?}: {}", path, e);
                self.ui.alert = Some(Alert::error(format!("Cannot read {}: {e}", path.display())));
            }
        }
    }
}
