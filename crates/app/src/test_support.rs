#![allow(clippy::unwrap_used)]
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tgcloud_core::{ApiError, StatusCode, StorageApi};
use tgcloud_models::{FileItem, FileKind, Folder, Stats, UploadRequest, UploadTicket};

/// In-memory backend. Anything not scripted fails with a 500.
#[derive(Default)]
pub struct ScriptedApi {
    script: Mutex<Script>,
}

#[derive(Default)]
struct Script {
    profile: Option<Stats>,
    folders: Option<Vec<Folder>>,
    files: Option<Vec<FileItem>>,
    upload_folder: Option<String>,
    file_requests: Vec<Option<String>>,
    upload_requests: Vec<UploadRequest>,
}

impl ScriptedApi {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn with_profile(self: Arc<Self>, stats: Stats) -> Arc<Self> {
        self.script.lock().unwrap().profile = Some(stats);
        self
    }

    pub fn with_folders(self: Arc<Self>, folders: Vec<Folder>) -> Arc<Self> {
        self.script.lock().unwrap().folders = Some(folders);
        self
    }

    pub fn with_files(self: Arc<Self>, files: Vec<FileItem>) -> Arc<Self> {
        self.script.lock().unwrap().files = Some(files);
        self
    }

    pub fn with_upload_folder(self: Arc<Self>, folder: &str) -> Arc<Self> {
        self.script.lock().unwrap().upload_folder = Some(folder.to_string());
        self
    }

    pub fn fail_files(&self) {
        self.script.lock().unwrap().files = None;
    }

    pub fn file_requests(&self) -> Vec<Option<String>> {
        self.script.lock().unwrap().file_requests.clone()
    }

    pub fn upload_requests(&self) -> Vec<UploadRequest> {
        self.script.lock().unwrap().upload_requests.clone()
    }
}

fn unavailable(endpoint: &str) -> ApiError {
    ApiError::status(endpoint, StatusCode::INTERNAL_SERVER_ERROR)
}

#[async_trait]
impl StorageApi for ScriptedApi {
    async fn profile(&self) -> Result<Stats, ApiError> {
        self.script.lock().unwrap().profile.ok_or_else(|| unavailable("/api/user/profile"))
    }

    async fn folders(&self) -> Result<Vec<Folder>, ApiError> {
        self.script
            .lock()
            .unwrap()
            .folders
            .clone()
            .ok_or_else(|| unavailable("/api/folders"))
    }

    async fn files(&self, folder: Option<&str>) -> Result<Vec<FileItem>, ApiError> {
        let mut script = self.script.lock().unwrap();
        script.file_requests.push(folder.map(str::to_string));
        script.files.clone().ok_or_else(|| unavailable("/api/files"))
    }

    async fn request_upload(&self, request: &UploadRequest) -> Result<UploadTicket, ApiError> {
        let mut script = self.script.lock().unwrap();
        script.upload_requests.push(request.clone());
        script
            .upload_folder
            .clone()
            .map(|folder| UploadTicket {
                folder,
                extra: Default::default(),
            })
            .ok_or_else(|| unavailable("/api/files/request-upload"))
    }
}

pub fn folder(name: &str, file_count: u64) -> Folder {
    Folder {
        name: name.to_string(),
        file_count,
    }
}

pub fn file(name: &str, kind: FileKind) -> FileItem {
    FileItem {
        name: name.to_string(),
        kind,
        folder: "General".to_string(),
        created_at: "2024-01-15T10:30:00".to_string(),
        size: "1.2 MB".to_string(),
    }
}
