use async_trait::async_trait;
use reqwest::RequestBuilder;
use reqwest::header::HeaderValue;
use serde::de::DeserializeOwned;
use tgcloud_config::{HostContext, Settings};
use tgcloud_models::{FileItem, FileList, Folder, FolderList, Stats, UploadRequest, UploadTicket};
use tracing::{debug, warn};

use crate::ApiError;

/// Header carrying the host's raw init data on every request.
pub const INIT_DATA_HEADER: &str = "X-Telegram-Init-Data";

const PROFILE_PATH: &str = "/api/user/profile";
const FOLDERS_PATH: &str = "/api/folders";
const FILES_PATH: &str = "/api/files";
const REQUEST_UPLOAD_PATH: &str = "/api/files/request-upload";

/// Backend operations the view depends on.
#[async_trait]
pub trait StorageApi: Send + Sync {
    async fn profile(&self) -> Result<Stats, ApiError>;
    async fn folders(&self) -> Result<Vec<Folder>, ApiError>;
    /// Lists files, restricted to `folder` when given.
    async fn files(&self, folder: Option<&str>) -> Result<Vec<FileItem>, ApiError>;
    async fn request_upload(&self, request: &UploadRequest) -> Result<UploadTicket, ApiError>;
}

/// `StorageApi` over HTTP. Construct once and share.
#[derive(Debug, Clone)]
pub struct HttpStorageApi {
    client: reqwest::Client,
    base_url: String,
    init_data: HeaderValue,
}

impl HttpStorageApi {
    /// # Errors
    /// Returns an error if the init data is not a valid header value or the
    /// HTTP client cannot be built.
    pub fn new(base_url: &str, host: &HostContext) -> Result<Self, ApiError> {
        let init_data = HeaderValue::from_str(&host.init_data_raw).map_err(|_| ApiError::InvalidInitData)?;
        let client = reqwest::Client::builder().build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            init_data,
        })
    }

    /// # Errors
    /// See [`HttpStorageApi::new`].
    pub fn from_settings(settings: &Settings) -> Result<Self, ApiError> {
        Self::new(&settings.api_base_url, &HostContext::from(settings))
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn get(&self, path: &str) -> RequestBuilder {
        self.client
            .get(self.url(path))
            .header(INIT_DATA_HEADER, self.init_data.clone())
    }

    #[must_use]
    pub fn profile_request(&self) -> RequestBuilder {
        self.get(PROFILE_PATH)
    }

    #[must_use]
    pub fn folders_request(&self) -> RequestBuilder {
        self.get(FOLDERS_PATH)
    }

    #[must_use]
    pub fn files_request(&self, folder: Option<&str>) -> RequestBuilder {
        let request = self.get(FILES_PATH);
        match folder {
            Some(folder) => request.query(&[("folder", folder)]),
            None => request,
        }
    }

    #[must_use]
    pub fn upload_request(&self, request: &UploadRequest) -> RequestBuilder {
        self.client
            .post(self.url(REQUEST_UPLOAD_PATH))
            .header(INIT_DATA_HEADER, self.init_data.clone())
            .json(request)
    }

    async fn send<T: DeserializeOwned>(&self, endpoint: &str, request: RequestBuilder) -> Result<T, ApiError> {
        let response = request.send().await?;
        let status = response.status();
        debug!("{} -> {}", endpoint, status);

        if !status.is_success() {
            warn!("{} failed with {}", endpoint, status);
            return Err(ApiError::status(endpoint, status));
        }

        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl StorageApi for HttpStorageApi {
    async fn profile(&self) -> Result<Stats, ApiError> {
        self.send(PROFILE_PATH, self.profile_request()).await
    }

    async fn folders(&self) -> Result<Vec<Folder>, ApiError> {
        let list: FolderList = self.send(FOLDERS_PATH, self.folders_request()).await?;
        Ok(list.folders)
    }

    async fn files(&self, folder: Option<&str>) -> Result<Vec<FileItem>, ApiError> {
        let list: FileList = self.send(FILES_PATH, self.files_request(folder)).await?;
        Ok(list.files)
    }

    async fn request_upload(&self, request: &UploadRequest) -> Result<UploadTicket, ApiError> {
        self.send(REQUEST_UPLOAD_PATH, self.upload_request(request)).await
    }
}
