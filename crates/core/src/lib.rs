mod api;
mod error;
mod upload;

pub use api::{HttpStorageApi, INIT_DATA_HEADER, StorageApi};
pub use error::ApiError;
pub use reqwest::StatusCode;
pub use upload::{PickedFile, build_upload_request};
