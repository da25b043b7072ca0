use serde::{Deserialize, Serialize};

use crate::FileKind;

/// Body of `POST /api/files/request-upload`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UploadRequest {
    pub file_name: String,
    pub folder: String,
    pub file_type: FileKind,
}

/// Upload metadata returned by the backend. Only `folder` is interpreted.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct UploadTicket {
    pub folder: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}
