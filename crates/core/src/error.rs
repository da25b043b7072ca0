use reqwest::StatusCode;

/// Failure of a single backend call.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Connection, body or decoding failure reported by the HTTP client
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The backend answered with a non-success status
    #[error("{endpoint} returned {status}")]
    Status { endpoint: String, status: StatusCode },

    /// Init data cannot be sent as a header value
    #[error("init data contains characters not allowed in a header")]
    InvalidInitData,
}

impl ApiError {
    pub fn status(endpoint: impl Into<String>, status: StatusCode) -> Self {
        Self::Status {
            endpoint: endpoint.into(),
            status,
        }
    }
}
