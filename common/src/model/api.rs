use serde::{Deserialize, Serialize};

/// Confirmation body returned by a successful CSV upload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadAck {
    pub message: String,
}

/// Structured error body. Every failing response carries one of these;
/// no error leaves the HTTP layer as a bare string.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub detail: String,
}
