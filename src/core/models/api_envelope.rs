use serde::Deserialize;

use crate::core::models::log_entry::LogEntry;

/// Response envelope shared by every gateway API endpoint.
#[derive(Debug, Deserialize)]
pub struct ApiEnvelope {
    /// Whether the server accepted the request.
    pub success: bool,
    /// Error text when `success` is false; usually empty otherwise.
    #[serde(default)]
    pub message: String,
    /// Result rows. The server sends `null` for an empty result.
    #[serde(default)]
    pub data: Option<Vec<LogEntry>>,
}

impl ApiEnvelope {
    /// Split into the rows or the rejection message.
    pub fn into_result(self) -> std::result::Result<Vec<LogEntry>, String> {
        if self.success {
            Ok(self.data.unwrap_or_default())
        } else if self.message.is_empty() {
            Err("request was not successful".to_string())
        } else {
            Err(self.message)
        }
    }
}
