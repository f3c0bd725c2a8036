use serde::Deserialize;

use crate::domain::TtsResponse;

#[derive(Debug, Clone, Deserialize)]
pub struct TtsJsonResponse {
    #[serde(default)]
    call_id: Option<String>,
    #[serde(default)]
    to: Option<String>,
    #[serde(default)]
    status: String,
    #[serde(default)]
    error_text: Option<String>,
}

impl From<TtsJsonResponse> for TtsResponse {
    fn from(value: TtsJsonResponse) -> Self {
        Self {
            call_id: value.call_id,
            to: value.to,
            status: value.status,
            error_text: value.error_text.filter(|it| !it.is_empty()),
        }
    }
}
