use serde::Deserialize;

use crate::domain::CallResponse;

#[derive(Debug, Clone, Deserialize)]
pub struct CallJsonResponse {
    #[serde(default, rename = "call-id")]
    call_id: Option<String>,
    #[serde(default)]
    to: Option<String>,
    #[serde(default)]
    status: i32,
    #[serde(default, rename = "error-text")]
    error_text: Option<String>,
}

impl From<CallJsonResponse> for CallResponse {
    fn from(value: CallJsonResponse) -> Self {
        Self {
            call_id: value.call_id,
            to: value.to,
            status: value.status,
            error_text: value.error_text.filter(|it| !it.is_empty()),
        }
    }
}
