use serde::Deserialize;

use crate::domain::{MessageReport, MessageStatus, SmsResponse};
use crate::transport::scalar::{TransportScalar, non_empty};

#[derive(Debug, Clone, Deserialize)]
pub struct SmsJsonResponse {
    #[serde(default, rename = "message-count")]
    message_count: Option<TransportScalar>,
    #[serde(default)]
    messages: Vec<MessageJsonReport>,
}

#[derive(Debug, Clone, Deserialize)]
struct MessageJsonReport {
    #[serde(default)]
    status: Option<TransportScalar>,
    #[serde(default, rename = "message-id")]
    message_id: Option<String>,
    #[serde(default)]
    to: Option<String>,
    #[serde(default, rename = "client-ref")]
    client_ref: Option<String>,
    #[serde(default, rename = "remaining-balance")]
    remaining_balance: Option<TransportScalar>,
    #[serde(default, rename = "message-price")]
    message_price: Option<TransportScalar>,
    #[serde(default)]
    network: Option<String>,
    #[serde(default, rename = "error-text")]
    error_text: Option<String>,
}

impl From<SmsJsonResponse> for SmsResponse {
    fn from(value: SmsJsonResponse) -> Self {
        Self {
            message_count: non_empty(value.message_count),
            messages: value.messages.into_iter().map(MessageReport::from).collect(),
        }
    }
}

impl From<MessageJsonReport> for MessageReport {
    fn from(value: MessageJsonReport) -> Self {
        Self {
            status: MessageStatus::new(non_empty(value.status).unwrap_or_default()),
            message_id: value.message_id,
            to: value.to,
            client_ref: value.client_ref,
            remaining_balance: non_empty(value.remaining_balance),
            message_price: non_empty(value.message_price),
            network: value.network,
            error_text: value.error_text,
        }
    }
}
