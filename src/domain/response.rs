use crate::domain::value::MessageStatus;

/// Result of the message-send operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SmsResponse {
    /// Number of message parts Nexmo created for the request.
    pub message_count: Option<String>,
    /// One report per message part, in the order returned by Nexmo.
    pub messages: Vec<MessageReport>,
}

impl SmsResponse {
    /// Reports whose status is anything other than `"0"`.
    pub fn failed(&self) -> impl Iterator<Item = &MessageReport> {
        self.messages.iter().filter(|it| !it.status.is_success())
    }

    /// `true` when every report has status `"0"`.
    pub fn all_delivered(&self) -> bool {
        !self.messages.is_empty() && self.failed().next().is_none()
    }
}

/// Delivery record for a single message part.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageReport {
    pub status: MessageStatus,
    pub message_id: Option<String>,
    pub to: Option<String>,
    pub client_ref: Option<String>,
    pub remaining_balance: Option<String>,
    pub message_price: Option<String>,
    pub network: Option<String>,
    pub error_text: Option<String>,
}

/// Result of the voice call operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallResponse {
    pub call_id: Option<String>,
    pub to: Option<String>,
    pub status: i32,
    pub error_text: Option<String>,
}

/// Result of the text-to-speech operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TtsResponse {
    pub call_id: Option<String>,
    pub to: Option<String>,
    pub status: String,
    pub error_text: Option<String>,
}
