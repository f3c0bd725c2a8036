use serde::Serialize;

/// Message encoding (`type`) for [`SmsRequest`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageType {
    #[default]
    Text,
    Binary,
    Wappush,
    Unicode,
    Vcal,
    Vcard,
}

/// Parameters for the message-send operation.
///
/// `from`, `to` and `text` are required; every other field is optional and
/// omitted from the request when unset or empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SmsRequest {
    pub from: String,
    pub to: String,
    pub text: String,
    #[serde(rename = "type")]
    pub message_type: Option<MessageType>,
    #[serde(rename = "status-report-req")]
    pub status_report: Option<bool>,
    #[serde(rename = "client-ref")]
    pub client_ref: Option<String>,
    pub vcard: Option<String>,
    pub vcal: Option<String>,
    pub callback: Option<String>,
    #[serde(rename = "message-class")]
    pub message_class: Option<String>,
    pub udh: Option<String>,
    #[serde(rename = "protocol-id")]
    pub protocol_id: Option<String>,
    pub body: Option<String>,
    pub title: Option<String>,
    pub url: Option<String>,
    pub validity: Option<String>,
}

impl SmsRequest {
    /// A request carrying only the required fields.
    pub fn new(to: impl Into<String>, from: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            to: to.into(),
            from: from.into(),
            text: text.into(),
            ..Default::default()
        }
    }
}

/// Parameters for the voice call operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CallRequest {
    pub to: String,
    pub answer_url: String,
    pub from: Option<String>,
    pub machine_detection: Option<String>,
    pub machine_timeout: Option<String>,
    pub answer_method: Option<String>,
    pub error_url: Option<String>,
    pub error_method: Option<String>,
    pub status_url: Option<String>,
    pub status_method: Option<String>,
}

impl CallRequest {
    pub fn new(to: impl Into<String>, answer_url: impl Into<String>) -> Self {
        Self {
            to: to.into(),
            answer_url: answer_url.into(),
            ..Default::default()
        }
    }
}

/// Parameters for the text-to-speech operation.
///
/// `lang` goes on the wire as `lg`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TtsRequest {
    pub to: String,
    pub from: String,
    pub text: String,
    #[serde(rename = "lg")]
    pub lang: String,
    pub voice: String,
    pub repeat: Option<u32>,
    pub machine_detection: Option<String>,
    pub machine_timeout: Option<String>,
    pub callback: Option<String>,
    pub callback_method: Option<String>,
}

impl TtsRequest {
    /// A request carrying the commonly used fields. Empty `from`, `lang` or
    /// `voice` values are left out of the request.
    pub fn new(
        to: impl Into<String>,
        from: impl Into<String>,
        text: impl Into<String>,
        lang: impl Into<String>,
        voice: impl Into<String>,
    ) -> Self {
        Self {
            to: to.into(),
            from: from.into(),
            text: text.into(),
            lang: lang.into(),
            voice: voice.into(),
            ..Default::default()
        }
    }
}
