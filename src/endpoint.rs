//! Endpoint registry: which HTTP method and base URL serve each operation.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, LazyLock};

const SMS_BASE_URL: &str = "https://rest.nexmo.com/sms/json";
const CALL_BASE_URL: &str = "https://rest.nexmo.com/call/json";
const TTS_BASE_URL: &str = "https://api.nexmo.com/tts/json";

static DEFAULT_REGISTRY: LazyLock<Arc<EndpointRegistry>> =
    LazyLock::new(|| Arc::new(EndpointRegistry::nexmo()));

/// Operations supported by [`crate::NexmoClient`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    SendMessage,
    Call,
    TextToSpeech,
}

impl Operation {
    /// Registry key for this operation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::SendMessage => "sms",
            Self::Call => "call",
            Self::TextToSpeech => "tts",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

/// One registry entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    /// API reference page; used in diagnostics only.
    pub doc_url: String,
    pub method: HttpMethod,
    /// URL the encoded parameters are appended to as a query string.
    pub base_url: String,
}

impl Endpoint {
    pub fn new(method: HttpMethod, base_url: impl Into<String>) -> Self {
        Self {
            doc_url: String::new(),
            method,
            base_url: base_url.into(),
        }
    }

    pub fn with_doc_url(mut self, doc_url: impl Into<String>) -> Self {
        self.doc_url = doc_url.into();
        self
    }
}

/// Read-only mapping from operation name to [`Endpoint`].
///
/// Keys are plain strings so a lookup for a name that was never registered
/// can be reported instead of being ruled out by the type system.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EndpointRegistry {
    entries: HashMap<String, Endpoint>,
}

impl EndpointRegistry {
    /// A registry with no entries.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The production Nexmo endpoints.
    pub fn nexmo() -> Self {
        Self::empty()
            .insert(
                Operation::SendMessage.as_str(),
                Endpoint::new(HttpMethod::Get, SMS_BASE_URL)
                    .with_doc_url("https://docs.nexmo.com/messaging/sms-api/api-reference"),
            )
            .insert(
                Operation::Call.as_str(),
                Endpoint::new(HttpMethod::Post, CALL_BASE_URL)
                    .with_doc_url("https://docs.nexmo.com/voice/call"),
            )
            .insert(
                Operation::TextToSpeech.as_str(),
                Endpoint::new(HttpMethod::Post, TTS_BASE_URL)
                    .with_doc_url("https://docs.nexmo.com/voice/text-to-speech"),
            )
    }

    /// Shared handle to the process-wide [`EndpointRegistry::nexmo`] table.
    pub fn shared_default() -> Arc<Self> {
        Arc::clone(&DEFAULT_REGISTRY)
    }

    /// Add or replace the entry for `operation`.
    pub fn insert(mut self, operation: impl Into<String>, endpoint: Endpoint) -> Self {
        self.entries.insert(operation.into(), endpoint);
        self
    }

    /// Point every entry at `base_url`, appending each entry's path to the
    /// path of `base_url`.
    ///
    /// Useful for routing all traffic through a proxy or a local stub server:
    /// `http://proxy/nexmo` turns `https://rest.nexmo.com/sms/json` into
    /// `http://proxy/nexmo/sms/json`.
    pub fn with_base_url(mut self, base_url: &str) -> Result<Self, url::ParseError> {
        let base = url::Url::parse(base_url)?;
        let prefix = base.path().trim_end_matches('/');
        for endpoint in self.entries.values_mut() {
            let current = url::Url::parse(&endpoint.base_url)?;
            let mut rebased = base.clone();
            rebased.set_path(&format!("{prefix}{}", current.path()));
            endpoint.base_url = rebased.to_string();
        }
        Ok(self)
    }

    pub fn get(&self, operation: &str) -> Option<&Endpoint> {
        self.entries.get(operation)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
