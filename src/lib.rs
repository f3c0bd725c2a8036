//! Typed Rust client for the Nexmo SMS, voice call and text-to-speech HTTP API.
//!
//! The crate is split into a domain layer of request/response models and
//! typed values, a transport layer for wire-format quirks, an endpoint
//! registry, and a small client layer that dispatches every operation
//! through one generic request path.
//!
//! ```rust,no_run
//! use std::time::Duration;
//!
//! use nexmo::{NexmoClient, SmsRequest};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), nexmo::NexmoError> {
//!     let client = NexmoClient::new("api-key", "api-secret", Duration::from_secs(10))?;
//!     let request = SmsRequest::new("5215522334455", "nexmotest", "Hi nexmo test");
//!     let response = client.send_sms(request).await?;
//!     for message in response.failed() {
//!         eprintln!("{:?}: {:?}", message.status.known(), message.error_text);
//!     }
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
pub mod endpoint;
mod transport;

pub use client::{Credentials, NexmoClient, NexmoClientBuilder, NexmoError};
pub use domain::{
    ApiKey, ApiSecret, CallRequest, CallResponse, KnownMessageStatus, MessageReport,
    MessageStatus, MessageType, SmsRequest, SmsResponse, TtsRequest, TtsResponse,
    ValidationError,
};
pub use endpoint::{Endpoint, EndpointRegistry, HttpMethod, Operation};
