//! Domain layer: typed values and request/response models (no I/O).

mod request;
mod response;
mod validation;
mod value;

pub use request::{CallRequest, MessageType, SmsRequest, TtsRequest};
pub use response::{CallResponse, MessageReport, SmsResponse, TtsResponse};
pub use validation::ValidationError;
pub use value::{ApiKey, ApiSecret, KnownMessageStatus, MessageStatus};
