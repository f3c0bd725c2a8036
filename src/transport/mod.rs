//! Transport layer: parameter encoding and wire-format details.

mod call;
mod params;
mod scalar;
mod sms;
mod tts;

pub use call::CallJsonResponse;
pub use params::encode_params;
pub use sms::SmsJsonResponse;
pub use tts::TtsJsonResponse;
