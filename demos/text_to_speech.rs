mod common;

use nexmo::{NexmoClient, TtsRequest};
use tracing_subscriber::EnvFilter;

use crate::common::{optional, required, timeout};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let client = NexmoClient::new(
        required("NEXMO_API_KEY")?,
        required("NEXMO_API_SECRET")?,
        timeout(),
    )?;

    let request = TtsRequest::new(
        required("NEXMO_TO")?,
        optional("NEXMO_FROM"),
        required("NEXMO_TEXT")?,
        optional("NEXMO_LANG"),
        optional("NEXMO_VOICE"),
    );
    let response = client.text_to_speech(request).await?;
    println!(
        "call_id: {:?}, status: {}, error: {:?}",
        response.call_id, response.status, response.error_text
    );

    Ok(())
}
