mod common;

use nexmo::{NexmoClient, SmsRequest};
use tracing_subscriber::EnvFilter;

use crate::common::{required, timeout};

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

    let request = SmsRequest {
        client_ref: std::env::var("NEXMO_CLIENT_REF").ok(),
        ..SmsRequest::new(
            required("NEXMO_TO")?,
            required("NEXMO_FROM")?,
            std::env::var("NEXMO_TEXT").unwrap_or_else(|_| "Hello from the nexmo demo.".to_owned()),
        )
    };

    let response = client.send_sms(request).await?;
    tracing::info!(message_count = ?response.message_count, "message sent");
    for message in &response.messages {
        println!(
            "status: {} ({:?}), id: {:?}, price: {:?}, error: {:?}",
            message.status,
            message.status.known(),
            message.message_id,
            message.message_price,
            message.error_text
        );
    }

    Ok(())
}
