mod common;

use nexmo::{CallRequest, NexmoClient};
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

    let request = CallRequest::new(required("NEXMO_TO")?, required("NEXMO_ANSWER_URL")?);
    let response = client.call(request).await?;
    println!(
        "call_id: {:?}, status: {}, error: {:?}",
        response.call_id, response.status, response.error_text
    );

    Ok(())
}
