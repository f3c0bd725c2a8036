use std::io;
use std::time::Duration;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

pub fn required(name: &str) -> Result<String, io::Error> {
    std::env::var(name).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{name} environment variable is required"),
        )
    })
}

#[allow(dead_code)]
pub fn optional(name: &str) -> String {
    std::env::var(name).unwrap_or_default()
}

/// Request timeout from `NEXMO_TIMEOUT_SECS`, 10 seconds when unset or invalid.
pub fn timeout() -> Duration {
    parse_timeout(std::env::var("NEXMO_TIMEOUT_SECS").ok().as_deref())
}

fn parse_timeout(value: Option<&str>) -> Duration {
    value
        .and_then(|it| it.trim().parse().ok())
        .map(Duration::from_secs)
        .unwrap_or(DEFAULT_TIMEOUT)
}
