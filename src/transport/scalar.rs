use serde::Deserialize;
use serde::de::{Error as DeError, Unexpected};
use serde_json::value::RawValue;

/// `message-count`, `status`, `remaining-balance` and `message-price` arrive
/// as JSON strings from the live API and as numbers from some gateways.
/// Number tokens are kept verbatim so `0.03330000` is not reformatted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportScalar(String);

impl TransportScalar {
    pub fn into_string(self) -> String {
        self.0
    }
}

impl<'de> Deserialize<'de> for TransportScalar {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = Box::<RawValue>::deserialize(deserializer)?;
        let token = raw.get().trim();

        if token.starts_with('"') {
            return serde_json::from_str::<String>(token)
                .map(Self)
                .map_err(D::Error::custom);
        }
        if token.parse::<f64>().is_ok() {
            return Ok(Self(token.to_owned()));
        }
        Err(D::Error::invalid_type(
            Unexpected::Other(token),
            &"a scalar string or number",
        ))
    }
}

/// `None` for a missing field, JSON `null` or an empty string.
pub fn non_empty(value: Option<TransportScalar>) -> Option<String> {
    value
        .map(TransportScalar::into_string)
        .filter(|it| !it.is_empty())
}
