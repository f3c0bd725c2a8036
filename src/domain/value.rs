use std::fmt;

use crate::domain::validation::ValidationError;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Nexmo API key (`api_key`).
///
/// Invariant: non-empty. The value is stored exactly as provided.
pub struct ApiKey(String);

impl ApiKey {
    /// Query parameter name used by Nexmo (`api_key`).
    pub const FIELD: &'static str = "api_key";

    /// Create a validated [`ApiKey`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Borrow the validated key.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Clone, PartialEq, Eq, Hash)]
/// Nexmo API secret (`api_secret`).
///
/// Invariant: must not be empty (whitespace is preserved and allowed).
/// `Debug` output is redacted.
pub struct ApiSecret(String);

impl ApiSecret {
    /// Query parameter name used by Nexmo (`api_secret`).
    pub const FIELD: &'static str = "api_secret";

    /// Create a validated [`ApiSecret`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Borrow the secret as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiSecret(<redacted>)")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
/// Per-recipient delivery status returned by the message-send operation.
///
/// The wire value is a decimal string (`"0"` on success). It is preserved
/// as-is even when the code is unknown to this crate.
pub struct MessageStatus(String);

impl MessageStatus {
    /// Construct a status from its wire representation.
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Borrow the code as provided by Nexmo.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Map this code to a known status variant, if one exists.
    pub fn known(&self) -> Option<KnownMessageStatus> {
        KnownMessageStatus::from_code(&self.0)
    }

    /// Only `"0"` means the message was accepted for delivery.
    pub fn is_success(&self) -> bool {
        self.known() == Some(KnownMessageStatus::Delivered)
    }

    /// Returns `true` for temporary failures where sending again later may succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self.known(), Some(kind) if kind.is_retryable())
    }

    /// Returns `true` when the recipient number should be dropped from the sender's records.
    pub fn should_remove_recipient(&self) -> bool {
        matches!(self.known(), Some(kind) if kind.should_remove_recipient())
    }
}

impl fmt::Display for MessageStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
/// Known message-send status codes.
///
/// Unknown codes are preserved in [`MessageStatus`] and return `None` from
/// [`KnownMessageStatus::from_code`].
pub enum KnownMessageStatus {
    /// `0`: accepted for delivery.
    Delivered,
    /// `1`: unknown error from the carrier, or the recipient is unknown.
    Unknown,
    /// `2`: recipient temporarily unavailable (out of coverage, switched off).
    AbsentSubscriberTemporary,
    /// `3`: recipient number is no longer active.
    AbsentSubscriberPermanent,
    /// `4`: recipient barred incoming messages.
    CallBarredByUser,
    /// `5`: issue after the recipient changed carrier.
    PortabilityError,
    /// `6`: carrier anti-spam filter rejected the message.
    AntiSpamRejection,
    /// `7`: handset busy.
    HandsetBusy,
    /// `8`: network failure while sending.
    NetworkError,
    /// `9`: recipient opted out.
    IllegalNumber,
    /// `10`: one of the message parameters was incorrect.
    InvalidMessage,
    /// `11`: no route available for the recipient.
    Unroutable,
    /// `12`: destination unreachable.
    DestinationUnreachable,
    /// `13`: blocked due to subscriber age restriction.
    SubscriberAgeRestriction,
    /// `14`: blocked by the recipient's carrier.
    NumberBlockedByCarrier,
    /// `15`: recipient's pre-paid account has insufficient funds.
    PrePaidInsufficientFunds,
    /// `99`: general routing error.
    GeneralError,
}

impl KnownMessageStatus {
    /// Convert a wire status code into a known variant.
    pub fn from_code(code: &str) -> Option<Self> {
        Some(match code.trim() {
            "0" => Self::Delivered,
            "1" => Self::Unknown,
            "2" => Self::AbsentSubscriberTemporary,
            "3" => Self::AbsentSubscriberPermanent,
            "4" => Self::CallBarredByUser,
            "5" => Self::PortabilityError,
            "6" => Self::AntiSpamRejection,
            "7" => Self::HandsetBusy,
            "8" => Self::NetworkError,
            "9" => Self::IllegalNumber,
            "10" => Self::InvalidMessage,
            "11" => Self::Unroutable,
            "12" => Self::DestinationUnreachable,
            "13" => Self::SubscriberAgeRestriction,
            "14" => Self::NumberBlockedByCarrier,
            "15" => Self::PrePaidInsufficientFunds,
            "99" => Self::GeneralError,
            _ => return None,
        })
    }

    /// The wire code for this variant.
    pub fn code(self) -> &'static str {
        match self {
            Self::Delivered => "0",
            Self::Unknown => "1",
            Self::AbsentSubscriberTemporary => "2",
            Self::AbsentSubscriberPermanent => "3",
            Self::CallBarredByUser => "4",
            Self::PortabilityError => "5",
            Self::AntiSpamRejection => "6",
            Self::HandsetBusy => "7",
            Self::NetworkError => "8",
            Self::IllegalNumber => "9",
            Self::InvalidMessage => "10",
            Self::Unroutable => "11",
            Self::DestinationUnreachable => "12",
            Self::SubscriberAgeRestriction => "13",
            Self::NumberBlockedByCarrier => "14",
            Self::PrePaidInsufficientFunds => "15",
            Self::GeneralError => "99",
        }
    }

    /// Whether this status is a temporary failure.
    pub fn is_retryable(self) -> bool {
        matches!(
            self,
            Self::AbsentSubscriberTemporary | Self::HandsetBusy | Self::NetworkError
        )
    }

    /// Whether the recipient is permanently unreachable.
    pub fn should_remove_recipient(self) -> bool {
        matches!(
            self,
            Self::AbsentSubscriberPermanent | Self::CallBarredByUser
        )
    }
}
