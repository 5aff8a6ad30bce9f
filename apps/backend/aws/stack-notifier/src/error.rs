//! Error types for the stack notifier

use thiserror::Error;

/// Result type for notifier operations
pub type NotifierResult<T> = Result<T, NotifierError>;

/// Errors that terminate a notifier invocation (or startup)
#[derive(Debug, Error)]
pub enum NotifierError {
    /// The SNS envelope does not have the `Records[0].Sns.Message` path
    #[error("Malformed event: {0}")]
    MalformedEvent(String),

    /// The embedded status message could not be decoded into fields
    #[error("Malformed payload: {0}")]
    MalformedPayload(String),

    /// The webhook POST failed
    #[error("Delivery failed: {0}")]
    Delivery(#[from] DeliveryError),

    /// A required setting is missing or invalid at startup
    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Classified failure of the outbound webhook request
#[derive(Debug, Error)]
pub enum DeliveryError {
    #[error("webhook request timed out after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    #[error("webhook transport error: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("webhook responded with status {0}")]
    Status(u16),

    #[error("failed to serialize webhook payload: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl NotifierError {
    /// Short machine-friendly name used as a log field
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MalformedEvent(_) => "malformed_event",
            Self::MalformedPayload(_) => "malformed_payload",
            Self::Delivery(_) => "delivery",
            Self::Configuration(_) => "configuration",
        }
    }
}
