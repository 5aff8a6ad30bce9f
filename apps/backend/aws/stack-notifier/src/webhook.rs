//! Outbound webhook delivery

use crate::config::NotifierConfig;
use crate::error::{DeliveryError, NotifierError, NotifierResult};
use crate::slack::SlackMessage;
use async_trait::async_trait;
use lambda_runtime::tracing;
use reqwest::header::CONTENT_TYPE;
use std::time::Duration;

/// Destination for composed messages. Exactly one attempt per call.
#[async_trait]
pub trait WebhookSink: Send + Sync {
    async fn deliver(&self, message: &SlackMessage) -> Result<(), DeliveryError>;
}

/// POSTs JSON to an incoming-webhook URL
#[derive(Debug, Clone)]
pub struct HttpWebhook {
    client: reqwest::Client,
    url: String,
    timeout: Duration,
}

impl HttpWebhook {
    pub fn new(url: impl Into<String>, timeout: Duration) -> NotifierResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| NotifierError::Configuration(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self::with_client(client, url, timeout))
    }

    /// `timeout` must match the one configured on `client`; it is only used for reporting.
    pub fn with_client(client: reqwest::Client, url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            client,
            url: url.into(),
            timeout,
        }
    }

    pub fn from_config(config: &NotifierConfig) -> NotifierResult<Self> {
        Self::new(config.webhook_url.clone(), config.timeout())
    }

    fn classify(&self, err: reqwest::Error) -> DeliveryError {
        if err.is_timeout() {
            DeliveryError::Timeout {
                timeout_ms: self.timeout.as_millis() as u64,
            }
        } else {
            DeliveryError::Transport(err)
        }
    }
}

#[async_trait]
impl WebhookSink for HttpWebhook {
    async fn deliver(&self, message: &SlackMessage) -> Result<(), DeliveryError> {
        let body = serde_json::to_vec(message)?;

        let response = self
            .client
            .post(&self.url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = %status, "Webhook rejected the message");
            return Err(DeliveryError::Status(status.as_u16()));
        }

        tracing::debug!(status = %status, "Webhook accepted the message");
        Ok(())
    }
}
