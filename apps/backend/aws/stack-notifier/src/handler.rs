//! SNS event → Slack notification pipeline

use crate::config::NotifierConfig;
use crate::envelope::SnsNotification;
use crate::error::NotifierResult;
use crate::message::{RESOURCE_STATUS, RESOURCE_TYPE, STACK_NAME, StatusFields};
use crate::slack::SlackMessage;
use crate::webhook::WebhookSink;
use lambda_runtime::tracing::{self, instrument};
use serde::Serialize;

pub const NOTIFIED_MESSAGE: &str = "Notified";

/// Result of a successful invocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Outcome {
    /// The message was accepted by the webhook
    Notified { message: String },
    /// The event was about a resource inside the stack, nothing was sent
    Skipped { resource_type: String },
}

pub struct NotificationHandler<S: WebhookSink> {
    config: NotifierConfig,
    sink: S,
}

impl<S: WebhookSink> NotificationHandler<S> {
    pub fn new(config: NotifierConfig, sink: S) -> Self {
        Self { config, sink }
    }

    pub fn config(&self) -> &NotifierConfig {
        &self.config
    }

    #[instrument(skip_all, fields(message_id, topic_arn, stack_name, resource_status))]
    pub async fn handle(&self, event: serde_json::Value) -> NotifierResult<Outcome> {
        let result = self.process(event).await;
        if let Err(e) = &result {
            tracing::error!(kind = e.kind(), error = %e, "Failed to process stack event");
        }
        result
    }

    async fn process(&self, event: serde_json::Value) -> NotifierResult<Outcome> {
        let notification = SnsNotification::from_event(&event)?;
        let span = tracing::Span::current();
        if let Some(message_id) = notification.message_id {
            span.record("message_id", message_id);
        }
        if let Some(topic_arn) = notification.topic_arn {
            span.record("topic_arn", topic_arn);
        }

        let fields = StatusFields::decode(notification.message)?;

        if !fields.is_stack_event()? {
            let resource_type = fields.require(RESOURCE_TYPE)?.to_string();
            tracing::debug!(resource_type = %resource_type, "Ignoring resource level event");
            return Ok(Outcome::Skipped { resource_type });
        }

        span.record("stack_name", fields.require(STACK_NAME)?)
            .record("resource_status", fields.require(RESOURCE_STATUS)?);

        let message = SlackMessage::for_stack_event(&fields, &self.config)?;
        self.sink.deliver(&message).await?;

        tracing::info!("Stack status notification sent");
        Ok(Outcome::Notified {
            message: NOTIFIED_MESSAGE.to_string(),
        })
    }
}
