//! Slack incoming-webhook payload

use crate::config::NotifierConfig;
use crate::error::NotifierResult;
use crate::message::{RESOURCE_STATUS, STACK_NAME, StatusFields, TIMESTAMP};
use crate::status::status_color;
use serde::Serialize;

/// Status message fields copied into the attachment, in message order
pub const ATTACHMENT_FIELDS: &[&str] = &[TIMESTAMP, STACK_NAME];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlackMessage {
    pub icon_emoji: String,
    pub username: String,
    pub text: String,
    pub attachments: Vec<Attachment>,
    pub channel: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Attachment {
    pub fallback: String,
    pub title: String,
    pub fields: Vec<AttachmentField>,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttachmentField {
    pub title: String,
    pub value: String,
    /// Sent as the string `"true"`, which webhook consumers accept as a flag
    pub short: &'static str,
}

impl Attachment {
    pub fn from_fields(fields: &StatusFields, fallback: &str) -> NotifierResult<Self> {
        let stack_name = fields.require(STACK_NAME)?;
        let status = fields.require(RESOURCE_STATUS)?;

        Ok(Self {
            fallback: fallback.to_string(),
            title: format!("Stack: {} has reached status {}", stack_name, status),
            fields: fields
                .iter()
                .filter(|(key, _)| ATTACHMENT_FIELDS.contains(key))
                .map(|(key, value)| AttachmentField {
                    title: key.to_string(),
                    value: value.to_string(),
                    short: "true",
                })
                .collect(),
            color: status_color(status).to_string(),
        })
    }
}

impl SlackMessage {
    pub fn for_stack_event(fields: &StatusFields, config: &NotifierConfig) -> NotifierResult<Self> {
        let attachment = Attachment::from_fields(fields, &config.text)?;
        Ok(Self {
            icon_emoji: config.icon_emoji.clone(),
            username: config.username.clone(),
            text: config.text.clone(),
            attachments: vec![attachment],
            channel: config.channel.clone(),
        })
    }
}
