use crate::error::{NotifierError, NotifierResult};
use std::time::Duration;

pub const WEBHOOK_URL_VAR: &str = "SLACK_WEB_HOOK_URL";
pub const CHANNEL_VAR: &str = "SLACK_CHANNEL";
pub const TEXT_VAR: &str = "SLACK_MSG_TEXT";
pub const USERNAME_VAR: &str = "SLACK_MSG_USER";
pub const ICON_VAR: &str = "SLACK_MSG_EMOJI";
pub const TIMEOUT_VAR: &str = "WEBHOOK_TIMEOUT_MS";

fn default_timeout_ms() -> u64 {
    10_000
}

/// Settings read once at cold start and shared by every invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotifierConfig {
    /// Incoming webhook the message is posted to
    pub webhook_url: String,
    /// Channel the message is posted in
    pub channel: String,
    /// Message text, also used as the attachment fallback
    pub text: String,
    /// Display name of the posting user
    pub username: String,
    /// Emoji shown as the posting user's icon
    pub icon_emoji: String,
    /// Upper bound for the webhook request (milliseconds)
    pub timeout_ms: u64,
}

impl NotifierConfig {
    pub fn from_env() -> NotifierResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from any key lookup, so tests don't touch the process environment
    pub fn from_lookup<F>(lookup: F) -> NotifierResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| -> NotifierResult<String> {
            lookup(key)
                .filter(|value| !value.trim().is_empty())
                .ok_or_else(|| NotifierError::Configuration(format!("{} not set", key)))
        };

        let timeout_ms = match lookup(TIMEOUT_VAR).filter(|v| !v.trim().is_empty()) {
            Some(raw) => raw.trim().parse::<u64>().ok().filter(|ms| *ms > 0).ok_or_else(|| {
                NotifierError::Configuration(format!(
                    "{} must be a positive integer, got {:?}",
                    TIMEOUT_VAR, raw
                ))
            })?,
            None => default_timeout_ms(),
        };

        Ok(Self {
            webhook_url: required(WEBHOOK_URL_VAR)?,
            channel: required(CHANNEL_VAR)?,
            text: required(TEXT_VAR)?,
            username: required(USERNAME_VAR)?,
            icon_emoji: required(ICON_VAR)?,
            timeout_ms,
        })
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}
