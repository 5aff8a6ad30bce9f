//! Lambda that forwards CloudFormation stack status events from SNS to a
//! Slack-compatible incoming webhook.

pub mod config;
pub mod envelope;
pub mod error;
pub mod handler;
pub mod message;
pub mod slack;
pub mod status;
pub mod webhook;

pub use config::NotifierConfig;
pub use error::{DeliveryError, NotifierError, NotifierResult};
pub use handler::{NotificationHandler, Outcome};
pub use webhook::{HttpWebhook, WebhookSink};
