//! SNS envelope access
//!
//! Only `Records[0].Sns` is looked at. Later records and SNS metadata are
//! never validated, so they cannot fail an event whose message is readable.

use crate::error::{NotifierError, NotifierResult};
use serde_json::Value;

/// The parts of the first SNS record the notifier uses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SnsNotification<'a> {
    /// `Records[0].Sns.Message`
    pub message: &'a str,
    pub message_id: Option<&'a str>,
    pub topic_arn: Option<&'a str>,
}

impl<'a> SnsNotification<'a> {
    pub fn from_event(event: &'a Value) -> NotifierResult<Self> {
        let records = event
            .get("Records")
            .ok_or_else(|| NotifierError::MalformedEvent("missing Records".to_string()))?;
        let record = match records.as_array() {
            Some(records) => records
                .first()
                .ok_or_else(|| NotifierError::MalformedEvent("Records is empty".to_string()))?,
            None => {
                return Err(NotifierError::MalformedEvent(
                    "Records is not a list".to_string(),
                ));
            }
        };
        let sns = record
            .get("Sns")
            .filter(|sns| sns.is_object())
            .ok_or_else(|| NotifierError::MalformedEvent("missing Records[0].Sns".to_string()))?;

        let message = match sns.get("Message") {
            Some(Value::String(message)) => message.as_str(),
            Some(_) => {
                return Err(NotifierError::MalformedEvent(
                    "Records[0].Sns.Message is not a string".to_string(),
                ));
            }
            None => {
                return Err(NotifierError::MalformedEvent(
                    "missing Records[0].Sns.Message".to_string(),
                ));
            }
        };

        Ok(Self {
            message,
            message_id: sns.get("MessageId").and_then(Value::as_str),
            topic_arn: sns.get("TopicArn").and_then(Value::as_str),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_reads_message_from_first_record() {
        let event = json!({
            "Records": [
                {
                    "EventSource": "aws:sns",
                    "Sns": {
                        "MessageId": "95df01b4-ee98-5cb9-9903-4c221d41eb5e",
                        "TopicArn": "arn:aws:sns:eu-central-1:123456789012:cfn-events",
                        "Message": "StackName='demo'"
                    }
                },
                { "Sns": { "Message": "StackName='second'" } }
            ]
        });
        let notification = SnsNotification::from_event(&event).unwrap();
        assert_eq!(notification.message, "StackName='demo'");
        assert_eq!(
            notification.message_id,
            Some("95df01b4-ee98-5cb9-9903-4c221d41eb5e")
        );
        assert_eq!(
            notification.topic_arn,
            Some("arn:aws:sns:eu-central-1:123456789012:cfn-events")
        );
    }

    #[test]
    fn test_later_records_are_not_validated() {
        let event = json!({
            "Records": [
                { "Sns": { "Message": "a=1" } },
                "junk",
                { "Sns": { "Message": 7 } }
            ]
        });
        let notification = SnsNotification::from_event(&event).unwrap();
        assert_eq!(notification.message, "a=1");
    }

    #[test]
    fn test_odd_metadata_is_ignored() {
        let event = json!({
            "Records": [{
                "EventVersion": 1,
                "Sns": { "MessageId": 12345, "TopicArn": null, "Message": "a=1" }
            }]
        });
        let notification = SnsNotification::from_event(&event).unwrap();
        assert_eq!(notification.message, "a=1");
        assert_eq!(notification.message_id, None);
        assert_eq!(notification.topic_arn, None);
    }

    #[test]
    fn test_missing_paths_are_malformed_events() {
        let cases = vec![
            json!({}),
            json!({ "Records": [] }),
            json!({ "Records": [{}] }),
            json!({ "Records": ["junk"] }),
            json!({ "Records": [{ "Sns": "junk" }] }),
            json!({ "Records": [{ "Sns": {} }] }),
            json!({ "Records": [{ "Sns": { "Message": 42 } }] }),
            json!({ "Records": "nope" }),
            json!("just a string"),
            json!(null),
        ];

        for case in cases {
            let result = SnsNotification::from_event(&case);
            assert!(
                matches!(result, Err(NotifierError::MalformedEvent(_))),
                "Expected malformed event for {}, got {:?}",
                case,
                result
            );
        }
    }
}
