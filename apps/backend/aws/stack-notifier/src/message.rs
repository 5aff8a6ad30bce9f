//! Decoding of the CloudFormation `key='value'` status message
//!
//! CloudFormation publishes stack events to SNS as newline separated
//! shell-quoted assignments:
//!
//! ```text
//! StackId='arn:aws:cloudformation:...'
//! Timestamp='2021-01-01T00:00:00.000Z'
//! ResourceStatus='CREATE_COMPLETE'
//! ResourceStatusReason=''
//! ```
//!
//! The words are split with Python `shlex.split` rules (POSIX mode, no
//! comment handling) and each word is then split on its first `=`.

use crate::error::{NotifierError, NotifierResult};

pub const RESOURCE_TYPE: &str = "ResourceType";
pub const RESOURCE_STATUS: &str = "ResourceStatus";
pub const STACK_NAME: &str = "StackName";
pub const TIMESTAMP: &str = "Timestamp";

/// Resource type of the stack itself, as opposed to resources inside it
pub const STACK_RESOURCE_TYPE: &str = "AWS::CloudFormation::Stack";

/// Split `input` into words the way Python's `shlex.split` does in POSIX mode.
///
/// Inside double quotes only `\\` and `\"` are escapes; any other backslash is
/// kept. Words are separated by ASCII space, tab, CR and LF only.
pub fn split_words(input: &str) -> NotifierResult<Vec<String>> {
    #[derive(Clone, Copy, PartialEq)]
    enum Quote {
        None,
        Single,
        Double,
    }

    let mut words = Vec::new();
    let mut current = String::new();
    // `''` must still produce a word even though nothing is pushed to `current`
    let mut in_word = false;
    let mut quote = Quote::None;
    let mut chars = input.chars();

    while let Some(c) = chars.next() {
        match quote {
            Quote::Single => {
                if c == '\'' {
                    quote = Quote::None;
                } else {
                    current.push(c);
                }
            }
            Quote::Double => match c {
                '"' => quote = Quote::None,
                '\\' => match chars.next() {
                    Some(next @ ('\\' | '"')) => current.push(next),
                    Some(next) => {
                        current.push('\\');
                        current.push(next);
                    }
                    None => {
                        return Err(NotifierError::MalformedPayload(
                            "No closing quotation".to_string(),
                        ));
                    }
                },
                _ => current.push(c),
            },
            Quote::None => match c {
                '\'' => {
                    quote = Quote::Single;
                    in_word = true;
                }
                '"' => {
                    quote = Quote::Double;
                    in_word = true;
                }
                '\\' => match chars.next() {
                    Some(next) => {
                        current.push(next);
                        in_word = true;
                    }
                    None => {
                        return Err(NotifierError::MalformedPayload(
                            "No escaped character".to_string(),
                        ));
                    }
                },
                ' ' | '\t' | '\r' | '\n' => {
                    if in_word {
                        words.push(std::mem::take(&mut current));
                        in_word = false;
                    }
                }
                _ => {
                    current.push(c);
                    in_word = true;
                }
            },
        }
    }

    if quote != Quote::None {
        return Err(NotifierError::MalformedPayload(
            "No closing quotation".to_string(),
        ));
    }
    if in_word {
        words.push(current);
    }

    Ok(words)
}

/// Quote `word` so that [`split_words`] yields it back unchanged.
pub fn quote(word: &str) -> String {
    let is_safe = |c: char| c.is_alphanumeric() || "@%+=:,./-_".contains(c);
    if word.is_empty() {
        return "''".to_string();
    }
    if word.chars().all(is_safe) {
        return word.to_string();
    }
    format!("'{}'", word.replace('\'', "'\"'\"'"))
}

/// Fields of a status message in first-appearance order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusFields {
    entries: Vec<(String, String)>,
}

impl StatusFields {
    /// Decode a status message. Any word without `=` fails the whole message.
    pub fn decode(message: &str) -> NotifierResult<Self> {
        let mut fields = Self::default();
        for word in split_words(message)? {
            let (key, value) = word.split_once('=').ok_or_else(|| {
                NotifierError::MalformedPayload(format!("token {:?} is not a key=value pair", word))
            })?;
            fields.insert(key, value);
        }
        Ok(fields)
    }

    /// Encode back into a single line of shell-quoted assignments
    pub fn encode(&self) -> String {
        self.entries
            .iter()
            .map(|(key, value)| quote(&format!("{}={}", key, value)))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// A repeated key keeps its first position and takes the latest value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn require(&self, key: &str) -> NotifierResult<&str> {
        self.get(key).ok_or_else(|| {
            NotifierError::MalformedPayload(format!("missing required field {}", key))
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn is_stack_event(&self) -> NotifierResult<bool> {
        Ok(self.require(RESOURCE_TYPE)? == STACK_RESOURCE_TYPE)
    }
}
