use serde::Serialize;
use serde_json::Value;

/// Payload of a single log call
#[derive(Debug, Clone, PartialEq)]
pub enum LogMessage {
    /// Display text, printed as-is after the header
    Text(String),
    /// Arbitrary value; objects and arrays are dumped below the header
    Structured(Value),
}

impl LogMessage {
    /// Builds a structured message from any serializable value
    pub fn structured<T: Serialize>(value: &T) -> crate::Result<Self> {
        Ok(Self::Structured(serde_json::to_value(value)?))
    }

    /// Returns the container to dump when the message takes the object path.
    ///
    /// Null and scalar values fall through to the text path.
    pub fn as_container(&self) -> Option<&Value> {
        match self {
            LogMessage::Structured(value @ (Value::Object(_) | Value::Array(_))) => Some(value),
            _ => None,
        }
    }

    /// Text used on the single-line path
    pub fn display_text(&self) -> String {
        match self {
            LogMessage::Text(text) => text.clone(),
            LogMessage::Structured(Value::String(text)) => text.clone(),
            LogMessage::Structured(value) => value.to_string(),
        }
    }
}

impl From<&str> for LogMessage {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for LogMessage {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&String> for LogMessage {
    fn from(text: &String) -> Self {
        Self::Text(text.clone())
    }
}

impl From<Value> for LogMessage {
    fn from(value: Value) -> Self {
        Self::Structured(value)
    }
}
