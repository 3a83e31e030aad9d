//! Result of a call to the plugin.

use serde_json::{json, Value};

use crate::error::BridgeError;

/// What a health check or fetch produced.
///
/// Callers match on the variant instead of probing the shape of a JSON
/// value. [`PluginResponse::into_value`] produces the JSON shape a
/// tool-calling host returns to its client.
#[derive(Debug, Clone, PartialEq)]
pub enum PluginResponse {
    /// The body parsed as JSON.
    Structured(Value),
    /// The body as text, either because the operation does not parse JSON
    /// (health check) or because the body was not JSON.
    Text(String),
    /// Transport failure or non-2xx status, rendered to a message.
    Error(String),
}

impl PluginResponse {
    pub fn is_error(&self) -> bool {
        matches!(self, PluginResponse::Error(_))
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            PluginResponse::Error(message) => Some(message),
            _ => None,
        }
    }

    /// `Structured` as-is, `Text` as `{"response": text}`, `Error` as
    /// `{"error": message}`.
    pub fn into_value(self) -> Value {
        match self {
            PluginResponse::Structured(value) => value,
            PluginResponse::Text(text) => json!({ "response": text }),
            PluginResponse::Error(message) => json!({ "error": message }),
        }
    }
}

impl From<BridgeError> for PluginResponse {
    fn from(err: BridgeError) -> Self {
        PluginResponse::Error(err.to_string())
    }
}

impl From<PluginResponse> for Value {
    fn from(response: PluginResponse) -> Self {
        response.into_value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn structured_value_passes_through() {
        let value = json!({"a": 1});
        assert_eq!(PluginResponse::Structured(value.clone()).into_value(), value);
    }

    #[test]
    fn text_is_wrapped_in_response_field() {
        let value = PluginResponse::Text("hello".to_string()).into_value();
        assert_eq!(value, json!({"response": "hello"}));
        assert_eq!(value.as_object().unwrap().len(), 1);
    }

    #[test]
    fn error_is_wrapped_in_error_field() {
        let response: PluginResponse = BridgeError::RemoteStatus {
            status: 500,
            body: "boom".to_string(),
        }
        .into();
        assert!(response.is_error());
        assert_eq!(response.error_message(), Some("HTTP error 500: boom"));
        assert_eq!(
            Value::from(response),
            json!({"error": "HTTP error 500: boom"})
        );
    }

    #[test]
    fn non_error_variants_have_no_message() {
        assert!(!PluginResponse::Text(String::new()).is_error());
        assert_eq!(PluginResponse::Structured(Value::Null).error_message(), None);
    }
}
